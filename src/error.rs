//! Error types for extraction calls.
//!
//! Variants carry context and no external dependencies, keeping the
//! crate no_std compatible.

use core::fmt;

/// Errors that can occur when an extraction call is handed malformed
/// buffers.
///
/// Missing neighbor data in chunked mode is never an error; those
/// cells are silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// The scalar buffer does not match the declared dimensions.
    FieldSizeMismatch {
        /// Number of samples the dimensions require.
        expected: usize,
        /// Number of samples provided.
        got: usize,
    },
    /// The explicit point buffer does not hold three floats per sample.
    PointSizeMismatch {
        /// Number of floats required (3 per sample).
        expected: usize,
        /// Number of floats provided.
        got: usize,
    },
    /// The block-location table does not cover the blocks grid.
    LocationsSizeMismatch {
        /// Entries the blocks grid requires.
        expected: usize,
        /// Entries provided.
        got: usize,
    },
    /// An active BlockID lies outside the blocks grid.
    BlockIdOutOfRange {
        /// The offending BlockID.
        id: u32,
        /// Number of blocks in the grid.
        blocks: usize,
    },
    /// An active block has no resident slot.
    ActiveBlockNotResident {
        /// The offending BlockID.
        id: u32,
    },
    /// A location entry names a slot past the end of slot storage.
    SlotOutOfRange {
        /// The offending slot index.
        slot: usize,
        /// Number of slots the sample buffer holds.
        slots: usize,
    },
    /// Explicit coordinates were requested but the field carries no
    /// point buffer.
    MissingPoints,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::FieldSizeMismatch { expected, got } => {
                write!(f, "scalar buffer holds {} samples, dims require {}", got, expected)
            }
            ExtractError::PointSizeMismatch { expected, got } => {
                write!(f, "point buffer holds {} floats, dims require {}", got, expected)
            }
            ExtractError::LocationsSizeMismatch { expected, got } => {
                write!(f, "location table holds {} entries, blocks grid requires {}", got, expected)
            }
            ExtractError::BlockIdOutOfRange { id, blocks } => {
                write!(f, "active block {} outside blocks grid of {} blocks", id, blocks)
            }
            ExtractError::ActiveBlockNotResident { id } => {
                write!(f, "active block {} has no resident slot", id)
            }
            ExtractError::SlotOutOfRange { slot, slots } => {
                write!(f, "slot {} past the {} slots provided", slot, slots)
            }
            ExtractError::MissingPoints => {
                write!(f, "explicit coordinates requested but field has no point buffer")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExtractError {}

/// Result type alias for extraction calls.
pub type Result<T> = core::result::Result<T, ExtractError>;
