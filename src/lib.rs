//! # isomarch
//!
//! Marching-cubes isosurface extraction over dense and chunked scalar
//! fields.
//!
//! Two extraction paths share the same case tables and interpolation
//! rule:
//!
//! - **Coarse**: one dense row-major grid, extracted in a single call
//!   ([`coarse::extract`]).
//! - **Chunked**: a sparse set of resident 4x4x4 blocks addressed
//!   through a location table, extracted over a caller-supplied active
//!   set ([`chunk::extract_blocks`]). Cells on block seams read their
//!   shared corner layer from forward neighbors, so adjacent blocks
//!   produce watertight geometry without vertex welding.
//!
//! Both paths run count-then-emit: a first pass totals the exact
//! vertex and index counts from the case tables, buffers are sized
//! once, and the emit pass fills them with no reallocation.
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables standard library support
//! - `alloc`: Enables heap allocation (Vec, etc.) without full std
//! - `parallel`: Per-block rayon parallelism for the chunked path
//!
//! ## Modules
//!
//! - [`types`]: Grid extents, indices, points, coordinate modes
//! - [`tables`]: The 256-entry marching-cubes case tables
//! - [`interp`]: The edge interpolation rule
//! - [`mesh`]: Output vertex/index buffers
//! - [`coarse`]: Dense-grid extraction
//! - [`chunk`]: Sparse-block extraction
//! - [`error`]: Error types
//!
//! ## Usage
//!
//! ```ignore
//! use isomarch::prelude::*;
//!
//! let dims = Dims3::new(16, 16, 16);
//! let field = CoarseField::new(&samples, dims)?;
//! let mesh = extract(&field, CoordMode::unit(), 0.0)?;
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Conditional std/alloc support
#[cfg(feature = "std")]
extern crate std;

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Internal alloc prelude for conditional compilation
#[cfg(feature = "std")]
mod alloc_prelude {
    pub use std::string::String;
    pub use std::vec;
    pub use std::vec::Vec;
}

#[cfg(all(feature = "alloc", not(feature = "std")))]
mod alloc_prelude {
    pub use alloc::string::String;
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

#[cfg(any(feature = "std", feature = "alloc"))]
pub mod chunk;
#[cfg(any(feature = "std", feature = "alloc"))]
pub mod coarse;
pub mod error;
pub mod interp;
#[cfg(any(feature = "std", feature = "alloc"))]
pub mod mesh;
pub mod tables;
pub mod types;

/// Prelude module for convenient imports.
///
/// Provides the most commonly used types and functions.
pub mod prelude {
    pub use crate::error::{ExtractError, Result};
    pub use crate::interp::surface_fraction;
    pub use crate::types::{
        CoordMode, Dims3, Idx3, Point3, BLOCK_DIMS, BLOCK_VOLUME, PADDED_DIM,
    };

    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::chunk::{extract_blocks, BlockField};
    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::coarse::{extract, CoarseField};
    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::mesh::MeshBuffers;

    #[cfg(feature = "parallel")]
    pub use crate::chunk::extract_blocks_parallel;
}

// Re-export everything at crate root for convenience
pub use error::{ExtractError, Result};
pub use interp::surface_fraction;
pub use tables::{CORNER_OFFSETS, EDGE_CASES, EDGE_ENDPOINTS, TRI_CASES};
pub use types::{CoordMode, Dims3, Idx3, Point3, BLOCK_DIMS, BLOCK_VOLUME, PADDED_DIM};

#[cfg(any(feature = "std", feature = "alloc"))]
pub use chunk::{extract_blocks, BlockField, NEIGHBOR_OFFSETS, REQUIRED_NEIGHBORS};
#[cfg(any(feature = "std", feature = "alloc"))]
pub use coarse::{extract, CoarseField};
#[cfg(any(feature = "std", feature = "alloc"))]
pub use mesh::MeshBuffers;

#[cfg(feature = "parallel")]
pub use chunk::extract_blocks_parallel;
