//! Core types shared by both extraction paths.
//!
//! Provides the 3-D index/stride helpers, the vertex position type and
//! the per-call coordinate mode.

use core::ops::{Add, Mul, Sub};

/// Cells per axis in one block of a chunked field.
pub const BLOCK_DIMS: Dims3 = Dims3::new(4, 4, 4);

/// Samples stored per resident block slot (`4 * 4 * 4`).
pub const BLOCK_VOLUME: usize = 64;

/// Samples per axis of a block's padded local grid: the block's own
/// layer plus one shared layer contributed by forward neighbors.
pub const PADDED_DIM: usize = 5;

/// Extents of a 3-D row-major grid, X outermost and Z innermost.
///
/// All flat buffers in this crate use the same linearization,
/// `index = y * z * pos.x + z * pos.y + pos.z`; this type is the single
/// place that arithmetic lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dims3 {
    /// Extent along x (outermost axis).
    pub x: usize,
    /// Extent along y.
    pub y: usize,
    /// Extent along z (innermost axis).
    pub z: usize,
}

impl Dims3 {
    /// Create new extents.
    #[inline]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Total number of positions covered.
    #[inline]
    pub const fn volume(&self) -> usize {
        self.x * self.y * self.z
    }

    /// Flat index of a position, X-major / Z-minor.
    #[inline]
    pub const fn linear_index(&self, pos: Idx3) -> usize {
        self.y * self.z * pos.x + self.z * pos.y + pos.z
    }

    /// Position of a flat index (inverse of [`linear_index`]).
    ///
    /// [`linear_index`]: Dims3::linear_index
    #[inline]
    pub const fn pos_from_linear(&self, index: usize) -> Idx3 {
        Idx3::new(
            index / (self.y * self.z),
            (index / self.z) % self.y,
            index % self.z,
        )
    }

    /// Whether a position lies inside these extents.
    #[inline]
    pub const fn contains(&self, pos: Idx3) -> bool {
        pos.x < self.x && pos.y < self.y && pos.z < self.z
    }

    /// Extents of the implicit cell grid: one less sample per axis.
    #[inline]
    pub const fn cell_dims(&self) -> Dims3 {
        Dims3::new(
            self.x.saturating_sub(1),
            self.y.saturating_sub(1),
            self.z.saturating_sub(1),
        )
    }
}

/// An unsigned 3-D position indexed against a [`Dims3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Idx3 {
    /// X component.
    pub x: usize,
    /// Y component.
    pub y: usize,
    /// Z component.
    pub z: usize,
}

impl Idx3 {
    /// Create a new position.
    #[inline]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Componentwise sum with a corner offset.
    #[inline]
    pub const fn offset(&self, by: [usize; 3]) -> Idx3 {
        Idx3::new(self.x + by[0], self.y + by[1], self.z + by[2])
    }
}

/// A vertex position or direction with f32 components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

impl Point3 {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Convert to an array.
    #[inline]
    pub const fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Linear interpolation toward `other` at parameter `t`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

impl From<[f32; 3]> for Point3 {
    #[inline]
    fn from(arr: [f32; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}

impl From<Point3> for [f32; 3] {
    #[inline]
    fn from(p: Point3) -> Self {
        p.as_array()
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

/// Where emitted vertex coordinates come from, resolved once per call.
///
/// `Lattice` synthesizes coordinates from cell indices and applies the
/// per-axis scale; `Explicit` interpolates the field's own point buffer
/// and ignores scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordMode {
    /// Synthesized lattice coordinates multiplied by a per-axis scale.
    Lattice {
        /// Multiplier applied per axis to lattice coordinates.
        scale: [f32; 3],
    },
    /// Interpolate the field's explicit point positions.
    Explicit,
}

impl CoordMode {
    /// Lattice coordinates with unit scale.
    #[inline]
    pub const fn unit() -> Self {
        CoordMode::Lattice {
            scale: [1.0, 1.0, 1.0],
        }
    }
}
