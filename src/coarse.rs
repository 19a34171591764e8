//! Isosurface extraction over one fully-resident dense volume.
//!
//! Every cell of a coarse field has complete 8-corner data, so the
//! whole pipeline is: derive per-cell corner codes, count the output
//! the case tables will produce, allocate exactly, then emit in the
//! same deterministic scan order.

use crate::alloc_prelude::Vec;
use crate::error::{ExtractError, Result};
use crate::interp::surface_fraction;
use crate::mesh::MeshBuffers;
use crate::tables::{CORNER_OFFSETS, EDGE_CASES, EDGE_ENDPOINTS, TRI_CASES};
use crate::types::{CoordMode, Dims3, Idx3, Point3};

/// A borrowed dense scalar field of `dims` samples in row-major order
/// (X outermost, Z innermost), optionally with explicit point
/// positions for curvilinear grids.
#[derive(Debug, Clone, Copy)]
pub struct CoarseField<'a> {
    values: &'a [f32],
    points: Option<&'a [f32]>,
    dims: Dims3,
}

impl<'a> CoarseField<'a> {
    /// Wrap a scalar buffer.
    ///
    /// # Errors
    /// [`ExtractError::FieldSizeMismatch`] if `values` does not hold
    /// exactly `dims.volume()` samples.
    pub fn new(values: &'a [f32], dims: Dims3) -> Result<Self> {
        if values.len() != dims.volume() {
            return Err(ExtractError::FieldSizeMismatch {
                expected: dims.volume(),
                got: values.len(),
            });
        }
        Ok(Self {
            values,
            points: None,
            dims,
        })
    }

    /// Wrap a scalar buffer together with explicit point positions
    /// (three floats per sample, same indexing).
    pub fn with_points(values: &'a [f32], points: &'a [f32], dims: Dims3) -> Result<Self> {
        let field = Self::new(values, dims)?;
        if points.len() != dims.volume() * 3 {
            return Err(ExtractError::PointSizeMismatch {
                expected: dims.volume() * 3,
                got: points.len(),
            });
        }
        Ok(Self {
            points: Some(points),
            ..field
        })
    }

    /// Sample extents of the field.
    #[inline]
    pub fn dims(&self) -> Dims3 {
        self.dims
    }

    /// Whether the field carries explicit point positions.
    #[inline]
    pub fn has_points(&self) -> bool {
        self.points.is_some()
    }

    #[inline]
    fn sample(&self, pos: Idx3) -> f32 {
        self.values[self.dims.linear_index(pos)]
    }

    #[inline]
    fn point(&self, points: &[f32], pos: Idx3) -> Point3 {
        let i = self.dims.linear_index(pos) * 3;
        Point3::new(points[i], points[i + 1], points[i + 2])
    }
}

/// Derive the 8-bit corner code for every cell.
///
/// Bit `l` is set iff corner `l`'s sample strictly exceeds the
/// threshold; codes 0 and 255 mean the surface misses the cell.
fn compute_codes(field: &CoarseField<'_>, threshold: f32) -> Vec<u8> {
    let cells = field.dims().cell_dims();
    let mut codes = Vec::new();
    codes.resize(cells.volume(), 0u8);

    for i in 0..cells.x {
        for j in 0..cells.y {
            for k in 0..cells.z {
                let cell = Idx3::new(i, j, k);
                let mut code = 0u8;
                for (l, &offset) in CORNER_OFFSETS.iter().enumerate() {
                    let val = field.sample(cell.offset(offset));
                    code |= u8::from(val > threshold) << l;
                }
                codes[cells.linear_index(cell)] = code;
            }
        }
    }
    codes
}

/// Extract the isosurface of a dense field at `threshold`.
///
/// Output buffers are sized by a full pre-scan and never grow during
/// emission. The scan order is fixed (X outer, Z inner), so results
/// are deterministic for a given field.
///
/// # Errors
/// [`ExtractError::MissingPoints`] if `mode` is
/// [`CoordMode::Explicit`] but the field has no point buffer.
pub fn extract(field: &CoarseField<'_>, mode: CoordMode, threshold: f32) -> Result<MeshBuffers> {
    let points = match mode {
        CoordMode::Explicit => Some(field.points.ok_or(ExtractError::MissingPoints)?),
        CoordMode::Lattice { .. } => None,
    };

    let cells = field.dims().cell_dims();
    let codes = compute_codes(field, threshold);

    // Count pass: exact totals straight from the table rows.
    let mut vertex_total = 0usize;
    let mut index_total = 0usize;
    for &code in &codes {
        vertex_total += EDGE_CASES[code as usize].len();
        index_total += TRI_CASES[code as usize].len();
    }

    let mut mesh = MeshBuffers::with_counts(vertex_total, index_total);

    // Emit pass, same scan order as the code pass.
    let mut vert_cursor = 0usize;
    let mut idx_cursor = 0usize;
    for i in 0..cells.x {
        for j in 0..cells.y {
            for k in 0..cells.z {
                let cell = Idx3::new(i, j, k);
                let code = codes[cells.linear_index(cell)] as usize;
                if code == 0 || code == 255 {
                    continue;
                }

                for &t in TRI_CASES[code] {
                    mesh.indices[idx_cursor] = (vert_cursor + t as usize) as u32;
                    idx_cursor += 1;
                }

                for &edge in EDGE_CASES[code] {
                    let [a, b] = EDGE_ENDPOINTS[edge as usize];
                    let ca = CORNER_OFFSETS[a];
                    let cb = CORNER_OFFSETS[b];
                    let pos_a = cell.offset(ca);
                    let pos_b = cell.offset(cb);
                    let fac = surface_fraction(
                        field.sample(pos_a),
                        field.sample(pos_b),
                        threshold,
                    );

                    let vertex = match (points, mode) {
                        (Some(pts), _) => {
                            field.point(pts, pos_a).lerp(field.point(pts, pos_b), fac)
                        }
                        (None, CoordMode::Lattice { scale }) => lattice_vertex(
                            ca, cb, fac, cell, scale,
                        ),
                        (None, CoordMode::Explicit) => unreachable!(),
                    };
                    mesh.set_vertex(vert_cursor, vertex);
                    vert_cursor += 1;
                }
            }
        }
    }

    debug_assert_eq!(vert_cursor, vertex_total);
    debug_assert_eq!(idx_cursor, index_total);
    Ok(mesh)
}

/// Synthesized lattice coordinate of an edge crossing, scaled per axis.
#[inline]
fn lattice_vertex(
    ca: [usize; 3],
    cb: [usize; 3],
    fac: f32,
    cell: Idx3,
    scale: [f32; 3],
) -> Point3 {
    let corner = |a: usize, b: usize| a as f32 + (b as f32 - a as f32) * fac;
    Point3::new(
        (corner(ca[0], cb[0]) + cell.x as f32) * scale[0],
        (corner(ca[1], cb[1]) + cell.y as f32) * scale[1],
        (corner(ca[2], cb[2]) + cell.z as f32) * scale[2],
    )
}
