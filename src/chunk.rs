//! Isosurface extraction over a sparse set of resident blocks.
//!
//! Blocks store their own 4x4x4 samples; the shared boundary layer a
//! cell on a block's far face needs comes from forward neighbors. A
//! cell is only evaluated when every forward neighbor its position
//! requires is resident, which keeps geometry on block seams identical
//! to what dense extraction over the same samples would produce: both
//! paths interpolate the same corner pairs at the same fractions, so
//! no vertex welding is needed.
//!
//! Extraction is two-phase over the caller's active set. The count
//! pass walks every active block and local cell accumulating exact
//! vertex/index totals; buffers are allocated once; the emit pass
//! repeats the identical walk and writes. Cells whose required
//! neighbors are absent contribute nothing in either pass.

use crate::alloc_prelude::Vec;
use crate::error::{ExtractError, Result};
use crate::interp::surface_fraction;
use crate::mesh::MeshBuffers;
use crate::tables::{CORNER_OFFSETS, EDGE_CASES, EDGE_ENDPOINTS, TRI_CASES};
use crate::types::{CoordMode, Dims3, Idx3, Point3, BLOCK_DIMS, BLOCK_VOLUME, PADDED_DIM};

/// The block itself plus its seven forward neighbors, one per
/// combination of "+1 along one or more axes".
///
/// Index 0 is the block itself; the order fixes the meaning of the
/// entries in [`REQUIRED_NEIGHBORS`].
pub const NEIGHBOR_OFFSETS: [[usize; 3]; 8] = [
    [0, 0, 0], // the block itself
    [0, 0, 1], // z+ face
    [0, 1, 0], // y+ face
    [0, 1, 1], // x+ edge
    [1, 0, 0], // x+ face
    [1, 0, 1], // y+ edge
    [1, 1, 0], // z+ edge
    [1, 1, 1], // corner
];

/// Forward neighbors a cell needs, indexed by its 3-bit boundary code
/// (bit 0: on the max z layer, bit 1: max y, bit 2: max x).
///
/// Interior cells (code 0) need none; a cell on all three max layers
/// needs every forward neighbor.
pub const REQUIRED_NEIGHBORS: [&[usize]; 8] = [
    &[],
    &[1],
    &[2],
    &[1, 2, 3],
    &[4],
    &[1, 4, 5],
    &[2, 4, 6],
    &[1, 2, 3, 4, 5, 6, 7],
];

const PADDED_DIMS: Dims3 = Dims3::new(PADDED_DIM, PADDED_DIM, PADDED_DIM);
const PADDED_VOLUME: usize = PADDED_DIM * PADDED_DIM * PADDED_DIM;

/// A borrowed chunked scalar field: a compact slot buffer of resident
/// 4x4x4 blocks plus the location table mapping BlockIDs to slots.
#[derive(Debug, Clone, Copy)]
pub struct BlockField<'a> {
    values: &'a [f32],
    points: Option<&'a [f32]>,
    blocks: Dims3,
    locations: &'a [i32],
    slots: usize,
}

impl<'a> BlockField<'a> {
    /// Wrap a slot buffer and location table.
    ///
    /// `values` is the concatenation of per-slot sub-grids, 64 samples
    /// each in row-major order; `locations` has one entry per block of
    /// the notional dense blocks grid, either −1 (absent) or a slot
    /// index.
    ///
    /// # Errors
    /// Size mismatches and slot indices past the end of `values` are
    /// rejected up front; absent blocks are not errors.
    pub fn new(values: &'a [f32], blocks: Dims3, locations: &'a [i32]) -> Result<Self> {
        if values.len() % BLOCK_VOLUME != 0 {
            return Err(ExtractError::FieldSizeMismatch {
                expected: (values.len() / BLOCK_VOLUME + 1) * BLOCK_VOLUME,
                got: values.len(),
            });
        }
        if locations.len() != blocks.volume() {
            return Err(ExtractError::LocationsSizeMismatch {
                expected: blocks.volume(),
                got: locations.len(),
            });
        }
        let slots = values.len() / BLOCK_VOLUME;
        for &loc in locations {
            if loc >= 0 && loc as usize >= slots {
                return Err(ExtractError::SlotOutOfRange {
                    slot: loc as usize,
                    slots,
                });
            }
        }
        Ok(Self {
            values,
            points: None,
            blocks,
            locations,
            slots,
        })
    }

    /// Wrap a slot buffer together with explicit point positions
    /// (three floats per sample, same slot layout).
    pub fn with_points(
        values: &'a [f32],
        points: &'a [f32],
        blocks: Dims3,
        locations: &'a [i32],
    ) -> Result<Self> {
        let field = Self::new(values, blocks, locations)?;
        if points.len() != values.len() * 3 {
            return Err(ExtractError::PointSizeMismatch {
                expected: values.len() * 3,
                got: points.len(),
            });
        }
        Ok(Self {
            points: Some(points),
            ..field
        })
    }

    /// Extents of the notional dense blocks grid.
    #[inline]
    pub fn blocks(&self) -> Dims3 {
        self.blocks
    }

    /// Number of resident slots the sample buffer holds.
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Whether the field carries explicit point positions.
    #[inline]
    pub fn has_points(&self) -> bool {
        self.points.is_some()
    }

    #[inline]
    fn slot_sample(&self, slot: usize, pos: Idx3) -> f32 {
        self.values[slot * BLOCK_VOLUME + BLOCK_DIMS.linear_index(pos)]
    }

    #[inline]
    fn slot_point(&self, points: &[f32], slot: usize, pos: Idx3) -> Point3 {
        let i = (slot * BLOCK_VOLUME + BLOCK_DIMS.linear_index(pos)) * 3;
        Point3::new(points[i], points[i + 1], points[i + 2])
    }
}

/// One block's padded 5x5x5 sample window plus its forward-neighbor
/// residency, built fresh for each pass.
struct BlockWindow {
    pos: Idx3,
    present: [bool; 8],
    data: [f32; PADDED_VOLUME],
    points: [Point3; PADDED_VOLUME],
}

impl BlockWindow {
    /// Resolve residency and copy every sample a present neighbor
    /// contributes. Samples behind absent neighbors stay unpopulated;
    /// cells that would read them are skipped by the residency table.
    fn build(field: &BlockField<'_>, pos: Idx3, slot: usize, want_points: bool) -> Self {
        let mut present = [false; 8];
        let mut slots = [0usize; 8];
        present[0] = true;
        slots[0] = slot;
        for n in 1..8 {
            let o = NEIGHBOR_OFFSETS[n];
            let npos = pos.offset(o);
            if !field.blocks.contains(npos) {
                continue;
            }
            let loc = field.locations[field.blocks.linear_index(npos)];
            if loc >= 0 {
                present[n] = true;
                slots[n] = loc as usize;
            }
        }

        let mut window = Self {
            pos,
            present,
            data: [0.0; PADDED_VOLUME],
            points: [Point3::new(0.0, 0.0, 0.0); PADDED_VOLUME],
        };

        for (n, &o) in NEIGHBOR_OFFSETS.iter().enumerate() {
            if !present[n] {
                continue;
            }
            // Axes the offset steps along contribute only the padded
            // layer (from the neighbor's minimum layer); the others
            // span the block.
            let range = |axis: usize| {
                if o[axis] == 1 {
                    BLOCK_DIMS.x..PADDED_DIM
                } else {
                    0..BLOCK_DIMS.x
                }
            };
            for dx in range(0) {
                for dy in range(1) {
                    for dz in range(2) {
                        let dst = Idx3::new(dx, dy, dz);
                        let src = Idx3::new(
                            if o[0] == 1 { 0 } else { dx },
                            if o[1] == 1 { 0 } else { dy },
                            if o[2] == 1 { 0 } else { dz },
                        );
                        let i = PADDED_DIMS.linear_index(dst);
                        window.data[i] = field.slot_sample(slots[n], src);
                        if want_points {
                            if let Some(points) = field.points {
                                window.points[i] = field.slot_point(points, slots[n], src);
                            }
                        }
                    }
                }
            }
        }
        window
    }

    /// 3-bit max-layer code of a cell (z bit 0, y bit 1, x bit 2).
    #[inline]
    fn boundary_code(cell: Idx3) -> usize {
        usize::from(cell.z == BLOCK_DIMS.z - 1)
            | usize::from(cell.y == BLOCK_DIMS.y - 1) << 1
            | usize::from(cell.x == BLOCK_DIMS.x - 1) << 2
    }

    /// Whether every forward neighbor this cell requires is resident.
    #[inline]
    fn cell_complete(&self, cell: Idx3) -> bool {
        REQUIRED_NEIGHBORS[Self::boundary_code(cell)]
            .iter()
            .all(|&n| self.present[n])
    }

    /// 8-bit corner code against the threshold.
    #[inline]
    fn cell_code(&self, cell: Idx3, threshold: f32) -> usize {
        let mut code = 0usize;
        for (l, &offset) in CORNER_OFFSETS.iter().enumerate() {
            let val = self.data[PADDED_DIMS.linear_index(cell.offset(offset))];
            code |= usize::from(val > threshold) << l;
        }
        code
    }

    /// Vertex and index counts this block will emit.
    fn count(&self, threshold: f32) -> (usize, usize) {
        let mut verts = 0;
        let mut inds = 0;
        for i in 0..BLOCK_DIMS.x {
            for j in 0..BLOCK_DIMS.y {
                for k in 0..BLOCK_DIMS.z {
                    let cell = Idx3::new(i, j, k);
                    if !self.cell_complete(cell) {
                        continue;
                    }
                    let code = self.cell_code(cell, threshold);
                    verts += EDGE_CASES[code].len();
                    inds += TRI_CASES[code].len();
                }
            }
        }
        (verts, inds)
    }

    /// Emit this block's geometry into its pre-sized output regions.
    ///
    /// Must visit cells in the same order as [`count`](Self::count) so
    /// the regions fill exactly. `vert_base` is the block's vertex
    /// offset in the whole mesh.
    fn emit(
        &self,
        mode: CoordMode,
        threshold: f32,
        positions: &mut [f32],
        indices: &mut [u32],
        vert_base: u32,
    ) {
        let mut vert_cursor = 0usize;
        let mut idx_cursor = 0usize;
        for i in 0..BLOCK_DIMS.x {
            for j in 0..BLOCK_DIMS.y {
                for k in 0..BLOCK_DIMS.z {
                    let cell = Idx3::new(i, j, k);
                    if !self.cell_complete(cell) {
                        continue;
                    }
                    let code = self.cell_code(cell, threshold);
                    if code == 0 || code == 255 {
                        continue;
                    }

                    for &t in TRI_CASES[code] {
                        indices[idx_cursor] = vert_base + vert_cursor as u32 + t as u32;
                        idx_cursor += 1;
                    }

                    for &edge in EDGE_CASES[code] {
                        let [a, b] = EDGE_ENDPOINTS[edge as usize];
                        let ca = CORNER_OFFSETS[a];
                        let cb = CORNER_OFFSETS[b];
                        let ia = PADDED_DIMS.linear_index(cell.offset(ca));
                        let ib = PADDED_DIMS.linear_index(cell.offset(cb));
                        let fac = surface_fraction(self.data[ia], self.data[ib], threshold);

                        let vertex = match mode {
                            CoordMode::Explicit => self.points[ia].lerp(self.points[ib], fac),
                            CoordMode::Lattice { scale } => {
                                let corner =
                                    |a: usize, b: usize| a as f32 + (b as f32 - a as f32) * fac;
                                Point3::new(
                                    (corner(ca[0], cb[0])
                                        + (cell.x + self.pos.x * BLOCK_DIMS.x) as f32)
                                        * scale[0],
                                    (corner(ca[1], cb[1])
                                        + (cell.y + self.pos.y * BLOCK_DIMS.y) as f32)
                                        * scale[1],
                                    (corner(ca[2], cb[2])
                                        + (cell.z + self.pos.z * BLOCK_DIMS.z) as f32)
                                        * scale[2],
                                )
                            }
                        };
                        let v = vert_cursor * 3;
                        positions[v] = vertex.x;
                        positions[v + 1] = vertex.y;
                        positions[v + 2] = vertex.z;
                        vert_cursor += 1;
                    }
                }
            }
        }
        debug_assert_eq!(vert_cursor * 3, positions.len());
        debug_assert_eq!(idx_cursor, indices.len());
    }
}

/// Resolve each active BlockID to its grid position and slot.
fn resolve_active(field: &BlockField<'_>, active: &[u32]) -> Result<Vec<(Idx3, usize)>> {
    let mut resolved = Vec::with_capacity(active.len());
    for &id in active {
        if id as usize >= field.blocks.volume() {
            return Err(ExtractError::BlockIdOutOfRange {
                id,
                blocks: field.blocks.volume(),
            });
        }
        let loc = field.locations[id as usize];
        if loc < 0 {
            return Err(ExtractError::ActiveBlockNotResident { id });
        }
        resolved.push((field.blocks.pos_from_linear(id as usize), loc as usize));
    }
    Ok(resolved)
}

/// Extract the isosurface of a chunked field over the given active
/// blocks at `threshold`.
///
/// Blocks are processed in active-set order, so the emitted vertex and
/// index ranges are deterministic for a given set. Cells whose
/// required forward neighbors are absent are silently skipped; they
/// re-emit once the neighbor becomes resident and extraction reruns.
///
/// # Errors
/// Malformed active sets ([`ExtractError::BlockIdOutOfRange`],
/// [`ExtractError::ActiveBlockNotResident`]) and
/// [`ExtractError::MissingPoints`] for [`CoordMode::Explicit`] on a
/// field without points.
pub fn extract_blocks(
    field: &BlockField<'_>,
    active: &[u32],
    mode: CoordMode,
    threshold: f32,
) -> Result<MeshBuffers> {
    let want_points = match mode {
        CoordMode::Explicit => {
            if field.points.is_none() {
                return Err(ExtractError::MissingPoints);
            }
            true
        }
        CoordMode::Lattice { .. } => false,
    };

    let resolved = resolve_active(field, active)?;

    // Count pass.
    let mut counts = Vec::with_capacity(resolved.len());
    let mut vertex_total = 0usize;
    let mut index_total = 0usize;
    for &(pos, slot) in &resolved {
        let window = BlockWindow::build(field, pos, slot, false);
        let (verts, inds) = window.count(threshold);
        counts.push((verts, inds));
        vertex_total += verts;
        index_total += inds;
    }

    let mut mesh = MeshBuffers::with_counts(vertex_total, index_total);

    // Emit pass, identical walk.
    let mut pos_rest = mesh.positions.as_mut_slice();
    let mut idx_rest = mesh.indices.as_mut_slice();
    let mut vert_base = 0u32;
    for (&(pos, slot), &(verts, inds)) in resolved.iter().zip(&counts) {
        let (pos_region, rest) = pos_rest.split_at_mut(verts * 3);
        pos_rest = rest;
        let (idx_region, rest) = idx_rest.split_at_mut(inds);
        idx_rest = rest;

        let window = BlockWindow::build(field, pos, slot, want_points);
        window.emit(mode, threshold, pos_region, idx_region, vert_base);
        vert_base += verts as u32;
    }

    Ok(mesh)
}

/// Parallel variant of [`extract_blocks`].
///
/// The count pass prefix-sums per-block totals; the emit pass then
/// writes disjoint output regions from a rayon worker per block.
/// Output is identical to the serial path.
#[cfg(feature = "parallel")]
pub fn extract_blocks_parallel(
    field: &BlockField<'_>,
    active: &[u32],
    mode: CoordMode,
    threshold: f32,
) -> Result<MeshBuffers> {
    use rayon::prelude::*;

    let want_points = match mode {
        CoordMode::Explicit => {
            if field.points.is_none() {
                return Err(ExtractError::MissingPoints);
            }
            true
        }
        CoordMode::Lattice { .. } => false,
    };

    let resolved = resolve_active(field, active)?;

    let counts: Vec<(usize, usize)> = resolved
        .par_iter()
        .map(|&(pos, slot)| BlockWindow::build(field, pos, slot, false).count(threshold))
        .collect();
    let vertex_total: usize = counts.iter().map(|c| c.0).sum();
    let index_total: usize = counts.iter().map(|c| c.1).sum();

    let mut mesh = MeshBuffers::with_counts(vertex_total, index_total);

    // Carve per-block regions out of the exact-size buffers so workers
    // never share a write range.
    let mut jobs = Vec::with_capacity(resolved.len());
    let mut pos_rest = mesh.positions.as_mut_slice();
    let mut idx_rest = mesh.indices.as_mut_slice();
    let mut vert_base = 0u32;
    for (&(pos, slot), &(verts, inds)) in resolved.iter().zip(&counts) {
        let (pos_region, rest) = core::mem::take(&mut pos_rest).split_at_mut(verts * 3);
        pos_rest = rest;
        let (idx_region, rest) = core::mem::take(&mut idx_rest).split_at_mut(inds);
        idx_rest = rest;
        jobs.push((pos, slot, vert_base, pos_region, idx_region));
        vert_base += verts as u32;
    }

    jobs.into_par_iter()
        .for_each(|(pos, slot, base, pos_region, idx_region)| {
            let window = BlockWindow::build(field, pos, slot, want_points);
            window.emit(mode, threshold, pos_region, idx_region, base);
        });

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc_prelude::vec;
    use crate::coarse::{extract, CoarseField};

    /// Scalar field the tests sample: smooth, asymmetric, crosses the
    /// threshold of 0 in several places over an 8-sample span.
    fn sample_fn(x: usize, y: usize, z: usize) -> f32 {
        let (x, y, z) = (x as f32, y as f32, z as f32);
        let dx = x - 3.2;
        let dy = y - 2.9;
        let dz = z - 3.4;
        9.5 - (dx * dx + dy * dy + dz * dz) + 0.3 * dx * dy.sin()
    }

    /// Dense buffer over `dims` samples.
    fn dense_values(dims: Dims3) -> Vec<f32> {
        let mut values = vec![0.0f32; dims.volume()];
        for i in 0..dims.volume() {
            let p = dims.pos_from_linear(i);
            values[i] = sample_fn(p.x, p.y, p.z);
        }
        values
    }

    /// Slot buffer for a fully-resident `blocks` grid sampling the
    /// same field, with an identity location table.
    fn slot_values(blocks: Dims3) -> (Vec<f32>, Vec<i32>) {
        let mut values = vec![0.0f32; blocks.volume() * BLOCK_VOLUME];
        let mut locations = vec![0i32; blocks.volume()];
        for id in 0..blocks.volume() {
            let bpos = blocks.pos_from_linear(id);
            locations[id] = id as i32;
            for s in 0..BLOCK_VOLUME {
                let local = BLOCK_DIMS.pos_from_linear(s);
                values[id * BLOCK_VOLUME + s] = sample_fn(
                    bpos.x * BLOCK_DIMS.x + local.x,
                    bpos.y * BLOCK_DIMS.y + local.y,
                    bpos.z * BLOCK_DIMS.z + local.z,
                );
            }
        }
        (values, locations)
    }

    /// Canonical triangle set: vertices quantized, sorted within each
    /// triangle, triangles sorted. Ignores emission order.
    fn triangle_set(mesh: &MeshBuffers) -> Vec<[[i64; 3]; 3]> {
        let quantize = |v: Point3| {
            [
                (v.x as f64 * 1e5).round() as i64,
                (v.y as f64 * 1e5).round() as i64,
                (v.z as f64 * 1e5).round() as i64,
            ]
        };
        let mut tris: Vec<[[i64; 3]; 3]> = mesh
            .indices
            .chunks_exact(3)
            .map(|tri| {
                let mut t = [
                    quantize(mesh.vertex(tri[0] as usize)),
                    quantize(mesh.vertex(tri[1] as usize)),
                    quantize(mesh.vertex(tri[2] as usize)),
                ];
                t.sort_unstable();
                t
            })
            .collect();
        tris.sort_unstable();
        tris
    }

    #[test]
    fn required_neighbors_match_offsets() {
        // Entry n of the residency table must never request an offset
        // that does not step along every axis the boundary code names.
        for code in 0..8 {
            for &n in REQUIRED_NEIGHBORS[code] {
                let o = NEIGHBOR_OFFSETS[n];
                assert!(o[0] <= (code >> 2) & 1, "code {} neighbor {}", code, n);
                assert!(o[1] <= (code >> 1) & 1, "code {} neighbor {}", code, n);
                assert!(o[2] <= code & 1, "code {} neighbor {}", code, n);
            }
        }
        assert!(REQUIRED_NEIGHBORS[0].is_empty());
        assert_eq!(REQUIRED_NEIGHBORS[7].len(), 7);
    }

    #[test]
    fn all_resident_blocks_match_coarse_extraction() {
        let blocks = Dims3::new(2, 2, 2);
        let dims = Dims3::new(8, 8, 8);

        let dense = dense_values(dims);
        let coarse_field = CoarseField::new(&dense, dims).unwrap();
        let coarse_mesh = extract(&coarse_field, CoordMode::unit(), 0.0).unwrap();

        let (values, locations) = slot_values(blocks);
        let field = BlockField::new(&values, blocks, &locations).unwrap();
        let active: Vec<u32> = (0..blocks.volume() as u32).collect();
        let chunk_mesh = extract_blocks(&field, &active, CoordMode::unit(), 0.0).unwrap();

        assert!(!coarse_mesh.is_empty());
        assert_eq!(coarse_mesh.vertex_count(), chunk_mesh.vertex_count());
        assert_eq!(coarse_mesh.indices.len(), chunk_mesh.indices.len());
        assert_eq!(triangle_set(&coarse_mesh), triangle_set(&chunk_mesh));
    }

    #[test]
    fn missing_neighbor_cells_are_skipped_then_reappear() {
        let blocks = Dims3::new(2, 1, 1);
        let (values, locations) = slot_values(blocks);

        // Only block 0 resident: its max-x cells must be skipped, so
        // the result equals coarse extraction over block 0's own
        // samples alone.
        let partial_locations = vec![0i32, -1];
        let field = BlockField::new(&values, blocks, &partial_locations).unwrap();
        let partial = extract_blocks(&field, &[0], CoordMode::unit(), 0.0).unwrap();

        let own_dims = Dims3::new(4, 4, 4);
        let own = dense_values(own_dims);
        let own_field = CoarseField::new(&own, own_dims).unwrap();
        let own_mesh = extract(&own_field, CoordMode::unit(), 0.0).unwrap();
        assert_eq!(triangle_set(&partial), triangle_set(&own_mesh));

        // Neighbor becomes resident and the call reruns: the seam
        // cells appear and the whole thing matches the dense result.
        let field = BlockField::new(&values, blocks, &locations).unwrap();
        let full = extract_blocks(&field, &[0, 1], CoordMode::unit(), 0.0).unwrap();

        let dims = Dims3::new(8, 4, 4);
        let dense = dense_values(dims);
        let dense_field = CoarseField::new(&dense, dims).unwrap();
        let dense_mesh = extract(&dense_field, CoordMode::unit(), 0.0).unwrap();

        assert!(full.vertex_count() > partial.vertex_count());
        assert_eq!(triangle_set(&full), triangle_set(&dense_mesh));
    }

    #[test]
    fn active_order_is_preserved_but_geometry_is_not_order_dependent() {
        let blocks = Dims3::new(2, 2, 2);
        let (values, locations) = slot_values(blocks);
        let field = BlockField::new(&values, blocks, &locations).unwrap();

        let forward: Vec<u32> = (0..8).collect();
        let reverse: Vec<u32> = (0..8).rev().collect();
        let a = extract_blocks(&field, &forward, CoordMode::unit(), 0.0).unwrap();
        let b = extract_blocks(&field, &reverse, CoordMode::unit(), 0.0).unwrap();

        assert_eq!(a.vertex_count(), b.vertex_count());
        assert_eq!(triangle_set(&a), triangle_set(&b));
        // Different active order permutes the buffers themselves.
        assert_ne!(a.positions, b.positions);
    }

    #[test]
    fn scale_offsets_blocks_consistently() {
        let blocks = Dims3::new(2, 1, 1);
        let (values, locations) = slot_values(blocks);
        let field = BlockField::new(&values, blocks, &locations).unwrap();

        let mode = CoordMode::Lattice {
            scale: [2.0, 1.0, 1.0],
        };
        let scaled = extract_blocks(&field, &[0, 1], mode, 0.0).unwrap();
        let unit = extract_blocks(&field, &[0, 1], CoordMode::unit(), 0.0).unwrap();

        assert_eq!(scaled.vertex_count(), unit.vertex_count());
        for i in 0..unit.vertex_count() {
            let u = unit.vertex(i);
            let s = scaled.vertex(i);
            assert!((s.x - u.x * 2.0).abs() < 1e-5);
            assert!((s.y - u.y).abs() < 1e-6);
        }
    }

    #[test]
    fn explicit_points_follow_the_slot_layout() {
        let blocks = Dims3::new(2, 1, 1);
        let (values, locations) = slot_values(blocks);

        // Points mirror the lattice shifted by 100 along x.
        let mut points = vec![0.0f32; values.len() * 3];
        for id in 0..blocks.volume() {
            let bpos = blocks.pos_from_linear(id);
            for s in 0..BLOCK_VOLUME {
                let local = BLOCK_DIMS.pos_from_linear(s);
                let i = (id * BLOCK_VOLUME + s) * 3;
                points[i] = (bpos.x * BLOCK_DIMS.x + local.x) as f32 + 100.0;
                points[i + 1] = (bpos.y * BLOCK_DIMS.y + local.y) as f32;
                points[i + 2] = (bpos.z * BLOCK_DIMS.z + local.z) as f32;
            }
        }
        let field = BlockField::with_points(&values, &points, blocks, &locations).unwrap();
        let explicit = extract_blocks(&field, &[0, 1], CoordMode::Explicit, 0.0).unwrap();
        let lattice = extract_blocks(&field, &[0, 1], CoordMode::unit(), 0.0).unwrap();

        assert_eq!(explicit.vertex_count(), lattice.vertex_count());
        for i in 0..lattice.vertex_count() {
            let e = explicit.vertex(i);
            let l = lattice.vertex(i);
            assert!((e.x - (l.x + 100.0)).abs() < 1e-4, "vertex {}", i);
            assert!((e.y - l.y).abs() < 1e-4);
            assert!((e.z - l.z).abs() < 1e-4);
        }
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        let blocks = Dims3::new(2, 1, 1);
        let (values, locations) = slot_values(blocks);

        // Truncated slot buffer.
        assert!(matches!(
            BlockField::new(&values[..70], blocks, &locations),
            Err(ExtractError::FieldSizeMismatch { .. })
        ));

        // Wrong location table length.
        assert!(matches!(
            BlockField::new(&values, blocks, &locations[..1]),
            Err(ExtractError::LocationsSizeMismatch {
                expected: 2,
                got: 1
            })
        ));

        // Slot past the end of storage.
        let bad_locations = vec![0i32, 9];
        assert!(matches!(
            BlockField::new(&values, blocks, &bad_locations),
            Err(ExtractError::SlotOutOfRange { slot: 9, slots: 2 })
        ));

        let field = BlockField::new(&values, blocks, &locations).unwrap();
        assert_eq!(
            extract_blocks(&field, &[7], CoordMode::unit(), 0.0),
            Err(ExtractError::BlockIdOutOfRange { id: 7, blocks: 2 })
        );

        let partial = vec![0i32, -1];
        let field = BlockField::new(&values, blocks, &partial).unwrap();
        assert_eq!(
            extract_blocks(&field, &[1], CoordMode::unit(), 0.0),
            Err(ExtractError::ActiveBlockNotResident { id: 1 })
        );

        assert_eq!(
            extract_blocks(&field, &[0], CoordMode::Explicit, 0.0),
            Err(ExtractError::MissingPoints)
        );
    }

    #[test]
    fn empty_active_set_yields_empty_mesh() {
        let blocks = Dims3::new(1, 1, 1);
        let (values, locations) = slot_values(blocks);
        let field = BlockField::new(&values, blocks, &locations).unwrap();
        let mesh = extract_blocks(&field, &[], CoordMode::unit(), 0.0).unwrap();
        assert!(mesh.is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_output_matches_serial() {
        let blocks = Dims3::new(3, 2, 2);
        let (values, locations) = slot_values(blocks);
        let field = BlockField::new(&values, blocks, &locations).unwrap();
        let active: Vec<u32> = (0..blocks.volume() as u32).collect();

        let serial = extract_blocks(&field, &active, CoordMode::unit(), 0.0).unwrap();
        let parallel = extract_blocks_parallel(&field, &active, CoordMode::unit(), 0.0).unwrap();

        assert_eq!(serial.positions, parallel.positions);
        assert_eq!(serial.indices, parallel.indices);
    }
}
