//! Marching cubes case tables.
//!
//! Pure data indexed by the 8-bit corner code of a cell. The edge and
//! triangle rows reproduce the standard rotation/reflection-complete
//! case enumeration exactly (ambiguous-case disambiguation is baked
//! into the rows); correctness depends on them bit-for-bit, so nothing
//! here is derived at runtime.

/// Offset of each cell corner from the cell's minimum corner, one
/// {0,1} step per axis.
///
/// ```text
/// Corner:  0      1      2      3      4      5      6      7
/// Offset: (0,0,0)(1,0,0)(1,1,0)(0,1,0)(0,0,1)(1,0,1)(1,1,1)(0,1,1)
/// ```
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
    [0, 0, 0], // 0
    [1, 0, 0], // 1
    [1, 1, 0], // 2
    [0, 1, 0], // 3
    [0, 0, 1], // 4
    [1, 0, 1], // 5
    [1, 1, 1], // 6
    [0, 1, 1], // 7
];

/// The two corner indices joined by each of the 12 cell edges, in the
/// order interpolation walks them (`a` to `b`).
pub const EDGE_ENDPOINTS: [[usize; 2]; 12] = [
    [0, 1], // 0
    [1, 2], // 1
    [2, 3], // 2
    [0, 3], // 3
    [4, 5], // 4
    [5, 6], // 5
    [6, 7], // 6
    [4, 7], // 7
    [0, 4], // 8
    [1, 5], // 9
    [2, 6], // 10
    [3, 7], // 11
];

/// For each corner code, the ordered list of edges the surface crosses.
///
/// One vertex is emitted per entry, in row order. Rows 0 and 255 are
/// empty: the surface does not cross those cells.
pub const EDGE_CASES: [&[u8]; 256] = [
    &[],
    &[0, 3, 8],
    &[0, 1, 9],
    &[1, 3, 8, 9],
    &[1, 2, 10],
    &[0, 1, 2, 3, 8, 10],
    &[0, 2, 9, 10],
    &[2, 3, 8, 9, 10],
    &[2, 3, 11],
    &[0, 2, 8, 11],
    &[0, 1, 2, 3, 9, 11],
    &[1, 2, 8, 9, 11],
    &[1, 3, 10, 11],
    &[0, 1, 8, 10, 11],
    &[0, 3, 9, 10, 11],
    &[8, 9, 10, 11],
    &[4, 7, 8],
    &[0, 3, 4, 7],
    &[0, 1, 4, 7, 8, 9],
    &[1, 3, 4, 7, 9],
    &[1, 2, 4, 7, 8, 10],
    &[0, 1, 2, 3, 4, 7, 10],
    &[0, 2, 4, 7, 8, 9, 10],
    &[2, 3, 4, 7, 9, 10],
    &[2, 3, 4, 7, 8, 11],
    &[0, 2, 4, 7, 11],
    &[0, 1, 2, 3, 4, 7, 8, 9, 11],
    &[1, 2, 4, 7, 9, 11],
    &[1, 3, 4, 7, 8, 10, 11],
    &[0, 1, 4, 7, 10, 11],
    &[0, 3, 4, 7, 8, 9, 10, 11],
    &[4, 7, 9, 10, 11],
    &[4, 5, 9],
    &[0, 3, 4, 5, 8, 9],
    &[0, 1, 4, 5],
    &[1, 3, 4, 5, 8],
    &[1, 2, 4, 5, 9, 10],
    &[0, 1, 2, 3, 4, 5, 8, 9, 10],
    &[0, 2, 4, 5, 10],
    &[2, 3, 4, 5, 8, 10],
    &[2, 3, 4, 5, 9, 11],
    &[0, 2, 4, 5, 8, 9, 11],
    &[0, 1, 2, 3, 4, 5, 11],
    &[1, 2, 4, 5, 8, 11],
    &[1, 3, 4, 5, 9, 10, 11],
    &[0, 1, 4, 5, 8, 9, 10, 11],
    &[0, 3, 4, 5, 10, 11],
    &[4, 5, 8, 10, 11],
    &[5, 7, 8, 9],
    &[0, 3, 5, 7, 9],
    &[0, 1, 5, 7, 8],
    &[1, 3, 5, 7],
    &[1, 2, 5, 7, 8, 9, 10],
    &[0, 1, 2, 3, 5, 7, 9, 10],
    &[0, 2, 5, 7, 8, 10],
    &[2, 3, 5, 7, 10],
    &[2, 3, 5, 7, 8, 9, 11],
    &[0, 2, 5, 7, 9, 11],
    &[0, 1, 2, 3, 5, 7, 8, 11],
    &[1, 2, 5, 7, 11],
    &[1, 3, 5, 7, 8, 9, 10, 11],
    &[0, 1, 5, 7, 9, 10, 11],
    &[0, 3, 5, 7, 8, 10, 11],
    &[5, 7, 10, 11],
    &[5, 6, 10],
    &[0, 3, 5, 6, 8, 10],
    &[0, 1, 5, 6, 9, 10],
    &[1, 3, 5, 6, 8, 9, 10],
    &[1, 2, 5, 6],
    &[0, 1, 2, 3, 5, 6, 8],
    &[0, 2, 5, 6, 9],
    &[2, 3, 5, 6, 8, 9],
    &[2, 3, 5, 6, 10, 11],
    &[0, 2, 5, 6, 8, 10, 11],
    &[0, 1, 2, 3, 5, 6, 9, 10, 11],
    &[1, 2, 5, 6, 8, 9, 10, 11],
    &[1, 3, 5, 6, 11],
    &[0, 1, 5, 6, 8, 11],
    &[0, 3, 5, 6, 9, 11],
    &[5, 6, 8, 9, 11],
    &[4, 5, 6, 7, 8, 10],
    &[0, 3, 4, 5, 6, 7, 10],
    &[0, 1, 4, 5, 6, 7, 8, 9, 10],
    &[1, 3, 4, 5, 6, 7, 9, 10],
    &[1, 2, 4, 5, 6, 7, 8],
    &[0, 1, 2, 3, 4, 5, 6, 7],
    &[0, 2, 4, 5, 6, 7, 8, 9],
    &[2, 3, 4, 5, 6, 7, 9],
    &[2, 3, 4, 5, 6, 7, 8, 10, 11],
    &[0, 2, 4, 5, 6, 7, 10, 11],
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    &[1, 2, 4, 5, 6, 7, 9, 10, 11],
    &[1, 3, 4, 5, 6, 7, 8, 11],
    &[0, 1, 4, 5, 6, 7, 11],
    &[0, 3, 4, 5, 6, 7, 8, 9, 11],
    &[4, 5, 6, 7, 9, 11],
    &[4, 6, 9, 10],
    &[0, 3, 4, 6, 8, 9, 10],
    &[0, 1, 4, 6, 10],
    &[1, 3, 4, 6, 8, 10],
    &[1, 2, 4, 6, 9],
    &[0, 1, 2, 3, 4, 6, 8, 9],
    &[0, 2, 4, 6],
    &[2, 3, 4, 6, 8],
    &[2, 3, 4, 6, 9, 10, 11],
    &[0, 2, 4, 6, 8, 9, 10, 11],
    &[0, 1, 2, 3, 4, 6, 10, 11],
    &[1, 2, 4, 6, 8, 10, 11],
    &[1, 3, 4, 6, 9, 11],
    &[0, 1, 4, 6, 8, 9, 11],
    &[0, 3, 4, 6, 11],
    &[4, 6, 8, 11],
    &[6, 7, 8, 9, 10],
    &[0, 3, 6, 7, 9, 10],
    &[0, 1, 6, 7, 8, 10],
    &[1, 3, 6, 7, 10],
    &[1, 2, 6, 7, 8, 9],
    &[0, 1, 2, 3, 6, 7, 9],
    &[0, 2, 6, 7, 8],
    &[2, 3, 6, 7],
    &[2, 3, 6, 7, 8, 9, 10, 11],
    &[0, 2, 6, 7, 9, 10, 11],
    &[0, 1, 2, 3, 6, 7, 8, 10, 11],
    &[1, 2, 6, 7, 10, 11],
    &[1, 3, 6, 7, 8, 9, 11],
    &[0, 1, 6, 7, 9, 11],
    &[0, 3, 6, 7, 8, 11],
    &[6, 7, 11],
    &[6, 7, 11],
    &[0, 3, 6, 7, 8, 11],
    &[0, 1, 6, 7, 9, 11],
    &[1, 3, 6, 7, 8, 9, 11],
    &[1, 2, 6, 7, 10, 11],
    &[0, 1, 2, 3, 6, 7, 8, 10, 11],
    &[0, 2, 6, 7, 9, 10, 11],
    &[2, 3, 6, 7, 8, 9, 10, 11],
    &[2, 3, 6, 7],
    &[0, 2, 6, 7, 8],
    &[0, 1, 2, 3, 6, 7, 9],
    &[1, 2, 6, 7, 8, 9],
    &[1, 3, 6, 7, 10],
    &[0, 1, 6, 7, 8, 10],
    &[0, 3, 6, 7, 9, 10],
    &[6, 7, 8, 9, 10],
    &[4, 6, 8, 11],
    &[0, 3, 4, 6, 11],
    &[0, 1, 4, 6, 8, 9, 11],
    &[1, 3, 4, 6, 9, 11],
    &[1, 2, 4, 6, 8, 10, 11],
    &[0, 1, 2, 3, 4, 6, 10, 11],
    &[0, 2, 4, 6, 8, 9, 10, 11],
    &[2, 3, 4, 6, 9, 10, 11],
    &[2, 3, 4, 6, 8],
    &[0, 2, 4, 6],
    &[0, 1, 2, 3, 4, 6, 8, 9],
    &[1, 2, 4, 6, 9],
    &[1, 3, 4, 6, 8, 10],
    &[0, 1, 4, 6, 10],
    &[0, 3, 4, 6, 8, 9, 10],
    &[4, 6, 9, 10],
    &[4, 5, 6, 7, 9, 11],
    &[0, 3, 4, 5, 6, 7, 8, 9, 11],
    &[0, 1, 4, 5, 6, 7, 11],
    &[1, 3, 4, 5, 6, 7, 8, 11],
    &[1, 2, 4, 5, 6, 7, 9, 10, 11],
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    &[0, 2, 4, 5, 6, 7, 10, 11],
    &[2, 3, 4, 5, 6, 7, 8, 10, 11],
    &[2, 3, 4, 5, 6, 7, 9],
    &[0, 2, 4, 5, 6, 7, 8, 9],
    &[0, 1, 2, 3, 4, 5, 6, 7],
    &[1, 2, 4, 5, 6, 7, 8],
    &[1, 3, 4, 5, 6, 7, 9, 10],
    &[0, 1, 4, 5, 6, 7, 8, 9, 10],
    &[0, 3, 4, 5, 6, 7, 10],
    &[4, 5, 6, 7, 8, 10],
    &[5, 6, 8, 9, 11],
    &[0, 3, 5, 6, 9, 11],
    &[0, 1, 5, 6, 8, 11],
    &[1, 3, 5, 6, 11],
    &[1, 2, 5, 6, 8, 9, 10, 11],
    &[0, 1, 2, 3, 5, 6, 9, 10, 11],
    &[0, 2, 5, 6, 8, 10, 11],
    &[2, 3, 5, 6, 10, 11],
    &[2, 3, 5, 6, 8, 9],
    &[0, 2, 5, 6, 9],
    &[0, 1, 2, 3, 5, 6, 8],
    &[1, 2, 5, 6],
    &[1, 3, 5, 6, 8, 9, 10],
    &[0, 1, 5, 6, 9, 10],
    &[0, 3, 5, 6, 8, 10],
    &[5, 6, 10],
    &[5, 7, 10, 11],
    &[0, 3, 5, 7, 8, 10, 11],
    &[0, 1, 5, 7, 9, 10, 11],
    &[1, 3, 5, 7, 8, 9, 10, 11],
    &[1, 2, 5, 7, 11],
    &[0, 1, 2, 3, 5, 7, 8, 11],
    &[0, 2, 5, 7, 9, 11],
    &[2, 3, 5, 7, 8, 9, 11],
    &[2, 3, 5, 7, 10],
    &[0, 2, 5, 7, 8, 10],
    &[0, 1, 2, 3, 5, 7, 9, 10],
    &[1, 2, 5, 7, 8, 9, 10],
    &[1, 3, 5, 7],
    &[0, 1, 5, 7, 8],
    &[0, 3, 5, 7, 9],
    &[5, 7, 8, 9],
    &[4, 5, 8, 10, 11],
    &[0, 3, 4, 5, 10, 11],
    &[0, 1, 4, 5, 8, 9, 10, 11],
    &[1, 3, 4, 5, 9, 10, 11],
    &[1, 2, 4, 5, 8, 11],
    &[0, 1, 2, 3, 4, 5, 11],
    &[0, 2, 4, 5, 8, 9, 11],
    &[2, 3, 4, 5, 9, 11],
    &[2, 3, 4, 5, 8, 10],
    &[0, 2, 4, 5, 10],
    &[0, 1, 2, 3, 4, 5, 8, 9, 10],
    &[1, 2, 4, 5, 9, 10],
    &[1, 3, 4, 5, 8],
    &[0, 1, 4, 5],
    &[0, 3, 4, 5, 8, 9],
    &[4, 5, 9],
    &[4, 7, 9, 10, 11],
    &[0, 3, 4, 7, 8, 9, 10, 11],
    &[0, 1, 4, 7, 10, 11],
    &[1, 3, 4, 7, 8, 10, 11],
    &[1, 2, 4, 7, 9, 11],
    &[0, 1, 2, 3, 4, 7, 8, 9, 11],
    &[0, 2, 4, 7, 11],
    &[2, 3, 4, 7, 8, 11],
    &[2, 3, 4, 7, 9, 10],
    &[0, 2, 4, 7, 8, 9, 10],
    &[0, 1, 2, 3, 4, 7, 10],
    &[1, 2, 4, 7, 8, 10],
    &[1, 3, 4, 7, 9],
    &[0, 1, 4, 7, 8, 9],
    &[0, 3, 4, 7],
    &[4, 7, 8],
    &[8, 9, 10, 11],
    &[0, 3, 9, 10, 11],
    &[0, 1, 8, 10, 11],
    &[1, 3, 10, 11],
    &[1, 2, 8, 9, 11],
    &[0, 1, 2, 3, 9, 11],
    &[0, 2, 8, 11],
    &[2, 3, 11],
    &[2, 3, 8, 9, 10],
    &[0, 2, 9, 10],
    &[0, 1, 2, 3, 8, 10],
    &[1, 2, 10],
    &[1, 3, 8, 9],
    &[0, 1, 9],
    &[0, 3, 8],
    &[],];

/// For each corner code, CCW triangles as indices into that cell's
/// emitted-vertex run (positions within `EDGE_CASES[code]`), grouped
/// in threes.
pub const TRI_CASES: [&[u8]; 256] = [
    &[],
    &[0, 2, 1],
    &[0, 1, 2],
    &[0, 2, 1, 3, 2, 0],
    &[0, 1, 2],
    &[0, 4, 3, 1, 2, 5],
    &[2, 1, 3, 0, 1, 2],
    &[0, 2, 1, 0, 4, 2, 4, 3, 2],
    &[1, 2, 0],
    &[0, 3, 1, 2, 3, 0],
    &[1, 4, 0, 2, 3, 5],
    &[0, 4, 1, 0, 3, 4, 3, 2, 4],
    &[1, 2, 0, 3, 2, 1],
    &[0, 3, 1, 0, 2, 3, 2, 4, 3],
    &[1, 2, 0, 1, 4, 2, 4, 3, 2],
    &[1, 0, 2, 2, 0, 3],
    &[0, 1, 2],
    &[2, 1, 0, 3, 1, 2],
    &[0, 1, 5, 4, 2, 3],
    &[2, 0, 4, 2, 3, 0, 3, 1, 0],
    &[0, 1, 5, 4, 2, 3],
    &[3, 4, 5, 3, 0, 4, 1, 2, 6],
    &[5, 1, 6, 5, 0, 1, 4, 2, 3],
    &[0, 5, 4, 0, 4, 3, 0, 3, 1, 3, 4, 2],
    &[4, 2, 3, 1, 5, 0],
    &[4, 2, 3, 4, 1, 2, 1, 0, 2],
    &[7, 0, 1, 6, 4, 5, 2, 3, 8],
    &[2, 3, 5, 4, 2, 5, 4, 5, 1, 4, 1, 0],
    &[1, 5, 0, 1, 6, 5, 3, 4, 2],
    &[1, 5, 4, 1, 2, 5, 1, 0, 2, 3, 5, 2],
    &[2, 3, 4, 5, 0, 7, 5, 7, 6, 7, 0, 1],
    &[0, 1, 4, 0, 4, 2, 2, 4, 3],
    &[2, 1, 0],
    &[5, 3, 2, 0, 4, 1],
    &[0, 3, 2, 1, 3, 0],
    &[4, 3, 2, 4, 1, 3, 1, 0, 3],
    &[0, 1, 5, 4, 3, 2],
    &[3, 0, 6, 1, 2, 8, 4, 7, 5],
    &[3, 1, 4, 3, 2, 1, 2, 0, 1],
    &[0, 5, 3, 1, 0, 3, 1, 3, 2, 1, 2, 4],
    &[4, 3, 2, 0, 1, 5],
    &[0, 6, 1, 0, 4, 6, 2, 5, 3],
    &[0, 5, 4, 0, 1, 5, 2, 3, 6],
    &[1, 0, 3, 1, 3, 4, 1, 4, 5, 2, 4, 3],
    &[5, 1, 6, 5, 0, 1, 4, 3, 2],
    &[2, 5, 3, 0, 4, 1, 4, 6, 1, 4, 7, 6],
    &[3, 2, 0, 3, 0, 5, 3, 5, 4, 5, 0, 1],
    &[1, 0, 2, 1, 2, 3, 3, 2, 4],
    &[3, 1, 2, 0, 1, 3],
    &[4, 1, 0, 4, 2, 1, 2, 3, 1],
    &[0, 3, 4, 0, 1, 3, 1, 2, 3],
    &[0, 2, 1, 1, 2, 3],
    &[5, 3, 4, 5, 2, 3, 6, 0, 1],
    &[7, 1, 2, 6, 4, 0, 4, 3, 0, 4, 5, 3],
    &[4, 0, 1, 4, 1, 2, 4, 2, 3, 5, 2, 1],
    &[0, 4, 2, 0, 2, 1, 1, 2, 3],
    &[3, 5, 2, 3, 4, 5, 1, 6, 0],
    &[4, 2, 3, 4, 3, 1, 4, 1, 0, 1, 3, 5],
    &[2, 3, 7, 0, 1, 6, 1, 5, 6, 1, 4, 5],
    &[4, 1, 0, 4, 0, 3, 3, 0, 2],
    &[5, 2, 4, 4, 2, 3, 6, 0, 1, 6, 1, 7],
    &[2, 3, 0, 2, 0, 4, 3, 6, 0, 1, 0, 5, 6, 5, 0],
    &[6, 5, 0, 6, 0, 1, 5, 2, 0, 4, 0, 3, 2, 3, 0],
    &[3, 2, 0, 1, 3, 0],
    &[2, 1, 0],
    &[0, 4, 1, 2, 5, 3],
    &[4, 0, 1, 2, 5, 3],
    &[0, 4, 1, 0, 5, 4, 2, 6, 3],
    &[0, 3, 2, 1, 3, 0],
    &[1, 5, 4, 1, 2, 5, 3, 0, 6],
    &[4, 3, 2, 4, 0, 3, 0, 1, 3],
    &[2, 5, 4, 2, 4, 0, 2, 0, 3, 1, 0, 4],
    &[0, 1, 5, 4, 3, 2],
    &[6, 0, 4, 6, 1, 0, 5, 3, 2],
    &[0, 1, 6, 2, 3, 8, 4, 7, 5],
    &[2, 6, 3, 0, 5, 1, 5, 7, 1, 5, 4, 7],
    &[3, 1, 4, 3, 2, 1, 2, 0, 1],
    &[0, 4, 5, 0, 5, 2, 0, 2, 1, 2, 5, 3],
    &[1, 5, 3, 0, 1, 3, 0, 3, 2, 0, 2, 4],
    &[1, 0, 3, 1, 3, 4, 4, 3, 2],
    &[1, 5, 2, 0, 3, 4],
    &[2, 1, 0, 2, 5, 1, 4, 3, 6],
    &[1, 7, 0, 3, 8, 4, 6, 2, 5],
    &[7, 4, 3, 0, 6, 5, 0, 5, 1, 5, 6, 2],
    &[4, 0, 1, 4, 3, 0, 2, 5, 6],
    &[1, 2, 5, 5, 2, 6, 3, 0, 4, 3, 4, 7],
    &[6, 2, 5, 7, 0, 3, 0, 4, 3, 0, 1, 4],
    &[5, 1, 6, 5, 6, 2, 1, 0, 6, 3, 6, 4, 0, 4, 6],
    &[1, 8, 0, 5, 6, 2, 7, 4, 3],
    &[3, 6, 4, 2, 5, 1, 2, 1, 0, 1, 5, 7],
    &[0, 1, 9, 4, 7, 8, 2, 3, 11, 5, 10, 6],
    &[6, 1, 0, 6, 8, 1, 6, 2, 8, 5, 8, 2, 3, 7, 4],
    &[6, 2, 5, 1, 7, 3, 1, 3, 0, 3, 7, 4],
    &[3, 1, 6, 3, 6, 4, 1, 0, 6, 5, 6, 2, 0, 2, 6],
    &[0, 3, 7, 0, 4, 3, 0, 1, 4, 8, 4, 1, 6, 2, 5],
    &[2, 1, 4, 2, 4, 5, 0, 3, 4, 3, 5, 4],
    &[3, 0, 2, 1, 0, 3],
    &[2, 6, 3, 2, 5, 6, 0, 4, 1],
    &[4, 0, 1, 4, 3, 0, 3, 2, 0],
    &[4, 1, 0, 4, 0, 3, 4, 3, 2, 3, 0, 5],
    &[0, 2, 4, 0, 1, 2, 1, 3, 2],
    &[3, 0, 6, 1, 2, 7, 2, 4, 7, 2, 5, 4],
    &[0, 1, 2, 2, 1, 3],
    &[4, 1, 0, 4, 0, 2, 2, 0, 3],
    &[5, 2, 4, 5, 3, 2, 6, 0, 1],
    &[0, 4, 1, 1, 4, 7, 2, 5, 6, 2, 6, 3],
    &[3, 7, 2, 0, 1, 5, 0, 5, 4, 5, 1, 6],
    &[3, 2, 0, 3, 0, 5, 2, 4, 0, 1, 0, 6, 4, 6, 0],
    &[4, 3, 2, 4, 1, 3, 4, 0, 1, 5, 3, 1],
    &[4, 6, 1, 4, 1, 0, 6, 3, 1, 5, 1, 2, 3, 2, 1],
    &[1, 4, 3, 1, 3, 0, 0, 3, 2],
    &[1, 0, 2, 3, 1, 2],
    &[1, 4, 0, 1, 2, 4, 2, 3, 4],
    &[0, 3, 1, 0, 5, 3, 0, 4, 5, 2, 3, 5],
    &[5, 2, 3, 1, 5, 3, 1, 3, 4, 1, 4, 0],
    &[4, 2, 3, 4, 3, 0, 0, 3, 1],
    &[0, 1, 2, 0, 2, 4, 0, 4, 5, 4, 2, 3],
    &[2, 4, 6, 2, 6, 1, 4, 5, 6, 0, 6, 3, 5, 3, 6],
    &[3, 4, 0, 3, 0, 2, 2, 0, 1],
    &[3, 1, 0, 2, 3, 0],
    &[0, 1, 7, 6, 2, 4, 6, 4, 5, 4, 2, 3],
    &[1, 0, 3, 1, 3, 6, 0, 4, 3, 2, 3, 5, 4, 5, 3],
    &[1, 6, 0, 1, 5, 6, 1, 7, 5, 4, 5, 7, 2, 3, 8],
    &[5, 1, 0, 5, 0, 3, 4, 2, 0, 2, 3, 0],
    &[4, 5, 2, 4, 2, 3, 5, 0, 2, 6, 2, 1, 0, 1, 2],
    &[0, 4, 1, 5, 2, 3],
    &[3, 4, 0, 3, 0, 2, 1, 5, 0, 5, 2, 0],
    &[1, 2, 0],
    &[1, 0, 2],
    &[1, 0, 4, 5, 3, 2],
    &[0, 1, 4, 5, 3, 2],
    &[4, 0, 5, 4, 1, 0, 6, 3, 2],
    &[4, 0, 1, 2, 5, 3],
    &[1, 2, 7, 3, 0, 6, 4, 8, 5],
    &[1, 4, 0, 1, 5, 4, 2, 6, 3],
    &[2, 7, 3, 0, 6, 1, 6, 4, 1, 6, 5, 4],
    &[3, 0, 1, 2, 0, 3],
    &[3, 0, 4, 3, 2, 0, 2, 1, 0],
    &[2, 5, 4, 2, 3, 5, 0, 1, 6],
    &[0, 2, 1, 0, 4, 2, 0, 5, 4, 4, 3, 2],
    &[4, 3, 2, 4, 0, 3, 0, 1, 3],
    &[5, 3, 2, 1, 3, 5, 1, 4, 3, 1, 0, 4],
    &[0, 1, 3, 0, 3, 5, 0, 5, 4, 2, 5, 3],
    &[1, 0, 4, 1, 4, 2, 2, 4, 3],
    &[1, 2, 0, 3, 2, 1],
    &[1, 3, 4, 1, 0, 3, 0, 2, 3],
    &[4, 3, 6, 4, 2, 3, 5, 0, 1],
    &[4, 2, 3, 4, 3, 1, 4, 1, 0, 5, 1, 3],
    &[3, 4, 2, 3, 6, 4, 1, 5, 0],
    &[1, 2, 6, 3, 0, 7, 0, 5, 7, 0, 4, 5],
    &[2, 7, 4, 2, 3, 7, 0, 1, 5, 1, 6, 5],
    &[5, 4, 1, 5, 1, 0, 4, 2, 1, 6, 1, 3, 2, 3, 1],
    &[4, 0, 1, 4, 2, 0, 2, 3, 0],
    &[0, 2, 1, 2, 3, 1],
    &[1, 7, 0, 2, 3, 4, 2, 4, 5, 4, 3, 6],
    &[0, 4, 2, 0, 2, 1, 1, 2, 3],
    &[4, 0, 1, 4, 3, 0, 4, 2, 3, 3, 5, 0],
    &[4, 1, 0, 4, 0, 3, 3, 0, 2],
    &[2, 3, 1, 2, 1, 4, 3, 6, 1, 0, 1, 5, 6, 5, 1],
    &[3, 2, 0, 1, 3, 0],
    &[0, 4, 1, 3, 2, 5],
    &[0, 6, 1, 2, 7, 3, 8, 5, 4],
    &[3, 0, 1, 3, 2, 0, 5, 4, 6],
    &[7, 5, 4, 6, 1, 2, 1, 3, 2, 1, 0, 3],
    &[6, 3, 2, 7, 0, 1, 5, 4, 8],
    &[6, 11, 7, 1, 2, 10, 0, 8, 3, 4, 9, 5],
    &[5, 4, 7, 3, 2, 6, 2, 1, 6, 2, 0, 1],
    &[1, 2, 6, 1, 3, 2, 1, 0, 3, 7, 3, 0, 8, 5, 4],
    &[5, 0, 1, 5, 4, 0, 3, 2, 6],
    &[7, 3, 2, 0, 6, 4, 0, 4, 1, 4, 6, 5],
    &[3, 6, 2, 3, 7, 6, 1, 5, 0, 5, 4, 0],
    &[4, 1, 6, 4, 6, 5, 1, 0, 6, 2, 6, 3, 0, 3, 6],
    &[6, 3, 2, 7, 0, 4, 0, 5, 4, 0, 1, 5],
    &[1, 4, 8, 1, 5, 4, 1, 0, 5, 6, 5, 0, 7, 3, 2],
    &[2, 0, 6, 2, 6, 3, 0, 1, 6, 4, 6, 5, 1, 5, 6],
    &[3, 2, 5, 3, 5, 4, 1, 0, 5, 0, 4, 5],
    &[1, 3, 0, 1, 4, 3, 4, 2, 3],
    &[1, 3, 5, 0, 3, 1, 0, 2, 3, 0, 4, 2],
    &[0, 5, 4, 0, 2, 5, 0, 1, 2, 2, 3, 5],
    &[3, 4, 1, 3, 1, 2, 2, 1, 0],
    &[0, 1, 6, 5, 2, 7, 5, 7, 4, 7, 2, 3],
    &[0, 8, 3, 0, 5, 8, 0, 6, 5, 4, 5, 6, 1, 2, 7],
    &[6, 4, 2, 6, 2, 3, 4, 0, 2, 5, 2, 1, 0, 1, 2],
    &[3, 5, 1, 3, 1, 2, 0, 4, 1, 4, 2, 1],
    &[2, 4, 5, 2, 0, 4, 2, 3, 0, 1, 4, 0],
    &[4, 2, 3, 4, 3, 0, 0, 3, 1],
    &[1, 4, 6, 1, 6, 0, 4, 5, 6, 3, 6, 2, 5, 2, 6],
    &[0, 2, 3, 1, 0, 3],
    &[0, 1, 3, 0, 3, 6, 1, 4, 3, 2, 3, 5, 4, 5, 3],
    &[5, 1, 0, 5, 0, 3, 4, 2, 0, 2, 3, 0],
    &[0, 1, 4, 2, 3, 5],
    &[2, 0, 1],
    &[3, 0, 2, 1, 0, 3],
    &[6, 2, 5, 6, 3, 2, 4, 1, 0],
    &[2, 6, 3, 2, 5, 6, 1, 4, 0],
    &[6, 3, 2, 6, 7, 3, 5, 4, 0, 4, 1, 0],
    &[4, 0, 1, 4, 3, 0, 3, 2, 0],
    &[0, 6, 3, 1, 2, 5, 1, 5, 4, 5, 2, 7],
    &[4, 3, 2, 4, 1, 3, 4, 0, 1, 1, 5, 3],
    &[3, 2, 0, 3, 0, 6, 2, 5, 0, 1, 0, 4, 5, 4, 0],
    &[0, 2, 4, 0, 1, 2, 1, 3, 2],
    &[4, 1, 0, 4, 2, 1, 4, 3, 2, 5, 1, 2],
    &[6, 0, 1, 4, 7, 3, 4, 3, 5, 3, 7, 2],
    &[5, 4, 1, 5, 1, 0, 4, 3, 1, 6, 1, 2, 3, 2, 1],
    &[0, 1, 2, 1, 3, 2],
    &[0, 4, 3, 0, 3, 1, 1, 3, 2],
    &[4, 0, 1, 4, 1, 2, 2, 1, 3],
    &[3, 2, 1, 0, 3, 1],
    &[1, 2, 0, 1, 3, 2, 3, 4, 2],
    &[3, 0, 2, 3, 5, 0, 3, 4, 5, 5, 1, 0],
    &[0, 1, 5, 4, 2, 6, 4, 6, 7, 6, 2, 3],
    &[5, 6, 2, 5, 2, 3, 6, 1, 2, 4, 2, 0, 1, 0, 2],
    &[1, 3, 0, 1, 4, 3, 1, 5, 4, 2, 3, 4],
    &[0, 4, 6, 0, 6, 3, 4, 5, 6, 2, 6, 1, 5, 1, 6],
    &[0, 1, 3, 0, 3, 5, 1, 6, 3, 2, 3, 4, 6, 4, 3],
    &[4, 2, 3, 0, 5, 1],
    &[0, 3, 5, 1, 3, 0, 1, 2, 3, 1, 4, 2],
    &[3, 4, 1, 3, 1, 2, 2, 1, 0],
    &[3, 8, 2, 3, 5, 8, 3, 6, 5, 4, 5, 6, 0, 1, 7],
    &[3, 5, 1, 3, 1, 2, 0, 4, 1, 4, 2, 1],
    &[4, 2, 3, 4, 3, 1, 1, 3, 0],
    &[0, 2, 3, 1, 0, 3],
    &[4, 2, 3, 4, 3, 1, 5, 0, 3, 0, 1, 3],
    &[2, 0, 1],
    &[0, 4, 1, 0, 2, 4, 2, 3, 4],
    &[0, 4, 1, 2, 5, 3, 5, 7, 3, 5, 6, 7],
    &[1, 4, 5, 1, 5, 2, 1, 2, 0, 3, 2, 5],
    &[1, 0, 2, 1, 2, 4, 0, 5, 2, 3, 2, 6, 5, 6, 2],
    &[2, 5, 3, 4, 5, 2, 4, 1, 5, 4, 0, 1],
    &[7, 5, 4, 7, 8, 5, 7, 1, 8, 2, 8, 1, 0, 6, 3],
    &[4, 3, 2, 4, 2, 1, 1, 2, 0],
    &[5, 3, 2, 5, 2, 0, 4, 1, 2, 1, 0, 2],
    &[0, 4, 5, 0, 3, 4, 0, 1, 3, 3, 2, 4],
    &[5, 6, 3, 5, 3, 2, 6, 1, 3, 4, 3, 0, 1, 0, 3],
    &[3, 5, 6, 3, 6, 2, 5, 4, 6, 1, 6, 0, 4, 0, 6],
    &[0, 5, 1, 4, 3, 2],
    &[2, 4, 0, 2, 0, 3, 3, 0, 1],
    &[2, 5, 1, 2, 1, 3, 0, 4, 1, 4, 3, 1],
    &[2, 0, 1, 3, 2, 1],
    &[0, 2, 1],
    &[1, 2, 0, 2, 3, 0],
    &[1, 0, 2, 1, 2, 4, 4, 2, 3],
    &[0, 1, 3, 0, 3, 2, 2, 3, 4],
    &[1, 0, 2, 3, 1, 2],
    &[0, 1, 4, 0, 4, 3, 3, 4, 2],
    &[3, 0, 4, 3, 4, 5, 1, 2, 4, 2, 5, 4],
    &[0, 1, 3, 2, 0, 3],
    &[1, 0, 2],
    &[0, 1, 2, 0, 2, 4, 4, 2, 3],
    &[2, 3, 1, 0, 2, 1],
    &[2, 3, 4, 2, 4, 5, 0, 1, 4, 1, 5, 4],
    &[0, 2, 1],
    &[0, 1, 2, 3, 0, 2],
    &[0, 2, 1],
    &[0, 1, 2],
    &[],];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_codes_are_empty() {
        assert!(EDGE_CASES[0].is_empty());
        assert!(EDGE_CASES[255].is_empty());
        assert!(TRI_CASES[0].is_empty());
        assert!(TRI_CASES[255].is_empty());
    }

    #[test]
    fn non_degenerate_codes_cross_the_surface() {
        for code in 1..255 {
            assert!(
                !EDGE_CASES[code].is_empty(),
                "code {} has no crossed edges",
                code
            );
            assert!(
                !TRI_CASES[code].is_empty(),
                "code {} has no triangles",
                code
            );
        }
    }

    #[test]
    fn edge_rows_are_valid_edges() {
        for code in 0..256 {
            assert!(EDGE_CASES[code].len() <= 12);
            for &e in EDGE_CASES[code] {
                assert!(e < 12, "code {} lists edge {}", code, e);
            }
        }
    }

    #[test]
    fn triangle_rows_index_into_vertex_run() {
        // Every triangle entry must reference a vertex the same cell
        // emits, so indices stay within the cell's edge-crossing count.
        for code in 0..256 {
            assert_eq!(TRI_CASES[code].len() % 3, 0, "code {}", code);
            assert!(TRI_CASES[code].len() <= 15, "code {}", code);
            let verts = EDGE_CASES[code].len();
            for &t in TRI_CASES[code] {
                assert!(
                    (t as usize) < verts,
                    "code {}: triangle entry {} but only {} vertices",
                    code,
                    t,
                    verts
                );
            }
        }
    }

    #[test]
    fn edge_rows_symmetric_under_complement() {
        // Inverting which corners are above the threshold flips the
        // surface orientation but crosses the same edges.
        for code in 0..256 {
            assert_eq!(
                EDGE_CASES[code],
                EDGE_CASES[255 - code],
                "code {} vs {}",
                code,
                255 - code
            );
        }
    }

    #[test]
    fn edge_endpoints_are_adjacent_corners() {
        for (e, &[a, b]) in EDGE_ENDPOINTS.iter().enumerate() {
            let ca = CORNER_OFFSETS[a];
            let cb = CORNER_OFFSETS[b];
            let differing = (0..3).filter(|&ax| ca[ax] != cb[ax]).count();
            assert_eq!(differing, 1, "edge {} does not span one axis", e);
        }
    }
}
