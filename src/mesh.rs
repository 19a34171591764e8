//! Output buffers produced by one extraction call.
//!
//! A call sizes these buffers exactly from its count pass, fills them
//! during its emit pass, and hands them to the caller. Nothing is
//! retained by the engine between calls.

use crate::alloc_prelude::Vec;
use crate::types::Point3;

/// Vertex positions and triangle indices for one extracted isosurface.
///
/// `positions` holds float triples, `indices` holds CCW-wound u32
/// triples referencing those vertices. Both are allocated once at the
/// counted sizes and never grow during emission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBuffers {
    /// Vertex positions, three floats per vertex.
    pub positions: Vec<f32>,
    /// Triangle indices, three entries per triangle, CCW winding.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Allocate buffers for exactly `vertex_count` vertices and
    /// `index_count` indices.
    pub(crate) fn with_counts(vertex_count: usize, index_count: usize) -> Self {
        let mut positions = Vec::new();
        positions.resize(vertex_count * 3, 0.0);
        let mut indices = Vec::new();
        indices.resize(index_count, 0);
        Self { positions, indices }
    }

    /// Write vertex `i`'s position.
    #[inline]
    pub(crate) fn set_vertex(&mut self, i: usize, p: Point3) {
        self.positions[3 * i] = p.x;
        self.positions[3 * i + 1] = p.y;
        self.positions[3 * i + 2] = p.z;
    }

    /// Number of vertices held.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles held.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the surface missed every emitted cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Vertex `i` as a [`Point3`].
    #[inline]
    pub fn vertex(&self, i: usize) -> Point3 {
        Point3::new(
            self.positions[3 * i],
            self.positions[3 * i + 1],
            self.positions[3 * i + 2],
        )
    }

    /// Export to a Wavefront OBJ string.
    #[cfg(any(feature = "std", feature = "alloc"))]
    pub fn to_obj(&self) -> crate::alloc_prelude::String {
        use core::fmt::Write;

        use crate::alloc_prelude::String;

        let mut obj = String::new();
        let _ = writeln!(
            obj,
            "# {} vertices, {} triangles",
            self.vertex_count(),
            self.triangle_count()
        );
        for i in 0..self.vertex_count() {
            let v = self.vertex(i);
            let _ = writeln!(obj, "v {} {} {}", v.x, v.y, v.z);
        }
        // OBJ faces are 1-indexed.
        for tri in self.indices.chunks_exact(3) {
            let _ = writeln!(obj, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1);
        }
        obj
    }
}
