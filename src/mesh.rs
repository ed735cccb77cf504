use glam::Vec3;
use std::collections::HashMap;

pub type MeshVertexId = u32;

/// Four vertex indices. Counter-clockwise when viewed from outside, where
/// "outside" is the region below the iso value.
pub type Quad = [MeshVertexId; 4];

/// Output of a dual marching cubes build.
///
/// Positions are in grid index space. For a quad soup every quad owns four
/// consecutive vertices, so `quads[i] == [4i, 4i + 1, 4i + 2, 4i + 3]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuadMesh {
    /// We don't use `Vec3A` because it's 16-byte-aligned.
    pub positions: Vec<Vec3>,
    pub quads: Vec<Quad>,
}

impl QuadMesh {
    pub fn clear(&mut self) {
        self.positions.clear();
        self.quads.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Splits every quad along its `0-2` diagonal, keeping the winding.
    pub fn triangulate(&self) -> Vec<[MeshVertexId; 3]> {
        self.quads
            .iter()
            .flat_map(|&[i0, i1, i2, i3]| [[i0, i1, i2], [i0, i2, i3]])
            .collect()
    }

    /// Number of quads using each undirected edge, keyed by `(min, max)`
    /// vertex index.
    pub fn edge_incidence(&self) -> HashMap<(MeshVertexId, MeshVertexId), u32> {
        let mut counts = HashMap::new();
        for quad in &self.quads {
            for i in 0..4 {
                let (a, b) = (quad[i], quad[(i + 1) % 4]);
                *counts.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Edges not shared by exactly two quads, sorted.
    ///
    /// Empty for a closed 2-manifold. Only meaningful with shared vertices.
    pub fn non_manifold_edges(&self) -> Vec<(MeshVertexId, MeshVertexId)> {
        let mut edges: Vec<_> = self
            .edge_incidence()
            .into_iter()
            .filter(|&(_, count)| count != 2)
            .map(|(edge, _)| edge)
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Area-weighted normal of a quad: half the cross product of its diagonals.
    pub fn quad_normal(&self, quad: &Quad) -> Vec3 {
        let p = quad.map(|v| self.positions[v as usize]);
        (p[2] - p[0]).cross(p[3] - p[1]) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> QuadMesh {
        QuadMesh {
            positions: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            quads: vec![[0, 1, 2, 3]],
        }
    }

    #[test]
    fn triangulation_keeps_winding() {
        let mesh = unit_square();
        assert_eq!(mesh.triangulate(), vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn counter_clockwise_normal() {
        let mesh = unit_square();
        assert_eq!(mesh.quad_normal(&mesh.quads[0]), Vec3::Z);
    }

    #[test]
    fn open_quad_has_boundary_edges() {
        let mesh = unit_square();
        assert_eq!(
            mesh.non_manifold_edges(),
            vec![(0, 1), (0, 3), (1, 2), (2, 3)]
        );
        assert!(mesh.edge_incidence().values().all(|&c| c == 1));
    }
}
