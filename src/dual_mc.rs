use crate::{
    calculate_dual_point, dual_point_code,
    mesh::{MeshVertexId, Quad, QuadMesh},
    tables::{PointCode, EDGE_ADJACENT_CELLS, ENTERING_QUAD_ORDER, EXITING_QUAD_ORDER},
    Sample, Volume,
};
use glam::{IVec3, Vec3};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Apply the manifold dual marching cubes rule so every mesh edge is shared
    /// by exactly two quads.
    pub manifold: bool,
    /// Give every quad four private vertices instead of sharing them.
    pub soup: bool,
}

/// A grid edge whose endpoints lie on opposite sides of the iso value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossingEdge {
    /// The endpoint with the lower coordinate.
    pub origin: IVec3,
    pub axis: usize,
    /// True if `origin` is below the iso value and the other endpoint is at or
    /// above it.
    pub entering: bool,
}

impl CrossingEdge {
    /// The 4 cells sharing this edge, each with the code of this edge within
    /// that cell, in [`EDGE_ADJACENT_CELLS`] order.
    #[inline]
    pub fn cells(&self) -> [(IVec3, PointCode); 4] {
        EDGE_ADJACENT_CELLS[self.axis].map(|(offset, edge)| (self.origin + offset, edge))
    }

    /// Order in which to connect the dual points of [`Self::cells`] so the quad
    /// faces away from the region at or above the iso value.
    #[inline]
    pub fn quad_order(&self) -> [usize; 4] {
        if self.entering {
            ENTERING_QUAD_ORDER
        } else {
            EXITING_QUAD_ORDER
        }
    }
}

/// Visits every grid edge crossing the iso value whose 4 surrounding cells are
/// all inside the volume.
///
/// Edges are visited in a fixed order: by origin with Z outermost and X
/// innermost, and per origin the X, Y then Z edge.
pub fn visit_crossing_edges<T: Sample>(
    volume: &Volume<T>,
    iso: T,
    mut visit_edge: impl FnMut(CrossingEdge),
) {
    let dims = volume.dims();
    for z in 0..dims.z - 1 {
        for y in 0..dims.y - 1 {
            for x in 0..dims.x - 1 {
                let origin = IVec3::new(x, y, z);
                let inside = volume.get(origin) >= iso;
                for axis in 0..3 {
                    // The cells on the negative side of both transverse axes
                    // must exist.
                    if (0..3).any(|t| t != axis && origin[t] == 0) {
                        continue;
                    }
                    let mut end = origin;
                    end[axis] += 1;
                    let end_inside = volume.get(end) >= iso;
                    if inside != end_inside {
                        visit_edge(CrossingEdge {
                            origin,
                            axis,
                            entering: end_inside,
                        });
                    }
                }
            }
        }
    }
}

/// Identifies one dual point in the whole volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DualPointKey {
    pub cell_index: usize,
    pub point_code: PointCode,
}

/// Maps dual points to shared mesh vertices.
#[derive(Debug, Default)]
pub struct DualPointCache {
    point_to_index: HashMap<DualPointKey, MeshVertexId>,
}

impl DualPointCache {
    pub fn clear(&mut self) {
        self.point_to_index.clear();
    }

    pub fn len(&self) -> usize {
        self.point_to_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.point_to_index.is_empty()
    }

    /// Returns the vertex of `key`, computing and appending it to `positions`
    /// the first time the key is seen.
    pub fn get_or_insert_with(
        &mut self,
        key: DualPointKey,
        positions: &mut Vec<Vec3>,
        compute: impl FnOnce() -> Vec3,
    ) -> MeshVertexId {
        *self.point_to_index.entry(key).or_insert_with(|| {
            let id = positions.len() as MeshVertexId;
            positions.push(compute());
            id
        })
    }
}

/// Dual marching cubes iso-surface extractor.
///
/// Produces one vertex per marching cubes face and one quad per grid edge
/// crossing the iso value. Reuse an instance across builds to keep the vertex
/// map's allocation.
#[derive(Debug, Default)]
pub struct DualMarchingCubes {
    cache: DualPointCache,
}

impl DualMarchingCubes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build<T: Sample>(
        &mut self,
        volume: &Volume<T>,
        iso: T,
        options: BuildOptions,
    ) -> QuadMesh {
        let mut mesh = QuadMesh::default();
        self.build_into(volume, iso, options, &mut mesh);
        mesh
    }

    /// Like [`Self::build`], reusing the buffers of `mesh`, which is cleared
    /// first.
    pub fn build_into<T: Sample>(
        &mut self,
        volume: &Volume<T>,
        iso: T,
        options: BuildOptions,
        mesh: &mut QuadMesh,
    ) {
        mesh.clear();
        if options.soup {
            build_quad_soup(volume, iso, options.manifold, mesh);
        } else {
            self.build_shared_vertices(volume, iso, options.manifold, mesh);
        }

        log::debug!(
            "dual marching cubes on {} volume: {} vertices, {} quads ({options:?})",
            volume.dims(),
            mesh.positions.len(),
            mesh.quads.len()
        );
    }

    fn build_shared_vertices<T: Sample>(
        &mut self,
        volume: &Volume<T>,
        iso: T,
        manifold: bool,
        mesh: &mut QuadMesh,
    ) {
        self.cache.clear();
        let cache = &mut self.cache;
        let positions = &mut mesh.positions;
        let quads = &mut mesh.quads;

        visit_crossing_edges(volume, iso, |edge| {
            let vertices = edge.cells().map(|(cell, edge_code)| {
                let point_code = dual_point_code(volume, cell, iso, edge_code, manifold);
                let key = DualPointKey {
                    cell_index: volume.linear_index(cell),
                    point_code,
                };
                cache.get_or_insert_with(key, positions, || {
                    calculate_dual_point(volume, cell, iso, point_code)
                })
            });
            quads.push(edge.quad_order().map(|i| vertices[i]));
        });
    }
}

fn build_quad_soup<T: Sample>(volume: &Volume<T>, iso: T, manifold: bool, mesh: &mut QuadMesh) {
    visit_crossing_edges(volume, iso, |edge| {
        let points = edge.cells().map(|(cell, edge_code)| {
            let point_code = dual_point_code(volume, cell, iso, edge_code, manifold);
            calculate_dual_point(volume, cell, iso, point_code)
        });
        let first = mesh.positions.len() as MeshVertexId;
        mesh.positions.extend(edge.quad_order().map(|i| points[i]));
        let quad: Quad = [first, first + 1, first + 2, first + 3];
        mesh.quads.push(quad);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_shares_equal_keys_only() {
        let mut cache = DualPointCache::default();
        let mut positions = Vec::new();
        let key = DualPointKey {
            cell_index: 3,
            point_code: 0b111,
        };
        let a = cache.get_or_insert_with(key, &mut positions, || Vec3::X);
        let b = cache.get_or_insert_with(key, &mut positions, || unreachable!());
        let c = cache.get_or_insert_with(
            DualPointKey {
                cell_index: 3,
                point_code: 0b1000,
            },
            &mut positions,
            || Vec3::Y,
        );
        let d = cache.get_or_insert_with(
            DualPointKey {
                cell_index: 4,
                point_code: 0b111,
            },
            &mut positions,
            || Vec3::Z,
        );
        assert_eq!((a, b, c, d), (0, 0, 1, 2));
        assert_eq!(positions, vec![Vec3::X, Vec3::Y, Vec3::Z]);
        assert_eq!(cache.len(), 3);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn sweep_skips_edges_without_four_cells() {
        // Every edge of a 2x2x2 volume lies on the boundary.
        let data = [0u8, 0, 0, 0, 0, 0, 0, 255];
        let volume = Volume::new(&data, [2, 2, 2]).unwrap();
        let mut edges = Vec::new();
        visit_crossing_edges(&volume, 128, |e| edges.push(e));
        assert!(edges.is_empty());
    }

    #[test]
    fn sweep_classifies_direction() {
        // A single inside sample in the middle of a 3x3x3 volume.
        let mut data = [0u8; 27];
        data[13] = 255;
        let volume = Volume::new(&data, [3, 3, 3]).unwrap();
        let mut edges = Vec::new();
        visit_crossing_edges(&volume, 128, |e| edges.push(e));

        let center = IVec3::ONE;
        let expected = [
            (IVec3::new(1, 1, 0), 2, true),
            (IVec3::new(1, 0, 1), 1, true),
            (IVec3::new(0, 1, 1), 0, true),
            (center, 0, false),
            (center, 1, false),
            (center, 2, false),
        ]
        .map(|(origin, axis, entering)| CrossingEdge {
            origin,
            axis,
            entering,
        });
        assert_eq!(edges, expected);
    }
}
