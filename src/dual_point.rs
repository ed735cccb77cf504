use crate::{
    tables::{
        CellCode, PointCode, DUAL_POINTS_LIST, EDGE_AXIS, EDGE_CORNERS, NOT_PROBLEMATIC,
        PROBLEMATIC_CONFIGS,
    },
    Sample, Volume,
};
use glam::{IVec3, Vec3, Vec3A};
use ilattice::prelude::Extent;

/// Returns the configuration to use for dual point lookup in `cell`.
///
/// With `manifold` set, a C16 or C19 cell whose ambiguous face is shared with
/// another C16 or C19 cell is inverted. This is the manifold dual marching
/// cubes rule from Rephael Wenger's "Isosurfaces: Geometry, Topology, and
/// Algorithms", section 3.3.5. It only depends on the two cells, so cells can
/// be resolved in any order.
pub fn resolve_cell_code<T: Sample>(
    volume: &Volume<T>,
    cell: IVec3,
    iso: T,
    code: CellCode,
    manifold: bool,
) -> CellCode {
    if !manifold {
        return code;
    }

    let direction = PROBLEMATIC_CONFIGS[code as usize];
    if direction == NOT_PROBLEMATIC {
        return code;
    }

    let axis = (direction >> 1) as usize;
    let mut neighbor = cell;
    neighbor[axis] += if direction & 1 == 1 { 1 } else { -1 };
    // Cells on the volume boundary have no partner across the ambiguous face.
    if neighbor[axis] < 0 || neighbor[axis] >= volume.dims()[axis] - 1 {
        return code;
    }

    let neighbor_code = volume.cell_code(neighbor, iso);
    if PROBLEMATIC_CONFIGS[neighbor_code as usize] == NOT_PROBLEMATIC {
        return code;
    }

    log::trace!("inverting cell {cell} (config {code}, neighbor config {neighbor_code})");
    code ^ 0xff
}

/// The dual point of configuration `code` that owns `edge`, or 0 if the edge
/// is not crossed.
#[inline]
pub fn point_code_for_edge(code: CellCode, edge: PointCode) -> PointCode {
    DUAL_POINTS_LIST[code as usize]
        .iter()
        .copied()
        .find(|&point_code| point_code & edge != 0)
        .unwrap_or(0)
}

/// Classifies `cell`, applies the manifold rule and looks up the dual point
/// that owns `edge`.
pub fn dual_point_code<T: Sample>(
    volume: &Volume<T>,
    cell: IVec3,
    iso: T,
    edge: PointCode,
    manifold: bool,
) -> PointCode {
    let code = volume.cell_code(cell, iso);
    let code = resolve_cell_code(volume, cell, iso, code, manifold);
    point_code_for_edge(code, edge)
}

/// Calculates the average of the edge intersections selected by `point_code`
/// (each estimated with linear interpolation), in grid index space.
///
/// An edge whose endpoint samples are equal produces a non-finite coordinate.
/// That cannot happen for edges the cell's configuration actually crosses.
pub fn calculate_dual_point<T: Sample>(
    volume: &Volume<T>,
    cell: IVec3,
    iso: T,
    point_code: PointCode,
) -> Vec3 {
    let corners = Extent::<Vec3A>::from_min_and_lub(Vec3A::ZERO, Vec3A::ONE).corners3();
    let samples = volume.cell_samples(cell).map(Into::<f32>::into);
    let iso: f32 = iso.into();

    let mut estimate = Vec3A::ZERO;
    let mut num_edges = 0;
    for edge in 0..12 {
        if point_code & (1 << edge) == 0 {
            continue;
        }
        let [a, b] = EDGE_CORNERS[edge].map(usize::from);
        let t = (iso - samples[a]) / (samples[b] - samples[a]);
        // Only the edge's own axis is interpolated; the other two coordinates
        // are exactly 0 or 1.
        let mut p = corners[a];
        p[EDGE_AXIS[edge]] += t;
        estimate += p;
        num_edges += 1;
    }

    (cell.as_vec3a() + estimate / num_edges as f32).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::*;
    use approx::assert_relative_eq;

    fn single_corner_volume() -> Vec<u8> {
        vec![0, 0, 0, 0, 0, 0, 0, 255]
    }

    #[test]
    fn edge_lookup_selects_owning_point() {
        // Corners 0 and 7 inside: two separate patches.
        let code = 0b1000_0001;
        assert_eq!(point_code_for_edge(code, EDGE0), EDGE0 | EDGE3 | EDGE8);
        assert_eq!(point_code_for_edge(code, EDGE10), EDGE5 | EDGE6 | EDGE10);
        assert_eq!(point_code_for_edge(code, EDGE4), 0);
    }

    #[test]
    fn single_corner_dual_point() {
        let data = single_corner_volume();
        let volume = Volume::new(&data, [2, 2, 2]).unwrap();
        let code = dual_point_code(&volume, IVec3::ZERO, 128, EDGE6, false);
        assert_eq!(code, EDGE5 | EDGE6 | EDGE10);

        // Each crossing is 128/255 of the way from the outside corner to corner 7.
        let t = 128.0f32 / 255.0;
        let p = calculate_dual_point(&volume, IVec3::ZERO, 128, code);
        let expected = (2.0 + t) / 3.0;
        assert_relative_eq!(p.x, expected, epsilon = 1e-6);
        assert_relative_eq!(p.y, expected, epsilon = 1e-6);
        assert_relative_eq!(p.z, expected, epsilon = 1e-6);
    }

    #[test]
    fn dual_point_is_offset_by_cell() {
        let mut data = vec![0u16; 27];
        // (2, 1, 1) inside; cell (1, 0, 0) sees it at corner 7.
        data[2 + 3 * (1 + 3)] = 1000;
        let volume = Volume::new(&data, [3, 3, 3]).unwrap();
        let cell = IVec3::new(1, 0, 0);
        let code = dual_point_code(&volume, cell, 500, EDGE5, false);
        assert_eq!(code, EDGE5 | EDGE6 | EDGE10);
        let p = calculate_dual_point(&volume, cell, 500, code);
        let expected = (2.0f32 + 0.5) / 3.0;
        assert_relative_eq!(p.x, 1.0 + expected, epsilon = 1e-6);
        assert_relative_eq!(p.y, expected, epsilon = 1e-6);
        assert_relative_eq!(p.z, expected, epsilon = 1e-6);
    }

    #[test]
    fn manifold_rule_is_inert_when_disabled_or_unambiguous() {
        let data = single_corner_volume();
        let volume = Volume::new(&data, [2, 2, 2]).unwrap();
        assert_eq!(resolve_cell_code(&volume, IVec3::ZERO, 128, 199, false), 199);
        assert_eq!(resolve_cell_code(&volume, IVec3::ZERO, 128, 128, true), 128);
        // C16 with its ambiguous face on the volume boundary.
        assert_eq!(resolve_cell_code(&volume, IVec3::ZERO, 128, 199, true), 199);
    }
}
