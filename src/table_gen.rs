//! Offline generation of [`DUAL_POINTS_LIST`](crate::tables::DUAL_POINTS_LIST)
//! and [`PROBLEMATIC_CONFIGS`](crate::tables::PROBLEMATIC_CONFIGS).
//!
//! # Dual points
//!
//! Each connected component of inside corners (connected along cube edges)
//! bounds one marching cubes surface patch, and so yields one dual point made
//! of every edge leading from the component to an outside corner.
//!
//! For configurations 126, 189, 219 and 231 (two diagonally opposite outside
//! corners) this merges two separate marching cubes patches into one. The
//! inverted configurations have exactly the right patches, so they are used
//! instead. An exhaustive check (every dual point's edges must be connected
//! through shared cube faces) confirms these are the only such configurations.
//!
//! # Problematic configurations
//!
//! G. Nielson's C16 and C19 configurations (and their rotations) each have one
//! ambiguous face. Where two of them share it, plain dual marching cubes
//! produces a non-manifold edge. The table records the direction of that face
//! for every rotation of either configuration, found by rotating the two
//! representatives through the cube's 24 rotations.

use crate::{
    tables::{CellCode, PointCode, CORNER_EDGES, NOT_PROBLEMATIC},
    volume::corner_offset,
};
use glam::IVec3;
use std::collections::BTreeMap;
use std::fmt::{self, Write};

/// Configurations replaced by their inverse before searching for components.
pub const INVERTED_CONFIGS: [CellCode; 4] = [126, 189, 219, 231];

/// Corners 0, 1, 2, 6 and 7 inside. Ambiguous face towards +X.
pub const C16: CellCode = 0b1100_0111;
/// Corners 0, 1, 2, 4, 6 and 7 inside. Ambiguous face towards +X.
pub const C19: CellCode = 0b1101_0111;

/// A unit cube corner, as the Morton code of its coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerCode(u8);

impl CornerCode {
    pub const ALL: [Self; 8] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    #[inline]
    pub fn code(self) -> u8 {
        self.0
    }

    /// The bit of this corner in a [`CellCode`].
    #[inline]
    pub fn mask(self) -> CellCode {
        1 << self.0
    }

    /// The corner sharing a cube edge along `axis`.
    #[inline]
    pub fn neighbor(self, axis: usize) -> Self {
        Self(self.0 ^ (1 << axis))
    }

    #[inline]
    pub fn coords(self) -> IVec3 {
        corner_offset(self.0)
    }

    #[inline]
    pub fn from_coords(p: IVec3) -> Self {
        Self((p.x | (p.y << 1) | (p.z << 2)) as u8)
    }

    /// Rotates the corner by 90 degrees about the cube center.
    pub fn rotated(self, axis: Axis) -> Self {
        let centered = 2 * self.coords() - IVec3::ONE;
        Self::from_coords((axis.rotate(centered) + IVec3::ONE) / 2)
    }
}

/// Dual points of one configuration, zero-padded.
pub fn dual_points_for_config(config: CellCode) -> [PointCode; 4] {
    if config == 0 || config == 0xff {
        return [0; 4];
    }

    if INVERTED_CONFIGS.contains(&config) {
        corner_components(!config)
    } else {
        corner_components(config)
    }
}

/// One point code per edge-connected component of the corners in `inside`,
/// made of the edges leaving the component.
pub fn corner_components(inside: CellCode) -> [PointCode; 4] {
    let mut points = [0; 4];
    let mut processed: CellCode = 0;
    let mut stack = Vec::with_capacity(8);
    let mut num_points = 0;
    for start in CornerCode::ALL {
        if processed & start.mask() != 0 || inside & start.mask() == 0 {
            continue;
        }

        // Flood fill the inside corners reachable from `start`.
        let mut connected = start.mask();
        let mut point_code = 0;
        stack.push(start);
        while let Some(corner) = stack.pop() {
            for axis in 0..3 {
                let neighbor = corner.neighbor(axis);
                if inside & neighbor.mask() == 0 {
                    point_code |= CORNER_EDGES[corner.code() as usize][axis];
                } else if connected & neighbor.mask() == 0 {
                    connected |= neighbor.mask();
                    stack.push(neighbor);
                }
            }
        }
        processed |= connected;

        // A cube has at most 4 corners that are pairwise not adjacent.
        points[num_points] = point_code;
        num_points += 1;
    }

    points
}

pub fn generate_dual_points_list() -> [[PointCode; 4]; 256] {
    std::array::from_fn(|config| dual_points_for_config(config as CellCode))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// 90 degree rotation about this axis (counter-clockwise looking down the
    /// axis towards the origin).
    #[inline]
    pub fn rotate(self, v: IVec3) -> IVec3 {
        match self {
            Self::X => IVec3::new(v.x, -v.z, v.y),
            Self::Y => IVec3::new(v.z, v.y, -v.x),
            Self::Z => IVec3::new(-v.y, v.x, v.z),
        }
    }
}

/// One of the 6 cube face directions, encoded as `axis * 2 + sign` where sign
/// is 1 for the positive direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FaceDirection(pub u8);

impl FaceDirection {
    pub const NEG_X: Self = Self(0);
    pub const POS_X: Self = Self(1);
    pub const NEG_Y: Self = Self(2);
    pub const POS_Y: Self = Self(3);
    pub const NEG_Z: Self = Self(4);
    pub const POS_Z: Self = Self(5);

    pub fn new(axis: usize, positive: bool) -> Self {
        Self(axis as u8 * 2 + positive as u8)
    }

    pub fn axis(self) -> usize {
        (self.0 >> 1) as usize
    }

    pub fn is_positive(self) -> bool {
        self.0 & 1 == 1
    }

    pub fn to_vector(self) -> IVec3 {
        let mut v = IVec3::ZERO;
        v[self.axis()] = if self.is_positive() { 1 } else { -1 };
        v
    }

    pub fn from_vector(v: IVec3) -> Self {
        let axis = (0..3).find(|&a| v[a] != 0).unwrap_or(0);
        Self::new(axis, v[axis] > 0)
    }

    pub fn rotated(self, axis: Axis) -> Self {
        Self::from_vector(axis.rotate(self.to_vector()))
    }

    /// The 4 corners on this face, ordered by their code.
    pub fn corners(self) -> [CornerCode; 4] {
        let mut corners = [CornerCode(0); 4];
        let on_face = CornerCode::ALL
            .into_iter()
            .filter(|c| (c.code() >> self.axis()) & 1 == self.is_positive() as u8);
        for (slot, corner) in corners.iter_mut().zip(on_face) {
            *slot = corner;
        }
        corners
    }
}

/// Rotates a whole configuration by 90 degrees about `axis`.
pub fn rotate_config(config: CellCode, axis: Axis) -> CellCode {
    CornerCode::ALL
        .into_iter()
        .filter(|c| config & c.mask() != 0)
        .fold(0, |rotated, c| rotated | c.rotated(axis).mask())
}

/// Faces whose inside corners are exactly one of the two diagonals.
pub fn ambiguous_faces(config: CellCode) -> Vec<FaceDirection> {
    (0..6)
        .map(FaceDirection)
        .filter(|face| {
            // Ordered by code, diagonal corners are (0, 3) and (1, 2).
            let [a, b, c, d] = face.corners().map(|corner| config & corner.mask() != 0);
            a == d && b == c && a != b
        })
        .collect()
}

/// Moves taking the ambiguous face from one direction to the next (+X, +Y,
/// -X, -Y, -Z, +Z), each paired with the axis that spins the configuration
/// about that face.
const ORBIT_SCRIPT: [(&[Axis], Axis); 6] = [
    (&[], Axis::X),
    (&[Axis::Z], Axis::Y),
    (&[Axis::Z], Axis::X),
    (&[Axis::Z], Axis::Y),
    (&[Axis::X], Axis::Z),
    (&[Axis::X, Axis::X], Axis::Z),
];

/// Records every rotation of `config`, which must have its single ambiguous
/// face towards +X, with the direction that face ends up in.
pub fn explore_config_rotations(
    config: CellCode,
    problematic: &mut BTreeMap<CellCode, FaceDirection>,
) {
    debug_assert_eq!(ambiguous_faces(config), vec![FaceDirection::POS_X]);

    let mut config = config;
    let mut face = FaceDirection::POS_X;
    for (moves, spin) in ORBIT_SCRIPT {
        for &axis in moves {
            config = rotate_config(config, axis);
            face = face.rotated(axis);
        }
        let mut spun = config;
        for _ in 0..4 {
            spun = rotate_config(spun, spin);
            problematic.insert(spun, face);
        }
    }
}

/// The rotation orbits of [`C16`] and [`C19`].
pub fn problematic_config_orbits() -> BTreeMap<CellCode, FaceDirection> {
    let mut problematic = BTreeMap::new();
    explore_config_rotations(C16, &mut problematic);
    explore_config_rotations(C19, &mut problematic);
    problematic
}

pub fn generate_problematic_configs() -> [u8; 256] {
    let mut table = [NOT_PROBLEMATIC; 256];
    for (config, face) in problematic_config_orbits() {
        table[config as usize] = face.0;
    }
    table
}

/// Writes `table` as the Rust definition of `DUAL_POINTS_LIST`.
pub fn write_dual_points_list(
    out: &mut impl Write,
    table: &[[PointCode; 4]; 256],
) -> fmt::Result {
    writeln!(out, "#[rustfmt::skip]")?;
    writeln!(out, "pub const DUAL_POINTS_LIST: [[u16; 4]; 256] = [")?;
    for (config, points) in table.iter().enumerate() {
        write!(out, "    [")?;
        for (i, &point_code) in points.iter().enumerate() {
            if i > 0 {
                write!(out, ", ")?;
            }
            if point_code == 0 {
                write!(out, "0")?;
                continue;
            }
            let mut first = true;
            for edge in (0..12).filter(|&e| point_code & (1 << e) != 0) {
                if !first {
                    write!(out, " | ")?;
                }
                write!(out, "EDGE{edge}")?;
                first = false;
            }
        }
        writeln!(out, "], // {config}")?;
    }
    writeln!(out, "];")
}

/// Writes `table` as the Rust definition of `PROBLEMATIC_CONFIGS`.
pub fn write_problematic_configs(out: &mut impl Write, table: &[u8; 256]) -> fmt::Result {
    writeln!(out, "#[rustfmt::skip]")?;
    writeln!(out, "pub const PROBLEMATIC_CONFIGS: [u8; 256] = [")?;
    for row in table.chunks(16) {
        let row: Vec<String> = row.iter().map(u8::to_string).collect();
        writeln!(out, "    {},", row.join(", "))?;
    }
    writeln!(out, "];")
}

/// Generates both tables and renders them as Rust source.
pub fn write_tables(out: &mut impl Write) -> fmt::Result {
    writeln!(
        out,
        "/// Up to four dual points per cell configuration, one per marching cubes"
    )?;
    writeln!(out, "/// surface patch. Unused slots are zero.")?;
    write_dual_points_list(out, &generate_dual_points_list())?;
    writeln!(out)?;
    writeln!(
        out,
        "/// For C16 and C19 configurations (and their rotations), the direction of the"
    )?;
    writeln!(
        out,
        "/// single ambiguous face as `axis * 2 + sign` with sign 1 for the positive side."
    )?;
    writeln!(out, "/// [`NOT_PROBLEMATIC`] otherwise.")?;
    write_problematic_configs(out, &generate_problematic_configs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::*;

    const TABLES_SOURCE: &str = include_str!("tables.rs");

    #[test]
    fn regenerated_tables_match_compiled_tables() {
        assert_eq!(generate_dual_points_list(), DUAL_POINTS_LIST);
        assert_eq!(generate_problematic_configs(), PROBLEMATIC_CONFIGS);

        let mut source = String::new();
        write_tables(&mut source).unwrap();
        assert!(TABLES_SOURCE.contains(&source));
    }

    #[test]
    fn dual_points_partition_crossing_edges() {
        for config in 0..=255u8 {
            let points = DUAL_POINTS_LIST[config as usize];
            let num_points = points.iter().take_while(|&&p| p != 0).count();
            assert!(points[num_points..].iter().all(|&p| p == 0));

            let mut union = 0;
            for &p in &points[..num_points] {
                assert_eq!(p & !ALL_EDGES, 0);
                assert_eq!(union & p, 0, "config {config} reuses an edge");
                union |= p;
            }

            let crossing = (0..12)
                .filter(|&e| {
                    let [a, b] = EDGE_CORNERS[e];
                    (config >> a) & 1 != (config >> b) & 1
                })
                .fold(0, |mask, e| mask | (1 << e));
            assert_eq!(union, crossing, "config {config}");
        }

        assert_eq!(DUAL_POINTS_LIST[0], [0; 4]);
        assert_eq!(DUAL_POINTS_LIST[255], [0; 4]);
    }

    /// True if the edges of `point_code` form one piece when edges on a common
    /// cube face are considered connected.
    fn is_single_patch(point_code: PointCode) -> bool {
        let faces_of = |edge: usize| {
            let [a, b] = EDGE_CORNERS[edge];
            (0..3)
                .filter(|&axis| (a >> axis) & 1 == (b >> axis) & 1)
                .map(|axis| FaceDirection::new(axis, (a >> axis) & 1 == 1))
                .collect::<Vec<_>>()
        };
        let edges: Vec<usize> = (0..12).filter(|&e| point_code & (1 << e) != 0).collect();
        let mut reached = vec![edges[0]];
        let mut stack = vec![edges[0]];
        while let Some(e) = stack.pop() {
            for &other in &edges {
                let shares_face = faces_of(e).iter().any(|f| faces_of(other).contains(f));
                if !reached.contains(&other) && shares_face {
                    reached.push(other);
                    stack.push(other);
                }
            }
        }
        reached.len() == edges.len()
    }

    #[test]
    fn only_the_listed_configurations_need_inversion() {
        for config in 1..=254u8 {
            let points = DUAL_POINTS_LIST[config as usize];
            assert!(
                points.iter().filter(|&&p| p != 0).all(|&p| is_single_patch(p)),
                "config {config}"
            );

            // Without the inversion exactly the listed configurations break.
            let naive_ok = corner_components(config)
                .iter()
                .filter(|&&p| p != 0)
                .all(|&p| is_single_patch(p));
            assert_eq!(naive_ok, !INVERTED_CONFIGS.contains(&config), "config {config}");
        }
    }

    #[test]
    fn rotations_match_reference_bit_permutations() {
        const C0: u8 = 1;
        const C1: u8 = 2;
        const C2: u8 = 4;
        const C3: u8 = 8;
        const C4: u8 = 16;
        const C5: u8 = 32;
        const C6: u8 = 64;
        const C7: u8 = 128;
        for c in 0..=255u8 {
            let rot_x = ((c & (C0 | C1)) << 2)
                | ((c & (C2 | C3)) << 4)
                | ((c & (C4 | C5)) >> 4)
                | ((c & (C6 | C7)) >> 2);
            let rot_y = ((c & (C0 | C2)) << 4)
                | ((c & (C1 | C3)) >> 1)
                | ((c & (C4 | C6)) << 1)
                | ((c & (C5 | C7)) >> 4);
            let rot_z = ((c & (C0 | C4)) << 1)
                | ((c & (C1 | C5)) << 2)
                | ((c & (C2 | C6)) >> 2)
                | ((c & (C3 | C7)) >> 1);
            assert_eq!(rotate_config(c, Axis::X), rot_x);
            assert_eq!(rotate_config(c, Axis::Y), rot_y);
            assert_eq!(rotate_config(c, Axis::Z), rot_z);
        }
    }

    #[test]
    fn face_direction_rotations() {
        use FaceDirection as F;
        let x = [F::NEG_X, F::POS_X, F::NEG_Z, F::POS_Z, F::POS_Y, F::NEG_Y];
        let y = [F::POS_Z, F::NEG_Z, F::NEG_Y, F::POS_Y, F::NEG_X, F::POS_X];
        let z = [F::NEG_Y, F::POS_Y, F::POS_X, F::NEG_X, F::NEG_Z, F::POS_Z];
        for face in 0..6 {
            assert_eq!(F(face).rotated(Axis::X), x[face as usize]);
            assert_eq!(F(face).rotated(Axis::Y), y[face as usize]);
            assert_eq!(F(face).rotated(Axis::Z), z[face as usize]);
        }
    }

    #[test]
    fn problematic_configs_are_the_two_orbits() {
        let orbits = problematic_config_orbits();
        // C19 is symmetric under a half turn about its ambiguous face.
        assert_eq!(orbits.len(), 24 + 12);

        for (config, face) in (0..=255u8).zip(PROBLEMATIC_CONFIGS) {
            if face == NOT_PROBLEMATIC {
                assert!(!orbits.contains_key(&config));
                continue;
            }
            assert_eq!(ambiguous_faces(config), vec![FaceDirection(face)]);
            assert!(matches!(config.count_ones(), 5 | 6));

            // Closed under rotation, with the face rotating along.
            for axis in [Axis::X, Axis::Y, Axis::Z] {
                let rotated = rotate_config(config, axis);
                assert_eq!(
                    PROBLEMATIC_CONFIGS[rotated as usize],
                    FaceDirection(face).rotated(axis).0
                );
            }
        }

        assert_eq!(PROBLEMATIC_CONFIGS[C16 as usize], FaceDirection::POS_X.0);
        assert_eq!(PROBLEMATIC_CONFIGS[C19 as usize], FaceDirection::POS_X.0);
    }
}
