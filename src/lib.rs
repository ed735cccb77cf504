//! Dual Marching Cubes
//!
//! Extracts a quad mesh approximating the iso-surface of a dense `u8` or `u16`
//! sample grid. Every marching cubes surface patch of a cell becomes one vertex,
//! and every grid edge crossing the iso value becomes one quad connecting the
//! vertices of its 4 surrounding cells.
//!
//! ```
//! use dual_marching_cubes::{BuildOptions, DualMarchingCubes, Volume};
//!
//! let mut data = [0u8; 27];
//! data[13] = 255;
//! let volume = Volume::new(&data, [3, 3, 3]).unwrap();
//!
//! let mut dmc = DualMarchingCubes::new();
//! let mesh = dmc.build(&volume, 128, BuildOptions { manifold: true, soup: false });
//! assert_eq!(mesh.positions.len(), 8);
//! assert_eq!(mesh.quads.len(), 6);
//! ```
//!
//! # References
//!
//! - Gregory M. Nielson ["Dual Marching
//!   Cubes"](https://doi.org/10.1109/VISUAL.2004.28), IEEE Visualization 2004
//! - Rephael Wenger "Isosurfaces: Geometry, Topology, and Algorithms", section
//!   3.3.5 (manifold dual marching cubes)
//!
//! # Tables
//!
//! The lookup tables in [`tables`] are generated by [`table_gen`]. To print
//! them again:
//!
//! ```sh
//! cargo run --features gen-tables --bin gen_tables > tables.txt
//! ```

mod dual_mc;
mod dual_point;
mod mesh;
mod volume;

pub mod table_gen;
pub mod tables;

pub use dual_mc::*;
pub use dual_point::*;
pub use mesh::*;
pub use volume::*;
