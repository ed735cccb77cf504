//! Prints the dual marching cubes lookup tables as Rust source.

use dual_marching_cubes::table_gen::{
    generate_dual_points_list, problematic_config_orbits, write_tables, C16, C19,
};

fn main() -> std::fmt::Result {
    env_logger::init();

    let dual_points = generate_dual_points_list();
    let num_points: usize = dual_points
        .iter()
        .map(|points| points.iter().filter(|&&p| p != 0).count())
        .sum();
    log::info!("{num_points} dual points over 256 configurations");

    let orbits = problematic_config_orbits();
    let c16 = orbits
        .keys()
        .filter(|&&config| config.count_ones() == C16.count_ones())
        .count();
    let c19 = orbits
        .keys()
        .filter(|&&config| config.count_ones() == C19.count_ones())
        .count();
    log::info!(
        "{} problematic configurations ({c16} C16, {c19} C19 rotations)",
        orbits.len()
    );

    let mut source = String::new();
    write_tables(&mut source)?;
    print!("{source}");
    Ok(())
}
