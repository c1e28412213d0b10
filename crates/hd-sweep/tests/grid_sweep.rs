//! Salinity by formation-temperature grid for methane over NaCl brine.

use hd_sweep::brine::initial_supercooling;
use hd_sweep::{GridSpec, HydrateEngine, ModelOptions};
use hd_thermo::{Gas, GasSpecies, SaltSpecies, beta_effective};

fn methane_grid() -> hd_sweep::HeatmapGrid {
    let engine = HydrateEngine::new();
    engine
        .grid(
            &Gas::Builtin(GasSpecies::CH4),
            SaltSpecies::NaCl,
            6.65,
            &GridSpec::default(),
            ModelOptions::default(),
        )
        .expect("grid should succeed")
}

#[test]
fn axes_are_inclusive() {
    let grid = methane_grid();
    assert_eq!(grid.salinities.len(), 51);
    assert_eq!(grid.salinities[0], 0.0);
    assert_eq!(grid.salinities[50], 15.0);
    assert_eq!(grid.temperatures_k.len(), 47);
    assert_eq!(grid.temperatures_k[0], 271.0);
    assert_eq!(grid.cells.len(), 51 * 47);
}

#[test]
fn warm_cells_yield_nothing() {
    let grid = methane_grid();
    for cell in &grid.cells {
        if cell.formation_temperature_k >= grid.t0_k {
            assert_eq!(cell.mwy, 0.0);
            assert_eq!(cell.mas, cell.initial_salinity);
        }
    }
}

#[test]
fn cells_above_brine_equilibrium_yield_nothing() {
    let grid = methane_grid();
    let beta = beta_effective(&Gas::Builtin(GasSpecies::CH4), false);
    let mut checked = 0;
    for cell in &grid.cells {
        let threshold =
            initial_supercooling(beta, grid.t0_k, SaltSpecies::NaCl, cell.initial_salinity);
        let t = cell.formation_temperature_k;
        if t > grid.t0_k - threshold && t < grid.t0_k {
            assert_eq!(cell.mwy, 0.0, "s = {}, T = {t}", cell.initial_salinity);
            assert_eq!(cell.mas, cell.initial_salinity);
            checked += 1;
        }
    }
    // 15 wt% brine sits several kelvin below T0, so the band is populated
    assert!(checked > 10, "only {checked} cells between brine and pure-water equilibrium");
}

#[test]
fn coldest_cells_approach_but_never_exceed_full_yield() {
    let grid = methane_grid();
    assert!(grid.cells.iter().all(|c| (0.0..=100.0).contains(&c.mwy)));
    assert!(grid.mwy_range.max <= 100.0);
    assert!(grid.mwy_range.max > 95.0, "max MWY = {}", grid.mwy_range.max);
    assert_eq!(grid.mwy_range.min, 0.0);

    // Low salinity, coldest temperature
    let cold = grid.cell(1, 0).unwrap();
    assert!(cold.mwy > 90.0 && cold.mwy <= 100.0);
}

#[test]
fn yield_falls_with_salinity_at_fixed_temperature() {
    let grid = methane_grid();
    let column: Vec<f64> = (1..grid.salinities.len())
        .map(|i| grid.cell(i, 0).unwrap().mwy)
        .collect();
    assert!(column.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn normalized_field_stays_in_unit_interval() {
    let grid = methane_grid();
    let range = grid.normalized_mas_range.unwrap();
    assert!(range.min >= 0.0 && range.max <= 1.0);
    assert!(
        grid.cells
            .iter()
            .filter_map(|c| c.normalized_delta_mas)
            .all(|v| (0.0..=1.0).contains(&v))
    );
}
