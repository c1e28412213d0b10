//! Two-dimensional sweep over initial salinity and formation temperature.

use hd_core::numeric::{ensure_finite, ensure_positive, linspace_inclusive};
use hd_thermo::SaltSpecies;
use rayon::prelude::*;
use tracing::debug;

use crate::brine::{brine_at, initial_supercooling};
use crate::error::{SweepError, SweepResult};
use crate::supercooling::MWY_TOLERANCE;

/// Increments of MAS below this are treated as zero when hiding cells.
pub const NEAR_ZERO_DELTA_MAS: f64 = 1e-9;

/// Axes and normalization window for a grid sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub salinity_min: f64,
    pub salinity_max: f64,
    pub salinity_step: f64,
    pub temperature_min_k: f64,
    pub temperature_max_k: f64,
    pub temperature_step_k: f64,
    /// Lower edge of the window on `ΔMAS / (100 - s)`.
    pub mas_window_min: f64,
    /// Upper edge of the window on `ΔMAS / (100 - s)`.
    pub mas_window_max: f64,
    /// Report `None` for cells whose MAS did not increase.
    pub hide_near_zero: bool,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            salinity_min: 0.0,
            salinity_max: 15.0,
            salinity_step: 0.3,
            temperature_min_k: 271.0,
            temperature_max_k: 285.0,
            temperature_step_k: 0.3,
            mas_window_min: 0.0,
            mas_window_max: 1.0,
            hide_near_zero: false,
        }
    }
}

impl GridSpec {
    /// Check bounds and build the salinity and temperature axes.
    pub fn axes(&self) -> SweepResult<(Vec<f64>, Vec<f64>)> {
        ensure_finite(self.salinity_min, "grid salinity minimum")?;
        if self.salinity_min < 0.0 || self.salinity_max >= 100.0 {
            return Err(SweepError::InvalidRange {
                what: "grid salinity must lie in [0, 100) wt%",
            });
        }
        ensure_positive(self.temperature_min_k, "grid temperature minimum")?;
        ensure_finite(self.mas_window_min, "MAS window minimum")?;
        ensure_finite(self.mas_window_max, "MAS window maximum")?;
        if self.mas_window_max <= self.mas_window_min {
            return Err(SweepError::InvalidRange {
                what: "MAS window maximum must exceed its minimum",
            });
        }

        let salinities =
            linspace_inclusive(self.salinity_min, self.salinity_max, self.salinity_step)?;
        let temperatures = linspace_inclusive(
            self.temperature_min_k,
            self.temperature_max_k,
            self.temperature_step_k,
        )?;
        Ok((salinities, temperatures))
    }

    fn normalize(&self, initial_salinity: f64, mas: f64) -> Option<f64> {
        let delta = mas - initial_salinity;
        if self.hide_near_zero && delta < NEAR_ZERO_DELTA_MAS {
            return None;
        }
        let fraction = delta / (100.0 - initial_salinity);
        let span = self.mas_window_max - self.mas_window_min;
        Some(((fraction - self.mas_window_min) / span).clamp(0.0, 1.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapCell {
    pub initial_salinity: f64,
    pub formation_temperature_k: f64,
    /// Water yield [%], clamped to [0, 100].
    pub mwy: f64,
    /// Equal to `initial_salinity` where no hydrate forms.
    pub mas: f64,
    /// Windowed MAS increment in [0, 1]; `None` when hidden.
    pub normalized_delta_mas: Option<f64>,
}

/// Observed extent of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        values.fold(None, |range, v| {
            Some(match range {
                None => FieldRange { min: v, max: v },
                Some(FieldRange { min, max }) => FieldRange {
                    min: min.min(v),
                    max: max.max(v),
                },
            })
        })
    }
}

/// Cells in salinity-major order: row `i` holds `salinities[i]` against
/// every temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    pub salinities: Vec<f64>,
    pub temperatures_k: Vec<f64>,
    pub cells: Vec<HeatmapCell>,
    pub t0_k: f64,
    pub mwy_range: FieldRange,
    /// `None` when every normalized cell is hidden.
    pub normalized_mas_range: Option<FieldRange>,
}

impl HeatmapGrid {
    pub fn cell(&self, salinity_index: usize, temperature_index: usize) -> Option<&HeatmapCell> {
        if temperature_index >= self.temperatures_k.len() {
            return None;
        }
        self.cells
            .get(salinity_index * self.temperatures_k.len() + temperature_index)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[HeatmapCell]> {
        self.cells.chunks(self.temperatures_k.len().max(1))
    }

    /// Cells with a positive water yield.
    pub fn forming_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.mwy > 0.0).count()
    }
}

pub(crate) fn run(
    salt: SaltSpecies,
    t0_k: f64,
    beta: f64,
    spec: &GridSpec,
) -> SweepResult<HeatmapGrid> {
    let (salinities, temperatures_k) = spec.axes()?;

    let rows: Vec<Vec<HeatmapCell>> = salinities
        .par_iter()
        .map(|&s| row(salt, t0_k, beta, spec, s, &temperatures_k))
        .collect();
    let cells: Vec<HeatmapCell> = rows.into_iter().flatten().collect();

    let mwy_range = FieldRange::of(cells.iter().map(|c| c.mwy)).ok_or(SweepError::InvalidRange {
        what: "grid has no cells",
    })?;
    let normalized_mas_range = FieldRange::of(cells.iter().filter_map(|c| c.normalized_delta_mas));

    debug!(
        t0_k,
        salinities = salinities.len(),
        temperatures = temperatures_k.len(),
        mwy_max = mwy_range.max,
        "grid sweep finished"
    );

    Ok(HeatmapGrid {
        salinities,
        temperatures_k,
        cells,
        t0_k,
        mwy_range,
        normalized_mas_range,
    })
}

fn row(
    salt: SaltSpecies,
    t0_k: f64,
    beta: f64,
    spec: &GridSpec,
    initial_salinity: f64,
    temperatures_k: &[f64],
) -> Vec<HeatmapCell> {
    let threshold = initial_supercooling(beta, t0_k, salt, initial_salinity);

    temperatures_k
        .iter()
        .map(|&t| {
            let total = (t0_k - t).max(0.0);
            let (mas, mwy) = if total >= threshold && total < t0_k {
                brine_at(beta, t0_k, total, salt, initial_salinity)
                    .ok()
                    .map(|state| (state.mas, state.mwy()))
                    .filter(|(_, mwy)| {
                        mwy.is_finite() && (-MWY_TOLERANCE..=100.0 + MWY_TOLERANCE).contains(mwy)
                    })
                    .map(|(mas, mwy)| (mas, mwy.clamp(0.0, 100.0)))
                    .unwrap_or((initial_salinity, 0.0))
            } else {
                (initial_salinity, 0.0)
            };

            HeatmapCell {
                initial_salinity,
                formation_temperature_k: t,
                mwy,
                mas,
                normalized_delta_mas: spec.normalize(initial_salinity, mas),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BETA: f64 = -1.07e-3;
    const T0: f64 = 281.6;

    fn small_spec() -> GridSpec {
        GridSpec {
            salinity_min: 2.0,
            salinity_max: 6.0,
            salinity_step: 2.0,
            temperature_min_k: 272.0,
            temperature_max_k: 284.0,
            temperature_step_k: 4.0,
            ..GridSpec::default()
        }
    }

    #[test]
    fn cells_follow_salinity_major_order() {
        let grid = run(SaltSpecies::NaCl, T0, BETA, &small_spec()).unwrap();
        assert_eq!(grid.salinities, vec![2.0, 4.0, 6.0]);
        assert_eq!(grid.temperatures_k, vec![272.0, 276.0, 280.0, 284.0]);
        assert_eq!(grid.cells.len(), 12);

        let mut expected = Vec::new();
        for s in &grid.salinities {
            for t in &grid.temperatures_k {
                expected.push((*s, *t));
            }
        }
        let actual: Vec<(f64, f64)> = grid
            .cells
            .iter()
            .map(|c| (c.initial_salinity, c.formation_temperature_k))
            .collect();
        assert_eq!(actual, expected);
        assert_eq!(grid.cell(1, 2).unwrap().formation_temperature_k, 280.0);
        assert!(grid.cell(0, 4).is_none());
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn above_reference_keeps_initial_salinity() {
        let grid = run(SaltSpecies::NaCl, T0, BETA, &small_spec()).unwrap();
        for row in grid.rows() {
            let warm = row[3];
            assert_eq!(warm.mwy, 0.0);
            assert_eq!(warm.mas, warm.initial_salinity);
            assert_eq!(warm.normalized_delta_mas, Some(0.0));
        }
    }

    #[test]
    fn colder_cells_yield_more() {
        let grid = run(SaltSpecies::NaCl, T0, BETA, &small_spec()).unwrap();
        for row in grid.rows() {
            assert!(row.windows(2).all(|w| w[0].mwy >= w[1].mwy));
            assert!(row[0].mwy > 0.0 && row[0].mwy <= 100.0);
        }
    }

    #[test]
    fn hide_near_zero_suppresses_unchanged_cells() {
        let spec = GridSpec {
            hide_near_zero: true,
            ..small_spec()
        };
        let grid = run(SaltSpecies::NaCl, T0, BETA, &spec).unwrap();
        for cell in &grid.cells {
            if cell.mwy == 0.0 {
                assert_eq!(cell.normalized_delta_mas, None);
            }
        }
        let range = grid.normalized_mas_range.unwrap();
        assert!(range.min >= 0.0 && range.max <= 1.0);
    }

    #[test]
    fn window_normalizes_and_clamps() {
        let spec = GridSpec {
            mas_window_min: 0.0,
            mas_window_max: 0.01,
            ..small_spec()
        };
        assert_eq!(spec.normalize(10.0, 10.0), Some(0.0));
        assert!((spec.normalize(10.0, 10.45).unwrap() - 0.5).abs() < 1e-9);
        assert_eq!(spec.normalize(10.0, 50.0), Some(1.0));
    }

    #[test]
    fn rejects_bad_axes() {
        let bad_window = GridSpec {
            mas_window_min: 0.5,
            mas_window_max: 0.5,
            ..small_spec()
        };
        let bad_step = GridSpec {
            temperature_step_k: 0.0,
            ..small_spec()
        };
        let bad_salinity = GridSpec {
            salinity_max: 100.0,
            ..small_spec()
        };
        for spec in [bad_window, bad_step, bad_salinity] {
            assert!(matches!(
                run(SaltSpecies::NaCl, T0, BETA, &spec),
                Err(SweepError::InvalidRange { .. })
            ));
        }
    }

    #[test]
    fn extreme_cold_falls_back_to_initial_brine() {
        let spec = GridSpec {
            temperature_min_k: 20.0,
            temperature_max_k: 280.0,
            temperature_step_k: 130.0,
            ..small_spec()
        };
        let grid = run(SaltSpecies::NaCl, T0, BETA, &spec).unwrap();
        assert_eq!(grid.temperatures_k, vec![20.0, 150.0, 280.0]);
        for row in grid.rows() {
            let coldest = row[0];
            assert_eq!(coldest.mas, coldest.initial_salinity);
            assert_eq!(coldest.mwy, 0.0);
        }
        assert!(grid.cells.iter().all(|c| c.mas < 100.0));
        assert!(grid.cells.iter().all(|c| (0.0..=100.0).contains(&c.mwy)));
    }
}
