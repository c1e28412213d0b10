//! Operating inputs for a sweep.

use hd_core::numeric::{ensure_finite, ensure_positive};
use hd_fit::FitMethod;
use hd_thermo::{Gas, GasSpecies, SaltSpecies};

use crate::error::{SweepError, SweepResult};

/// Number of supercooling steps in a 1-D sweep unless overridden.
pub const DEFAULT_POINT_COUNT: usize = 50;

/// Model switches shared by both sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelOptions {
    pub fit_method: FitMethod,
    /// Apply the empirical structure-II correction to β.
    pub structure_ii_correction: bool,
}

/// Extra supercooling window [K] stepped by the 1-D sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupercoolingRange {
    pub min_k: f64,
    pub max_k: f64,
}

impl SupercoolingRange {
    pub fn new(min_k: f64, max_k: f64) -> Self {
        Self { min_k, max_k }
    }

    /// Bounds in ascending order.
    pub fn ordered(&self) -> (f64, f64) {
        if self.min_k <= self.max_k {
            (self.min_k, self.max_k)
        } else {
            (self.max_k, self.min_k)
        }
    }
}

impl Default for SupercoolingRange {
    fn default() -> Self {
        Self::new(0.5, 5.0)
    }
}

/// Gas, salt and brine state for a 1-D supercooling sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingCondition {
    pub gas: Gas,
    pub salt: SaltSpecies,
    /// Operating pressure [MPa]. Ignored by fixed-reference gases.
    pub pressure_mpa: f64,
    /// Initial brine salinity [wt%].
    pub initial_salinity: f64,
    pub supercooling: SupercoolingRange,
    pub point_count: usize,
}

impl OperatingCondition {
    pub fn new(
        gas: impl Into<Gas>,
        salt: SaltSpecies,
        pressure_mpa: f64,
        initial_salinity: f64,
    ) -> Self {
        Self {
            gas: gas.into(),
            salt,
            pressure_mpa,
            initial_salinity,
            supercooling: SupercoolingRange::default(),
            point_count: DEFAULT_POINT_COUNT,
        }
    }

    /// Resolve gas and salt from catalog keys.
    pub fn from_keys(
        gas_key: &str,
        salt_key: &str,
        pressure_mpa: f64,
        initial_salinity: f64,
    ) -> SweepResult<Self> {
        let gas: GasSpecies = gas_key.parse()?;
        let salt: SaltSpecies = salt_key.parse()?;
        Ok(Self::new(gas, salt, pressure_mpa, initial_salinity))
    }

    pub fn with_supercooling(mut self, min_k: f64, max_k: f64) -> Self {
        self.supercooling = SupercoolingRange::new(min_k, max_k);
        self
    }

    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    /// Check the inputs and return the ordered supercooling bounds.
    pub fn validate(&self) -> SweepResult<(f64, f64)> {
        validate_pressure(self.pressure_mpa)?;
        validate_initial_salinity(self.initial_salinity)?;
        ensure_finite(self.supercooling.min_k, "supercooling range minimum")?;
        ensure_finite(self.supercooling.max_k, "supercooling range maximum")?;
        if self.point_count < 2 {
            return Err(SweepError::InvalidRange {
                what: "point count must be at least 2",
            });
        }
        Ok(self.supercooling.ordered())
    }
}

pub(crate) fn validate_pressure(pressure_mpa: f64) -> SweepResult<()> {
    ensure_positive(pressure_mpa, "pressure")?;
    Ok(())
}

/// Initial salinity must lie in the open interval (0, 100).
pub(crate) fn validate_initial_salinity(salinity: f64) -> SweepResult<()> {
    ensure_positive(salinity, "initial salinity")?;
    if salinity >= 100.0 {
        return Err(SweepError::InvalidRange {
            what: "initial salinity must be below 100 wt%",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn methane_brine() -> OperatingCondition {
        OperatingCondition::new(GasSpecies::CH4, SaltSpecies::NaCl, 6.65, 8.0)
    }

    #[test]
    fn defaults() {
        let condition = methane_brine();
        assert_eq!(condition.point_count, DEFAULT_POINT_COUNT);
        assert_eq!(condition.validate().unwrap(), (0.5, 5.0));
        let options = ModelOptions::default();
        assert_eq!(options.fit_method, FitMethod::Polynomial);
        assert!(!options.structure_ii_correction);
    }

    #[test]
    fn inverted_range_is_swapped() {
        let condition = methane_brine().with_supercooling(10.0, 1.0);
        assert_eq!(condition.validate().unwrap(), (1.0, 10.0));
    }

    #[test]
    fn rejects_bad_inputs() {
        let cases = [
            methane_brine().with_point_count(1),
            OperatingCondition::new(GasSpecies::CH4, SaltSpecies::NaCl, 0.0, 8.0),
            OperatingCondition::new(GasSpecies::CH4, SaltSpecies::NaCl, f64::NAN, 8.0),
            OperatingCondition::new(GasSpecies::CH4, SaltSpecies::NaCl, 6.65, 0.0),
            OperatingCondition::new(GasSpecies::CH4, SaltSpecies::NaCl, 6.65, 100.0),
            methane_brine().with_supercooling(0.5, f64::INFINITY),
        ];
        for condition in cases {
            assert!(
                matches!(condition.validate(), Err(SweepError::InvalidRange { .. })),
                "{condition:?}"
            );
        }
    }

    #[test]
    fn resolves_keys() {
        let condition = OperatingCondition::from_keys("methane", "cacl2", 6.65, 8.0).unwrap();
        assert_eq!(condition.gas, Gas::Builtin(GasSpecies::CH4));
        assert_eq!(condition.salt, SaltSpecies::CaCl2);

        let err = OperatingCondition::from_keys("H2", "NaCl", 6.65, 8.0).unwrap_err();
        assert_eq!(err, SweepError::UnknownSpecies { key: "H2".into() });
    }
}
