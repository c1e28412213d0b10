//! Scenario to engine input conversion.

use hd_fit::FitMethod;
use hd_sweep::{GridSpec, ModelOptions, OperatingCondition, SweepError};
use hd_thermo::{CustomGas, Gas, GasSpecies, HydrateStructure, ReferencePoint, SaltSpecies};

use crate::ScenarioResult;
use crate::schema::{GasDef, GridDef, Scenario, SweepDef};
use crate::validate::ValidationError;

impl GasDef {
    pub fn to_gas(&self) -> ScenarioResult<Gas> {
        match self {
            GasDef::Builtin { key } => {
                let species = key.parse::<GasSpecies>().map_err(SweepError::from)?;
                Ok(Gas::Builtin(species))
            }
            GasDef::Custom {
                name,
                structure,
                raw_beta,
                points,
            } => {
                let structure = structure
                    .parse::<HydrateStructure>()
                    .map_err(SweepError::from)?;
                let points = points
                    .iter()
                    .map(|p| ReferencePoint {
                        temperature_k: p.temperature_k,
                        pressure_mpa: p.pressure_mpa,
                    })
                    .collect();
                let custom = CustomGas::new(name.clone(), structure, *raw_beta, points)
                    .map_err(SweepError::from)?;
                Ok(Gas::Custom(custom))
            }
        }
    }
}

impl SweepDef {
    fn apply(&self, condition: OperatingCondition) -> OperatingCondition {
        condition
            .with_supercooling(self.supercooling_min_k, self.supercooling_max_k)
            .with_point_count(self.point_count)
    }
}

impl From<&GridDef> for GridSpec {
    fn from(grid: &GridDef) -> Self {
        GridSpec {
            salinity_min: grid.salinity_min,
            salinity_max: grid.salinity_max,
            salinity_step: grid.salinity_step,
            temperature_min_k: grid.temperature_min_k,
            temperature_max_k: grid.temperature_max_k,
            temperature_step_k: grid.temperature_step_k,
            mas_window_min: grid.mas_window_min,
            mas_window_max: grid.mas_window_max,
            hide_near_zero: grid.hide_near_zero,
        }
    }
}

impl Scenario {
    pub fn gas(&self) -> ScenarioResult<Gas> {
        self.gas.to_gas()
    }

    pub fn salt(&self) -> ScenarioResult<SaltSpecies> {
        let salt = self.salt.parse::<SaltSpecies>().map_err(SweepError::from)?;
        Ok(salt)
    }

    pub fn model_options(&self) -> ScenarioResult<ModelOptions> {
        let fit_method = self
            .model
            .fit_method
            .parse::<FitMethod>()
            .map_err(|_| ValidationError::UnknownKey {
                kind: "fit method".to_string(),
                key: self.model.fit_method.clone(),
            })?;
        Ok(ModelOptions {
            fit_method,
            structure_ii_correction: self.model.structure_ii_correction,
        })
    }

    /// Engine input for the 1-D sweep block, if present.
    pub fn operating_condition(&self) -> ScenarioResult<Option<OperatingCondition>> {
        let Some(sweep) = &self.sweep else {
            return Ok(None);
        };
        let condition = OperatingCondition::new(
            self.gas()?,
            self.salt()?,
            self.pressure_mpa,
            sweep.initial_salinity,
        );
        Ok(Some(sweep.apply(condition)))
    }

    pub fn grid_spec(&self) -> Option<GridSpec> {
        self.grid.as_ref().map(GridSpec::from)
    }
}
