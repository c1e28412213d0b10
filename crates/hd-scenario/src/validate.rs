//! Scenario validation logic.

use crate::schema::{GasDef, GridDef, LATEST_VERSION, Scenario, SweepDef};
use hd_fit::FitMethod;
use hd_thermo::{GasSpecies, HydrateStructure, SaltSpecies};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unknown {kind}: {key}")]
    UnknownKey { kind: String, key: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn unknown(kind: &str, key: &str) -> ValidationError {
    ValidationError::UnknownKey {
        kind: kind.to_string(),
        key: key.to_string(),
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive and finite"))
    }
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    validate_gas(&scenario.gas)?;
    scenario
        .salt
        .parse::<SaltSpecies>()
        .map_err(|_| unknown("salt", &scenario.salt))?;
    scenario
        .model
        .fit_method
        .parse::<FitMethod>()
        .map_err(|_| unknown("fit method", &scenario.model.fit_method))?;
    positive("pressure_mpa", scenario.pressure_mpa)?;

    if let Some(sweep) = &scenario.sweep {
        validate_sweep(sweep)?;
    }
    if let Some(grid) = &scenario.grid {
        validate_grid(grid)?;
    }
    Ok(())
}

fn validate_gas(gas: &GasDef) -> Result<(), ValidationError> {
    match gas {
        GasDef::Builtin { key } => {
            key.parse::<GasSpecies>().map_err(|_| unknown("gas", key))?;
        }
        GasDef::Custom {
            name,
            structure,
            raw_beta,
            points,
        } => {
            if name.trim().is_empty() {
                return Err(invalid("gas.name", name, "must not be empty"));
            }
            structure
                .parse::<HydrateStructure>()
                .map_err(|_| unknown("hydrate structure", structure))?;
            finite("gas.raw_beta", *raw_beta)?;
            if points.len() < 2 {
                return Err(invalid(
                    "gas.points",
                    points.len(),
                    "a custom gas needs at least two reference points",
                ));
            }
            for point in points {
                positive("gas.points.temperature_k", point.temperature_k)?;
                positive("gas.points.pressure_mpa", point.pressure_mpa)?;
            }
        }
    }
    Ok(())
}

fn validate_sweep(sweep: &SweepDef) -> Result<(), ValidationError> {
    let s = sweep.initial_salinity;
    if !(s.is_finite() && s > 0.0 && s < 100.0) {
        return Err(invalid("sweep.initial_salinity", s, "must lie in (0, 100) wt%"));
    }
    finite("sweep.supercooling_min_k", sweep.supercooling_min_k)?;
    finite("sweep.supercooling_max_k", sweep.supercooling_max_k)?;
    if sweep.point_count < 2 {
        return Err(invalid("sweep.point_count", sweep.point_count, "must be at least 2"));
    }
    Ok(())
}

fn validate_grid(grid: &GridDef) -> Result<(), ValidationError> {
    finite("grid.salinity_min", grid.salinity_min)?;
    finite("grid.salinity_max", grid.salinity_max)?;
    if grid.salinity_min < 0.0 || grid.salinity_max >= 100.0 {
        return Err(invalid(
            "grid.salinity",
            format!("{}..{}", grid.salinity_min, grid.salinity_max),
            "must lie in [0, 100) wt%",
        ));
    }
    if grid.salinity_max < grid.salinity_min {
        return Err(invalid("grid.salinity_max", grid.salinity_max, "below salinity_min"));
    }
    positive("grid.salinity_step", grid.salinity_step)?;

    positive("grid.temperature_min_k", grid.temperature_min_k)?;
    positive("grid.temperature_max_k", grid.temperature_max_k)?;
    if grid.temperature_max_k < grid.temperature_min_k {
        return Err(invalid(
            "grid.temperature_max_k",
            grid.temperature_max_k,
            "below temperature_min_k",
        ));
    }
    positive("grid.temperature_step_k", grid.temperature_step_k)?;

    finite("grid.mas_window_min", grid.mas_window_min)?;
    finite("grid.mas_window_max", grid.mas_window_max)?;
    if grid.mas_window_max <= grid.mas_window_min {
        return Err(invalid(
            "grid.mas_window_max",
            grid.mas_window_max,
            "must exceed mas_window_min",
        ));
    }
    Ok(())
}
