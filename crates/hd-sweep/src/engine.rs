//! Engine entry points: reference temperature and both sweeps.

use hd_core::numeric::ensure_positive;
use hd_core::units::{Pressure, Temperature, k, to_mpa};
use hd_fit::FitMethod;
use hd_thermo::{Gas, ReferenceData, SaltSpecies, beta_effective};

use crate::cache::{FitCache, fit_reference};
use crate::condition::{ModelOptions, OperatingCondition, validate_pressure};
use crate::error::{SweepError, SweepResult};
use crate::grid::{self, GridSpec, HeatmapGrid};
use crate::supercooling::{self, SupercoolingSweep};

/// Hydrate desalination engine.
///
/// Owns the fit cache; independent engines never share fitted curves.
#[derive(Debug, Default)]
pub struct HydrateEngine {
    fits: FitCache,
}

impl HydrateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit_cache(&self) -> &FitCache {
        &self.fits
    }

    /// Salt-free dissociation temperature `T0` [K] at `pressure_mpa`.
    ///
    /// Fixed-reference gases return their constant and ignore both the
    /// pressure and the fit method. Built-in curves are fitted once per
    /// method; custom curves are refitted on every call.
    pub fn reference_temperature_k(
        &self,
        gas: &Gas,
        pressure_mpa: f64,
        method: FitMethod,
    ) -> SweepResult<f64> {
        let points = match gas.reference() {
            ReferenceData::Fixed { t0_k, .. } => return Ok(t0_k),
            ReferenceData::Curve(points) => points,
        };
        validate_pressure(pressure_mpa)?;

        let t0_k = match gas.builtin() {
            Some(species) => self
                .fits
                .get_or_fit(species, method, points)
                .map_err(|e| SweepError::from_fit(species.key(), e))?
                .eval(pressure_mpa),
            None => fit_reference(method, points)
                .map_err(|e| SweepError::from_fit(&gas.to_string(), e))?
                .eval(pressure_mpa),
        };
        Ok(ensure_positive(t0_k, "reference temperature")?)
    }

    /// Typed form of [`reference_temperature_k`](Self::reference_temperature_k).
    pub fn reference_temperature(
        &self,
        gas: &Gas,
        pressure: Pressure,
        method: FitMethod,
    ) -> SweepResult<Temperature> {
        self.reference_temperature_k(gas, to_mpa(pressure), method)
            .map(k)
    }

    /// 1-D sweep of MAS and MWY over extra supercooling.
    pub fn sweep(
        &self,
        condition: &OperatingCondition,
        options: ModelOptions,
    ) -> SweepResult<SupercoolingSweep> {
        let range = condition.validate()?;
        let t0_k = self.reference_temperature_k(
            &condition.gas,
            condition.pressure_mpa,
            options.fit_method,
        )?;
        let beta = beta_effective(&condition.gas, options.structure_ii_correction);

        supercooling::run(
            condition.salt,
            condition.initial_salinity,
            t0_k,
            beta,
            range,
            condition.point_count,
        )
    }

    /// 2-D sweep over initial salinity and formation temperature.
    pub fn grid(
        &self,
        gas: &Gas,
        salt: SaltSpecies,
        pressure_mpa: f64,
        spec: &GridSpec,
        options: ModelOptions,
    ) -> SweepResult<HeatmapGrid> {
        validate_pressure(pressure_mpa)?;
        let t0_k = self.reference_temperature_k(gas, pressure_mpa, options.fit_method)?;
        let beta = beta_effective(gas, options.structure_ii_correction);
        grid::run(salt, t0_k, beta, spec)
    }
}
