//! Pure-water dissociation data for the built-in gases.

use crate::gas::{ReferenceData, ReferencePoint};
use crate::species::GasSpecies;
use hd_core::constants::ATMOSPHERE_MPA;

const fn rp(temperature_k: f64, pressure_mpa: f64) -> ReferencePoint {
    ReferencePoint {
        temperature_k,
        pressure_mpa,
    }
}

// Pure-water three-phase (H-Lw-V) equilibrium, ascending in T and P.
const CH4_CURVE: [ReferencePoint; 10] = [
    rp(273.2, 2.65),
    rp(275.2, 3.32),
    rp(277.2, 4.14),
    rp(279.2, 5.13),
    rp(281.2, 6.00),
    rp(283.2, 7.30),
    rp(285.2, 8.90),
    rp(287.2, 10.90),
    rp(289.2, 13.40),
    rp(290.2, 14.90),
];

const CO2_CURVE: [ReferencePoint; 8] = [
    rp(273.7, 1.32),
    rp(275.1, 1.63),
    rp(276.5, 1.98),
    rp(277.6, 2.29),
    rp(279.1, 2.80),
    rp(280.1, 3.20),
    rp(281.5, 3.89),
    rp(282.3, 4.38),
];

const ETHANE_CURVE: [ReferencePoint; 7] = [
    rp(273.7, 0.53),
    rp(275.4, 0.68),
    rp(277.6, 0.92),
    rp(279.6, 1.21),
    rp(281.5, 1.59),
    rp(283.3, 2.05),
    rp(285.8, 2.83),
];

const PROPANE_CURVE: [ReferencePoint; 6] = [
    rp(273.2, 0.172),
    rp(274.3, 0.207),
    rp(275.4, 0.255),
    rp(276.5, 0.321),
    rp(277.7, 0.415),
    rp(278.4, 0.491),
];

/// Cyclopentane hydrate dissociation at atmospheric pressure [K].
pub const CYCLOPENTANE_T0_K: f64 = 280.25;

impl GasSpecies {
    /// Reference dissociation data for this gas in pure water.
    pub fn reference(&self) -> ReferenceData<'static> {
        match self {
            GasSpecies::CH4 => ReferenceData::Curve(&CH4_CURVE),
            GasSpecies::CO2 => ReferenceData::Curve(&CO2_CURVE),
            GasSpecies::Ethane => ReferenceData::Curve(&ETHANE_CURVE),
            GasSpecies::Propane => ReferenceData::Curve(&PROPANE_CURVE),
            GasSpecies::Cyclopentane => ReferenceData::Fixed {
                t0_k: CYCLOPENTANE_T0_K,
                pressure_mpa: ATMOSPHERE_MPA,
            },
        }
    }
}
