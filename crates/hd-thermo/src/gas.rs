//! Hydrate-former definitions: built-in catalog gases and user-defined gases.

use crate::error::ThermoResult;
use crate::species::{GasSpecies, HydrateStructure};
use hd_core::numeric::{ensure_finite, ensure_positive};
use std::fmt;

/// One pure-water dissociation sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    /// Dissociation temperature [K]
    pub temperature_k: f64,
    /// Dissociation pressure [MPa]
    pub pressure_mpa: f64,
}

/// Where a gas gets its salt-free dissociation temperature from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceData<'a> {
    /// Discrete (T0, P) samples to be fitted.
    Curve(&'a [ReferencePoint]),
    /// A single constant T0 at a nominal pressure; no fit is performed.
    Fixed { t0_k: f64, pressure_mpa: f64 },
}

/// A hydrate former supplied at call time rather than taken from the catalog.
///
/// Its points are refitted on every use since they may change between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomGas {
    pub name: String,
    pub structure: HydrateStructure,
    /// β in units of 1e-3 K⁻¹
    pub raw_beta: f64,
    pub points: Vec<ReferencePoint>,
}

impl CustomGas {
    /// Create a custom gas, checking that every number is usable.
    ///
    /// An empty point list is accepted here; fitting it reports missing data.
    pub fn new(
        name: impl Into<String>,
        structure: HydrateStructure,
        raw_beta: f64,
        points: Vec<ReferencePoint>,
    ) -> ThermoResult<Self> {
        ensure_finite(raw_beta, "custom gas beta")?;
        for point in &points {
            ensure_positive(point.temperature_k, "custom gas reference temperature")?;
            ensure_positive(point.pressure_mpa, "custom gas reference pressure")?;
        }

        Ok(Self {
            name: name.into(),
            structure,
            raw_beta,
            points,
        })
    }
}

/// Gas selection for a calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum Gas {
    Builtin(GasSpecies),
    Custom(CustomGas),
}

impl Gas {
    pub fn structure(&self) -> HydrateStructure {
        match self {
            Gas::Builtin(species) => species.structure(),
            Gas::Custom(custom) => custom.structure,
        }
    }

    pub fn raw_beta(&self) -> f64 {
        match self {
            Gas::Builtin(species) => species.raw_beta(),
            Gas::Custom(custom) => custom.raw_beta,
        }
    }

    pub fn reference(&self) -> ReferenceData<'_> {
        match self {
            Gas::Builtin(species) => species.reference(),
            Gas::Custom(custom) => ReferenceData::Curve(&custom.points),
        }
    }

    /// Catalog species, if this is a built-in gas.
    pub fn builtin(&self) -> Option<GasSpecies> {
        match self {
            Gas::Builtin(species) => Some(*species),
            Gas::Custom(_) => None,
        }
    }
}

impl From<GasSpecies> for Gas {
    fn from(species: GasSpecies) -> Self {
        Gas::Builtin(species)
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gas::Builtin(species) => write!(f, "{}", species.key()),
            Gas::Custom(custom) => write!(f, "custom:{}", custom.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThermoError;

    fn point(t: f64, p: f64) -> ReferencePoint {
        ReferencePoint {
            temperature_k: t,
            pressure_mpa: p,
        }
    }

    #[test]
    fn custom_gas_exposes_its_own_curve() {
        let custom = CustomGas::new(
            "lab-mix",
            HydrateStructure::SII,
            -1.0,
            vec![point(275.0, 1.0), point(280.0, 2.0)],
        )
        .unwrap();
        let gas = Gas::Custom(custom);

        assert_eq!(gas.structure(), HydrateStructure::SII);
        assert_eq!(gas.raw_beta(), -1.0);
        assert!(gas.builtin().is_none());
        match gas.reference() {
            ReferenceData::Curve(points) => assert_eq!(points.len(), 2),
            ReferenceData::Fixed { .. } => panic!("custom gas should carry a curve"),
        }
        assert_eq!(gas.to_string(), "custom:lab-mix");
    }

    #[test]
    fn custom_gas_rejects_bad_numbers() {
        let result = CustomGas::new(
            "bad",
            HydrateStructure::SI,
            f64::NAN,
            vec![point(275.0, 1.0)],
        );
        assert!(matches!(result, Err(ThermoError::Core(_))));

        let result = CustomGas::new(
            "bad",
            HydrateStructure::SI,
            -1.07,
            vec![point(275.0, -1.0)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn builtin_conversion() {
        let gas: Gas = GasSpecies::CH4.into();
        assert_eq!(gas.builtin(), Some(GasSpecies::CH4));
        assert_eq!(gas.to_string(), "CH4");
    }
}
