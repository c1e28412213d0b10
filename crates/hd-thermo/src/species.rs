//! Salt and hydrate-former species definitions.

use crate::error::ThermoError;
use std::fmt;

/// Universal HLS β for hydrate formers [1e-3 K⁻¹].
pub const HLS_RAW_BETA: f64 = -1.07;

/// Dissolved salts with a known electrolyte stoichiometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaltSpecies {
    /// Sodium chloride (NaCl), 1:1
    NaCl,
    /// Potassium chloride (KCl), 1:1
    KCl,
    /// Calcium chloride (CaCl₂), 1:2
    CaCl2,
}

impl SaltSpecies {
    pub const ALL: [SaltSpecies; 3] = [SaltSpecies::NaCl, SaltSpecies::KCl, SaltSpecies::CaCl2];

    pub fn key(&self) -> &'static str {
        match self {
            SaltSpecies::NaCl => "NaCl",
            SaltSpecies::KCl => "KCl",
            SaltSpecies::CaCl2 => "CaCl2",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SaltSpecies::NaCl => "Sodium Chloride",
            SaltSpecies::KCl => "Potassium Chloride",
            SaltSpecies::CaCl2 => "Calcium Chloride",
        }
    }

    /// Molar mass [g/mol].
    pub fn molar_mass(&self) -> f64 {
        match self {
            SaltSpecies::NaCl => 58.44,
            SaltSpecies::KCl => 74.55,
            SaltSpecies::CaCl2 => 110.98,
        }
    }

    /// Number of ions released per formula unit on full dissociation.
    pub fn ion_count(&self) -> u8 {
        match self {
            SaltSpecies::NaCl | SaltSpecies::KCl => 2,
            SaltSpecies::CaCl2 => 3,
        }
    }
}

impl std::str::FromStr for SaltSpecies {
    type Err = ThermoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NACL" | "SODIUM CHLORIDE" | "SODIUMCHLORIDE" => Ok(SaltSpecies::NaCl),
            "KCL" | "POTASSIUM CHLORIDE" | "POTASSIUMCHLORIDE" => Ok(SaltSpecies::KCl),
            "CACL2" | "CALCIUM CHLORIDE" | "CALCIUMCHLORIDE" => Ok(SaltSpecies::CaCl2),
            _ => Err(ThermoError::UnknownSpecies {
                kind: "salt",
                key: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SaltSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Crystallographic hydrate structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HydrateStructure {
    /// Structure I (small guests: CH₄, CO₂, C₂H₆)
    SI,
    /// Structure II (larger guests: C₃H₈, cyclopentane)
    SII,
}

impl HydrateStructure {
    pub fn key(&self) -> &'static str {
        match self {
            HydrateStructure::SI => "sI",
            HydrateStructure::SII => "sII",
        }
    }
}

impl std::str::FromStr for HydrateStructure {
    type Err = ThermoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SI" | "I" => Ok(HydrateStructure::SI),
            "SII" | "II" => Ok(HydrateStructure::SII),
            _ => Err(ThermoError::UnknownSpecies {
                kind: "hydrate structure",
                key: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for HydrateStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Built-in hydrate-forming guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GasSpecies {
    /// Methane (CH₄)
    CH4,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Ethane (C₂H₆)
    Ethane,
    /// Propane (C₃H₈)
    Propane,
    /// Cyclopentane (C₅H₁₀), forms at atmospheric pressure
    Cyclopentane,
}

impl GasSpecies {
    pub const ALL: [GasSpecies; 5] = [
        GasSpecies::CH4,
        GasSpecies::CO2,
        GasSpecies::Ethane,
        GasSpecies::Propane,
        GasSpecies::Cyclopentane,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GasSpecies::CH4 => "CH4",
            GasSpecies::CO2 => "CO2",
            GasSpecies::Ethane => "C2H6",
            GasSpecies::Propane => "C3H8",
            GasSpecies::Cyclopentane => "CP",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GasSpecies::CH4 => "Methane",
            GasSpecies::CO2 => "Carbon Dioxide",
            GasSpecies::Ethane => "Ethane",
            GasSpecies::Propane => "Propane",
            GasSpecies::Cyclopentane => "Cyclopentane",
        }
    }

    pub fn structure(&self) -> HydrateStructure {
        match self {
            GasSpecies::CH4 | GasSpecies::CO2 | GasSpecies::Ethane => HydrateStructure::SI,
            GasSpecies::Propane | GasSpecies::Cyclopentane => HydrateStructure::SII,
        }
    }

    /// HLS β coefficient in units of 1e-3 K⁻¹, before any structure correction.
    pub fn raw_beta(&self) -> f64 {
        HLS_RAW_BETA
    }
}

impl std::str::FromStr for GasSpecies {
    type Err = ThermoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CH4" | "METHANE" => Ok(GasSpecies::CH4),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(GasSpecies::CO2),
            "C2H6" | "ETHANE" => Ok(GasSpecies::Ethane),
            "C3H8" | "PROPANE" => Ok(GasSpecies::Propane),
            "CP" | "C5H10" | "CYCLOPENTANE" => Ok(GasSpecies::Cyclopentane),
            _ => Err(ThermoError::UnknownSpecies {
                kind: "gas",
                key: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GasSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
