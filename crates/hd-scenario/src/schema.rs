//! Scenario file schema.

use serde::{Deserialize, Serialize};

/// Current scenario file version.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub gas: GasDef,
    /// Salt key, e.g. `NaCl`.
    pub salt: String,
    /// Operating pressure [MPa].
    pub pressure_mpa: f64,
    #[serde(default)]
    pub model: ModelDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SweepDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum GasDef {
    Builtin {
        key: String,
    },
    Custom {
        name: String,
        /// `sI` or `sII`.
        structure: String,
        /// β in 1e-3 K⁻¹.
        #[serde(default = "default_raw_beta")]
        raw_beta: f64,
        #[serde(default)]
        points: Vec<ReferencePointDef>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReferencePointDef {
    pub temperature_k: f64,
    pub pressure_mpa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDef {
    #[serde(default = "default_fit_method")]
    pub fit_method: String,
    #[serde(default)]
    pub structure_ii_correction: bool,
}

impl Default for ModelDef {
    fn default() -> Self {
        Self {
            fit_method: default_fit_method(),
            structure_ii_correction: false,
        }
    }
}

/// 1-D supercooling sweep block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    /// Initial salinity [wt%].
    pub initial_salinity: f64,
    pub supercooling_min_k: f64,
    pub supercooling_max_k: f64,
    #[serde(default = "default_sweep_points")]
    pub point_count: usize,
}

/// 2-D salinity by temperature grid block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    pub salinity_min: f64,
    pub salinity_max: f64,
    pub salinity_step: f64,
    pub temperature_min_k: f64,
    pub temperature_max_k: f64,
    pub temperature_step_k: f64,
    #[serde(default)]
    pub mas_window_min: f64,
    #[serde(default = "default_mas_window_max")]
    pub mas_window_max: f64,
    #[serde(default)]
    pub hide_near_zero: bool,
}

fn default_raw_beta() -> f64 {
    hd_thermo::species::HLS_RAW_BETA
}

fn default_fit_method() -> String {
    "polynomial".to_string()
}

fn default_sweep_points() -> usize {
    hd_sweep::DEFAULT_POINT_COUNT
}

fn default_mas_window_max() -> f64 {
    1.0
}
