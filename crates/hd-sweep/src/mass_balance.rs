//! Water partition between residual brine and hydrate under salt conservation.
//!
//! Everything is on a 100 g basis of initial brine, so the salt mass in grams
//! equals the initial salinity in wt%.

/// Mass basis of the initial brine [g].
pub const BASIS_G: f64 = 100.0;

/// Grams of salt and water after hydrate formation has concentrated the brine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterPartition {
    /// Conserved salt mass.
    pub salt_g: f64,
    /// Water initially present.
    pub water_g: f64,
    /// Water left in the brine at the final salinity.
    pub brine_water_g: f64,
    /// Water converted into hydrate.
    pub hydrate_water_g: f64,
}

impl WaterPartition {
    /// Partition for a brine concentrated from `initial_salinity` to `mas` (wt%).
    ///
    /// No clamping: a `mas` below the initial salinity gives negative hydrate water.
    pub fn new(initial_salinity: f64, mas: f64) -> Self {
        let salt_g = initial_salinity;
        let water_g = BASIS_G - initial_salinity;
        let brine_water_g = salt_g * (BASIS_G / mas - 1.0);
        Self {
            salt_g,
            water_g,
            brine_water_g,
            hydrate_water_g: water_g - brine_water_g,
        }
    }

    /// Maximum water yield: percent of the initial water bound in hydrate.
    pub fn mwy(&self) -> f64 {
        100.0 * self.hydrate_water_g / self.water_g
    }
}

/// Shorthand for `WaterPartition::new(initial_salinity, mas).mwy()`.
pub fn max_water_yield(initial_salinity: f64, mas: f64) -> f64 {
    WaterPartition::new(initial_salinity, mas).mwy()
}
