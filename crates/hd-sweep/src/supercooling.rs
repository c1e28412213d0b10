//! One-dimensional sweep over extra supercooling.

use hd_core::numeric::linspace;
use hd_thermo::{SaltSpecies, mole_percent_salinity};
use tracing::{debug, trace};

use crate::brine::{BrineState, brine_at, initial_supercooling};
use crate::error::{SweepError, SweepResult};
use crate::mass_balance::WaterPartition;

/// Slack on the [0, 100] % water-yield bounds before a step is dropped.
pub const MWY_TOLERANCE: f64 = 1e-6;

/// One emitted step of a supercooling sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Supercooling beyond the initial brine's own equilibrium [K].
    pub extra_supercooling_k: f64,
    /// Initial plus extra supercooling [K], strictly below `T0`.
    pub total_supercooling_k: f64,
    /// Effective ionic mole fraction of the residual brine.
    pub x: f64,
    /// Strictly negative.
    pub ln_activity: f64,
    /// Maximum achievable salinity [wt%].
    pub mas: f64,
    /// Maximum water yield [%].
    pub mwy: f64,
    /// Residual brine salinity as salt mole percent.
    pub mole_percent_salinity: f64,
    /// Operating temperature `T0 - total` [K].
    pub t_hls_k: f64,
    /// Highest temperature at which the initial brine forms hydrate [K].
    pub t_max_k: f64,
    pub masses: WaterPartition,
}

/// Result of a 1-D sweep. `points` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SupercoolingSweep {
    pub points: Vec<SweepPoint>,
    /// Steps requested.
    pub requested_points: usize,
    /// Steps filtered out as infeasible.
    pub dropped_points: usize,
    /// Reference dissociation temperature at the operating pressure [K].
    pub t0_k: f64,
    /// Effective β [1/K].
    pub beta: f64,
    /// Supercooling of the initial brine [K].
    pub initial_supercooling_k: f64,
    /// Headline MAS: the last emitted point.
    pub mas: f64,
    /// Headline MWY: the last emitted point.
    pub mwy: f64,
    /// Operating temperature of the last emitted point [K].
    pub operating_temperature_k: f64,
}

impl SupercoolingSweep {
    pub fn headline(&self) -> Option<&SweepPoint> {
        self.points.last()
    }

    pub fn mas_max(&self) -> f64 {
        self.points.iter().map(|p| p.mas).fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn mwy_max(&self) -> f64 {
        self.points.iter().map(|p| p.mwy).fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Step extra supercooling across `[low, high]` in `point_count` points.
///
/// Inputs are assumed validated.
pub(crate) fn run(
    salt: SaltSpecies,
    initial_salinity: f64,
    t0_k: f64,
    beta: f64,
    (low, high): (f64, f64),
    point_count: usize,
) -> SweepResult<SupercoolingSweep> {
    let initial_supercooling_k = initial_supercooling(beta, t0_k, salt, initial_salinity);
    let t_max_k = t0_k - initial_supercooling_k;

    let mut points = Vec::with_capacity(point_count);
    for extra in linspace(low, high, point_count) {
        let total = initial_supercooling_k + extra;
        let state = match brine_at(beta, t0_k, total, salt, initial_salinity) {
            Ok(state) => state,
            Err(reason) => {
                trace!(extra, total, ?reason, "dropping sweep step");
                continue;
            }
        };
        let mwy = state.mwy();
        if !mwy.is_finite() || !(-MWY_TOLERANCE..=100.0 + MWY_TOLERANCE).contains(&mwy) {
            trace!(extra, total, mwy, "dropping sweep step with unphysical yield");
            continue;
        }
        points.push(point(extra, total, state, salt, t0_k, t_max_k));
    }

    let dropped_points = point_count - points.len();
    debug!(
        t0_k,
        initial_supercooling_k,
        emitted = points.len(),
        dropped = dropped_points,
        "supercooling sweep finished"
    );

    let Some(last) = points.last().copied() else {
        return Err(SweepError::NoFeasiblePoints {
            requested: point_count,
        });
    };

    Ok(SupercoolingSweep {
        requested_points: point_count,
        dropped_points,
        t0_k,
        beta,
        initial_supercooling_k,
        mas: last.mas,
        mwy: last.mwy,
        operating_temperature_k: last.t_hls_k,
        points,
    })
}

fn point(
    extra: f64,
    total: f64,
    state: BrineState,
    salt: SaltSpecies,
    t0_k: f64,
    t_max_k: f64,
) -> SweepPoint {
    SweepPoint {
        extra_supercooling_k: extra,
        total_supercooling_k: total,
        x: state.x,
        ln_activity: state.ln_activity,
        mas: state.mas,
        mwy: state.mwy(),
        mole_percent_salinity: mole_percent_salinity(state.mas, salt),
        t_hls_k: t0_k - total,
        t_max_k,
        masses: state.partition,
    }
}
