//! Per-engine cache of fitted reference curves.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use hd_fit::{FitMethod, FitModel, FitResult};
use hd_thermo::{GasSpecies, ReferencePoint};
use tracing::debug;

type FitKey = (GasSpecies, FitMethod);

/// Fit `T0(P)` through reference samples.
pub fn fit_reference(method: FitMethod, points: &[ReferencePoint]) -> FitResult<FitModel> {
    let pressures: Vec<f64> = points.iter().map(|p| p.pressure_mpa).collect();
    let temperatures: Vec<f64> = points.iter().map(|p| p.temperature_k).collect();
    FitModel::fit(method, &pressures, &temperatures)
}

/// Lazily populated map from (built-in gas, fit method) to a fitted model.
///
/// Entries are never invalidated. The lock is held while a missing entry is
/// fitted, so concurrent first use fits once.
#[derive(Debug, Default)]
pub struct FitCache {
    models: Mutex<HashMap<FitKey, Arc<FitModel>>>,
}

impl FitCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached model for a built-in gas, fitting `points` on a miss.
    pub fn get_or_fit(
        &self,
        species: GasSpecies,
        method: FitMethod,
        points: &[ReferencePoint],
    ) -> FitResult<Arc<FitModel>> {
        let mut models = self.models.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(model) = models.get(&(species, method)) {
            return Ok(Arc::clone(model));
        }

        debug!(gas = %species, %method, points = points.len(), "fitting reference curve");
        let model = Arc::new(fit_reference(method, points)?);
        models.insert((species, method), Arc::clone(&model));
        Ok(model)
    }

    pub fn len(&self) -> usize {
        self.models.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, species: GasSpecies, method: FitMethod) -> bool {
        self.models
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&(species, method))
    }

    /// Drop every cached model.
    pub fn clear(&self) {
        self.models.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_thermo::ReferenceData;

    fn methane_points() -> &'static [ReferencePoint] {
        match GasSpecies::CH4.reference() {
            ReferenceData::Curve(points) => points,
            ReferenceData::Fixed { .. } => panic!("methane has a curve"),
        }
    }

    #[test]
    fn second_lookup_reuses_model() {
        let cache = FitCache::new();
        assert!(cache.is_empty());

        let first = cache
            .get_or_fit(GasSpecies::CH4, FitMethod::Polynomial, methane_points())
            .unwrap();
        let second = cache
            .get_or_fit(GasSpecies::CH4, FitMethod::Polynomial, &[])
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn methods_are_cached_separately() {
        let cache = FitCache::new();
        for method in FitMethod::ALL {
            cache
                .get_or_fit(GasSpecies::CH4, method, methane_points())
                .unwrap();
        }
        assert_eq!(cache.len(), 2);
        assert!(cache.contains(GasSpecies::CH4, FitMethod::MonotoneSpline));
        cache.clear();
        assert!(!cache.contains(GasSpecies::CH4, FitMethod::Polynomial));
    }

    #[test]
    fn failed_fit_is_not_cached() {
        let cache = FitCache::new();
        assert!(
            cache
                .get_or_fit(GasSpecies::CO2, FitMethod::Polynomial, &[])
                .is_err()
        );
        assert!(cache.is_empty());
    }
}
