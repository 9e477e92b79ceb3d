//! Cost estimation for points of interest.
//!
//! There is no real pricing data behind the catalog yet. The production
//! estimator draws a random amount per call, so the same place can be
//! priced differently within one planning run.

use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;

use crate::domain::PointOfInterest;

/// Assigns an estimated visit cost to a place.
pub trait CostEstimator {
    /// Estimated cost of visiting `place`. Never negative.
    fn estimate(&self, place: &PointOfInterest) -> f64;
}

impl<T: CostEstimator + ?Sized> CostEstimator for Arc<T> {
    fn estimate(&self, place: &PointOfInterest) -> f64 {
        (**self).estimate(place)
    }
}

/// Uniformly random whole-number cost in an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomCostEstimator {
    min: u32,
    max: u32,
}

impl RandomCostEstimator {
    /// Estimator drawing from `min..=max`. The bounds are swapped if given
    /// in the wrong order.
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }
}

impl Default for RandomCostEstimator {
    fn default() -> Self {
        Self::new(500, 5000)
    }
}

impl CostEstimator for RandomCostEstimator {
    fn estimate(&self, _place: &PointOfInterest) -> f64 {
        f64::from(rand::rng().random_range(self.min..=self.max))
    }
}

/// Deterministic cost from keywords in the category label.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryCostEstimator;

impl CostEstimator for CategoryCostEstimator {
    fn estimate(&self, place: &PointOfInterest) -> f64 {
        let Some(category) = place.category.as_deref() else {
            return 2000.0;
        };
        let cat = category.to_lowercase();

        if cat.contains("museum") || cat.contains("historic") {
            1500.0
        } else if cat.contains("restaurant") || cat.contains("food") {
            1200.0
        } else if cat.contains("adventure") || cat.contains("trek") {
            3000.0
        } else {
            2000.0
        }
    }
}

/// The same cost for every place.
#[derive(Debug, Clone, Copy)]
pub struct FixedCostEstimator(pub f64);

impl CostEstimator for FixedCostEstimator {
    fn estimate(&self, _place: &PointOfInterest) -> f64 {
        self.0.max(0.0)
    }
}

/// Which estimator the server uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostModel {
    #[default]
    Random,
    Category,
}

impl CostModel {
    /// Build the estimator for this model.
    pub fn estimator(self) -> Arc<dyn CostEstimator + Send + Sync> {
        match self {
            CostModel::Random => Arc::new(RandomCostEstimator::default()),
            CostModel::Category => Arc::new(CategoryCostEstimator),
        }
    }
}

/// Error returned when parsing an unknown cost model name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cost model {0:?} (expected \"random\" or \"category\")")]
pub struct UnknownCostModel(String);

impl FromStr for CostModel {
    type Err = UnknownCostModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(CostModel::Random),
            "category" => Ok(CostModel::Category),
            _ => Err(UnknownCostModel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DestinationId, PlaceId};

    fn place(category: Option<&str>) -> PointOfInterest {
        let p = PointOfInterest::new(PlaceId(1), DestinationId(1), "Anywhere");
        match category {
            Some(c) => p.with_category(c),
            None => p,
        }
    }

    #[test]
    fn random_estimates_stay_in_range() {
        let estimator = RandomCostEstimator::default();
        let p = place(Some("History"));

        for _ in 0..1000 {
            let cost = estimator.estimate(&p);
            assert!((500.0..=5000.0).contains(&cost), "out of range: {cost}");
            assert_eq!(cost.fract(), 0.0);
        }
    }

    #[test]
    fn random_bounds_are_normalised() {
        let estimator = RandomCostEstimator::new(10, 5);
        assert_eq!(estimator, RandomCostEstimator::new(5, 10));

        let single = RandomCostEstimator::new(7, 7);
        assert_eq!(single.estimate(&place(None)), 7.0);
    }

    #[test]
    fn category_estimates() {
        let estimator = CategoryCostEstimator;
        assert_eq!(estimator.estimate(&place(Some("Museum"))), 1500.0);
        assert_eq!(estimator.estimate(&place(Some("Historic Site"))), 1500.0);
        assert_eq!(estimator.estimate(&place(Some("Restaurant"))), 1200.0);
        assert_eq!(estimator.estimate(&place(Some("Street Food"))), 1200.0);
        assert_eq!(estimator.estimate(&place(Some("Adventure"))), 3000.0);
        assert_eq!(estimator.estimate(&place(Some("Shopping"))), 2000.0);
        assert_eq!(estimator.estimate(&place(None)), 2000.0);
    }

    #[test]
    fn fixed_estimate_is_never_negative() {
        assert_eq!(FixedCostEstimator(250.0).estimate(&place(None)), 250.0);
        assert_eq!(FixedCostEstimator(-5.0).estimate(&place(None)), 0.0);
    }

    #[test]
    fn parse_cost_model() {
        assert_eq!("random".parse::<CostModel>().unwrap(), CostModel::Random);
        assert_eq!(" Category ".parse::<CostModel>().unwrap(), CostModel::Category);
        assert!("cheap".parse::<CostModel>().is_err());
        assert_eq!(CostModel::default(), CostModel::Random);
    }

    #[test]
    fn model_builds_estimator() {
        let estimator = CostModel::Category.estimator();
        assert_eq!(estimator.estimate(&place(Some("Trek"))), 3000.0);

        let estimator = CostModel::Random.estimator();
        let cost = estimator.estimate(&place(None));
        assert!((500.0..=5000.0).contains(&cost));
    }
}
