//! Destination ranking by review quality.
//!
//! Aggregates every review of every place in a destination and ranks
//! destinations best-first.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::catalog::CatalogReader;
use crate::domain::DestinationId;

/// Review statistics for one destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestinationRating {
    pub destination_id: DestinationId,

    /// Arithmetic mean of all ratings.
    pub mean_rating: f64,

    /// Number of reviews the mean is taken over. Always at least one.
    pub review_count: usize,
}

/// Aggregate ratings per destination.
///
/// Destinations without reviews do not appear. The result is ordered by
/// destination id.
pub fn aggregate_ratings<C: CatalogReader + ?Sized>(catalog: &C) -> Vec<DestinationRating> {
    let mut totals: BTreeMap<DestinationId, (i64, usize)> = BTreeMap::new();

    for review in catalog.destination_reviews() {
        let entry = totals.entry(review.destination_id).or_default();
        entry.0 += i64::from(review.rating);
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(destination_id, (sum, count))| DestinationRating {
            destination_id,
            mean_rating: sum as f64 / count as f64,
            review_count: count,
        })
        .collect()
}

/// Rank destinations by preference.
///
/// Destinations are ranked by:
/// 1. Mean rating (higher is better)
/// 2. Number of reviews (more is better)
///
/// Remaining ties keep ascending destination id order. At most `limit`
/// destinations are returned.
pub fn rank_destinations<C: CatalogReader + ?Sized>(
    catalog: &C,
    limit: usize,
) -> Vec<DestinationRating> {
    let mut ratings = aggregate_ratings(catalog);

    ratings.sort_by(|a, b| {
        // Primary: mean rating, descending
        let mean_cmp = b.mean_rating.total_cmp(&a.mean_rating);
        if mean_cmp != Ordering::Equal {
            return mean_cmp;
        }

        // Secondary: review count, descending
        b.review_count.cmp(&a.review_count)
    });

    ratings.truncate(limit);
    ratings
}
