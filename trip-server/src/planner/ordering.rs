//! Candidate ordering for day placement.
//!
//! The order is computed once per planning run and reused for every day.
//! Because it is never rotated, the earliest candidates are offered first
//! on each day until they are used up; later candidates are only reached
//! once those are taken. This is a known limitation of the heuristic and is
//! kept as-is. A fairer strategy would replace this function and leave the
//! placement loop alone.

use crate::domain::PointOfInterest;

/// Sort candidates by category, then by display name.
///
/// The sort is stable: places that tie on both keep their catalog order.
pub fn order_candidates(mut candidates: Vec<&PointOfInterest>) -> Vec<&PointOfInterest> {
    candidates.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.cmp(&b.name))
    });
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DestinationId, PlaceId};

    fn poi(id: i64, category: &str, name: &str) -> PointOfInterest {
        PointOfInterest::new(PlaceId(id), DestinationId(1), name).with_category(category)
    }

    #[test]
    fn sorts_by_category_then_name() {
        let places = [
            poi(1, "Shopping", "Liberty Market"),
            poi(2, "Food", "Food Street"),
            poi(3, "History", "Shalimar Gardens"),
            poi(4, "History", "Lahore Fort"),
            poi(5, "Adventure", "Paragliding"),
        ];
        let ordered = order_candidates(places.iter().collect());
        let ids: Vec<i64> = ordered.iter().map(|p| p.id.get()).collect();

        assert_eq!(ids, vec![5, 2, 4, 3, 1]);
    }

    #[test]
    fn ties_keep_input_order() {
        let places = [poi(9, "Food", "Cafe"), poi(3, "Food", "Cafe")];
        let ordered = order_candidates(places.iter().collect());
        let ids: Vec<i64> = ordered.iter().map(|p| p.id.get()).collect();

        assert_eq!(ids, vec![9, 3]);
    }

    #[test]
    fn uncategorised_first() {
        let places = [
            poi(1, "Food", "Cafe"),
            PointOfInterest::new(PlaceId(2), DestinationId(1), "Zoo"),
        ];
        let ordered = order_candidates(places.iter().collect());
        assert_eq!(ordered[0].id, PlaceId(2));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        // Byte order: uppercase before lowercase.
        let places = [poi(1, "food", "a"), poi(2, "Food", "b")];
        let ordered = order_candidates(places.iter().collect());
        assert_eq!(ordered[0].id, PlaceId(2));
    }
}
