//! Immutable catalog snapshot.
//!
//! The planner never talks to a live store. It is handed a snapshot of the
//! destinations, places and reviews, which stays unchanged for the duration
//! of a call and can be shared between concurrent requests.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::{
    Destination, DestinationId, DestinationReview, PlaceId, PointOfInterest, Review,
};

use super::reader::CatalogReader;

/// A point-in-time copy of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub destinations: Vec<Destination>,

    #[serde(default)]
    pub places: Vec<PointOfInterest>,

    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl CatalogSnapshot {
    /// Create a snapshot from its parts.
    pub fn new(
        destinations: Vec<Destination>,
        places: Vec<PointOfInterest>,
        reviews: Vec<Review>,
    ) -> Self {
        Self {
            destinations,
            places,
            reviews,
        }
    }

    /// Look up a destination by id.
    pub fn destination(&self, id: DestinationId) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Look up a place by id.
    pub fn place(&self, id: PlaceId) -> Option<&PointOfInterest> {
        self.places.iter().find(|p| p.id == id)
    }

    /// Distinct non-empty category labels, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.places
            .iter()
            .filter_map(|p| p.category.as_deref())
            .filter(|c| !c.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All places, in catalog order.
    pub fn places_in_catalog_order(&self) -> Vec<&PointOfInterest> {
        let mut places: Vec<&PointOfInterest> = self.places.iter().collect();
        places.sort_by(|a, b| catalog_order(a, b));
        places
    }
}

/// The catalog's natural ordering of places: category, then name, then id.
///
/// Places without a category sort first.
pub fn catalog_order(a: &PointOfInterest, b: &PointOfInterest) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

impl CatalogReader for CatalogSnapshot {
    fn places_for_destinations(&self, ids: &[DestinationId]) -> Vec<&PointOfInterest> {
        let wanted: HashSet<DestinationId> = ids.iter().copied().collect();
        let mut places: Vec<&PointOfInterest> = self
            .places
            .iter()
            .filter(|p| wanted.contains(&p.destination_id))
            .collect();
        places.sort_by(|a, b| catalog_order(a, b));
        places
    }

    fn destination_reviews(&self) -> Vec<DestinationReview> {
        let known: HashSet<DestinationId> = self.destinations.iter().map(|d| d.id).collect();
        let place_destination: HashMap<PlaceId, DestinationId> = self
            .places
            .iter()
            .filter(|p| known.contains(&p.destination_id))
            .map(|p| (p.id, p.destination_id))
            .collect();

        // Inner join: reviews of unknown places or destinations drop out.
        self.reviews
            .iter()
            .filter_map(|r| {
                place_destination
                    .get(&r.place_id)
                    .map(|&destination_id| DestinationReview {
                        destination_id,
                        review_id: r.id,
                        rating: r.rating,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReviewId;

    fn poi(id: i64, dest: i64, category: &str, name: &str) -> PointOfInterest {
        PointOfInterest::new(PlaceId(id), DestinationId(dest), name).with_category(category)
    }

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot::new(
            vec![
                Destination::new(DestinationId(1), "Lahore"),
                Destination::new(DestinationId(2), "Hunza"),
            ],
            vec![
                poi(1, 1, "Shopping", "Anarkali Bazaar"),
                poi(2, 1, "History", "Lahore Fort"),
                poi(3, 2, "Adventure", "Rakaposhi Base Camp"),
                poi(4, 1, "History", "Badshahi Mosque"),
                PointOfInterest::new(PlaceId(5), DestinationId(1), "Unlabelled Garden"),
                poi(6, 9, "Food", "Orphan Cafe"),
            ],
            vec![
                Review::new(ReviewId(1), PlaceId(2), 5),
                Review::new(ReviewId(2), PlaceId(3), 4),
                Review::new(ReviewId(3), PlaceId(99), 1),
                Review::new(ReviewId(4), PlaceId(6), 2),
            ],
        )
    }

    fn ids(places: &[&PointOfInterest]) -> Vec<i64> {
        places.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn places_for_destinations_in_catalog_order() {
        let snap = snapshot();
        let places = snap.places_for_destinations(&[DestinationId(1)]);
        // None category first, then History (Badshahi < Lahore), then Shopping
        assert_eq!(ids(&places), vec![5, 4, 2, 1]);
    }

    #[test]
    fn places_for_multiple_destinations() {
        let snap = snapshot();
        let places = snap.places_for_destinations(&[DestinationId(2), DestinationId(1)]);
        assert_eq!(ids(&places), vec![5, 3, 4, 2, 1]);
    }

    #[test]
    fn places_for_no_destinations() {
        let snap = snapshot();
        assert!(snap.places_for_destinations(&[]).is_empty());
        assert!(snap.places_for_destinations(&[DestinationId(42)]).is_empty());
    }

    #[test]
    fn reviews_join_through_places_and_destinations() {
        let snap = snapshot();
        let joined = snap.destination_reviews();

        assert_eq!(
            joined,
            vec![
                DestinationReview {
                    destination_id: DestinationId(1),
                    review_id: ReviewId(1),
                    rating: 5,
                },
                DestinationReview {
                    destination_id: DestinationId(2),
                    review_id: ReviewId(2),
                    rating: 4,
                },
            ]
        );
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let snap = snapshot();
        assert_eq!(
            snap.categories(),
            vec!["Adventure", "Food", "History", "Shopping"]
        );
    }

    #[test]
    fn lookups() {
        let snap = snapshot();
        assert_eq!(snap.destination(DestinationId(2)).unwrap().name, "Hunza");
        assert!(snap.destination(DestinationId(3)).is_none());
        assert_eq!(snap.place(PlaceId(4)).unwrap().name, "Badshahi Mosque");
        assert!(snap.place(PlaceId(40)).is_none());
    }

    #[test]
    fn deserialize_partial_snapshot() {
        let snap: CatalogSnapshot =
            serde_json::from_str(r#"{"destinations": [{"id": 1, "name": "Skardu"}]}"#).unwrap();
        assert_eq!(snap.destinations.len(), 1);
        assert!(snap.places.is_empty());
        assert!(snap.reviews.is_empty());
    }
}
