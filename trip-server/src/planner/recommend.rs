//! Place recommendations by category.

use std::collections::{BTreeMap, HashSet};

use crate::catalog::CatalogSnapshot;
use crate::domain::PointOfInterest;

/// Places whose category is one of `categories`, grouped by category.
///
/// At most `limit` places are selected, taken in catalog order before
/// grouping. Category matching is exact.
pub fn recommend_places<'a>(
    catalog: &'a CatalogSnapshot,
    categories: &[String],
    limit: usize,
) -> BTreeMap<&'a str, Vec<&'a PointOfInterest>> {
    let wanted: HashSet<&str> = categories.iter().map(String::as_str).collect();
    let mut grouped: BTreeMap<&str, Vec<&PointOfInterest>> = BTreeMap::new();

    let selected = catalog
        .places_in_catalog_order()
        .into_iter()
        .filter_map(|p| {
            p.category
                .as_deref()
                .filter(|c| wanted.contains(c))
                .map(|c| (c, p))
        })
        .take(limit);

    for (category, place) in selected {
        grouped.entry(category).or_default().push(place);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DestinationId, PlaceId};

    fn snapshot() -> CatalogSnapshot {
        let poi = |id: i64, category: &str, name: &str| {
            PointOfInterest::new(PlaceId(id), DestinationId(1), name).with_category(category)
        };
        CatalogSnapshot::new(
            vec![],
            vec![
                poi(1, "Food", "Zaika"),
                poi(2, "History", "Lahore Fort"),
                poi(3, "Food", "Butt Karahi"),
                poi(4, "Adventure", "Rafting"),
                PointOfInterest::new(PlaceId(5), DestinationId(1), "Nameless"),
            ],
            vec![],
        )
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn groups_matching_places() {
        let snap = snapshot();
        let recs = recommend_places(&snap, &strings(&["Food", "History"]), 20);

        assert_eq!(recs.len(), 2);
        let food: Vec<&str> = recs["Food"].iter().map(|p| p.name.as_str()).collect();
        assert_eq!(food, vec!["Butt Karahi", "Zaika"]);
        assert_eq!(recs["History"][0].id, PlaceId(2));
    }

    #[test]
    fn limit_applies_before_grouping() {
        let snap = snapshot();
        let recs = recommend_places(&snap, &strings(&["Food", "History", "Adventure"]), 2);

        // Catalog order: Adventure/Rafting, Food/Butt Karahi, Food/Zaika, ...
        let total: usize = recs.values().map(Vec::len).sum();
        assert_eq!(total, 2);
        assert_eq!(recs["Adventure"].len(), 1);
        assert_eq!(recs["Food"].len(), 1);
        assert!(!recs.contains_key("History"));
    }

    #[test]
    fn no_matching_categories() {
        let snap = snapshot();
        assert!(recommend_places(&snap, &strings(&["Beach"]), 10).is_empty());
        assert!(recommend_places(&snap, &[], 10).is_empty());
    }
}
