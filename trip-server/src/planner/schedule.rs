//! Greedy day-by-day itinerary scheduling.
//!
//! Places are offered to each day in a fixed order and taken if they fit the
//! day's remaining budget, visit cap and opening hours. There is no
//! backtracking: the result is a plausible schedule, not an optimal one.

use std::collections::HashSet;

use tracing::{debug, info, trace};

use crate::catalog::CatalogReader;
use crate::domain::{PlaceId, PointOfInterest};

use super::config::PlannerConfig;
use super::cost::CostEstimator;
use super::ordering::order_candidates;
use super::request::PlanningRequest;
use super::visit::ScheduledVisit;

/// Itinerary scheduler over a read-only catalog.
pub struct Scheduler<'a, C: ?Sized, E: ?Sized> {
    catalog: &'a C,
    estimator: &'a E,
    config: &'a PlannerConfig,
}

impl<'a, C, E> Scheduler<'a, C, E>
where
    C: CatalogReader + ?Sized,
    E: CostEstimator + ?Sized,
{
    /// Create a new scheduler.
    pub fn new(catalog: &'a C, estimator: &'a E, config: &'a PlannerConfig) -> Self {
        Self {
            catalog,
            estimator,
            config,
        }
    }

    /// Plan a trip.
    ///
    /// Returns visits ordered by day and start time. Infeasible or
    /// over-constrained requests produce fewer visits, possibly none; this
    /// never fails.
    pub fn plan(&self, request: &PlanningRequest) -> Vec<ScheduledVisit> {
        let candidates = self.candidates(request);
        if candidates.is_empty() {
            debug!(
                user = %request.user_id,
                destinations = request.destination_ids.len(),
                "no candidate places"
            );
            return Vec::new();
        }

        let candidates = order_candidates(candidates);
        let total_days = request.total_days();

        // Request-local: a place is visited at most once per trip.
        let mut used: HashSet<PlaceId> = HashSet::new();
        let mut visits = Vec::new();

        for day_no in 1..=total_days {
            self.plan_day(day_no, request, &candidates, &mut used, &mut visits);
        }

        info!(
            user = %request.user_id,
            days = total_days,
            candidates = candidates.len(),
            planned = visits.len(),
            "planned itinerary"
        );

        visits
    }

    /// Candidate places: those of the requested destinations, narrowed to
    /// the explicit selection if one was given. Catalog order is kept.
    fn candidates(&self, request: &PlanningRequest) -> Vec<&'a PointOfInterest> {
        let places = self.catalog.places_for_destinations(&request.destination_ids);

        match &request.place_ids {
            Some(selected) => {
                let selected: HashSet<PlaceId> = selected.iter().copied().collect();
                places
                    .into_iter()
                    .filter(|p| selected.contains(&p.id))
                    .collect()
            }
            None => places,
        }
    }

    /// Fill one day, appending to `visits`.
    fn plan_day(
        &self,
        day_no: u32,
        request: &PlanningRequest,
        candidates: &[&PointOfInterest],
        used: &mut HashSet<PlaceId>,
        visits: &mut Vec<ScheduledVisit>,
    ) {
        let mut remaining_budget = request.daily_budget.unwrap_or(f64::INFINITY);
        let mut placed = 0;
        let mut clock = request.daily_start_time;

        for place in candidates {
            if placed >= request.max_places_per_day {
                break;
            }
            if used.contains(&place.id) {
                continue;
            }

            let cost = self.estimator.estimate(place);
            if cost > remaining_budget {
                trace!(day = day_no, place = %place.id, cost, remaining_budget, "over budget");
                continue;
            }

            let end = clock + place.visit_duration();
            if end > self.config.closing_time {
                trace!(day = day_no, place = %place.id, end = %end, "past closing time");
                break;
            }

            visits.push(ScheduledVisit {
                day_no,
                place_id: place.id,
                start_time: clock,
                end_time: end,
                notes: format!("Visit {}", place.name),
                estimated_cost: cost,
            });
            used.insert(place.id);
            remaining_budget -= cost;
            placed += 1;
            clock = end + self.config.travel_buffer();
        }

        debug!(day = day_no, placed, "day planned");
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
