//! Greedy store-visit route optimization.
//!
//! Builds a single-day plan by repeatedly selecting the best remaining
//! store by a distance-dominated score, simulating travel and on-site time
//! against the fixed working day, and classifying stores that no longer
//! fit as UNREACHABLE.

use tracing::{debug, warn};

use crate::defaults::{
    LUNCH_END_MINUTES, LUNCH_START_MINUTES, TRAVEL_BUFFER_MINUTES, TRAVEL_MINUTES_PER_KM,
    WORK_END_MINUTES,
};
use crate::services::trace::{NoopTrace, TraceEvent, TraceSink};
use crate::services::{clock, geo};
use crate::types::{
    Coordinates, OptimizationOutcome, OptimizedStore, PlanInput, RouteSummary, StoreVisit,
    VisitStatus,
};

/// Greedy nearest-with-priority route optimizer.
///
/// The selection score is `distance_km * 100 + priority_weight * 10`, so
/// distance dominates and priority only nudges the choice between stores
/// at similar distances. Priority never overrides a materially shorter
/// leg; that weighting is a product decision, not an accident.
pub struct RouteOptimizer {
    start: Coordinates,
    departure_minutes: i32,
    stores: Vec<StoreVisit>,
}

impl RouteOptimizer {
    /// Create an optimizer over validated input.
    pub fn new(input: PlanInput) -> Self {
        Self {
            start: input.start,
            departure_minutes: input.departure_minutes,
            stores: input.stores,
        }
    }

    /// Build the day plan, discarding the decision trace.
    pub fn optimize(self) -> OptimizationOutcome {
        self.optimize_with_trace(&mut NoopTrace)
    }

    /// Build the day plan, reporting every decision to `sink`.
    pub fn optimize_with_trace(self, sink: &mut dyn TraceSink) -> OptimizationOutcome {
        let mut remaining = self.stores;
        let mut plan: Vec<OptimizedStore> = Vec::with_capacity(remaining.len());

        let mut position = self.start;
        let mut now = self.departure_minutes;
        let mut next_order: i32 = 1;
        let mut total_distance_km = 0.0;
        let mut total_minutes = 0;

        while !remaining.is_empty() {
            let Some((index, coords, distance_km)) = select_next(&remaining, &position, sink)
            else {
                // Nothing left is scorable; the rest can never be planned.
                break;
            };

            let store = remaining.remove(index);

            let travel_minutes = (distance_km * TRAVEL_MINUTES_PER_KM as f64).ceil() as i32
                + TRAVEL_BUFFER_MINUTES;
            let mut arrival = now + travel_minutes;
            let mut departure = arrival + store.visit_minutes;

            // A visit may not run over the 12:00-13:00 lunch break.
            if arrival < LUNCH_END_MINUTES && departure > LUNCH_START_MINUTES {
                if arrival < LUNCH_START_MINUTES {
                    // Starts before the break; the remainder resumes after it.
                    departure = LUNCH_END_MINUTES + (departure - LUNCH_START_MINUTES);
                } else {
                    // Arrives during the break (12:00 exactly counts); the
                    // whole visit waits until the break ends.
                    arrival = LUNCH_END_MINUTES;
                    departure = LUNCH_END_MINUTES + store.visit_minutes;
                }
                debug!(
                    "Visit at '{}' adjusted around lunch: arrival {}, departure {}",
                    store.store_name,
                    clock::format_hhmm(arrival),
                    clock::format_hhmm(departure)
                );
                sink.record(TraceEvent::LunchAdjusted {
                    store: store.store_name.clone(),
                    arrival,
                    departure,
                });
            }

            if departure > WORK_END_MINUTES {
                debug!(
                    "'{}' does not fit the working day (would depart {})",
                    store.store_name,
                    clock::format_hhmm(departure)
                );
                sink.record(TraceEvent::StoreUnreachable {
                    store: store.store_name.clone(),
                    projected_departure: departure,
                });
                // No state advances: an infeasible store costs no time or
                // distance, and the next round rescans from the same spot.
                plan.push(OptimizedStore::unreachable(store));
                continue;
            }

            debug!(
                "#{} '{}': arrive {}, depart {} ({:.2} km leg)",
                next_order,
                store.store_name,
                clock::format_hhmm(arrival),
                clock::format_hhmm(departure),
                distance_km
            );
            sink.record(TraceEvent::StoreScheduled {
                store: store.store_name.clone(),
                order: next_order,
                arrival,
                departure,
            });

            total_distance_km += distance_km;
            total_minutes += travel_minutes + store.visit_minutes;

            let url = geo::maps_url(&position, &coords);
            plan.push(OptimizedStore::visited(
                store,
                next_order,
                clock::format_time_of_day(arrival),
                clock::format_time_of_day(departure),
                url,
            ));

            next_order += 1;
            position = coords;
            now = departure;
        }

        // Only stores whose coordinates never parsed end up here.
        for store in remaining {
            warn!(
                "Store '{}' left unplanned: coordinates {:?} never parsed",
                store.store_name, store.coordinates
            );
            plan.push(OptimizedStore::unreachable(store));
        }

        let visited_stores = plan
            .iter()
            .filter(|s| s.status == VisitStatus::Visited)
            .count();
        let unreachable_stores = plan.len() - visited_stores;

        OptimizationOutcome {
            stores: plan,
            summary: RouteSummary {
                visited_stores,
                unreachable_stores,
                total_distance_km: round2(total_distance_km),
                total_minutes,
                completion_time: clock::format_time_of_day(now),
            },
        }
    }
}

/// Pick the lowest-scoring candidate from the pool. Returns its index,
/// parsed coordinates, and leg distance, or `None` when no remaining
/// candidate has parseable coordinates.
fn select_next(
    remaining: &[StoreVisit],
    position: &Coordinates,
    sink: &mut dyn TraceSink,
) -> Option<(usize, Coordinates, f64)> {
    let mut best: Option<(usize, Coordinates, f64)> = None;
    let mut best_score = f64::INFINITY;

    for (index, store) in remaining.iter().enumerate() {
        let coords = match geo::parse_coordinates(&store.coordinates) {
            Ok(coords) => coords,
            Err(_) => {
                warn!(
                    "Skipping '{}' this round: invalid coordinates {:?}",
                    store.store_name, store.coordinates
                );
                sink.record(TraceEvent::CandidateSkipped {
                    store: store.store_name.clone(),
                    reason: "unparseable coordinates".to_string(),
                });
                continue;
            }
        };

        let distance_km = geo::haversine_distance(position, &coords);
        let score = distance_km * 100.0 + store.priority.weight() as f64 * 10.0;
        sink.record(TraceEvent::CandidateScored {
            store: store.store_name.clone(),
            distance_km,
            priority: store.priority,
            score,
        });

        // Strict comparison: on equal scores the earliest store in list
        // order wins.
        if score < best_score {
            best_score = score;
            best = Some((index, coords, distance_km));
        }
    }

    best
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ===========================================================================
// Tests
// ===========================================================================
