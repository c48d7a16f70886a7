//! Route planning request and result types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::defaults;
use crate::error::RouteError;
use crate::services::{clock, geo};
use crate::types::{Coordinates, OptimizedStore, Priority, StoreVisit, VisitStatus};

/// Raw route-creation payload as collaborators submit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// Starting location as a "lat,lng" string.
    pub starting_point: String,
    /// Departure time as a 24-hour "HH:MM" string.
    pub departure_time: String,
    #[serde(default)]
    pub stores: Vec<StoreDraft>,
}

/// One store row in a route-creation payload, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDraft {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub distributor_id: Option<String>,
    pub store_name: String,
    pub coordinates: String,
    /// Priority tag, "A" through "D". Anything else becomes B.
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, rename = "visitTime")]
    pub visit_minutes: Option<i32>,
}

/// Validated optimizer input: start resolved, defaults applied.
#[derive(Debug, Clone)]
pub struct PlanInput {
    pub start: Coordinates,
    pub departure_minutes: i32,
    pub stores: Vec<StoreVisit>,
}

impl RouteRequest {
    /// Clean and check the payload, producing optimizer-ready input.
    ///
    /// The starting point and departure time must be valid, and every
    /// store row must carry a name and in-range coordinates. Coordinate
    /// strings are stripped of whitespace before parsing and kept in that
    /// cleaned form.
    pub fn validate(self) -> Result<PlanInput, RouteError> {
        let start_text = clean_coordinate_text(&self.starting_point);
        let start = geo::parse_coordinates(&start_text)?;
        if !in_valid_range(&start) {
            return Err(RouteError::InvalidCoordinates { text: start_text });
        }

        let departure_minutes = clock::parse_time_of_day(&self.departure_time)?;

        let mut stores = Vec::with_capacity(self.stores.len());
        for (index, draft) in self.stores.into_iter().enumerate() {
            stores.push(draft.validate(index)?);
        }

        Ok(PlanInput {
            start,
            departure_minutes,
            stores,
        })
    }
}

impl StoreDraft {
    fn validate(self, index: usize) -> Result<StoreVisit, RouteError> {
        let store_name = self.store_name.trim().to_string();
        if store_name.is_empty() {
            return Err(RouteError::InvalidStore {
                index,
                reason: "missing store name".to_string(),
            });
        }

        let coordinates = clean_coordinate_text(&self.coordinates);
        match geo::parse_coordinates(&coordinates) {
            Ok(point) if in_valid_range(&point) => {}
            _ => {
                return Err(RouteError::InvalidStore {
                    index,
                    reason: format!("invalid coordinates {:?}", self.coordinates),
                });
            }
        }

        let visit_minutes = self
            .visit_minutes
            .unwrap_or(defaults::DEFAULT_VISIT_MINUTES);
        if visit_minutes <= 0 {
            return Err(RouteError::InvalidStore {
                index,
                reason: format!("visit duration must be positive, got {}", visit_minutes),
            });
        }

        Ok(StoreVisit {
            id: self.id,
            distributor_id: self
                .distributor_id
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            store_name,
            coordinates,
            priority: self
                .priority
                .as_deref()
                .map(Priority::from_tag)
                .unwrap_or_default(),
            visit_minutes,
        })
    }
}

/// Remove every whitespace character, so "-7.257, 112.752" and
/// "-7.257,112.752" are the same coordinate string.
fn clean_coordinate_text(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn in_valid_range(point: &Coordinates) -> bool {
    (-90.0..=90.0).contains(&point.lat) && (-180.0..=180.0).contains(&point.lng)
}

/// Summary of one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub visited_stores: usize,
    pub unreachable_stores: usize,
    /// Kilometers across visited legs, rounded to 2 decimals.
    #[serde(rename = "totalDistance")]
    pub total_distance_km: f64,
    /// Travel plus on-site minutes across visited stores.
    #[serde(rename = "totalTime")]
    pub total_minutes: i32,
    /// Simulated clock at the end of the plan, e.g. "3:45 PM".
    pub completion_time: String,
}

/// Full result of one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOutcome {
    pub stores: Vec<OptimizedStore>,
    pub summary: RouteSummary,
}

impl OptimizationOutcome {
    /// Visited stores, in visit order.
    pub fn visited(&self) -> impl Iterator<Item = &OptimizedStore> {
        self.stores
            .iter()
            .filter(|s| s.status == VisitStatus::Visited)
    }

    /// Stores that did not fit into the working day.
    pub fn unreachable(&self) -> impl Iterator<Item = &OptimizedStore> {
        self.stores
            .iter()
            .filter(|s| s.status == VisitStatus::Unreachable)
    }
}
