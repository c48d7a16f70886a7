//! Store types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Priority class of a store. A is the most important, D the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    A,
    B,
    C,
    D,
}

impl Priority {
    /// Scoring weight used by the optimizer; lower means preferred.
    pub const fn weight(self) -> i32 {
        match self {
            Priority::A => 1,
            Priority::B => 2,
            Priority::C => 3,
            Priority::D => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::A => "A",
            Priority::B => "B",
            Priority::C => "C",
            Priority::D => "D",
        }
    }

    /// Parse a raw priority tag. Unrecognized tags fall back to B,
    /// matching how route requests have always been interpreted.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "A" => Priority::A,
            "B" => Priority::B,
            "C" => Priority::C,
            "D" => Priority::D,
            _ => Priority::B,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::B
    }
}

/// Feasibility classification of a store within the planned day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisitStatus {
    Visited,
    Unreachable,
}

impl VisitStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            VisitStatus::Visited => "VISITED",
            VisitStatus::Unreachable => "UNREACHABLE",
        }
    }
}

/// A store to visit.
///
/// Coordinates stay textual here: the optimizer parses them per selection
/// round, so one bad record degrades to UNREACHABLE instead of failing the
/// whole plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreVisit {
    /// Opaque row id from the surrounding system, passed through unchanged.
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub distributor_id: Option<String>,
    pub store_name: String,
    /// "lat,lng" with whitespace already stripped.
    pub coordinates: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_visit_minutes", rename = "visitTime")]
    pub visit_minutes: i32,
}

fn default_visit_minutes() -> i32 {
    crate::defaults::DEFAULT_VISIT_MINUTES
}

/// A store annotated with its place in the optimized plan.
///
/// The four plan fields are `Some` together for VISITED stores and `None`
/// together for UNREACHABLE ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedStore {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub distributor_id: Option<String>,
    pub store_name: String,
    pub coordinates: String,
    pub priority: Priority,
    #[serde(rename = "visitTime")]
    pub visit_minutes: i32,
    pub status: VisitStatus,
    pub visit_order: Option<i32>,
    /// 12-hour wall-clock string, e.g. "9:45 AM".
    pub arrival_time: Option<String>,
    pub depart_time: Option<String>,
    /// Outbound navigation deep link from the previous position.
    pub maps_url: Option<String>,
}

impl OptimizedStore {
    /// Annotate a store as visited at the given order and schedule.
    pub fn visited(
        store: StoreVisit,
        visit_order: i32,
        arrival_time: String,
        depart_time: String,
        maps_url: String,
    ) -> Self {
        Self {
            id: store.id,
            distributor_id: store.distributor_id,
            store_name: store.store_name,
            coordinates: store.coordinates,
            priority: store.priority,
            visit_minutes: store.visit_minutes,
            status: VisitStatus::Visited,
            visit_order: Some(visit_order),
            arrival_time: Some(arrival_time),
            depart_time: Some(depart_time),
            maps_url: Some(maps_url),
        }
    }

    /// Annotate a store as unreachable within the working day.
    pub fn unreachable(store: StoreVisit) -> Self {
        Self {
            id: store.id,
            distributor_id: store.distributor_id,
            store_name: store.store_name,
            coordinates: store.coordinates,
            priority: store.priority,
            visit_minutes: store.visit_minutes,
            status: VisitStatus::Unreachable,
            visit_order: None,
            arrival_time: None,
            depart_time: None,
            maps_url: None,
        }
    }
}
