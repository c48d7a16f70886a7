//! Structured decision trace for route optimization.
//!
//! The optimizer reports every selection decision through a [`TraceSink`]
//! instead of a fixed output stream, so callers and tests can assert on
//! decisions directly. Events serialize as tagged JSON objects, suitable
//! for a diagnostics panel or a jsonl run log.

use serde::Serialize;

use crate::types::Priority;

/// One decision made while building a plan. Times are minutes since
/// midnight.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum TraceEvent {
    CandidateScored {
        store: String,
        distance_km: f64,
        priority: Priority,
        score: f64,
    },
    CandidateSkipped {
        store: String,
        reason: String,
    },
    LunchAdjusted {
        store: String,
        arrival: i32,
        departure: i32,
    },
    StoreScheduled {
        store: String,
        order: i32,
        arrival: i32,
        departure: i32,
    },
    StoreUnreachable {
        store: String,
        projected_departure: i32,
    },
}

/// Receiver for optimizer decision events.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

/// Sink that drops every event. Used when no trace is requested.
#[derive(Debug, Default)]
pub struct NoopTrace;

impl TraceSink for NoopTrace {
    fn record(&mut self, _event: TraceEvent) {}
}

/// Sink that keeps every event in memory, for tests and diagnostics.
#[derive(Debug, Default)]
pub struct RecordingTrace {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for RecordingTrace {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_serialize_tagged() {
        let event = TraceEvent::StoreScheduled {
            store: "Toko Makmur".to_string(),
            order: 2,
            arrival: 585,
            departure: 615,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"StoreScheduled\""));
        assert!(json.contains("\"order\":2"));
    }

    #[test]
    fn test_recording_trace_accumulates() {
        let mut trace = RecordingTrace::default();
        trace.record(TraceEvent::CandidateSkipped {
            store: "Toko Jaya".to_string(),
            reason: "unparseable coordinates".to_string(),
        });
        trace.record(TraceEvent::StoreUnreachable {
            store: "Toko Jaya".to_string(),
            projected_departure: 1080,
        });
        assert_eq!(trace.events.len(), 2);
    }
}
