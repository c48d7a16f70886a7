//! RutePintar route optimization core.
//!
//! Plans a day of store visits for field sales teams: stores are picked
//! greedily by a distance-dominated priority score, travel and on-site
//! time are simulated against the fixed 09:00-17:00 working day with its
//! 12:00-13:00 lunch break, and stores that no longer fit are classified
//! as unreachable instead of failing the plan.
//!
//! ```
//! use rutepintar_optimizer::{RouteOptimizer, RouteRequest, StoreDraft};
//!
//! # fn main() -> Result<(), rutepintar_optimizer::RouteError> {
//! let request = RouteRequest {
//!     starting_point: "-7.2574719, 112.7520883".to_string(),
//!     departure_time: "09:00".to_string(),
//!     stores: vec![StoreDraft {
//!         id: None,
//!         distributor_id: None,
//!         store_name: "Toko Sumber Rejeki".to_string(),
//!         coordinates: "-7.2394855,112.7520883".to_string(),
//!         priority: Some("A".to_string()),
//!         visit_minutes: Some(45),
//!     }],
//! };
//!
//! let outcome = RouteOptimizer::new(request.validate()?).optimize();
//! assert_eq!(outcome.summary.visited_stores, 1);
//! assert_eq!(outcome.stores[0].arrival_time.as_deref(), Some("9:15 AM"));
//! # Ok(())
//! # }
//! ```

pub mod defaults;
pub mod error;
pub mod services;
pub mod types;

pub use error::RouteError;
pub use services::optimizer::RouteOptimizer;
pub use services::trace::{NoopTrace, RecordingTrace, TraceEvent, TraceSink};
pub use types::*;
