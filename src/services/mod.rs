//! Business logic services

pub mod clock;
pub mod geo;
pub mod optimizer;
pub mod trace;
