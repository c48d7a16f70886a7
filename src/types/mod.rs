//! Type definitions

pub mod route;
pub mod store;

pub use route::*;
pub use store::*;
