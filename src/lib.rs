//! ride-planner core
//!
//! Trip-planning and fare-estimation engine for a ride-hailing client:
//! polyline decoding, per-tier fare quotes, rider selection state, and the
//! planner that ties a routed trip together for dispatch.

pub mod geo;
pub mod polyline;
pub mod catalog;
pub mod fare;
pub mod selection;
pub mod planner;
pub mod directions;
pub mod places;
