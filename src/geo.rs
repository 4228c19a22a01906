//! Geographic primitives shared across the planner.

use serde::{Deserialize, Serialize};

/// A point on the map in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Viewport hint emitted after a successful route plan.
///
/// Bounds covering the trip endpoints plus the edge padding (in screen
/// points) the map should apply when fitting them. The planner only
/// describes the region; actually moving the camera is up to the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    pub north_latitude: f64,
    pub south_latitude: f64,
    pub east_longitude: f64,
    pub west_longitude: f64,
    pub edge_padding: f64,
}

impl BoundingRegion {
    /// Smallest region containing both endpoints of a trip.
    pub fn around(a: GeoPoint, b: GeoPoint, edge_padding: f64) -> Self {
        Self {
            north_latitude: a.latitude.max(b.latitude),
            south_latitude: a.latitude.min(b.latitude),
            east_longitude: a.longitude.max(b.longitude),
            west_longitude: a.longitude.min(b.longitude),
            edge_padding,
        }
    }
}
