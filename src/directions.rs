//! Directions-service HTTP adapter.
//!
//! Fetches route geometry between two points and parses it into the
//! typed response the planner consumes. Only `routes[0]`'s overview
//! polyline and first-leg distance are ever read downstream; everything
//! else in the payload is ignored by serde.

use serde::Deserialize;
use tracing::debug;

use crate::geo::GeoPoint;

#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

/// Parsed directions payload. This is the planner's raw input; the
/// client below is one way to obtain it.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    pub overview_polyline: OverviewPolyline,
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverviewPolyline {
    pub points: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteLeg {
    pub distance: LegDistance,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegDistance {
    /// Leg length in meters.
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct DirectionsClient {
    config: DirectionsConfig,
    client: reqwest::blocking::Client,
}

impl DirectionsClient {
    pub fn new(config: DirectionsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Fetches directions from `origin` to `destination`.
    pub fn route(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<DirectionsResponse, reqwest::Error> {
        let url = format!("{}/directions/json", self.config.base_url);
        let origin_param = format!("{:.6},{:.6}", origin.latitude, origin.longitude);
        let destination_param = format!("{:.6},{:.6}", destination.latitude, destination.longitude);
        debug!(%origin.latitude, %origin.longitude, "requesting directions");

        self.client
            .get(url)
            .query(&[
                ("origin", origin_param.as_str()),
                ("destination", destination_param.as_str()),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<DirectionsResponse>())
    }
}
