//! Trip-planning session orchestration.
//!
//! `TripPlanner` owns the current route for one screen session: it turns
//! a fetched directions response into a decoded route plus distance,
//! replaces the held route atomically, and assembles the dispatch payload
//! when the rider confirms. Failures never disturb a previously planned
//! route.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::directions::DirectionsResponse;
use crate::fare::{self, FareError, QuoteRow};
use crate::geo::{BoundingRegion, GeoPoint};
use crate::polyline::{self, DecodeError, Polyline};
use crate::selection::TripSelection;

/// Edge padding (screen points) the map applies when fitting a trip.
const FIT_EDGE_PADDING: f64 = 100.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// The directions response contained no usable route.
    #[error("directions response contained no routes")]
    NoRouteFound,
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// A newer route request was started after this one; its result must
    /// be discarded (last-write-wins).
    #[error("route request superseded by a newer one")]
    StaleRequest,
}

/// Handle for one in-flight route request, issued by
/// [`TripPlanner::begin_request`]. Tokens are monotonically increasing;
/// only the most recently issued one may apply a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// The destination the rider picked, with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub point: GeoPoint,
    pub label: String,
}

/// A fully planned route. Produced atomically from one directions
/// response; a new plan replaces the whole value.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub polyline: Polyline,
    pub distance_km: f64,
}

/// What a successful plan hands back to the screen: the stored route and
/// the viewport the map should fit.
#[derive(Debug, PartialEq)]
pub struct PlanOutcome<'a> {
    pub route: &'a RouteResult,
    pub viewport: BoundingRegion,
}

/// The final trip request assembled when the rider confirms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchRequest {
    pub tier_id: String,
    pub payment_method_id: String,
    pub meter_enabled: bool,
    pub tip_amount: Option<f64>,
    pub distance_km: f64,
    pub origin: GeoPoint,
    pub destination: GeoPoint,
}

#[derive(Debug, Clone, PartialEq)]
struct PlannedTrip {
    origin: GeoPoint,
    destination: Destination,
    route: RouteResult,
}

/// One trip-planning session. Single-threaded; every mutation happens in
/// response to a discrete rider action or a completed fetch.
#[derive(Debug, Clone)]
pub struct TripPlanner {
    catalog: Catalog,
    trip: Option<PlannedTrip>,
    issued_tokens: u64,
}

impl TripPlanner {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            trip: None,
            issued_tokens: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Starts a route request, invalidating any token issued earlier.
    ///
    /// Call this before firing the directions fetch; pass the token to
    /// [`plan_route`](Self::plan_route) with the fetched response. If the
    /// rider changes destination meanwhile, the older fetch's token goes
    /// stale and its late result is rejected.
    pub fn begin_request(&mut self) -> RequestToken {
        self.issued_tokens += 1;
        RequestToken(self.issued_tokens)
    }

    /// Applies a fetched directions response as the current route.
    ///
    /// Reads `routes[0]`'s overview polyline and first-leg distance,
    /// decodes the polyline, and replaces the held route in one step. Any
    /// error leaves the previously planned route untouched.
    pub fn plan_route(
        &mut self,
        token: RequestToken,
        origin: GeoPoint,
        destination: Destination,
        response: &DirectionsResponse,
    ) -> Result<PlanOutcome<'_>, PlanError> {
        if token.0 != self.issued_tokens {
            warn!(
                token = token.0,
                latest = self.issued_tokens,
                "discarding stale route response"
            );
            return Err(PlanError::StaleRequest);
        }

        let route = response.routes.first().ok_or(PlanError::NoRouteFound)?;
        let leg = route.legs.first().ok_or(PlanError::NoRouteFound)?;

        let polyline = polyline::decode(&route.overview_polyline.points)?;
        let distance_km = leg.distance.value / 1000.0;
        debug!(
            distance_km,
            points = polyline.points().len(),
            destination = %destination.label,
            "route planned"
        );

        let viewport = BoundingRegion::around(origin, destination.point, FIT_EDGE_PADDING);

        let trip = self.trip.insert(PlannedTrip {
            origin,
            destination,
            route: RouteResult {
                polyline,
                distance_km,
            },
        });

        Ok(PlanOutcome {
            route: &trip.route,
            viewport,
        })
    }

    /// Drops the current route, returning the session to idle. Used when
    /// the rider clears the destination.
    pub fn clear_route(&mut self) {
        self.trip = None;
    }

    pub fn route(&self) -> Option<&RouteResult> {
        self.trip.as_ref().map(|trip| &trip.route)
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.trip.as_ref().map(|trip| trip.route.distance_km)
    }

    pub fn origin(&self) -> Option<GeoPoint> {
        self.trip.as_ref().map(|trip| trip.origin)
    }

    pub fn destination(&self) -> Option<&Destination> {
        self.trip.as_ref().map(|trip| &trip.destination)
    }

    /// Per-tier price rows for the tier picker, using the current route
    /// distance when one exists.
    pub fn quote_sheet(&self) -> Result<Vec<QuoteRow<'_>>, FareError> {
        fare::quote_sheet(&self.catalog, self.distance_km())
    }

    /// Builds the dispatch payload from the rider's selection and the
    /// planned route. `None` until a route exists; the call button stays
    /// disabled until then.
    pub fn dispatch_request(&self, selection: &TripSelection) -> Option<DispatchRequest> {
        let trip = self.trip.as_ref()?;
        Some(DispatchRequest {
            tier_id: selection.selected_tier_id().to_string(),
            payment_method_id: selection.payment_method_id().to_string(),
            meter_enabled: selection.meter_enabled(),
            tip_amount: selection.tip_amount(),
            distance_km: trip.route.distance_km,
            origin: trip.origin,
            destination: trip.destination.point,
        })
    }
}
