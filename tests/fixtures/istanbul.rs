//! Istanbul trip endpoints and directions payloads.

use ride_planner::directions::DirectionsResponse;
use ride_planner::geo::GeoPoint;
use ride_planner::planner::Destination;

/// Taksim Meydanı, the session's start location.
pub fn taksim() -> GeoPoint {
    GeoPoint::new(41.0370, 28.9850)
}

/// Kadıköy İskelesi, across the Bosphorus.
pub fn kadikoy() -> Destination {
    Destination {
        point: GeoPoint::new(40.9928, 29.0253),
        label: "Kadıköy İskelesi, İstanbul".to_string(),
    }
}

/// Beşiktaş, a shorter hop used as the replacement destination.
pub fn besiktas() -> Destination {
    Destination {
        point: GeoPoint::new(41.0422, 29.0067),
        label: "Beşiktaş, İstanbul".to_string(),
    }
}

/// A directions payload with one route and one leg, as the service
/// returns for a Taksim → Kadıköy trip. Extra fields exercise serde's
/// ignore behavior.
pub fn taksim_kadikoy_directions() -> DirectionsResponse {
    serde_json::from_str(
        r#"{
            "geocoded_waypoints": [ { "geocoder_status": "OK" }, { "geocoder_status": "OK" } ],
            "routes": [
                {
                    "bounds": {
                        "northeast": { "lat": 41.0370, "lng": 29.0253 },
                        "southwest": { "lat": 40.9928, "lng": 28.9850 }
                    },
                    "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" },
                    "legs": [
                        {
                            "distance": { "text": "12.4 km", "value": 12400 },
                            "duration": { "text": "28 mins", "value": 1680 }
                        }
                    ],
                    "summary": "O-1 ve Kennedy Cd.",
                    "warnings": []
                }
            ],
            "status": "OK"
        }"#,
    )
    .expect("fixture payload parses")
}

/// A shorter single-leg payload for the Taksim → Beşiktaş replacement.
pub fn taksim_besiktas_directions() -> DirectionsResponse {
    serde_json::from_str(
        r#"{
            "routes": [
                {
                    "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC" },
                    "legs": [ { "distance": { "text": "4.2 km", "value": 4200 } } ]
                }
            ],
            "status": "OK"
        }"#,
    )
    .expect("fixture payload parses")
}

/// What the service returns when no route exists between the endpoints.
pub fn zero_results_directions() -> DirectionsResponse {
    serde_json::from_str(r#"{ "routes": [], "status": "ZERO_RESULTS" }"#)
        .expect("fixture payload parses")
}
