//! End-to-end planning-session flows against canned directions payloads.

mod fixtures;

use ride_planner::catalog::Catalog;
use ride_planner::fare::format_try;
use ride_planner::planner::{PlanError, TripPlanner};
use ride_planner::selection::TripSelection;

use fixtures::*;

#[test]
fn plan_select_and_dispatch() {
    let mut planner = TripPlanner::new(Catalog::default());
    let mut selection = TripSelection::new(planner.catalog());

    // Before any route, the picker shows each tier's floor price.
    let rows = planner.quote_sheet().expect("quotes");
    assert!(rows.iter().all(|row| row.quote.is_none()));
    let sari = rows.iter().find(|row| row.tier.id == "sari").unwrap();
    assert_eq!(format_try(sari.display_price()), "₺135.00");

    let token = planner.begin_request();
    let outcome = planner
        .plan_route(token, taksim(), kadikoy(), &taksim_kadikoy_directions())
        .expect("route plans");
    assert_eq!(outcome.route.distance_km, 12.4);
    assert_eq!(outcome.route.polyline.points().len(), 3);

    // Viewport hint covers both trip endpoints.
    assert!(outcome.viewport.north_latitude >= 41.0370);
    assert!(outcome.viewport.south_latitude <= 40.9928);
    assert!(outcome.viewport.west_longitude <= 28.9850);
    assert!(outcome.viewport.east_longitude >= 29.0253);

    // 12.4 km in the sari tier: 42 + 12.4 * 28 = 389.20, above the floor.
    let rows = planner.quote_sheet().expect("quotes");
    let sari = rows.iter().find(|row| row.tier.id == "sari").unwrap();
    assert_eq!(format_try(sari.display_price()), "₺389.20");

    let catalog = planner.catalog().clone();
    selection.select_tier(&catalog, "turkuaz").expect("tier");
    selection
        .select_payment_method(&catalog, "card")
        .expect("payment");
    selection.set_tip_enabled(true);
    selection.select_tip_amount(50.0).expect("tip");

    let dispatch = planner.dispatch_request(&selection).expect("dispatch");
    assert_eq!(dispatch.tier_id, "turkuaz");
    assert_eq!(dispatch.payment_method_id, "card");
    assert!(!dispatch.meter_enabled);
    assert_eq!(dispatch.tip_amount, Some(50.0));
    assert_eq!(dispatch.distance_km, 12.4);
    assert_eq!(dispatch.origin, taksim());
    assert_eq!(dispatch.destination, kadikoy().point);
}

#[test]
fn failed_replan_keeps_old_route_readable() {
    let mut planner = TripPlanner::new(Catalog::default());

    let token = planner.begin_request();
    planner
        .plan_route(token, taksim(), kadikoy(), &taksim_kadikoy_directions())
        .expect("route plans");
    let primed = planner.route().expect("route held").clone();

    let token = planner.begin_request();
    let err = planner
        .plan_route(token, taksim(), besiktas(), &zero_results_directions())
        .unwrap_err();
    assert_eq!(err, PlanError::NoRouteFound);

    // The original route (and its quotes) are still in place.
    assert_eq!(planner.route(), Some(&primed));
    assert_eq!(planner.distance_km(), Some(12.4));
    assert_eq!(planner.destination().unwrap().label, "Kadıköy İskelesi, İstanbul");
}

#[test]
fn changing_destination_replaces_whole_route() {
    let mut planner = TripPlanner::new(Catalog::default());

    let token = planner.begin_request();
    planner
        .plan_route(token, taksim(), kadikoy(), &taksim_kadikoy_directions())
        .expect("first route");

    let token = planner.begin_request();
    planner
        .plan_route(token, taksim(), besiktas(), &taksim_besiktas_directions())
        .expect("second route");

    assert_eq!(planner.distance_km(), Some(4.2));
    assert_eq!(planner.route().unwrap().polyline.points().len(), 2);
    assert_eq!(planner.destination().unwrap().label, "Beşiktaş, İstanbul");
}

#[test]
fn overlapping_fetches_resolve_last_write_wins() {
    let mut planner = TripPlanner::new(Catalog::default());

    // Rider picks Kadıköy, then switches to Beşiktaş before the first
    // fetch lands. The Kadıköy response arrives last but must lose.
    let kadikoy_token = planner.begin_request();
    let besiktas_token = planner.begin_request();

    planner
        .plan_route(
            besiktas_token,
            taksim(),
            besiktas(),
            &taksim_besiktas_directions(),
        )
        .expect("fresh request applies");

    let err = planner
        .plan_route(
            kadikoy_token,
            taksim(),
            kadikoy(),
            &taksim_kadikoy_directions(),
        )
        .unwrap_err();
    assert_eq!(err, PlanError::StaleRequest);

    assert_eq!(planner.distance_km(), Some(4.2));
    assert_eq!(planner.destination().unwrap().label, "Beşiktaş, İstanbul");
}

#[test]
fn clearing_destination_resets_quotes_to_floor() {
    let mut planner = TripPlanner::new(Catalog::default());

    let token = planner.begin_request();
    planner
        .plan_route(token, taksim(), kadikoy(), &taksim_kadikoy_directions())
        .expect("route plans");
    planner.clear_route();

    assert!(planner.route().is_none());
    let selection = TripSelection::new(planner.catalog());
    assert!(planner.dispatch_request(&selection).is_none());

    let rows = planner.quote_sheet().expect("quotes");
    for row in rows {
        assert!(row.quote.is_none());
        assert_eq!(row.display_price(), row.tier.min_price);
    }
}
