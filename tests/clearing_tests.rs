use clearingcurve::clearing::clearingsimulation::ClearingSimulation;
use clearingcurve::clearing::intersectionfinder::{
    find_intersect,
    find_intersect_in,
    Intersection
};
use clearingcurve::distribution::gumbeldistribution::{
    gumbel_cdf,
    GumbelParameters
};
use clearingcurve::market::marketseries::MarketSeries;
use clearingcurve::math::curve::curve::Curve;
use clearingcurve::math::curve::domain::{
    Domain,
    DomainStepping
};
use clearingcurve::model::modelerror::ModelError;

fn market() -> MarketSeries {
    MarketSeries::from_values(
        &[100.0, 100.6, 101.1, 100.7, 101.4, 102.0],
        &[100.2, 100.5, 101.3, 100.9, 101.2, 101.8]
    )
}

fn buyer() -> GumbelParameters {
    GumbelParameters::from([0.8, 0.5, 0.4, 0.6, 1.2])
}

fn seller() -> GumbelParameters {
    GumbelParameters::from([-0.8, 0.5, 0.4, 0.6, 1.0])
}

#[test]
fn intersection_matches_a_scan_of_the_evaluated_curves() {
    let series = market();
    let domain = Domain::new(-5.0, 5.0, 100);
    let buyer_curve = gumbel_cdf(&series, 3, &buyer()).unwrap().evaluate_on(&domain);
    let seller_curve = gumbel_cdf(&series, 3, &seller()).unwrap().evaluate_on(&domain);
    assert_eq!(buyer_curve.len(), seller_curve.len());

    let mut best = (f64::INFINITY, 0);
    for (i, (b, s)) in buyer_curve.iter().zip(seller_curve.iter()).enumerate() {
        let diff = ((1.0 - b.y()) - s.y()).abs();
        if diff < best.0 {
            best = (diff, i);
        }
    }

    let found = find_intersect(&buyer(), &seller(), &series, 3, &domain).unwrap();
    assert_eq!(found.x(), seller_curve[best.1].x());
    assert_eq!(found.y(), seller_curve[best.1].y());
}

#[test]
fn indexed_and_accumulated_domains_agree_on_integer_grids() {
    let series = market();
    let accumulated = Domain::new(-4.0, 4.0, 8);
    let indexed = accumulated.with_stepping(DomainStepping::Indexed);
    let a = find_intersect(&buyer(), &seller(), &series, 3, &accumulated).unwrap();
    let b = find_intersect(&buyer(), &seller(), &series, 3, &indexed).unwrap();
    assert_eq!(a, b);
}

#[test]
fn reversed_domain_returns_sentinel() {
    let found = find_intersect_in(&buyer(), &seller(), &market(), 3, 5.0, -5.0, 100).unwrap();
    assert_eq!(found, Intersection::NOT_FOUND);
    assert_eq!(found.as_tuple(), (-1.0, -1.0));
}

#[test]
fn series_too_short_for_tick_is_reported() {
    let result = find_intersect_in(&buyer(), &seller(), &market(), 6, -5.0, 5.0, 100);
    assert!(matches!(
        result,
        Err(ModelError::SeriesTooShort { series: "underlying", required: 6, .. })
    ));
}

#[test]
fn simulation_covers_every_supported_tick() {
    let simulation = ClearingSimulation::new(buyer(), seller(), Domain::new(-5.0, 5.0, 100));
    let prices = simulation.run(&market()).unwrap();
    assert_eq!(prices.len(), 4);
    for (pt, tick) in prices.iter().zip(2..) {
        assert_eq!(pt.x(), tick as f64);
        let single = find_intersect(&buyer(), &seller(), &market(), tick, simulation.domain()).unwrap();
        assert_eq!(pt.y(), single.x());
    }
}
