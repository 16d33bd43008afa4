//! Property-based tests for bond and caplet valuation.

use pricer_core::market_data::{CurveInterpolation, DiscountCurve, YieldCurve};
use pricer_core::types::{KeyUnit, PricingError};
use pricer_models::analytical::Black76Caplet;
use pricer_models::instruments::{Bond, Caplet, Instrument, Valuable};
use proptest::prelude::*;

fn flat_curve(rate: f64) -> DiscountCurve<f64> {
    let times = [0.5, 1.0, 5.0, 10.0, 30.0];
    let dfs: Vec<f64> = times.iter().map(|&t| (-rate * t).exp()).collect();
    DiscountCurve::new(&times, &dfs, KeyUnit::Years, CurveInterpolation::LogLinear).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_caplet_price_bounds(
        expiry in 0.1f64..10.0,
        forward in 0.005f64..0.10,
        strike in 0.005f64..0.10,
        vol in 0.05f64..1.0,
        accrual in 0.1f64..1.0,
        rate in 0.0f64..0.08,
    ) {
        let curve = flat_curve(rate);
        let caplet = Caplet::new(expiry, forward, strike, vol, accrual).unwrap();
        let v = Black76Caplet::valuation(&curve, &caplet).unwrap();
        let annuity = curve.discount_factor(expiry).unwrap() * accrual;

        prop_assert!(v.price >= 0.0);
        prop_assert!(v.price <= annuity * forward + 1e-12);
        prop_assert!(v.price >= annuity * (forward - strike).max(0.0) - 1e-7);
        prop_assert!(v.delta >= 0.0 && v.delta <= annuity + 1e-12);
        prop_assert!(v.vega >= 0.0);
    }

    #[test]
    fn test_bond_npv_falls_when_rates_rise(
        coupon in 0.0f64..0.10,
        years in 1u32..30,
        freq in prop::sample::select(vec![1u32, 2, 4, 12]),
        shift_bp in 0.5f64..200.0,
    ) {
        let curve = flat_curve(0.03);
        let bumped = curve.bumped(shift_bp).unwrap();
        let bond = Bond::new(coupon, f64::from(years), freq).unwrap();

        prop_assert!(bond.npv(&bumped).unwrap() < bond.npv(&curve).unwrap());
    }

    #[test]
    fn test_par_bond_near_face_value(
        years in 1u32..30,
        rate in 0.01f64..0.08,
    ) {
        // Continuous rate r is the par coupon for annual pay e^r - 1.
        let curve = flat_curve(rate);
        let bond = Bond::new(rate.exp() - 1.0, f64::from(years), 1).unwrap();
        let pv = bond.npv(&curve).unwrap();
        prop_assert!((pv - 100.0).abs() < 1e-9, "pv = {}", pv);
    }
}

#[test]
fn test_mixed_portfolio_errors_surface_as_pricing_errors() {
    let curve = flat_curve(0.03);
    let portfolio: Vec<Instrument<f64>> = vec![
        Bond::new(0.03, 5.0, 2).unwrap().into(),
        Caplet::new(-1.0, 0.03, 0.03, 0.2, 0.5).unwrap().into(),
    ];

    let results: Vec<Result<f64, PricingError>> =
        portfolio.iter().map(|i| i.npv(&curve)).collect();

    assert!(results[0].is_ok());
    match &results[1] {
        Err(PricingError::InvalidMarketInput(msg)) => assert!(msg.contains("expiry")),
        other => panic!("Expected InvalidMarketInput, got {:?}", other),
    }
}
