
use leland_lib::{
    correct_volatility, price_with_leland, spread_coefficient, LelandPricer, OptionSign,
    PricingError, Quote, StatrsNormalCdf, SweepConfig,
};
use test_utils::{
    assert_close, reference_inputs, reference_quote, REFERENCE_ADJUSTED_CALL,
    REFERENCE_ADJUSTED_VOL, REFERENCE_CALL,
};

#[test]
fn test_reference_spread_coefficient() {
    let k = spread_coefficient(0.32, 0.26).unwrap();
    assert_close(k, 2.0 * 0.06 / 0.58, 1e-12, "k");
    assert_close(k, 0.206_897, 1e-6, "k (rounded)");
    assert_eq!(reference_quote().spread_coefficient().unwrap(), k);
}

/// A locked market (ask == bid) adds no hedging cost at any interval.
#[test]
fn test_locked_market_leaves_volatility_unchanged() {
    for price in [0.01, 0.26, 3.5, 120.0] {
        let k = spread_coefficient(price, price).unwrap();
        assert_eq!(k, 0.0);
        for vol in [0.05, 0.25, 0.9, 1.5] {
            for delta_t in [0.0, 1.0 / 3650.0, 1.0 / 365.0, 1.0 / 52.0, 1.0] {
                assert_eq!(correct_volatility(vol, k, delta_t).unwrap(), vol);
            }
        }
    }
}

#[test]
fn test_positive_spread_inflates_volatility() {
    let k = spread_coefficient(0.32, 0.26).unwrap();
    let adjusted = correct_volatility(0.9, k, 1.0 / 365.0).unwrap();
    assert!(adjusted > 0.9);
    assert_close(adjusted, REFERENCE_ADJUSTED_VOL, 1e-12, "adjusted vol");

    // Spread cost weighs less against high-volatility assets
    let low_vol_ratio = correct_volatility(0.1, k, 1.0 / 365.0).unwrap() / 0.1;
    let high_vol_ratio = correct_volatility(1.5, k, 1.0 / 365.0).unwrap() / 1.5;
    assert!(low_vol_ratio > high_vol_ratio);
}

#[test]
fn test_correction_error_cases() {
    assert!(matches!(
        spread_coefficient(0.0, 0.0),
        Err(PricingError::DivisionByZero { .. })
    ));
    assert!(matches!(
        correct_volatility(0.0, 0.2, 1.0 / 365.0),
        Err(PricingError::DivisionByZero { .. })
    ));

    // Crossed quote far enough out of line to push the radicand negative
    let k = spread_coefficient(0.1, 5.0).unwrap();
    assert!(k < 0.0);
    match correct_volatility(0.9, k, 1.0) {
        Err(PricingError::DomainError { radicand, .. }) => assert!(radicand < 0.0),
        other => panic!("expected DomainError, got {other:?}"),
    }
}

#[test]
fn test_full_pipeline_reference() {
    let pricing = price_with_leland(
        &reference_inputs(OptionSign::Call),
        &reference_quote(),
        1.0 / 365.0,
    )
    .unwrap();

    assert_close(pricing.vanilla_price, REFERENCE_CALL, 1e-10, "vanilla");
    assert_close(pricing.adjusted_price, REFERENCE_ADJUSTED_CALL, 1e-10, "adjusted");
    assert_close(
        pricing.adjusted_volatility,
        REFERENCE_ADJUSTED_VOL,
        1e-12,
        "adjusted vol",
    );
}

#[test]
fn test_pipeline_is_backend_independent() {
    let erf = LelandPricer::new();
    let statrs = LelandPricer::with_cdf(StatrsNormalCdf::default());
    for sign in [OptionSign::Call, OptionSign::Put] {
        let inputs = reference_inputs(sign);
        let a = erf.price(&inputs, &reference_quote(), 1.0 / 365.0).unwrap();
        let b = statrs.price(&inputs, &reference_quote(), 1.0 / 365.0).unwrap();
        assert_close(a.adjusted_price, b.adjusted_price, 1e-10, "backend agreement");
    }
}

#[test]
fn test_put_sweep_rises_with_interval() {
    let points = LelandPricer::new()
        .sweep(
            &reference_inputs(OptionSign::Put),
            &reference_quote(),
            &SweepConfig {
                start: 0.0,
                step: 1.0 / 365.0,
                steps: 8,
            },
        )
        .unwrap();

    assert_eq!(points.len(), 8);
    assert!(points
        .windows(2)
        .all(|w| w[1].adjusted_volatility > w[0].adjusted_volatility && w[1].price > w[0].price));
}

#[test]
fn test_locked_quote_sweep_is_flat() {
    let points = LelandPricer::new()
        .sweep(
            &reference_inputs(OptionSign::Call),
            &Quote::new(0.3, 0.3),
            &SweepConfig::default(),
        )
        .unwrap();
    assert!(points.iter().all(|p| p.price == points[0].price));
    assert_close(points[0].price, REFERENCE_CALL, 1e-10, "flat sweep");
}
