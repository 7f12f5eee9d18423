
use leland_lib::{
    default_configs, render_sweep_svg, run_scenario, write_sweep_csv, CdfChoice, OptionSign,
    PricerConfig,
};
use test_utils::{assert_close, REFERENCE_ADJUSTED_CALL, REFERENCE_CALL};

const REFERENCE_TOML: &str = include_str!("../demos/data/reference.toml");

#[test]
fn test_reference_toml_matches_builtin_reference() {
    let from_file = PricerConfig::from_toml_str(REFERENCE_TOML).expect("reference.toml parses");
    let builtin = default_configs::reference();

    assert_eq!(from_file.scenario.spot, builtin.scenario.spot);
    assert_eq!(from_file.scenario.option_type, OptionSign::Call);
    assert_eq!(from_file.sweep.steps, builtin.sweep.steps);
    assert_close(
        from_file.scenario.hedging_interval,
        builtin.scenario.hedging_interval,
        1e-15,
        "hedging interval",
    );
    assert_close(from_file.sweep.step, builtin.sweep.step, 1e-15, "sweep step");
    assert_eq!(from_file.cdf, CdfChoice::Erf);
}

#[test]
fn test_run_reference_scenario() {
    let report = run_scenario(&default_configs::reference()).unwrap();

    assert_close(report.pricing.vanilla_price, REFERENCE_CALL, 1e-10, "vanilla");
    assert_close(
        report.pricing.adjusted_price,
        REFERENCE_ADJUSTED_CALL,
        1e-10,
        "adjusted",
    );
    assert_eq!(report.sweep.len(), 10);
    assert_eq!(report.sweep[0].price, report.pricing.vanilla_price);
}

#[test]
fn test_run_scenario_with_statrs_put() {
    let mut config = default_configs::reference();
    config.cdf = CdfChoice::Statrs;
    config.scenario.option_type = OptionSign::Put;

    let report = run_scenario(&config).unwrap();
    assert_eq!(report.inputs.sign, OptionSign::Put);
    assert!(report.pricing.adjusted_price > report.pricing.vanilla_price);
}

#[test]
fn test_run_scenario_reports_invalid_inputs() {
    let mut config = default_configs::reference();
    config.scenario.volatility = 0.0;
    let err = run_scenario(&config).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("invalid scenario inputs"), "{chain}");
    assert!(chain.contains("volatility"), "{chain}");
}

#[test]
fn test_sweep_exports() {
    let report = run_scenario(&default_configs::reference()).unwrap();

    let mut csv = Vec::new();
    write_sweep_csv(&report.sweep, &mut csv).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    assert_eq!(csv.lines().count(), report.sweep.len() + 1);

    let svg = render_sweep_svg(&report.sweep, report.inputs.sign, (800, 600)).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("value of call option"));
}
