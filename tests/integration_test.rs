use assert_approx_eq::assert_approx_eq;

use population_growth::{
    analysis::{generate, generate_series, GrowthAnalyzer, GrowthSeriesGenerator, SeriesSummary},
    config::{ChartOptions, DashboardConfig, InputBounds},
    error::GrowthError,
    io::{self, CsvFormat, JsonFormat, SeriesWriter},
    models::{GrowthParameters, Trend},
    visualization::{format_line_chart, format_series_table, format_summary_table},
};

fn values(n0: f64, r: f64, t_max: i64) -> Vec<f64> {
    generate(n0, r, t_max).unwrap().values()
}

#[test]
fn test_growth_scenario_three_decimals() {
    let expected = [100.000, 122.140, 149.182, 182.212, 222.554, 271.828];
    let got = values(100.0, 0.2, 5);
    assert_eq!(got.len(), expected.len());
    for (g, e) in got.iter().zip(expected.iter()) {
        assert_approx_eq!(*g, *e, 0.0005);
    }
}

#[test]
fn test_decline_scenario_three_decimals() {
    let expected = [100.000, 90.484, 81.873, 74.082];
    let got = values(100.0, -0.1, 3);
    for (g, e) in got.iter().zip(expected.iter()) {
        assert_approx_eq!(*g, *e, 0.0005);
    }
}

#[test]
fn test_zero_population_boundary() {
    assert!(values(0.0, 0.5, 10).iter().all(|n| *n == 0.0));
}

#[test]
fn test_invalid_argument_is_the_only_failure_kind() {
    let cases: [(f64, f64, i64); 5] = [
        (100.0, 0.2, -1),
        (f64::NAN, 0.2, 5),
        (f64::INFINITY, 0.2, 5),
        (100.0, f64::NAN, 5),
        (100.0, f64::NEG_INFINITY, 5),
    ];
    for (n0, r, t_max) in cases {
        let err = generate(n0, r, t_max).unwrap_err();
        assert!(matches!(err, GrowthError::InvalidArgument(_)), "{err}");
    }
}

#[test]
fn test_non_integer_horizon_rejected() {
    let err = GrowthParameters::from_real(100.0, 0.2, 3.5).unwrap_err();
    assert!(matches!(err, GrowthError::InvalidArgument(_)));
}

#[test]
fn test_overflow_propagates_through_pipeline() {
    let params = GrowthParameters::new(1000.0, 5.0, 10_000).unwrap();
    let analyzer = GrowthAnalyzer::new(&params);
    let series = analyzer.series();
    assert_eq!(series.len(), 10_001);
    assert_eq!(series.last().unwrap().n, f64::INFINITY);

    let summary = analyzer.summary();
    assert!(summary.overflowed);
    assert!(format_series_table(&series).contains("inf"));
    assert!(format_line_chart(&series, &ChartOptions::default()).contains('^'));

    let csv = String::from_utf8(io::series_to_csv_bytes(&series).unwrap()).unwrap();
    assert!(csv.lines().last().unwrap().ends_with("inf"));
}

#[test]
fn test_component_and_free_function_agree() {
    let a = GrowthSeriesGenerator::new().generate(12.0, 0.07, 30).unwrap();
    let b = generate(12.0, 0.07, 30).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_full_render_pipeline() {
    let params = InputBounds::classic().default_parameters().unwrap();
    let series = generate_series(&params);
    let summary = SeriesSummary::compute(&params, &series);

    assert_eq!(summary.trend, Trend::Increasing);
    let summary_text = format_summary_table(&summary);
    assert!(summary_text.contains("N(t) = 100 * e^(0.2 * t)"));

    let table = format_series_table(&series);
    assert!(table.contains("5459.815"));

    let chart = format_line_chart(&series, &ChartOptions { width: 40, height: 10 });
    assert!(chart.contains("t (time)"));
}

#[test]
fn test_bounds_are_policy_not_core() {
    let params = GrowthParameters::new(-500.0, -4.0, 50_000).unwrap();
    assert!(InputBounds::extended().check(&params).is_err());
    assert_eq!(generate_series(&params).len(), 50_001);
}

#[test]
fn test_config_driven_defaults() {
    let config = DashboardConfig::from_toml_str("preset = \"extended\"").unwrap();
    let params = config.input_bounds().default_parameters().unwrap();
    assert_eq!(params.t_max(), 20);
    assert!(config.input_bounds().check(&params).is_ok());
}

#[test]
fn test_export_writers() {
    let params = GrowthParameters::new(100.0, 0.2, 5).unwrap();
    let series = generate_series(&params);
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("out.csv");
    CsvFormat.write(&params, &series, &csv_path).unwrap();
    let mut rdr = csv::Reader::from_path(&csv_path).unwrap();
    let rows: Vec<(u32, f64)> = rdr.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 6);
    assert_approx_eq!(rows[5].1, 271.828, 0.001);

    let json_path = dir.path().join("out.json");
    JsonFormat { pretty: false }
        .write(&params, &series, &json_path)
        .unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["summary"]["t_max"], 5);
}
