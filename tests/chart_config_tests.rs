use graphic_charts::ChartError;
use graphic_charts::api::ChartConfig;
use graphic_charts::core::{Breakpoints, CoercionPolicy, RawValue};

#[test]
fn config_reads_copy_sheet_keys() {
    let config = ChartConfig::from_json_str(
        r#"{
            "theme": "monochrome",
            "marginRight": "120px",
            "marginLeft": 25,
            "showLabels": "yes",
            "start_label": "2013",
            "end_label": "2016",
            "coercion": "permissive"
        }"#,
    )
    .expect("valid config");

    assert_eq!(config.theme.as_deref(), Some("monochrome"));
    let overrides = config.margin_overrides();
    assert_eq!(overrides.right, Some(120.0));
    assert_eq!(overrides.left, Some(25.0));
    assert_eq!(overrides.top, None);
    assert!(config.show_labels());
    assert_eq!(config.start_label(), "2013");
    assert_eq!(config.end_label(), "2016");
    assert_eq!(config.coercion, CoercionPolicy::Permissive);
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let config = ChartConfig::from_json_str("{}").expect("empty config");
    assert_eq!(config, ChartConfig::default());
    assert!(!config.show_labels());
    assert_eq!(config.breakpoints(), Breakpoints::default());
    assert_eq!(config.default_width(), 600.0);
    assert_eq!(config.coercion, CoercionPolicy::Strict);
    assert_eq!(config.start_label(), "");
}

#[test]
fn unparsable_margins_are_ignored() {
    let config = ChartConfig::default()
        .with_margin_right("wide")
        .with_margin_left(RawValue::Bool(true));
    let overrides = config.margin_overrides();
    assert_eq!(overrides.right, None);
    assert_eq!(overrides.left, None);
}

#[test]
fn empty_show_labels_is_false() {
    let config = ChartConfig::from_json_str(r#"{"showLabels": ""}"#).expect("config");
    assert!(!config.show_labels());
}

#[test]
fn malformed_json_is_invalid_config() {
    let result = ChartConfig::from_json_str("{ theme: ");
    assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn json_round_trip_keeps_settings() {
    let config = ChartConfig::default()
        .with_theme("highlighted")
        .with_axis_labels("Then", "Now")
        .with_margin_right(90.0)
        .with_coercion(CoercionPolicy::Permissive);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
    assert!(json.contains("\"start_label\""));
    assert!(json.contains("\"marginRight\""));
}

#[test]
fn custom_thresholds_and_width_are_honored() {
    let config = ChartConfig::from_json_str(
        r#"{"mobileThreshold": 640, "sidebarThreshold": 300, "defaultWidth": 720}"#,
    )
    .expect("config");
    assert_eq!(
        config.breakpoints(),
        Breakpoints {
            mobile: 640.0,
            sidebar: 300.0
        }
    );
    assert_eq!(config.default_width(), 720.0);
}
