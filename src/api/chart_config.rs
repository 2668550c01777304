use serde::{Deserialize, Serialize};

use crate::core::{
    Breakpoints, CoercionPolicy, DEFAULT_WIDTH, MOBILE_THRESHOLD, MarginOverrides, RawValue,
    SIDEBAR_THRESHOLD, ThemeSource, parse_margin_value,
};
use crate::error::{ChartError, ChartResult};

/// Per-graphic options, read from the graphic's copy sheet.
///
/// Every field is optional; missing or unparsable values fall back to the
/// chart kind's defaults rather than failing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub colors: Option<String>,
    #[serde(default)]
    pub margin_top: Option<RawValue>,
    #[serde(default)]
    pub margin_right: Option<RawValue>,
    #[serde(default)]
    pub margin_bottom: Option<RawValue>,
    #[serde(default)]
    pub margin_left: Option<RawValue>,
    #[serde(default)]
    pub show_labels: Option<RawValue>,
    #[serde(default, rename = "start_label")]
    pub start_label: Option<String>,
    #[serde(default, rename = "end_label")]
    pub end_label: Option<String>,
    #[serde(default)]
    pub mobile_threshold: Option<f64>,
    #[serde(default)]
    pub sidebar_threshold: Option<f64>,
    #[serde(default)]
    pub default_width: Option<f64>,
    #[serde(default)]
    pub coercion: CoercionPolicy,
}

impl ChartConfig {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize chart config: {e}")))
    }

    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: impl Into<String>) -> Self {
        self.colors = Some(colors.into());
        self
    }

    #[must_use]
    pub fn with_show_labels(mut self, show: bool) -> Self {
        self.show_labels = Some(RawValue::Bool(show));
        self
    }

    #[must_use]
    pub fn with_axis_labels(
        mut self,
        start_label: impl Into<String>,
        end_label: impl Into<String>,
    ) -> Self {
        self.start_label = Some(start_label.into());
        self.end_label = Some(end_label.into());
        self
    }

    #[must_use]
    pub fn with_margin_right(mut self, value: impl Into<RawValue>) -> Self {
        self.margin_right = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_margin_left(mut self, value: impl Into<RawValue>) -> Self {
        self.margin_left = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_coercion(mut self, coercion: CoercionPolicy) -> Self {
        self.coercion = coercion;
        self
    }

    #[must_use]
    pub fn theme_source(&self) -> ThemeSource<'_> {
        ThemeSource {
            theme: self.theme.as_deref(),
            colors: self.colors.as_deref(),
        }
    }

    #[must_use]
    pub fn margin_overrides(&self) -> MarginOverrides {
        let parse = |raw: &Option<RawValue>| raw.as_ref().and_then(parse_margin_value);
        MarginOverrides {
            top: parse(&self.margin_top),
            right: parse(&self.margin_right),
            bottom: parse(&self.margin_bottom),
            left: parse(&self.margin_left),
        }
    }

    #[must_use]
    pub fn show_labels(&self) -> bool {
        self.show_labels.as_ref().is_some_and(RawValue::is_truthy)
    }

    #[must_use]
    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            mobile: self.mobile_threshold.unwrap_or(MOBILE_THRESHOLD),
            sidebar: self.sidebar_threshold.unwrap_or(SIDEBAR_THRESHOLD),
        }
    }

    #[must_use]
    pub fn default_width(&self) -> f64 {
        self.default_width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(DEFAULT_WIDTH)
    }

    #[must_use]
    pub fn start_label(&self) -> &str {
        self.start_label.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn end_label(&self) -> &str {
        self.end_label.as_deref().unwrap_or_default()
    }
}
