use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::RawValue;
use crate::error::{ChartError, ChartResult};

/// Width used when the host does not report a usable container width.
pub const DEFAULT_WIDTH: f64 = 600.0;
pub const MOBILE_THRESHOLD: f64 = 500.0;
pub const SIDEBAR_THRESHOLD: f64 = 280.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Slopegraph,
    StackedColumn,
}

/// Responsive layout mode. Ordered from least to most constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Full,
    Mobile,
    Sidebar,
}

/// Width thresholds; a container at or below a threshold is in that class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub mobile: f64,
    pub sidebar: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: MOBILE_THRESHOLD,
            sidebar: SIDEBAR_THRESHOLD,
        }
    }
}

impl Breakpoints {
    /// Classifies `container_width`. Only slopegraphs have a sidebar class.
    #[must_use]
    pub fn classify(self, container_width: f64, kind: ChartKind) -> Breakpoint {
        if kind == ChartKind::Slopegraph && container_width <= self.sidebar {
            Breakpoint::Sidebar
        } else if container_width <= self.mobile {
            Breakpoint::Mobile
        } else {
            Breakpoint::Full
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Explicit per-margin values from configuration. `None` keeps the chart default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarginOverrides {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

impl MarginOverrides {
    fn apply(self, margins: Margins) -> Margins {
        Margins {
            top: self.top.unwrap_or(margins.top),
            right: self.right.unwrap_or(margins.right),
            bottom: self.bottom.unwrap_or(margins.bottom),
            left: self.left.unwrap_or(margins.left),
        }
    }
}

/// Parses a margin cell the way the copy sheet is read: the leading integer
/// of the text (`"12px"` is 12). Unparsable cells yield `None`.
#[must_use]
pub fn parse_margin_value(raw: &RawValue) -> Option<f64> {
    match raw {
        RawValue::Number(value) if value.is_finite() => Some(value.trunc()),
        RawValue::Number(_) | RawValue::Bool(_) => None,
        RawValue::Text(text) => {
            let trimmed = text.trim_start();
            let (sign, digits) = match trimmed.as_bytes().first() {
                Some(b'-') => (-1.0, &trimmed[1..]),
                Some(b'+') => (1.0, &trimmed[1..]),
                _ => (1.0, trimmed),
            };
            let end = digits
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(digits.len());
            digits[..end].parse::<f64>().ok().map(|value| sign * value)
        }
    }
}

/// Fixed per-chart table of aspect ratio and margins for one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LayoutRule {
    /// Width to height as `(w, h)`; `None` means a square plot area.
    aspect_ratio: Option<(f64, f64)>,
    margins: Margins,
}

fn layout_rule(kind: ChartKind, breakpoint: Breakpoint) -> LayoutRule {
    match (kind, breakpoint) {
        (ChartKind::Pie, _) => LayoutRule {
            aspect_ratio: None,
            margins: Margins::new(0.0, 15.0, 20.0, 15.0),
        },
        (ChartKind::Slopegraph, Breakpoint::Full) => LayoutRule {
            aspect_ratio: Some((5.0, 3.0)),
            margins: Margins::new(20.0, 185.0, 20.0, 40.0),
        },
        (ChartKind::Slopegraph, Breakpoint::Mobile) => LayoutRule {
            aspect_ratio: Some((5.0, 6.0)),
            margins: Margins::new(20.0, 145.0, 20.0, 40.0),
        },
        (ChartKind::Slopegraph, Breakpoint::Sidebar) => LayoutRule {
            aspect_ratio: Some((2.0, 3.0)),
            margins: Margins::new(20.0, 105.0, 20.0, 30.0),
        },
        (ChartKind::StackedColumn, Breakpoint::Full) => LayoutRule {
            aspect_ratio: Some((16.0, 9.0)),
            margins: Margins::new(5.0, 5.0, 20.0, 30.0),
        },
        (ChartKind::StackedColumn, _) => LayoutRule {
            aspect_ratio: Some((4.0, 3.0)),
            margins: Margins::new(5.0, 5.0, 20.0, 30.0),
        },
    }
}

/// Canvas geometry for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    pub container_width: f64,
    pub breakpoint: Breakpoint,
    pub chart_width: f64,
    pub chart_height: f64,
    pub margins: Margins,
}

impl LayoutGeometry {
    /// Full drawing surface width including margins.
    #[must_use]
    pub fn outer_width(self) -> f64 {
        self.chart_width + self.margins.left + self.margins.right
    }

    /// Full drawing surface height including margins; this is what the host
    /// receives as content height.
    #[must_use]
    pub fn outer_height(self) -> f64 {
        self.chart_height + self.margins.top + self.margins.bottom
    }

    /// Rejects geometry whose plot area collapsed because the container is
    /// narrower than the margins.
    pub fn validate(self) -> ChartResult<Self> {
        if !self.chart_width.is_finite()
            || !self.chart_height.is_finite()
            || self.chart_width <= 0.0
            || self.chart_height <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.chart_width,
                height: self.chart_height,
            });
        }
        Ok(self)
    }
}

/// Replaces a missing, zero or non-finite width with [`DEFAULT_WIDTH`].
#[must_use]
pub fn resolve_container_width(container_width: Option<f64>, default_width: f64) -> f64 {
    container_width
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or(default_width)
}

/// Computes the canvas geometry for `container_width`. Recomputed every render.
#[must_use]
pub fn compute_layout(
    container_width: f64,
    kind: ChartKind,
    overrides: MarginOverrides,
    breakpoints: Breakpoints,
) -> LayoutGeometry {
    let breakpoint = breakpoints.classify(container_width, kind);
    let rule = layout_rule(kind, breakpoint);
    let margins = overrides.apply(rule.margins);

    let chart_width = container_width - margins.left - margins.right;
    let chart_height = match rule.aspect_ratio {
        None => chart_width,
        Some((w, h)) => (container_width * h / w).ceil() - margins.top - margins.bottom,
    };

    debug!(
        container_width,
        ?kind,
        ?breakpoint,
        chart_width,
        chart_height,
        "computed layout"
    );

    LayoutGeometry {
        container_width,
        breakpoint,
        chart_width,
        chart_height,
        margins,
    }
}
