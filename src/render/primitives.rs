use serde::{Deserialize, Serialize};

use crate::core::{WrappedLabel, WrappedLine};
use crate::error::{ChartError, ChartResult};

/// Space-separated class tokens attached to an element, used for styling
/// and for z-order overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassList(String);

impl ClassList {
    #[must_use]
    pub fn new(classes: impl Into<String>) -> Self {
        Self(classes.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.split_whitespace().any(|token| token == class)
    }
}

fn check_coordinate(name: &str, value: f64) -> ChartResult<()> {
    // NaN is tolerated: permissive coercion degrades to invisible shapes.
    if value.is_infinite() {
        return Err(ChartError::InvalidData(format!(
            "{name} coordinate must not be infinite"
        )));
    }
    Ok(())
}

/// Axis-aligned filled rectangle in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub class: ClassList,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: fill.into(),
            class: ClassList::default(),
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = ClassList::new(class);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        check_coordinate("rect x", self.x)?;
        check_coordinate("rect y", self.y)?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Stroked straight segment in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub class: ClassList,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: impl Into<String>) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke: stroke.into(),
            stroke_width: 1.0,
            class: ClassList::default(),
        }
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = ClassList::new(class);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("line x1", self.x1),
            ("line y1", self.y1),
            ("line x2", self.x2),
            ("line y2", self.y2),
        ] {
            check_coordinate(name, value)?;
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Filled outline described by SVG path data, translated by `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub x: f64,
    pub y: f64,
    pub data: String,
    pub fill: String,
    pub class: ClassList,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, data: impl Into<String>, fill: impl Into<String>) -> Self {
        Self {
            x,
            y,
            data: data.into(),
            fill: fill.into(),
            class: ClassList::default(),
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = ClassList::new(class);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        check_coordinate("path x", self.x)?;
        check_coordinate("path y", self.y)
    }
}

/// Horizontal anchor of a text run relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Text run with one or more lines, each offset from `(x, y)` by its own
/// `dx`/`dy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub x: f64,
    pub y: f64,
    pub lines: Vec<WrappedLine>,
    pub anchor: TextAnchor,
    pub fill: Option<String>,
    pub class: ClassList,
    pub hidden: bool,
}

impl TextPrimitive {
    /// Single-line text at `(x, y)` shifted by `(dx, dy)`.
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self::offset(text, x, y, 0.0, 0.0)
    }

    #[must_use]
    pub fn offset(text: impl Into<String>, x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self {
            x,
            y,
            lines: vec![WrappedLine {
                text: text.into(),
                dx,
                dy,
            }],
            anchor: TextAnchor::Start,
            fill: None,
            class: ClassList::default(),
            hidden: false,
        }
    }

    #[must_use]
    pub fn wrapped(label: WrappedLabel, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            lines: label.lines,
            anchor: TextAnchor::Start,
            fill: None,
            class: ClassList::default(),
            hidden: false,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = ClassList::new(class);
        self
    }

    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// All lines joined by a space.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn validate(&self) -> ChartResult<()> {
        check_coordinate("text x", self.x)?;
        check_coordinate("text y", self.y)?;
        for line in &self.lines {
            if !line.dx.is_finite() || !line.dy.is_finite() {
                return Err(ChartError::InvalidData(
                    "text line offsets must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// One entry of a chart's color key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    pub label: String,
    pub color: String,
    pub class: ClassList,
}
