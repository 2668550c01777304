use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{
    ClassList, LegendItem, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

/// One drawable element. Paint order is the order of the frame's element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Rect(RectPrimitive),
    Line(LinePrimitive),
    Path(PathPrimitive),
    Text(TextPrimitive),
}

impl Element {
    #[must_use]
    pub fn class(&self) -> &ClassList {
        match self {
            Self::Rect(rect) => &rect.class,
            Self::Line(line) => &line.class,
            Self::Path(path) => &path.class,
            Self::Text(text) => &text.class,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::Line(line) => line.validate(),
            Self::Path(path) => path.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

impl From<RectPrimitive> for Element {
    fn from(value: RectPrimitive) -> Self {
        Self::Rect(value)
    }
}

impl From<LinePrimitive> for Element {
    fn from(value: LinePrimitive) -> Self {
        Self::Line(value)
    }
}

impl From<PathPrimitive> for Element {
    fn from(value: PathPrimitive) -> Self {
        Self::Path(value)
    }
}

impl From<TextPrimitive> for Element {
    fn from(value: TextPrimitive) -> Self {
        Self::Text(value)
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Element coordinates are relative to the plot origin, which sits at
/// `(margin_left, margin_top)` of a `width` × `height` surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub width: f64,
    pub height: f64,
    pub origin_x: f64,
    pub origin_y: f64,
    pub elements: Vec<Element>,
    pub legend: Vec<LegendItem>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(width: f64, height: f64, origin_x: f64, origin_y: f64) -> Self {
        Self {
            width,
            height,
            origin_x,
            origin_y,
            elements: Vec::new(),
            legend: Vec::new(),
        }
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    #[must_use]
    pub fn with_element(mut self, element: impl Into<Element>) -> Self {
        self.push(element);
        self
    }

    /// Moves every element carrying `class` to the top of the paint stack,
    /// keeping their relative order. Returns how many elements moved.
    pub fn move_to_front(&mut self, class: &str) -> usize {
        let (front, rest): (Vec<Element>, Vec<Element>) = std::mem::take(&mut self.elements)
            .into_iter()
            .partition(|element| element.class().contains(class));
        let moved = front.len();
        self.elements = rest;
        self.elements.extend(front);
        moved
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.elements.iter().filter_map(|element| match element {
            Element::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.elements.iter().filter_map(|element| match element {
            Element::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.elements.iter().filter_map(|element| match element {
            Element::Path(path) => Some(path),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }

        for element in &self.elements {
            element.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::render::LinePrimitive;

    #[test]
    fn move_to_front_keeps_relative_order() {
        let mut frame = RenderFrame::new(100.0, 100.0, 0.0, 0.0)
            .with_element(LinePrimitive::new(0.0, 0.0, 1.0, 1.0, "#000").with_class("line a"))
            .with_element(LinePrimitive::new(0.0, 0.0, 2.0, 2.0, "#000").with_class("line b"))
            .with_element(LinePrimitive::new(0.0, 0.0, 3.0, 3.0, "#000").with_class("line a"));

        assert_eq!(frame.move_to_front("a"), 2);
        let ends: Vec<f64> = frame.lines().map(|line| line.x2).collect();
        assert_eq!(ends, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn class_match_is_token_based() {
        let mut frame = RenderFrame::new(10.0, 10.0, 0.0, 0.0)
            .with_element(LinePrimitive::new(0.0, 0.0, 1.0, 1.0, "#000").with_class("unaffiliated"));
        assert_eq!(frame.move_to_front("affiliated"), 0);
    }
}
