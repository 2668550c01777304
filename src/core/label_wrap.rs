//! Greedy multi-line label layout.
//!
//! Wrapping depends on rendered text widths, which only the drawing backend
//! knows. The backend is therefore injected as a [`TextMeasurer`] so layout is
//! a pure function of `(text, width budget, line height, measurer)`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Default label font size in pixels, used by the heuristic measurer.
pub const DEFAULT_FONT_SIZE_PX: f64 = 12.0;

/// Measures single-line text at the backend's current font.
pub trait TextMeasurer {
    /// Rendered width of `text` in pixels.
    fn width(&self, text: &str) -> f64;

    /// Rendered height of one line of text in pixels.
    fn line_height(&self) -> f64 {
        DEFAULT_FONT_SIZE_PX
    }
}

impl<F> TextMeasurer for F
where
    F: Fn(&str) -> f64,
{
    fn width(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Fixed-advance estimate (0.6 em per character) for headless rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicTextMeasurer {
    pub font_size_px: f64,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self {
            font_size_px: DEFAULT_FONT_SIZE_PX,
        }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn width(&self, text: &str) -> f64 {
        0.6 * self.font_size_px * text.chars().count() as f64
    }

    fn line_height(&self) -> f64 {
        self.font_size_px
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedLine {
    pub text: String,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WrappedLabel {
    pub lines: Vec<WrappedLine>,
}

impl WrappedLabel {
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }
}

/// Width budget, line spacing and anchor offsets for one kind of label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelWrapper {
    pub max_width: f64,
    pub line_height: f64,
    pub anchor_dx: f64,
    pub anchor_dy: f64,
}

impl LabelWrapper {
    #[must_use]
    pub fn new(max_width: f64, line_height: f64) -> Self {
        Self {
            max_width,
            line_height,
            anchor_dx: 0.0,
            anchor_dy: 0.0,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, dx: f64, dy: f64) -> Self {
        self.anchor_dx = dx;
        self.anchor_dy = dy;
        self
    }

    /// Splits `text` on whitespace and fills lines greedily.
    ///
    /// A word that overflows the current line starts the next one. A word that
    /// is wider than the budget on its own still gets a line to itself and is
    /// never split. Line `i` sits at `anchor_dy + i * line_height`.
    #[must_use]
    pub fn wrap<M: TextMeasurer + ?Sized>(&self, text: &str, measurer: &M) -> WrappedLabel {
        let mut closed: Vec<String> = Vec::new();
        let mut current: SmallVec<[&str; 8]> = SmallVec::new();

        for word in text.split_whitespace() {
            current.push(word);
            if current.len() > 1 && measurer.width(&current.join(" ")) > self.max_width {
                current.pop();
                closed.push(current.join(" "));
                current.clear();
                current.push(word);
            }
        }
        if !current.is_empty() {
            closed.push(current.join(" "));
        }

        WrappedLabel {
            lines: closed
                .into_iter()
                .enumerate()
                .map(|(index, text)| WrappedLine {
                    text,
                    dx: self.anchor_dx,
                    dy: self.anchor_dy + index as f64 * self.line_height,
                })
                .collect(),
        }
    }
}

/// Wraps `text` at anchor offset zero.
#[must_use]
pub fn wrap<M: TextMeasurer + ?Sized>(
    text: &str,
    max_width: f64,
    line_height: f64,
    measurer: &M,
) -> WrappedLabel {
    LabelWrapper::new(max_width, line_height).wrap(text, measurer)
}

#[cfg(test)]
mod tests {
    use super::{HeuristicTextMeasurer, TextMeasurer, wrap};

    #[test]
    fn heuristic_measurer_scales_with_font_size() {
        let m = HeuristicTextMeasurer { font_size_px: 10.0 };
        assert_eq!(m.width("abcd"), 24.0);
        assert_eq!(m.line_height(), 10.0);
    }

    #[test]
    fn whitespace_only_text_has_no_lines() {
        let measure = |s: &str| s.len() as f64;
        assert_eq!(wrap("   ", 10.0, 16.0, &measure).line_count(), 0);
    }
}
