use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Built-in palette families selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Monochrome,
    Multicolor,
    Single,
    Highlight,
}

impl Theme {
    /// Parses a theme token exactly as written. `highlighted` is an accepted
    /// spelling of `highlight`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "monochrome" => Some(Self::Monochrome),
            "multicolor" => Some(Self::Multicolor),
            "single" => Some(Self::Single),
            "highlight" | "highlighted" => Some(Self::Highlight),
            _ => None,
        }
    }

    #[must_use]
    pub fn palette(self) -> &'static [&'static str] {
        match self {
            Self::Monochrome => &MONOCHROME_COLORS,
            Self::Multicolor => &MULTI_COLORS,
            Self::Single => &SINGLE_COLORS,
            Self::Highlight => &HIGHLIGHT_COLORS,
        }
    }
}

pub const MULTI_COLORS: [&str; 7] = [
    "#1F79CD", "#FF7C0A", "#00B3A7", "#D662B1", "#71A12D", "#926CB5", "#F55446",
];

pub const MONOCHROME_COLORS: [&str; 7] = [
    "#1B79CC", "#47A6FF", "#136C9C", "#8796A1", "#2B4E78", "#5686B0", "#5E6F7A",
];

pub const SINGLE_COLORS: [&str; 1] = ["#478CCC"];

pub const HIGHLIGHT_COLORS: [&str; 1] = ["#CCCCCC"];

/// Reserved party-brand tokens and the colors they stand for.
pub const BRAND_COLORS: [(&str, &str); 6] = [
    ("ptyalp", "#C04745"),
    ("ptylab", "#C04745"),
    ("ptylib", "#4776BE"),
    ("ptylnp", "#4776BE"),
    ("ptynat", "#009966"),
    ("ptygrn", "#86AB00"),
];

#[must_use]
pub fn brand_color(token: &str) -> Option<&'static str> {
    BRAND_COLORS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, hex)| *hex)
}

/// Theme-related configuration inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeSource<'a> {
    pub theme: Option<&'a str>,
    pub colors: Option<&'a str>,
}

/// Ordered colors assigned to categories by index, reused cyclically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSequence {
    colors: Vec<String>,
}

impl ColorSequence {
    /// Builds a sequence; an empty list falls back to the multicolor palette.
    #[must_use]
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            return Self::from_palette(&MULTI_COLORS);
        }
        Self { colors }
    }

    #[must_use]
    pub fn from_palette(palette: &[&str]) -> Self {
        Self {
            colors: palette.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    /// Color for the `index`-th category, wrapping around the palette.
    #[must_use]
    pub fn color_at(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Resolves the color sequence for one render.
///
/// A set theme wins over an explicit color list; an unknown theme name
/// (including a whitespace-only one) falls back to `default_sequence`.
/// Brand tokens are then replaced in place.
#[must_use]
pub fn resolve_colors(source: ThemeSource<'_>, default_sequence: &[&str]) -> ColorSequence {
    let candidates: Vec<String> = match (non_empty(source.theme), non_empty(source.colors)) {
        (Some(name), _) => match Theme::from_name(name) {
            Some(theme) => to_owned_list(theme.palette()),
            None => {
                warn!(theme = name, "unknown theme, using default palette");
                to_owned_list(default_sequence)
            }
        },
        (None, Some(list)) => list.split(',').map(|c| c.trim().to_owned()).collect(),
        (None, None) => to_owned_list(default_sequence),
    };

    let colors: Vec<String> = candidates
        .into_iter()
        .map(|color| match brand_color(&color) {
            Some(hex) => hex.to_owned(),
            None => color,
        })
        .collect();
    debug!(count = colors.len(), "resolved color sequence");
    ColorSequence::new(colors)
}

// Any non-empty string counts as set, whitespace included.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn to_owned_list(palette: &[&str]) -> Vec<String> {
    palette.iter().map(|c| (*c).to_owned()).collect()
}
