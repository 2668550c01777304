pub mod label_wrap;
pub mod layout;
pub mod markup;
pub mod normalize;
pub mod scale;
pub mod theme;
pub mod types;

pub use label_wrap::{
    HeuristicTextMeasurer, LabelWrapper, TextMeasurer, WrappedLabel, WrappedLine, wrap,
};
pub use layout::{
    Breakpoint, Breakpoints, ChartKind, DEFAULT_WIDTH, LayoutGeometry, MOBILE_THRESHOLD,
    MarginOverrides, Margins, SIDEBAR_THRESHOLD, compute_layout, parse_margin_value,
    resolve_container_width,
};
pub use markup::{classify, escape_xml, format_number, format_style, make_translate};
pub use normalize::{
    CoercionPolicy, DataNormalizer, LABEL_FIELD, NormalizedSeries, PieSlice, RESERVED_STACK_FIELDS,
    Segment, SeriesSpec, SlopeRow, StackSchema, StackedColumn, coerce_number,
};
pub use scale::{
    BandScale, LinearScale, OrdinalScale, SLOPEGRAPH_ROUND_FACTOR, STACKED_BAND_PADDING,
    STACKED_ROUND_FACTOR, SlopegraphScales, StackedColumnScales, slopegraph_value_domain,
    stacked_value_domain,
};
pub use theme::{
    BRAND_COLORS, ColorSequence, HIGHLIGHT_COLORS, MONOCHROME_COLORS, MULTI_COLORS, SINGLE_COLORS,
    Theme, ThemeSource, brand_color, resolve_colors,
};
pub use types::{RawValue, Record};
