mod axis_style;
mod chart_config;
mod engine;
mod pie_frame_builder;
mod slopegraph_frame_builder;
mod stacked_column_frame_builder;

pub use axis_style::{
    AXIS_LABEL_CENTER_SHIFT, AXIS_LABEL_PADDING, AXIS_STROKE, AXIS_TICK_SIZE, GRID_STROKE,
};
pub use chart_config::ChartConfig;
pub use engine::{ChartEngine, HeightSink, RenderReport, default_palette};
pub use pie_frame_builder::{PIE_RADIUS_INSET, PieArc, build_pie_frame, pie_layout};
pub use slopegraph_frame_builder::{
    LABEL_LINE_HEIGHT, LINE_STROKE_WIDTH, VALUE_BASELINE_SHIFT, VALUE_OFFSET,
    build_slopegraph_frame, format_percent, label_gap,
};
pub use stacked_column_frame_builder::{VALUE_GAP, VALUE_TICK_COUNT, build_stacked_column_frame};
