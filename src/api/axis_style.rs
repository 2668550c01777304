//! Shared axis and grid drawing constants.

/// Length of axis tick marks in pixels.
pub const AXIS_TICK_SIZE: f64 = 6.0;
/// Space between a tick mark and its label.
pub const AXIS_LABEL_PADDING: f64 = 3.0;
pub const AXIS_STROKE: &str = "#999999";
pub const GRID_STROKE: &str = "#DDDDDD";
/// Baseline shift (in line heights) that centers a label on its tick.
pub const AXIS_LABEL_CENTER_SHIFT: f64 = 0.32;
