//! graphic-charts: responsive chart pipeline for embedded news graphics.
//!
//! Raw spreadsheet-style records flow through normalization, theme
//! resolution, breakpoint layout, scale building and label wrapping into a
//! deterministic `RenderFrame` that any `Renderer` backend can draw.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, HeightSink, RenderReport};
pub use error::{ChartError, ChartResult};
