mod frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::{Element, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    ClassList, LegendItem, LinePrimitive, PathPrimitive, RectPrimitive, TextAnchor, TextPrimitive,
};
pub use svg_renderer::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame`, so
/// drawing code stays isolated from data, theme and layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
