use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless pipelines.
///
/// It still validates frame content so tests catch invalid geometry without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_element_count: usize,
    pub last_text_count: usize,
    pub last_legend_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_element_count = frame.elements.len();
        self.last_text_count = frame.texts().count();
        self.last_legend_count = frame.legend.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
