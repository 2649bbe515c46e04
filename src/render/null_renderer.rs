use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op backend used by tests and headless model evaluation.
///
/// It still validates frame content so invalid geometry is caught without a
/// real drawing surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_path_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_path_count = frame.paths.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
