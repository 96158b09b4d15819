use crate::error::ChartResult;
use crate::render::{ElementClass, RenderFrame, Renderer};

/// Headless renderer that validates each frame and keeps its counts.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    /// Stems plus bars in the last frame.
    pub last_mark_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.last_mark_count =
            frame.count_class(ElementClass::ValueMark) + frame.count_class(ElementClass::Bar);
        self.frames_rendered += 1;
        Ok(())
    }
}
