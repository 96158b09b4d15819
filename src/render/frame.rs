use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{ElementClass, LinePrimitive, RectPrimitive, TextPrimitive};

/// Everything one chart pass draws, independent of the backend.
///
/// Primitive coordinates are relative to the plot origin
/// (`plot.left`, `plot.top`); backends apply that translation once.
/// Backends draw texts first, then lines, then rects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, plot: PlotArea) -> Self {
        Self {
            viewport,
            plot,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    /// Number of lines, rects and texts tagged with `class`.
    #[must_use]
    pub fn count_class(&self, class: ElementClass) -> usize {
        self.lines.iter().filter(|l| l.class == class).count()
            + self.rects.iter().filter(|r| r.class == class).count()
            + self.texts.iter().filter(|t| t.class == class).count()
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.lines.len() + self.rects.len() + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }

    /// Rejects a collapsed canvas, a non-finite plot origin and any invalid primitive.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        let plot = self.plot;
        if ![plot.left, plot.top, plot.width, plot.height]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ChartError::InvalidData(
                "plot area must be finite".to_owned(),
            ));
        }

        self.lines.iter().try_for_each(|line| line.validate())?;
        self.rects.iter().try_for_each(|rect| rect.validate())?;
        self.texts.iter().try_for_each(TextPrimitive::validate)
    }
}
