use std::fmt::Write as _;

use tracing::debug;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ElementClass, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// SVG markup backend with a fixed declared canvas size.
///
/// Every `render` call rebuilds the whole document, so repeated passes never
/// accumulate stale geometry.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    viewport: Viewport,
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }

        Ok(Self {
            viewport,
            document: empty_document(viewport),
            last_stats: SvgRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Declared canvas size, used as the chart viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_document(
        &self,
        frame: &RenderFrame,
    ) -> Result<(String, SvgRenderStats), std::fmt::Error> {
        let mut out = String::with_capacity(
            256 + 96 * (frame.lines.len() + frame.rects.len() + frame.texts.len()),
        );
        let mut stats = SvgRenderStats::default();

        write_open_tag(&mut out, self.viewport)?;
        writeln!(
            out,
            r#"<g transform="translate({},{})">"#,
            fmt_coord(frame.plot.left),
            fmt_coord(frame.plot.top)
        )?;

        for text in &frame.texts {
            write!(
                out,
                r#"<text x="{}" y="{}" text-anchor="{}""#,
                fmt_coord(text.x),
                fmt_coord(text.y),
                text_anchor(text.h_align)
            )?;
            write_class(&mut out, text.class)?;
            writeln!(out, ">{}</text>", escape_text(&text.text))?;
            stats.texts_drawn += 1;
        }

        for line in &frame.lines {
            write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                fmt_coord(line.x1),
                fmt_coord(line.y1),
                fmt_coord(line.x2),
                fmt_coord(line.y2)
            )?;
            write_class(&mut out, line.class)?;
            writeln!(out, "/>")?;
            stats.lines_drawn += 1;
        }

        for rect in &frame.rects {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                fmt_coord(rect.x),
                fmt_coord(rect.y),
                fmt_coord(rect.width),
                fmt_coord(rect.height)
            )?;
            write_class(&mut out, rect.class)?;
            writeln!(out, "/>")?;
            stats.rects_drawn += 1;
        }

        writeln!(out, "</g>")?;
        writeln!(out, "</svg>")?;
        Ok((out, stats))
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        if frame.viewport != self.viewport {
            return Err(ChartError::InvalidData(format!(
                "frame viewport {}x{} does not match svg canvas {}x{}",
                frame.viewport.width,
                frame.viewport.height,
                self.viewport.width,
                self.viewport.height
            )));
        }

        let (document, stats) = self.write_document(frame).map_err(|err| {
            ChartError::InvalidData(format!("failed to write svg document: {err}"))
        })?;
        self.document = document;
        self.last_stats = stats;
        debug!(
            lines = stats.lines_drawn,
            rects = stats.rects_drawn,
            texts = stats.texts_drawn,
            "svg render pass"
        );
        Ok(())
    }
}

fn empty_document(viewport: Viewport) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n</svg>\n",
        viewport.width, viewport.height
    )
}

fn write_open_tag(out: &mut String, viewport: Viewport) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        viewport.width, viewport.height
    )
}

fn write_class(out: &mut String, class: ElementClass) -> std::fmt::Result {
    match class.class_name() {
        Some(name) => write!(out, r#" class="{name}""#),
        None => Ok(()),
    }
}

fn text_anchor(align: TextHAlign) -> &'static str {
    match align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    }
}

/// Compact coordinate text: integers without a fraction, others to 3 decimals.
fn fmt_coord(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
