use tracing::debug;

use crate::core::{TimeScale, ValueScale, bar_slot_width, project_bars, project_stems};
use crate::error::ChartResult;
use crate::render::{ElementClass, LinePrimitive, RectPrimitive, RenderFrame, Renderer};

use super::axis_render_frame_builder::{AxisRenderContext, append_axis_primitives};
use super::{ChartData, ChartEngine, ChartMode, time_axis_ticks, value_axis_ticks};

impl<R: Renderer> ChartEngine<R> {
    /// Materializes axes and marks for `data` without touching the renderer.
    ///
    /// The output is deterministic for identical input and config.
    pub fn build_render_frame(&self, data: &ChartData) -> ChartResult<RenderFrame> {
        let config = self.config;
        let plot = config.plot_area()?;
        let mut frame = RenderFrame::new(config.viewport, plot);

        let (value_min, value_max) = data.domain.value_range();
        let value_scale = ValueScale::new(value_min, value_max, plot.height)?;
        let time_scale = match data.domain.time {
            Some((time_from, time_to)) => Some(TimeScale::new(time_from, time_to, plot.width)?),
            None => None,
        };

        let time_ticks = time_scale
            .map(|scale| time_axis_ticks(scale, config.time_tick_hint))
            .unwrap_or_default();
        let value_ticks = value_axis_ticks(value_scale, config.value_tick_hint);
        append_axis_primitives(
            &mut frame,
            AxisRenderContext {
                plot,
                time_ticks: &time_ticks,
                value_ticks: &value_ticks,
                time_label_offset: config.time_label_offset,
                value_label_offset: config.value_label_offset,
            },
        );

        if let Some(time_scale) = time_scale {
            append_mark_primitives(&mut frame, data, time_scale, value_scale, plot.width)?;
        }

        debug!(
            mode = ?data.mode,
            points = data.series.points.len(),
            time_ticks = time_ticks.len(),
            value_ticks = value_ticks.len(),
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            "built render frame"
        );
        Ok(frame)
    }
}

fn append_mark_primitives(
    frame: &mut RenderFrame,
    data: &ChartData,
    time_scale: TimeScale,
    value_scale: ValueScale,
    plot_width: f64,
) -> ChartResult<()> {
    let points = &data.series.points;
    match data.mode {
        ChartMode::Line => {
            for stem in project_stems(points, time_scale, value_scale) {
                frame.lines.push(LinePrimitive::vertical(
                    stem.x,
                    stem.y_baseline,
                    stem.y_value,
                    ElementClass::ValueMark,
                ));
            }
        }
        ChartMode::Bar => {
            let Some(bar_width) = bar_slot_width(plot_width, data.series.sample_count) else {
                return Ok(());
            };
            for bar in project_bars(points, time_scale, value_scale, bar_width)? {
                frame.rects.push(RectPrimitive::new(
                    bar.x,
                    bar.y_top,
                    bar.width,
                    bar.height,
                    ElementClass::Bar,
                ));
            }
        }
    }
    Ok(())
}
