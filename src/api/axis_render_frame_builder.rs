use crate::core::PlotArea;
use crate::render::{ElementClass, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{AxisTick, LabelOffset};

/// Vertical gridlines reach this far below the baseline, up to the labels.
pub const TIME_GRID_OVERHANG_PX: f64 = 3.0;
/// Horizontal gridlines reach one pixel past the right plot edge.
pub const VALUE_GRID_OVERHANG_PX: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
pub(super) struct AxisRenderContext<'a> {
    pub plot: PlotArea,
    pub time_ticks: &'a [AxisTick],
    pub value_ticks: &'a [AxisTick],
    pub time_label_offset: LabelOffset,
    pub value_label_offset: LabelOffset,
}

pub(super) fn append_axis_primitives(frame: &mut RenderFrame, ctx: AxisRenderContext<'_>) {
    let baseline = ctx.plot.baseline();
    let time_label_y = baseline + TIME_GRID_OVERHANG_PX + ctx.time_label_offset.dy;

    for tick in ctx.time_ticks {
        frame.texts.push(TextPrimitive::new(
            tick.label.clone(),
            tick.position + ctx.time_label_offset.dx,
            time_label_y,
            TextHAlign::Center,
            ElementClass::TimeAxis,
        ));
    }
    for tick in ctx.time_ticks {
        frame.lines.push(LinePrimitive::vertical(
            tick.position,
            baseline + TIME_GRID_OVERHANG_PX,
            0.0,
            ElementClass::TimeAxis,
        ));
    }

    for tick in ctx.value_ticks {
        frame.texts.push(TextPrimitive::new(
            tick.label.clone(),
            ctx.value_label_offset.dx,
            tick.position + ctx.value_label_offset.dy,
            TextHAlign::Right,
            ElementClass::ValueAxis,
        ));
    }
    for tick in ctx.value_ticks {
        let class = if tick.is_zero() {
            ElementClass::ZeroLine
        } else {
            ElementClass::ValueAxis
        };
        frame.lines.push(LinePrimitive::horizontal(
            tick.position,
            0.0,
            ctx.plot.width + VALUE_GRID_OVERHANG_PX,
            class,
        ));
    }
}
