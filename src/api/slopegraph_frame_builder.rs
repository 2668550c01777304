use tracing::warn;

use crate::core::{
    Breakpoint, ColorSequence, LabelWrapper, LayoutGeometry, SlopeRow, SlopegraphScales,
    TextMeasurer, classify, format_number,
};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, RenderFrame, TextAnchor, TextPrimitive};

use super::axis_style::{AXIS_LABEL_PADDING, AXIS_STROKE, AXIS_TICK_SIZE};

/// Line spacing of wrapped row labels.
pub const LABEL_LINE_HEIGHT: f64 = 16.0;
/// Horizontal gap between a value text and its line end.
pub const VALUE_OFFSET: f64 = 6.0;
/// Baseline nudge that vertically centers values and labels on line ends.
pub const VALUE_BASELINE_SHIFT: f64 = 3.0;
pub const LINE_STROKE_WIDTH: f64 = 3.0;

/// Distance from the end axis to the wrapped row labels.
#[must_use]
pub fn label_gap(breakpoint: Breakpoint) -> f64 {
    if breakpoint == Breakpoint::Sidebar {
        32.0
    } else {
        42.0
    }
}

/// Value text; narrow sidebar layouts round to whole percents.
#[must_use]
pub fn format_percent(value: f64, breakpoint: Breakpoint) -> String {
    if breakpoint == Breakpoint::Sidebar {
        format!("{}%", format_number(value.round()))
    } else {
        format!("{}%", format_number(value))
    }
}

/// Builds the slopegraph frame: start/end axes, one line per row, start and
/// end value texts, and wrapped row labels to the right of the end axis.
pub fn build_slopegraph_frame<M: TextMeasurer + ?Sized>(
    rows: &[SlopeRow],
    geometry: LayoutGeometry,
    colors: &ColorSequence,
    start_label: &str,
    end_label: &str,
    measurer: &M,
) -> ChartResult<RenderFrame> {
    if start_label == end_label {
        warn!(start_label, "slopegraph axis labels are equal, lines collapse to one column");
    }
    let scales = SlopegraphScales::build(rows, geometry, start_label, end_label)?;
    let x_start = scales.x.map(start_label).unwrap_or(0.0);
    let x_end = scales.x.map(end_label).unwrap_or(x_start);
    let breakpoint = geometry.breakpoint;

    let mut frame = RenderFrame::new(
        geometry.outer_width(),
        geometry.outer_height(),
        geometry.margins.left,
        geometry.margins.top,
    );

    // Top and bottom axes share the two column labels.
    let text_height = measurer.line_height();
    for (label, x) in [(start_label, x_start), (end_label, x_end)] {
        frame.push(
            LinePrimitive::new(x, 0.0, x, -AXIS_TICK_SIZE, AXIS_STROKE).with_class("x axis top"),
        );
        frame.push(
            TextPrimitive::new(label, x, -(AXIS_TICK_SIZE + AXIS_LABEL_PADDING))
                .with_anchor(TextAnchor::Middle)
                .with_class("x axis top"),
        );
        frame.push(
            LinePrimitive::new(
                x,
                geometry.chart_height,
                x,
                geometry.chart_height + AXIS_TICK_SIZE,
                AXIS_STROKE,
            )
            .with_class("x axis bottom"),
        );
        frame.push(
            TextPrimitive::offset(
                label,
                x,
                geometry.chart_height + AXIS_TICK_SIZE + AXIS_LABEL_PADDING,
                0.0,
                0.71 * text_height,
            )
            .with_anchor(TextAnchor::Middle)
            .with_class("x axis bottom"),
        );
    }

    for (index, row) in rows.iter().enumerate() {
        frame.push(
            LinePrimitive::new(
                x_start,
                scales.y.map(row.start),
                x_end,
                scales.y.map(row.end),
                colors.color_at(index),
            )
            .with_stroke_width(LINE_STROKE_WIDTH)
            .with_class(format!("line {}", classify(&row.label))),
        );
    }

    for row in rows {
        frame.push(
            TextPrimitive::offset(
                format_percent(row.start, breakpoint),
                x_start,
                scales.y.map(row.start),
                -VALUE_OFFSET,
                VALUE_BASELINE_SHIFT,
            )
            .with_anchor(TextAnchor::End)
            .with_class(format!("value start {}", classify(&row.label))),
        );
    }

    for row in rows {
        frame.push(
            TextPrimitive::offset(
                format_percent(row.end, breakpoint),
                x_end,
                scales.y.map(row.end),
                VALUE_OFFSET,
                VALUE_BASELINE_SHIFT,
            )
            .with_class(format!("value end {}", classify(&row.label))),
        );
    }

    let gap = label_gap(breakpoint);
    let wrapper = LabelWrapper::new(geometry.margins.right - gap, LABEL_LINE_HEIGHT)
        .with_anchor(gap, VALUE_BASELINE_SHIFT);
    for row in rows {
        let wrapped = wrapper.wrap(&row.label, measurer);
        frame.push(
            TextPrimitive::wrapped(wrapped, x_end, scales.y.map(row.end))
                .with_class(format!("label {}", classify(&row.label))),
        );
    }

    Ok(frame)
}
