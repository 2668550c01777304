use tracing::debug;

use crate::core::{
    ColorSequence, LayoutGeometry, OrdinalScale, StackedColumn, StackedColumnScales,
    TextMeasurer, classify, format_number,
};
use crate::error::ChartResult;
use crate::render::{
    ClassList, LegendItem, LinePrimitive, RectPrimitive, RenderFrame, TextAnchor, TextPrimitive,
};

use super::axis_style::{
    AXIS_LABEL_CENTER_SHIFT, AXIS_LABEL_PADDING, AXIS_STROKE, AXIS_TICK_SIZE, GRID_STROKE,
};

/// Requested number of value-axis ticks.
pub const VALUE_TICK_COUNT: usize = 5;
/// Minimum clearance above and below a value label inside its segment.
pub const VALUE_GAP: f64 = 6.0;

/// Builds the stacked column frame: axes, grid, one rect per segment,
/// centered segment values and the series legend.
pub fn build_stacked_column_frame<M: TextMeasurer + ?Sized>(
    columns: &[StackedColumn],
    geometry: LayoutGeometry,
    colors: &ColorSequence,
    measurer: &M,
) -> ChartResult<RenderFrame> {
    let scales = StackedColumnScales::build(columns, geometry)?;
    let series: Vec<&str> = columns
        .first()
        .map(|c| c.segments.iter().map(|s| s.name.as_str()).collect())
        .unwrap_or_default();
    let color_scale = OrdinalScale::new(series.iter().copied(), colors.as_slice().to_vec());
    let color_of = |name: &str| {
        color_scale
            .map(name)
            .unwrap_or_else(|| colors.color_at(0).to_owned())
    };

    let mut frame = RenderFrame::new(
        geometry.outer_width(),
        geometry.outer_height(),
        geometry.margins.left,
        geometry.margins.top,
    );
    let bandwidth = scales.x.bandwidth();
    let text_height = measurer.line_height();
    let ticks = scales.y.ticks(VALUE_TICK_COUNT);

    for column in columns {
        let Some(x) = scales.x.position(&column.label) else {
            continue;
        };
        frame.push(
            TextPrimitive::offset(
                column.label.clone(),
                x + bandwidth / 2.0,
                geometry.chart_height + AXIS_TICK_SIZE + AXIS_LABEL_PADDING,
                0.0,
                0.71 * text_height,
            )
            .with_anchor(TextAnchor::Middle)
            .with_class("x axis"),
        );
    }

    for &tick in &ticks {
        let y = scales.y.map(tick);
        frame.push(LinePrimitive::new(-AXIS_TICK_SIZE, y, 0.0, y, AXIS_STROKE).with_class("y axis"));
        frame.push(
            TextPrimitive::offset(
                format_number(tick),
                -(AXIS_TICK_SIZE + AXIS_LABEL_PADDING),
                y,
                0.0,
                AXIS_LABEL_CENTER_SHIFT * text_height,
            )
            .with_anchor(TextAnchor::End)
            .with_class("y axis"),
        );
    }

    for &tick in &ticks {
        let y = scales.y.map(tick);
        frame.push(
            LinePrimitive::new(0.0, y, geometry.chart_width, y, GRID_STROKE).with_class("y grid"),
        );
    }

    for column in columns {
        let Some(x) = scales.x.position(&column.label) else {
            continue;
        };
        for segment in &column.segments {
            let y0 = scales.y.map(segment.offset_start);
            let y1 = scales.y.map(segment.offset_end);
            // Negative segments grow downward from their start offset.
            let top = if segment.offset_end < segment.offset_start { y0 } else { y1 };
            frame.push(
                RectPrimitive::new(
                    x,
                    top,
                    bandwidth,
                    (y0 - y1).abs(),
                    color_of(segment.name.as_str()),
                )
                .with_class(format!("bar {}", classify(&segment.name))),
            );
        }
    }

    let mut hidden_values = 0usize;
    for column in columns {
        let Some(x) = scales.x.position(&column.label) else {
            continue;
        };
        for segment in &column.segments {
            let y0 = scales.y.map(segment.offset_start);
            let y1 = scales.y.map(segment.offset_end);
            let bar_height = (y0 - y1).abs();
            let bar_center = y1 + (y0 - y1) / 2.0;
            let hidden = text_height + VALUE_GAP * 2.0 > bar_height;
            hidden_values += usize::from(hidden);
            frame.push(
                TextPrimitive::new(
                    format_number(segment.value),
                    x + bandwidth / 2.0,
                    bar_center + text_height / 2.0,
                )
                .with_anchor(TextAnchor::Middle)
                .with_class(format!("value {}", classify(&segment.name)))
                .with_hidden(hidden),
            );
        }
    }

    frame.legend = series
        .iter()
        .enumerate()
        .map(|(index, name)| LegendItem {
            label: (*name).to_owned(),
            color: color_of(*name),
            class: ClassList::new(format!("key-item key-{index} {}", classify(name))),
        })
        .collect();

    debug!(
        columns = columns.len(),
        series = series.len(),
        hidden_values,
        "built stacked column frame"
    );
    Ok(frame)
}
