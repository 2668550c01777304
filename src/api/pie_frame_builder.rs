use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::{ColorSequence, LayoutGeometry, PieSlice, classify, format_number};
use crate::render::{PathPrimitive, RectPrimitive, RenderFrame, TextAnchor, TextPrimitive};

/// Gap between the pie's outer edge and the plot boundary.
pub const PIE_RADIUS_INSET: f64 = 10.0;
const ARC_EPSILON: f64 = 1e-6;

/// One laid-out slice. Angles are radians, clockwise from twelve o'clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieArc {
    pub label: String,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieArc {
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// SVG path of the slice centered at the origin.
    #[must_use]
    pub fn path_data(&self, radius: f64) -> String {
        let r = format_number(radius);
        if self.sweep().abs() >= TAU - ARC_EPSILON {
            return format!("M0,{r}A{r},{r} 0 1,1 0,-{r}A{r},{r} 0 1,1 0,{r}Z");
        }
        let (a0, a1) = (self.start_angle - FRAC_PI_2, self.end_angle - FRAC_PI_2);
        let large_arc = if (a1 - a0).abs() < std::f64::consts::PI { 0 } else { 1 };
        format!(
            "M{},{}A{r},{r} 0 {large_arc},1 {},{}L0,0Z",
            path_coordinate(radius * a0.cos()),
            path_coordinate(radius * a0.sin()),
            path_coordinate(radius * a1.cos()),
            path_coordinate(radius * a1.sin()),
        )
    }

    /// Midpoint of the slice at half the radius, relative to the center.
    #[must_use]
    pub fn centroid(&self, radius: f64) -> (f64, f64) {
        let angle = (self.start_angle + self.end_angle) / 2.0 - FRAC_PI_2;
        let r = radius / 2.0;
        (r * angle.cos(), r * angle.sin())
    }
}

// Trig residue such as cos(-π/2) would otherwise print as 6e-16.
fn path_coordinate(value: f64) -> String {
    if value.abs() < ARC_EPSILON {
        return "0".to_owned();
    }
    format_number(value)
}

/// Lays slices out in data order, each sweeping `amount / sum * 2π`.
/// A zero sum collapses every slice to an empty arc.
#[must_use]
pub fn pie_layout(slices: &[PieSlice]) -> Vec<PieArc> {
    let sum: f64 = slices.iter().map(|s| s.amount).sum();
    let k = if sum == 0.0 { 0.0 } else { TAU / sum };
    let mut angle = 0.0;
    slices
        .iter()
        .map(|slice| {
            let start_angle = angle;
            angle += slice.amount * k;
            PieArc {
                label: slice.label.clone(),
                value: slice.amount,
                start_angle,
                end_angle: angle,
            }
        })
        .collect()
}

/// Builds the pie frame: transparent overlay, one path per slice and
/// optional centroid labels.
#[must_use]
pub fn build_pie_frame(
    slices: &[PieSlice],
    geometry: LayoutGeometry,
    colors: &ColorSequence,
    show_labels: bool,
) -> RenderFrame {
    let mut frame = RenderFrame::new(
        geometry.outer_width(),
        geometry.outer_height(),
        geometry.margins.left,
        geometry.margins.top,
    );
    frame.push(
        RectPrimitive::new(0.0, 0.0, geometry.chart_width, geometry.chart_height, "transparent")
            .with_class("overlay"),
    );

    let radius = geometry.chart_width / 2.0 - PIE_RADIUS_INSET;
    let (cx, cy) = (geometry.chart_width / 2.0, geometry.chart_height / 2.0);
    let arcs = pie_layout(slices);

    for (index, arc) in arcs.iter().enumerate() {
        frame.push(
            PathPrimitive::new(cx, cy, arc.path_data(radius), colors.color_at(index))
                .with_class(format!("arc {}", classify(&arc.label))),
        );
    }

    if show_labels {
        for arc in &arcs {
            let (dx, dy) = arc.centroid(radius);
            frame.push(
                TextPrimitive::new(arc.label.clone(), cx + dx, cy + dy)
                    .with_anchor(TextAnchor::Middle)
                    .with_fill("white")
                    .with_class(format!("arc-label {}", classify(&arc.label))),
            );
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::PieArc;

    #[test]
    fn quarter_arc_path_runs_clockwise_from_top() {
        let arc = PieArc {
            label: "A".to_owned(),
            value: 1.0,
            start_angle: 0.0,
            end_angle: std::f64::consts::FRAC_PI_2,
        };
        let path = arc.path_data(10.0);
        assert!(path.starts_with("M0,-10A10,10 0 0,1 10,"), "{path}");
        assert!(path.ends_with("L0,0Z"));
    }

    #[test]
    fn full_circle_uses_two_half_arcs() {
        let arc = PieArc {
            label: "All".to_owned(),
            value: 1.0,
            start_angle: 0.0,
            end_angle: std::f64::consts::TAU,
        };
        assert_eq!(arc.path_data(5.0), "M0,5A5,5 0 1,1 0,-5A5,5 0 1,1 0,5Z");
    }
}
