use serde::{Deserialize, Serialize};

use crate::core::ProportionSeries;
use crate::core::series::is_active;

/// Slices smaller than this share of the total get no in-slice label.
pub const MIN_LABEL_FRACTION: f64 = 0.05;

/// Deterministic geometry for one pie or doughnut slice.
///
/// Angles are in degrees, measured from the positive x axis with y pointing
/// down, so `-90` is 12 o'clock and positive sweep proceeds clockwise on
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceGeometry {
    pub index: usize,
    pub value: f64,
    pub fraction: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub label_x: f64,
    pub label_y: f64,
    pub show_label: bool,
}

impl SliceGeometry {
    #[must_use]
    pub fn end_angle(self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Slice share as a percentage with one decimal, e.g. `25.0%`.
    #[must_use]
    pub fn percentage_label(self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }
}

/// Projects a proportion series into slices starting at 12 o'clock.
///
/// A zero total yields an empty list so degenerate dashboards render an
/// empty state instead of NaN arc geometry. Inactive entries are excluded
/// from both the total and the layout.
#[must_use]
pub fn project_slices(
    series: &ProportionSeries,
    active: &[bool],
    center_x: f64,
    center_y: f64,
    radius: f64,
    inner_radius_ratio: f64,
) -> Vec<SliceGeometry> {
    if !series.is_renderable() {
        return Vec::new();
    }

    let total = series.total(active);
    if total <= 0.0 {
        return Vec::new();
    }

    let label_radius = if inner_radius_ratio > 0.0 {
        radius * (1.0 + inner_radius_ratio) * 0.5
    } else {
        radius * 0.5
    };

    let mut slices = Vec::with_capacity(series.values.len());
    let mut start_angle = -90.0;

    for (index, &value) in series.values.iter().enumerate() {
        if !is_active(active, index) {
            continue;
        }
        let fraction = value / total;
        let sweep_angle = fraction * 360.0;
        let mid_angle = start_angle + sweep_angle * 0.5;
        let (label_x, label_y) = arc_point(center_x, center_y, label_radius, mid_angle);

        slices.push(SliceGeometry {
            index,
            value,
            fraction,
            start_angle,
            sweep_angle,
            label_x,
            label_y,
            show_label: fraction >= MIN_LABEL_FRACTION,
        });
        start_angle += sweep_angle;
    }

    slices
}

/// Point on a circle at `angle_deg`, in the same screen-space convention.
#[must_use]
pub fn arc_point(center_x: f64, center_y: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let radians = angle_deg.to_radians();
    (
        center_x + radius * radians.cos(),
        center_y + radius * radians.sin(),
    )
}
