use serde::{Deserialize, Serialize};

use crate::core::series::is_active;
use crate::core::{CategorySeries, PlotArea, ValueScale};
use crate::error::ChartResult;

/// One projected sample of a line series, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub category_index: usize,
    pub dataset_index: usize,
    pub value: f64,
}

/// All projected points of one dataset, in category order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedLine {
    pub dataset_index: usize,
    pub points: Vec<LinePoint>,
}

/// Projects every active dataset onto the shared category/value grid.
///
/// Categories sit at equal intervals across the plot width (N categories,
/// N-1 segments); a single category degenerates to one centered point. The
/// value scale is shared across datasets so series stay comparable.
pub fn project_line_series(
    series: &CategorySeries,
    active: &[bool],
    plot: PlotArea,
) -> ChartResult<Vec<ProjectedLine>> {
    if !series.is_renderable() {
        return Ok(Vec::new());
    }

    let category_count = series.labels.len();
    let scale = ValueScale::new(series.max_value(active), plot.height)?;

    let x_at = |category_index: usize| {
        if category_count == 1 {
            plot.x + plot.width * 0.5
        } else {
            plot.x + category_index as f64 * plot.width / (category_count - 1) as f64
        }
    };

    let mut lines = Vec::new();
    for (dataset_index, dataset) in series.datasets.iter().enumerate() {
        if !is_active(active, dataset_index) {
            continue;
        }
        let points = dataset
            .values
            .iter()
            .enumerate()
            .map(|(category_index, &value)| LinePoint {
                x: x_at(category_index),
                y: plot.bottom() - scale.offset(value),
                category_index,
                dataset_index,
                value,
            })
            .collect();
        lines.push(ProjectedLine {
            dataset_index,
            points,
        });
    }

    Ok(lines)
}

/// One cubic Bezier segment joining two consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub c1x: f64,
    pub c1y: f64,
    pub c2x: f64,
    pub c2y: f64,
    pub x: f64,
    pub y: f64,
}

/// Smoothed joins: control points offset horizontally by `tension * dx`,
/// which keeps curves free of vertical overshoot for evenly spaced samples.
#[must_use]
pub fn smooth_segments(points: &[LinePoint], tension: f64) -> Vec<CurveSegment> {
    points
        .windows(2)
        .map(|pair| {
            let dx = pair[1].x - pair[0].x;
            CurveSegment {
                c1x: pair[0].x + tension * dx,
                c1y: pair[0].y,
                c2x: pair[1].x - tension * dx,
                c2y: pair[1].y,
                x: pair[1].x,
                y: pair[1].y,
            }
        })
        .collect()
}
