use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::series::is_active;
use crate::core::{CategorySeries, PlotArea, ValueScale};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Bar placement parameters, configuration rather than data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub orientation: Orientation,
    pub stacked: bool,
    /// Fraction of each grouped slot reserved as gap between sibling bars.
    pub bar_padding: f64,
    /// Fraction of each category band reserved as gap between bands.
    pub group_padding: f64,
}

impl BarLayout {
    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("bar_padding", self.bar_padding),
            ("group_padding", self.group_padding),
        ] {
            if !value.is_finite() || !(0.0..1.0).contains(&value) {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be in [0, 1)"
                )));
            }
        }
        Ok(())
    }
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            stacked: false,
            bar_padding: 0.1,
            group_padding: 0.2,
        }
    }
}

/// Deterministic pixel geometry for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub category_index: usize,
    pub dataset_index: usize,
    pub value: f64,
}

/// Projects a category series into bar rectangles.
///
/// Grouped bars share a per-category band split into equal slots; stacked
/// bars accumulate from the baseline in dataset order (first dataset nearest
/// the baseline). Non-renderable input projects to an empty list.
pub fn project_bars(
    series: &CategorySeries,
    active: &[bool],
    plot: PlotArea,
    layout: BarLayout,
) -> ChartResult<Vec<BarGeometry>> {
    layout.validate()?;

    if !series.is_renderable() {
        return Ok(Vec::new());
    }

    let active_count = series
        .datasets
        .iter()
        .enumerate()
        .filter(|(index, _)| is_active(active, *index))
        .count();
    if active_count == 0 {
        return Ok(Vec::new());
    }

    let category_count = series.labels.len();
    let (band_extent, value_extent) = match layout.orientation {
        Orientation::Vertical => (plot.width, plot.height),
        Orientation::Horizontal => (plot.height, plot.width),
    };

    let max = if layout.stacked {
        series.max_stacked(active)
    } else {
        series.max_value(active)
    };
    let scale = ValueScale::new(max, value_extent)?;

    let band = band_extent / category_count as f64;
    let group = band * (1.0 - layout.group_padding);

    let mut bars = Vec::with_capacity(active_count * category_count);

    if layout.stacked {
        let mut stack_base: SmallVec<[f64; 16]> = smallvec![0.0; category_count];
        let column = group * (1.0 - layout.bar_padding);

        for (dataset_index, dataset) in series.datasets.iter().enumerate() {
            if !is_active(active, dataset_index) {
                continue;
            }
            for (category_index, &value) in dataset.values.iter().enumerate() {
                let length = scale.offset(value);
                let band_start =
                    category_index as f64 * band + (band - column) * 0.5;
                let bar = match layout.orientation {
                    Orientation::Vertical => BarGeometry {
                        x: plot.x + band_start,
                        y: plot.bottom() - stack_base[category_index] - length,
                        width: column,
                        height: length,
                        category_index,
                        dataset_index,
                        value,
                    },
                    Orientation::Horizontal => BarGeometry {
                        x: plot.x + stack_base[category_index],
                        y: plot.y + band_start,
                        width: length,
                        height: column,
                        category_index,
                        dataset_index,
                        value,
                    },
                };
                stack_base[category_index] += length;
                bars.push(bar);
            }
        }
    } else {
        let slot = group / active_count as f64;
        let thickness = slot * (1.0 - layout.bar_padding);

        let mut slot_index = 0usize;
        for (dataset_index, dataset) in series.datasets.iter().enumerate() {
            if !is_active(active, dataset_index) {
                continue;
            }
            for (category_index, &value) in dataset.values.iter().enumerate() {
                let length = scale.offset(value);
                let band_start = category_index as f64 * band
                    + (band - group) * 0.5
                    + slot_index as f64 * slot
                    + (slot - thickness) * 0.5;
                let bar = match layout.orientation {
                    Orientation::Vertical => BarGeometry {
                        x: plot.x + band_start,
                        y: plot.bottom() - length,
                        width: thickness,
                        height: length,
                        category_index,
                        dataset_index,
                        value,
                    },
                    Orientation::Horizontal => BarGeometry {
                        x: plot.x,
                        y: plot.y + band_start,
                        width: length,
                        height: thickness,
                        category_index,
                        dataset_index,
                        value,
                    },
                };
                bars.push(bar);
            }
            slot_index += 1;
        }
    }

    Ok(bars)
}

/// Center offset of a category band along the band axis.
#[must_use]
pub fn band_center(plot_extent: f64, category_count: usize, category_index: usize) -> f64 {
    let band = plot_extent / category_count as f64;
    (category_index as f64 + 0.5) * band
}
