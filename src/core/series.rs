use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// One named value sequence plotted against the shared category axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    #[serde(default)]
    pub color: Option<Color>,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Input for bar and line charts: ordered category labels plus parallel datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl CategorySeries {
    #[must_use]
    pub fn new(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self { labels, datasets }
    }

    /// Shape check for the silent-recovery render contract: dashboards call
    /// `render` before async data arrives, so incomplete input clears the
    /// chart instead of erroring.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.labels.is_empty()
            && !self.datasets.is_empty()
            && self.datasets.iter().all(|dataset| {
                dataset.values.len() == self.labels.len()
                    && dataset
                        .values
                        .iter()
                        .all(|value| value.is_finite() && *value >= 0.0)
            })
    }

    /// Largest single value across active datasets; 0.0 when none.
    #[must_use]
    pub fn max_value(&self, active: &[bool]) -> f64 {
        self.datasets
            .iter()
            .enumerate()
            .filter(|(index, _)| is_active(active, *index))
            .flat_map(|(_, dataset)| dataset.values.iter().copied())
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |max| max.0)
    }

    /// Largest per-category sum across active datasets, for stacked scaling.
    #[must_use]
    pub fn max_stacked(&self, active: &[bool]) -> f64 {
        (0..self.labels.len())
            .map(|category| {
                self.datasets
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| is_active(active, *index))
                    .map(|(_, dataset)| dataset.values.get(category).copied().unwrap_or(0.0))
                    .sum::<f64>()
            })
            .map(OrderedFloat)
            .max()
            .map_or(0.0, |max| max.0)
    }
}

/// Input for pie charts: parallel labels and non-negative values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Explicit per-slice colors; empty means palette fallback.
    #[serde(default)]
    pub colors: Vec<Color>,
}

impl ProportionSeries {
    #[must_use]
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            values,
            colors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.labels.is_empty()
            && self.labels.len() == self.values.len()
            && (self.colors.is_empty() || self.colors.len() == self.values.len())
            && self
                .values
                .iter()
                .all(|value| value.is_finite() && *value >= 0.0)
    }

    #[must_use]
    pub fn total(&self, active: &[bool]) -> f64 {
        self.values
            .iter()
            .enumerate()
            .filter(|(index, _)| is_active(active, *index))
            .map(|(_, value)| value)
            .sum()
    }
}

/// Missing flags default to visible so charts work before a legend exists.
pub(crate) fn is_active(active: &[bool], index: usize) -> bool {
    active.get(index).copied().unwrap_or(true)
}
