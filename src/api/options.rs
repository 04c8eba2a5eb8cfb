use serde::{Deserialize, Serialize};

use crate::core::{BarLayout, Orientation, Padding, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Options shared by every chart kind.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Missing fields fall back
/// to the documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub padding: Padding,
    /// Explicit palette; empty means the built-in dashboard palette.
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default = "default_true")]
    pub show_legend: bool,
    #[serde(default = "default_true")]
    pub show_tooltip: bool,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default)]
    pub show_data_labels: bool,
    /// Number of value-axis intervals.
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default)]
    pub title: Option<String>,
}

impl ChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_data_labels(mut self, show: bool) -> Self {
        self.show_data_labels = show;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, show: bool) -> Self {
        self.show_tooltip = show;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        // Also rejects invalid viewports and padding with no plot area left.
        PlotArea::from_viewport(Viewport::new(self.width, self.height), self.padding)?;
        if self.tick_count == 0 {
            return Err(ChartError::InvalidConfig(
                "tick_count must be >= 1".to_owned(),
            ));
        }
        for color in &self.colors {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(err.to_string()))?;
        }
        Ok(())
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding: Padding::default(),
            colors: Vec::new(),
            show_legend: true,
            show_tooltip: true,
            show_grid: true,
            show_data_labels: false,
            tick_count: default_tick_count(),
            title: None,
        }
    }
}

/// Bar chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarOptions {
    #[serde(flatten)]
    pub chart: ChartOptions,
    #[serde(default = "default_orientation")]
    pub orientation: Orientation,
    #[serde(default)]
    pub stacked: bool,
    #[serde(default = "default_bar_padding")]
    pub bar_padding: f64,
    #[serde(default = "default_group_padding")]
    pub group_padding: f64,
}

impl BarOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub(crate) fn layout(&self) -> BarLayout {
        BarLayout {
            orientation: self.orientation,
            stacked: self.stacked,
            bar_padding: self.bar_padding,
            group_padding: self.group_padding,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.chart.validate()?;
        self.layout().validate()
    }
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            chart: ChartOptions::default(),
            orientation: default_orientation(),
            stacked: false,
            bar_padding: default_bar_padding(),
            group_padding: default_group_padding(),
        }
    }
}

/// Line chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineOptions {
    #[serde(flatten)]
    pub chart: ChartOptions,
    #[serde(default = "default_true")]
    pub show_points: bool,
    #[serde(default)]
    pub show_area: bool,
    #[serde(default)]
    pub smooth: bool,
    #[serde(default = "default_tension")]
    pub tension: f64,
}

impl LineOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    #[must_use]
    pub fn with_area(mut self, show_area: bool) -> Self {
        self.show_area = show_area;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.chart.validate()?;
        if !self.tension.is_finite() || !(0.0..=1.0).contains(&self.tension) {
            return Err(ChartError::InvalidConfig(
                "`tension` must be in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            chart: ChartOptions::default(),
            show_points: true,
            show_area: false,
            smooth: false,
            tension: default_tension(),
        }
    }
}

/// Pie chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieOptions {
    #[serde(flatten)]
    pub chart: ChartOptions,
    #[serde(default)]
    pub doughnut: bool,
    /// Inner radius as a fraction of the outer radius, doughnut mode only.
    #[serde(default = "default_inner_radius")]
    pub inner_radius: f64,
    #[serde(default = "default_true")]
    pub show_percentages: bool,
}

impl PieOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_doughnut(mut self, doughnut: bool) -> Self {
        self.doughnut = doughnut;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.chart.validate()?;
        if !self.inner_radius.is_finite() || !(0.0..1.0).contains(&self.inner_radius) {
            return Err(ChartError::InvalidConfig(
                "`inner_radius` must be in [0, 1)".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            chart: ChartOptions::default(),
            doughnut: false,
            inner_radius: default_inner_radius(),
            show_percentages: true,
        }
    }
}

fn default_width() -> u32 {
    600
}

fn default_height() -> u32 {
    400
}

fn default_true() -> bool {
    true
}

fn default_tick_count() -> usize {
    5
}

fn default_orientation() -> Orientation {
    Orientation::Vertical
}

fn default_bar_padding() -> f64 {
    0.1
}

fn default_group_padding() -> f64 {
    0.2
}

fn default_tension() -> f64 {
    0.3
}

fn default_inner_radius() -> f64 {
    0.6
}
