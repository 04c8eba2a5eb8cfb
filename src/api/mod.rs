mod bar_chart;
mod chart;
mod legend;
mod line_chart;
mod options;
mod pie_chart;
mod surface;

pub use bar_chart::BarChart;
pub use chart::Chart;
pub use legend::{Legend, LegendEntry, LegendItem};
pub use line_chart::LineChart;
pub use options::{BarOptions, ChartOptions, LineOptions, PieOptions};
pub use pie_chart::PieChart;
pub use surface::{ActiveTooltip, ChartSurface};
