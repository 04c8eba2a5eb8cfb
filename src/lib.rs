//! dashplot: headless declarative charting for dashboard data.
//!
//! A chart owns a drawing surface (viewport + options) and rebuilds a
//! deterministic [`render::RenderFrame`] on every `render(data)` call.
//! Backends serialize frames; the bundled [`render::SvgRenderer`] emits
//! standalone SVG markup.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    BarChart, BarOptions, Chart, ChartOptions, LineChart, LineOptions, PieChart, PieOptions,
};
pub use error::{ChartError, ChartResult};
