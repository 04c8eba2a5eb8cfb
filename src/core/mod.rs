pub mod axis;
pub mod bar_layout;
pub mod line_layout;
pub mod palette;
pub mod pie_layout;
pub mod scale;
pub mod series;
pub mod types;

pub use axis::{ValueTick, format_value, value_ticks};
pub use bar_layout::{BarGeometry, BarLayout, Orientation, band_center, project_bars};
pub use line_layout::{
    CurveSegment, LinePoint, ProjectedLine, project_line_series, smooth_segments,
};
pub use palette::Palette;
pub use pie_layout::{MIN_LABEL_FRACTION, SliceGeometry, arc_point, project_slices};
pub use scale::ValueScale;
pub use series::{CategorySeries, Dataset, ProportionSeries};
pub use types::{Padding, PlotArea, Viewport};
