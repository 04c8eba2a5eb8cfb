use crate::error::ChartResult;
use crate::render::{Color, RenderFrame};

/// Shared capability contract implemented by every chart kind.
///
/// Charts own their frame exclusively: `render` replaces the whole scene
/// (full rebuild, last write wins), and nothing outside the frame is touched.
pub trait Chart {
    /// Input shape this chart renders.
    type Data;

    /// Stores `data` as the replayable snapshot and rebuilds the frame.
    ///
    /// Structurally incomplete data clears the chart instead of erroring,
    /// since dashboards routinely render before async data has arrived.
    fn render(&mut self, data: &Self::Data) -> ChartResult<()>;

    /// Re-renders the stored snapshot at a new viewport size.
    fn resize(&mut self, width: u32, height: u32) -> ChartResult<()>;

    /// Clears the frame, snapshot, and interaction state. Idempotent, and a
    /// later `render` call starts over normally.
    fn destroy(&mut self);

    /// Cyclic palette lookup: `color(i) == color(i + k * palette_len)`.
    fn color(&self, index: usize) -> Color;

    fn frame(&self) -> &RenderFrame;

    fn to_svg(&self) -> ChartResult<String>;

    /// Hit-tests the pointer against rendered geometry, raising or
    /// dismissing the tooltip; returns whether a tooltip is now visible.
    fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<bool>;

    fn pointer_leave(&mut self) -> ChartResult<()>;

    /// Toggles the legend entry at `index` and filters the matching series
    /// out of the next layout pass. Out-of-range indices are ignored.
    fn toggle_legend(&mut self, index: usize) -> ChartResult<()>;
}
