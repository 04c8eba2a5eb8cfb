use crate::api::legend::{Legend, LegendItem};
use crate::api::options::ChartOptions;
use crate::core::{Padding, Palette, PlotArea, ValueTick, Viewport, format_value};
use crate::error::ChartResult;
use crate::interaction::{TooltipContent, place_tooltip};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, Stroke, SvgRenderer, TextAnchor,
    TextPrimitive,
};

const AXIS_COLOR: Color = Color::rgb8(0x94, 0xa3, 0xb8);
const GRID_COLOR: Color = Color::rgba(0.58, 0.64, 0.72, 0.35);
const LABEL_COLOR: Color = Color::rgb8(0x47, 0x55, 0x69);
const INACTIVE_LABEL_COLOR: Color = Color::rgba(0.28, 0.33, 0.41, 0.45);
const TOOLTIP_BACKGROUND: Color = Color::rgba(0.09, 0.11, 0.16, 0.92);
const TOOLTIP_TEXT: Color = Color::rgb8(0xf1, 0xf5, 0xf9);
const LABEL_FONT: f64 = 11.0;
/// Rough glyph advance for the sans-serif UI font at label size.
const CHAR_WIDTH: f64 = 6.5;

/// Currently raised tooltip, anchored at the pointer position.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTooltip {
    pub content: TooltipContent,
    pub x: f64,
    pub y: f64,
}

/// Drawing surface and cross-cutting state shared by all chart kinds:
/// viewport, plot area, palette, legend, and tooltip.
///
/// The three chart variants compose a surface instead of inheriting from a
/// base chart, keeping kind-specific layout separate from shared concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSurface {
    viewport: Viewport,
    padding: Padding,
    plot: PlotArea,
    palette: Palette,
    title: Option<String>,
    show_legend: bool,
    show_tooltip: bool,
    show_grid: bool,
    show_data_labels: bool,
    tick_count: usize,
    legend: Legend,
    tooltip: Option<ActiveTooltip>,
}

impl ChartSurface {
    pub fn new(options: &ChartOptions) -> ChartResult<Self> {
        options.validate()?;
        let viewport = Viewport::new(options.width, options.height);
        let plot = PlotArea::from_viewport(viewport, options.padding)?;
        let palette = if options.colors.is_empty() {
            Palette::default()
        } else {
            Palette::new(options.colors.clone())?
        };

        Ok(Self {
            viewport,
            padding: options.padding,
            plot,
            palette,
            title: options.title.clone(),
            show_legend: options.show_legend,
            show_tooltip: options.show_tooltip,
            show_grid: options.show_grid,
            show_data_labels: options.show_data_labels,
            tick_count: options.tick_count,
            legend: Legend::default(),
            tooltip: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plot(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    #[must_use]
    pub fn show_legend(&self) -> bool {
        self.show_legend
    }

    #[must_use]
    pub fn show_tooltip(&self) -> bool {
        self.show_tooltip
    }

    #[must_use]
    pub fn show_data_labels(&self) -> bool {
        self.show_data_labels
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Cyclic palette lookup shared by every chart kind.
    #[must_use]
    pub fn color(&self, index: usize) -> Color {
        self.palette.color(index)
    }

    /// Applies a new viewport and recomputes the plot area.
    ///
    /// This is the responsive re-render entry point: the owning chart calls
    /// it and then replays its last data snapshot.
    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = Viewport::new(width, height);
        let plot = PlotArea::from_viewport(viewport, self.padding)?;
        self.viewport = viewport;
        self.plot = plot;
        Ok(())
    }

    #[must_use]
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn legend_mut(&mut self) -> &mut Legend {
        &mut self.legend
    }

    pub fn rebuild_legend(&mut self, items: impl IntoIterator<Item = LegendItem>) {
        self.legend.rebuild(items);
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&ActiveTooltip> {
        self.tooltip.as_ref()
    }

    pub fn raise_tooltip(&mut self, content: TooltipContent, x: f64, y: f64) {
        self.tooltip = Some(ActiveTooltip { content, x, y });
    }

    pub fn dismiss_tooltip(&mut self) {
        self.tooltip = None;
    }

    /// Drops legend and tooltip state; part of chart teardown.
    pub fn reset(&mut self) {
        self.legend.clear();
        self.tooltip = None;
    }

    #[must_use]
    pub fn begin_frame(&self) -> RenderFrame {
        RenderFrame::new(self.viewport)
    }

    /// Serializes a frame to SVG with the configured accessible label.
    pub fn frame_to_svg(&self, frame: &RenderFrame, fallback_label: &str) -> ChartResult<String> {
        let label = self.title.as_deref().unwrap_or(fallback_label);
        let mut renderer = SvgRenderer::new(label);
        renderer.render(frame)?;
        Ok(renderer.into_document())
    }

    /// Draws axis lines, tick labels, and optional grid lines.
    ///
    /// `horizontal` selects where values grow: `false` means the value axis
    /// is vertical (bar charts in vertical orientation, line charts).
    pub fn draw_value_axis(&self, frame: &mut RenderFrame, ticks: &[ValueTick], horizontal: bool) {
        let plot = self.plot;
        let axis_stroke = Stroke::new(AXIS_COLOR, 1.0);
        frame.push_line(LinePrimitive::new(
            plot.x,
            plot.y,
            plot.x,
            plot.bottom(),
            axis_stroke,
        ));
        frame.push_line(LinePrimitive::new(
            plot.x,
            plot.bottom(),
            plot.right(),
            plot.bottom(),
            axis_stroke,
        ));

        let grid_stroke = Stroke::new(GRID_COLOR, 1.0);
        for tick in ticks {
            if horizontal {
                let x = plot.x + tick.offset;
                if self.show_grid && tick.offset > 0.0 {
                    frame.push_line(LinePrimitive::new(x, plot.y, x, plot.bottom(), grid_stroke));
                }
                frame.push_text(TextPrimitive::new(
                    format_value(tick.value),
                    x,
                    plot.bottom() + 16.0,
                    LABEL_FONT,
                    LABEL_COLOR,
                    TextAnchor::Middle,
                ));
            } else {
                let y = plot.bottom() - tick.offset;
                if self.show_grid && tick.offset > 0.0 {
                    frame.push_line(LinePrimitive::new(plot.x, y, plot.right(), y, grid_stroke));
                }
                frame.push_text(TextPrimitive::new(
                    format_value(tick.value),
                    plot.x - 8.0,
                    y + 3.0,
                    LABEL_FONT,
                    LABEL_COLOR,
                    TextAnchor::End,
                ));
            }
        }
    }

    /// Category labels under the plot, one per `(x, label)` position.
    pub fn draw_category_labels_bottom<'a>(
        &self,
        frame: &mut RenderFrame,
        positions: impl IntoIterator<Item = (f64, &'a str)>,
    ) {
        for (x, label) in positions {
            if label.is_empty() {
                continue;
            }
            frame.push_text(TextPrimitive::new(
                label,
                x,
                self.plot.bottom() + 16.0,
                LABEL_FONT,
                LABEL_COLOR,
                TextAnchor::Middle,
            ));
        }
    }

    /// Category labels left of the plot, one per `(y, label)` position.
    pub fn draw_category_labels_left<'a>(
        &self,
        frame: &mut RenderFrame,
        positions: impl IntoIterator<Item = (f64, &'a str)>,
    ) {
        for (y, label) in positions {
            if label.is_empty() {
                continue;
            }
            frame.push_text(TextPrimitive::new(
                label,
                self.plot.x - 8.0,
                y + 3.0,
                LABEL_FONT,
                LABEL_COLOR,
                TextAnchor::End,
            ));
        }
    }

    /// Legend row above the plot. Inactive entries render dimmed.
    pub fn draw_legend(&self, frame: &mut RenderFrame) {
        if !self.show_legend || self.legend.is_empty() {
            return;
        }

        let mut x = self.plot.x;
        for (label, entry) in self.legend.iter() {
            let display = match &entry.annotation {
                Some(annotation) => format!("{label} ({annotation})"),
                None => label.to_owned(),
            };
            let swatch_color = if entry.active {
                entry.color
            } else {
                entry.color.with_alpha(0.3)
            };
            let text_color = if entry.active {
                LABEL_COLOR
            } else {
                INACTIVE_LABEL_COLOR
            };

            frame.push_rect(RectPrimitive::filled(x, 8.0, 10.0, 10.0, swatch_color));
            frame.push_text(TextPrimitive::new(
                display.clone(),
                x + 14.0,
                17.0,
                LABEL_FONT,
                text_color,
                TextAnchor::Start,
            ));
            x += 14.0 + display.chars().count() as f64 * CHAR_WIDTH + 16.0;
        }
    }

    /// Tooltip box near the pointer, clamped inside the viewport.
    pub fn draw_tooltip(&self, frame: &mut RenderFrame) {
        let Some(tooltip) = &self.tooltip else {
            return;
        };

        let content = &tooltip.content;
        let row_chars = content
            .entries
            .iter()
            .map(|entry| entry.label.chars().count() + entry.value.chars().count() + 2)
            .chain(std::iter::once(content.title.chars().count()))
            .max()
            .unwrap_or(0);
        let width = row_chars as f64 * CHAR_WIDTH + 30.0;
        let height = 24.0 + content.entries.len() as f64 * 16.0;

        let (x, y) = place_tooltip(tooltip.x, tooltip.y, width, height, self.viewport);

        frame.push_rect(
            RectPrimitive::filled(x, y, width, height, TOOLTIP_BACKGROUND)
                .with_stroke(Stroke::new(Color::rgba(1.0, 1.0, 1.0, 0.15), 1.0)),
        );
        frame.push_text(TextPrimitive::new(
            content.title.clone(),
            x + 8.0,
            y + 15.0,
            12.0,
            TOOLTIP_TEXT,
            TextAnchor::Start,
        ));

        for (row, entry) in content.entries.iter().enumerate() {
            let row_y = y + 24.0 + row as f64 * 16.0;
            frame.push_rect(RectPrimitive::filled(
                x + 8.0,
                row_y + 2.0,
                8.0,
                8.0,
                entry.swatch,
            ));
            frame.push_text(TextPrimitive::new(
                format!("{}: {}", entry.label, entry.value),
                x + 20.0,
                row_y + 10.0,
                LABEL_FONT,
                TOOLTIP_TEXT,
                TextAnchor::Start,
            ));
        }
    }
}
