use tracing::{debug, trace};

use crate::api::Chart;
use crate::api::legend::LegendItem;
use crate::api::options::PieOptions;
use crate::api::surface::ChartSurface;
use crate::core::{ProportionSeries, SliceGeometry, arc_point, format_value, project_slices};
use crate::error::ChartResult;
use crate::interaction::{HitRegion, HitShape, TooltipContent, resolve_hit};
use crate::render::{
    Color, PathCommand, PathPrimitive, RenderFrame, Stroke, TextAnchor, TextPrimitive,
};

/// Outer radius as a share of the smaller plot dimension.
const RADIUS_RATIO: f64 = 0.9;
const SLICE_STROKE: Stroke = Stroke::new(Color::rgb(1.0, 1.0, 1.0), 2.0);
const SLICE_LABEL_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);

/// A single proportion breakdown as a pie or doughnut.
#[derive(Debug)]
pub struct PieChart {
    surface: ChartSurface,
    options: PieOptions,
    data: Option<ProportionSeries>,
    frame: RenderFrame,
    hit_regions: Vec<HitRegion>,
}

impl PieChart {
    pub fn new(options: PieOptions) -> ChartResult<Self> {
        options.validate()?;
        let surface = ChartSurface::new(&options.chart)?;
        let frame = surface.begin_frame();
        Ok(Self {
            surface,
            options,
            data: None,
            frame,
            hit_regions: Vec::new(),
        })
    }

    fn slice_color(&self, series: &ProportionSeries, index: usize) -> Color {
        series
            .colors
            .get(index)
            .copied()
            .unwrap_or_else(|| self.surface.color(index))
    }

    fn rebuild(&mut self) -> ChartResult<()> {
        let mut frame = self.surface.begin_frame();
        self.hit_regions.clear();

        let Some(series) = self.data.clone() else {
            self.frame = frame;
            return Ok(());
        };
        if !series.is_renderable() {
            debug!("pie render skipped: series shape not renderable");
            self.frame = frame;
            return Ok(());
        }

        let plot = self.surface.plot();
        let (center_x, center_y) = plot.center();
        let radius = plot.width.min(plot.height) * 0.5 * RADIUS_RATIO;
        let inner_ratio = if self.options.doughnut {
            self.options.inner_radius
        } else {
            0.0
        };
        let inner_radius = radius * inner_ratio;

        let active = self.surface.legend().active_flags(series.values.len());
        let slices = project_slices(&series, &active, center_x, center_y, radius, inner_ratio);
        trace!(slice_count = slices.len(), "projected pie slices");

        // Zero total (or every slice toggled off) renders an empty state.
        if slices.is_empty() {
            self.frame = frame;
            return Ok(());
        }

        for slice in &slices {
            let color = self.slice_color(&series, slice.index);
            frame.push_path(
                PathPrimitive::filled(
                    slice_commands(center_x, center_y, radius, inner_radius, *slice),
                    color,
                )
                .with_stroke(SLICE_STROKE),
            );

            if self.options.show_percentages && slice.show_label {
                frame.push_text(TextPrimitive::new(
                    slice.percentage_label(),
                    slice.label_x,
                    slice.label_y + 3.0,
                    11.0,
                    SLICE_LABEL_COLOR,
                    TextAnchor::Middle,
                ));
            }

            if self.surface.show_tooltip() {
                let content = TooltipContent::new(series.labels[slice.index].clone()).with_entry(
                    color,
                    format_value(slice.value),
                    slice.percentage_label(),
                );
                self.hit_regions.push(HitRegion {
                    shape: HitShape::Sector {
                        cx: center_x,
                        cy: center_y,
                        inner_radius,
                        outer_radius: radius,
                        start_angle: slice.start_angle,
                        sweep_angle: slice.sweep_angle,
                    },
                    content,
                });
            }
        }

        // Legend keeps one entry per input slice; hidden slices lose their
        // percentage annotation because they are excluded from the total.
        let items: Vec<LegendItem> = series
            .labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let mut item = LegendItem::new(label.clone(), self.slice_color(&series, index));
                if let Some(slice) = slices.iter().find(|slice| slice.index == index) {
                    item = item.with_annotation(slice.percentage_label());
                }
                item
            })
            .collect();
        self.surface.rebuild_legend(items);
        self.surface.draw_legend(&mut frame);

        self.surface.draw_tooltip(&mut frame);
        self.frame = frame;
        Ok(())
    }
}

/// Path outline for one slice: a wedge from the center, or an annular slice
/// between the inner and outer radii in doughnut mode.
fn slice_commands(
    center_x: f64,
    center_y: f64,
    radius: f64,
    inner_radius: f64,
    slice: SliceGeometry,
) -> Vec<PathCommand> {
    // A full circle would collapse the arc to a zero-length chord; keep the
    // endpoints just short of coincident instead.
    let sweep = slice.sweep_angle.min(359.999);
    let start = slice.start_angle;
    let end = start + sweep;
    let large_arc = sweep > 180.0;

    let (outer_start_x, outer_start_y) = arc_point(center_x, center_y, radius, start);
    let (outer_end_x, outer_end_y) = arc_point(center_x, center_y, radius, end);

    if inner_radius > 0.0 {
        let (inner_start_x, inner_start_y) = arc_point(center_x, center_y, inner_radius, start);
        let (inner_end_x, inner_end_y) = arc_point(center_x, center_y, inner_radius, end);
        vec![
            PathCommand::MoveTo {
                x: outer_start_x,
                y: outer_start_y,
            },
            PathCommand::Arc {
                rx: radius,
                ry: radius,
                large_arc,
                sweep: true,
                x: outer_end_x,
                y: outer_end_y,
            },
            PathCommand::LineTo {
                x: inner_end_x,
                y: inner_end_y,
            },
            PathCommand::Arc {
                rx: inner_radius,
                ry: inner_radius,
                large_arc,
                sweep: false,
                x: inner_start_x,
                y: inner_start_y,
            },
            PathCommand::Close,
        ]
    } else {
        vec![
            PathCommand::MoveTo {
                x: center_x,
                y: center_y,
            },
            PathCommand::LineTo {
                x: outer_start_x,
                y: outer_start_y,
            },
            PathCommand::Arc {
                rx: radius,
                ry: radius,
                large_arc,
                sweep: true,
                x: outer_end_x,
                y: outer_end_y,
            },
            PathCommand::Close,
        ]
    }
}

impl Chart for PieChart {
    type Data = ProportionSeries;

    fn render(&mut self, data: &ProportionSeries) -> ChartResult<()> {
        self.data = Some(data.clone());
        self.rebuild()
    }

    fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        self.surface.resize(width, height)?;
        self.rebuild()
    }

    fn destroy(&mut self) {
        self.data = None;
        self.hit_regions.clear();
        self.surface.reset();
        self.frame = self.surface.begin_frame();
    }

    fn color(&self, index: usize) -> Color {
        self.surface.color(index)
    }

    fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    fn to_svg(&self) -> ChartResult<String> {
        self.surface.frame_to_svg(&self.frame, "pie chart")
    }

    fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        if !self.surface.show_tooltip() {
            return Ok(false);
        }
        match resolve_hit(&self.hit_regions, x, y).map(|region| region.content.clone()) {
            Some(content) => self.surface.raise_tooltip(content, x, y),
            None => self.surface.dismiss_tooltip(),
        }
        self.rebuild()?;
        Ok(self.surface.tooltip().is_some())
    }

    fn pointer_leave(&mut self) -> ChartResult<()> {
        self.surface.dismiss_tooltip();
        self.rebuild()
    }

    fn toggle_legend(&mut self, index: usize) -> ChartResult<()> {
        if self.surface.legend_mut().toggle(index).is_none() {
            return Ok(());
        }
        self.rebuild()
    }
}
