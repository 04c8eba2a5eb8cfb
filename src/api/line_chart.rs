use tracing::{debug, trace};

use crate::api::Chart;
use crate::api::legend::LegendItem;
use crate::api::options::LineOptions;
use crate::api::surface::ChartSurface;
use crate::core::{
    CategorySeries, ValueScale, format_value, project_line_series, smooth_segments, value_ticks,
};
use crate::error::ChartResult;
use crate::interaction::{HitRegion, HitShape, TooltipContent, resolve_hit};
use crate::render::{
    CirclePrimitive, Color, PathCommand, PathPrimitive, RenderFrame, Stroke,
};

const LINE_WIDTH: f64 = 2.0;
const POINT_RADIUS: f64 = 3.5;
const POINT_HIT_RADIUS: f64 = 8.0;
const AREA_ALPHA: f64 = 0.18;

/// One or more trends over an ordered category axis, optionally smoothed
/// and/or area-filled, with point markers.
#[derive(Debug)]
pub struct LineChart {
    surface: ChartSurface,
    options: LineOptions,
    data: Option<CategorySeries>,
    frame: RenderFrame,
    hit_regions: Vec<HitRegion>,
}

impl LineChart {
    pub fn new(options: LineOptions) -> ChartResult<Self> {
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

    fn dataset_color(&self, series: &CategorySeries, dataset_index: usize) -> Color {
        series.datasets[dataset_index]
            .color
            .unwrap_or_else(|| self.surface.color(dataset_index))
    }

    fn rebuild(&mut self) -> ChartResult<()> {
        let mut frame = self.surface.begin_frame();
        self.hit_regions.clear();

        let Some(series) = self.data.clone() else {
            self.frame = frame;
            return Ok(());
        };
        if !series.is_renderable() {
            debug!("line render skipped: series shape not renderable");
            self.frame = frame;
            return Ok(());
        }

        let plot = self.surface.plot();
        let active = self.surface.legend().active_flags(series.datasets.len());

        let scale = ValueScale::new(series.max_value(&active), plot.height)?;
        let ticks = value_ticks(scale, self.surface.tick_count());
        self.surface.draw_value_axis(&mut frame, &ticks, false);

        let lines = project_line_series(&series, &active, plot)?;
        trace!(line_count = lines.len(), "projected line series");

        // Category labels reuse the projected x positions of the first line.
        if let Some(first) = lines.first() {
            let positions = first
                .points
                .iter()
                .zip(series.labels.iter())
                .map(|(point, label)| (point.x, label.as_str()));
            self.surface
                .draw_category_labels_bottom(&mut frame, positions);
        }

        for line in &lines {
            let color = self.dataset_color(&series, line.dataset_index);
            let points = &line.points;

            // A single category degenerates to a lone marker with no path.
            if points.len() >= 2 {
                let mut commands = Vec::with_capacity(points.len() + 3);
                commands.push(PathCommand::MoveTo {
                    x: points[0].x,
                    y: points[0].y,
                });
                if self.options.smooth {
                    for segment in smooth_segments(points, self.options.tension) {
                        commands.push(PathCommand::CubicTo {
                            x1: segment.c1x,
                            y1: segment.c1y,
                            x2: segment.c2x,
                            y2: segment.c2y,
                            x: segment.x,
                            y: segment.y,
                        });
                    }
                } else {
                    for point in &points[1..] {
                        commands.push(PathCommand::LineTo {
                            x: point.x,
                            y: point.y,
                        });
                    }
                }

                if self.options.show_area {
                    let mut area = commands.clone();
                    area.push(PathCommand::LineTo {
                        x: points[points.len() - 1].x,
                        y: plot.bottom(),
                    });
                    area.push(PathCommand::LineTo {
                        x: points[0].x,
                        y: plot.bottom(),
                    });
                    area.push(PathCommand::Close);
                    frame.push_path(PathPrimitive::filled(area, color.with_alpha(AREA_ALPHA)));
                }

                frame.push_path(PathPrimitive::stroked(
                    commands,
                    Stroke::new(color, LINE_WIDTH),
                ));
            }

            if self.options.show_points {
                for point in points {
                    frame.push_circle(
                        CirclePrimitive::new(point.x, point.y, POINT_RADIUS, color)
                            .with_stroke(Stroke::new(Color::rgb(1.0, 1.0, 1.0), 1.5)),
                    );

                    if self.surface.show_tooltip() {
                        let dataset = &series.datasets[point.dataset_index];
                        let content =
                            TooltipContent::new(series.labels[point.category_index].clone())
                                .with_entry(color, dataset.label.clone(), format_value(point.value));
                        self.hit_regions.push(HitRegion {
                            shape: HitShape::Circle {
                                cx: point.x,
                                cy: point.y,
                                radius: POINT_HIT_RADIUS,
                            },
                            content,
                        });
                    }
                }
            }
        }

        // Line charts always offer a legend, even for a single dataset.
        let items: Vec<LegendItem> = series
            .datasets
            .iter()
            .enumerate()
            .map(|(index, dataset)| {
                LegendItem::new(dataset.label.clone(), self.dataset_color(&series, index))
            })
            .collect();
        self.surface.rebuild_legend(items);
        self.surface.draw_legend(&mut frame);

        self.surface.draw_tooltip(&mut frame);
        self.frame = frame;
        Ok(())
    }
}

impl Chart for LineChart {
    type Data = CategorySeries;

    fn render(&mut self, data: &CategorySeries) -> ChartResult<()> {
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
        self.surface.frame_to_svg(&self.frame, "line chart")
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
