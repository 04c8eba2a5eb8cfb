use tracing::{debug, trace};

use crate::api::Chart;
use crate::api::legend::LegendItem;
use crate::api::options::BarOptions;
use crate::api::surface::ChartSurface;
use crate::core::{
    CategorySeries, Orientation, ValueScale, band_center, format_value, project_bars, value_ticks,
};
use crate::error::ChartResult;
use crate::interaction::{HitRegion, HitShape, TooltipContent, resolve_hit};
use crate::render::{Color, RectPrimitive, RenderFrame, TextAnchor, TextPrimitive};

/// Categorical comparison as rectangles: vertical or horizontal, grouped
/// side-by-side or stacked.
#[derive(Debug)]
pub struct BarChart {
    surface: ChartSurface,
    options: BarOptions,
    data: Option<CategorySeries>,
    frame: RenderFrame,
    hit_regions: Vec<HitRegion>,
}

impl BarChart {
    pub fn new(options: BarOptions) -> ChartResult<Self> {
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
            debug!("bar render skipped: series shape not renderable");
            self.frame = frame;
            return Ok(());
        }

        let layout = self.options.layout();
        let plot = self.surface.plot();
        let active = self.surface.legend().active_flags(series.datasets.len());
        let horizontal = matches!(layout.orientation, Orientation::Horizontal);

        let max = if layout.stacked {
            series.max_stacked(&active)
        } else {
            series.max_value(&active)
        };
        let value_extent = if horizontal { plot.width } else { plot.height };
        let scale = ValueScale::new(max, value_extent)?;
        let ticks = value_ticks(scale, self.surface.tick_count());
        self.surface.draw_value_axis(&mut frame, &ticks, horizontal);

        let category_count = series.labels.len();
        if horizontal {
            let positions = series.labels.iter().enumerate().map(|(index, label)| {
                (
                    plot.y + band_center(plot.height, category_count, index),
                    label.as_str(),
                )
            });
            self.surface.draw_category_labels_left(&mut frame, positions);
        } else {
            let positions = series.labels.iter().enumerate().map(|(index, label)| {
                (
                    plot.x + band_center(plot.width, category_count, index),
                    label.as_str(),
                )
            });
            self.surface
                .draw_category_labels_bottom(&mut frame, positions);
        }

        let bars = project_bars(&series, &active, plot, layout)?;
        trace!(bar_count = bars.len(), "projected bar geometry");

        for bar in &bars {
            let color = self.dataset_color(&series, bar.dataset_index);
            frame.push_rect(RectPrimitive::filled(
                bar.x, bar.y, bar.width, bar.height, color,
            ));

            if self.surface.show_tooltip() {
                let dataset = &series.datasets[bar.dataset_index];
                let content = TooltipContent::new(series.labels[bar.category_index].clone())
                    .with_entry(color, dataset.label.clone(), format_value(bar.value));
                self.hit_regions.push(HitRegion {
                    shape: HitShape::Rect {
                        x: bar.x,
                        y: bar.y,
                        width: bar.width,
                        height: bar.height,
                    },
                    content,
                });
            }

            if self.surface.show_data_labels() {
                let (x, y, anchor) = if horizontal {
                    (
                        bar.x + bar.width + 4.0,
                        bar.y + bar.height * 0.5 + 3.0,
                        TextAnchor::Start,
                    )
                } else {
                    (bar.x + bar.width * 0.5, bar.y - 4.0, TextAnchor::Middle)
                };
                frame.push_text(TextPrimitive::new(
                    format_value(bar.value),
                    x,
                    y,
                    10.0,
                    color,
                    anchor,
                ));
            }
        }

        // Legend only earns its space with more than one dataset.
        if series.datasets.len() > 1 {
            let items: Vec<LegendItem> = series
                .datasets
                .iter()
                .enumerate()
                .map(|(index, dataset)| {
                    LegendItem::new(
                        dataset.label.clone(),
                        self.dataset_color(&series, index),
                    )
                })
                .collect();
            self.surface.rebuild_legend(items);
            self.surface.draw_legend(&mut frame);
        }

        self.surface.draw_tooltip(&mut frame);
        self.frame = frame;
        Ok(())
    }
}

impl Chart for BarChart {
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
        self.surface.frame_to_svg(&self.frame, "bar chart")
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
