use dashplot::core::{
    BarLayout, CategorySeries, Dataset, Palette, PlotArea, ProportionSeries, project_bars,
    project_slices,
};
use proptest::prelude::*;

fn category_series(values: Vec<Vec<f64>>) -> CategorySeries {
    let categories = values.first().map_or(0, Vec::len);
    CategorySeries::new(
        (0..categories).map(|i| format!("c{i}")).collect(),
        values
            .into_iter()
            .enumerate()
            .map(|(i, row)| Dataset::new(format!("d{i}"), row))
            .collect(),
    )
}

fn series_strategy() -> impl Strategy<Value = CategorySeries> {
    (1usize..10, 1usize..5)
        .prop_flat_map(|(categories, datasets)| {
            prop::collection::vec(
                prop::collection::vec(0.0f64..1_000.0, categories),
                datasets,
            )
        })
        .prop_map(category_series)
}

proptest! {
    #[test]
    fn palette_assignment_is_cyclic_property(
        index in 0usize..64,
        cycles in 1usize..8
    ) {
        let palette = Palette::default();
        prop_assert_eq!(
            palette.color(index),
            palette.color(index + cycles * palette.len())
        );
    }

    #[test]
    fn grouped_bars_stay_inside_their_category_band(series in series_strategy()) {
        let plot = PlotArea { x: 0.0, y: 0.0, width: 300.0, height: 200.0 };
        let bars = project_bars(&series, &[], plot, BarLayout::default())
            .expect("projection");

        let band = plot.width / series.labels.len() as f64;
        for bar in bars {
            let band_start = bar.category_index as f64 * band;
            prop_assert!(bar.x >= band_start - 1e-9);
            prop_assert!(bar.x + bar.width <= band_start + band + 1e-9);
        }
    }

    #[test]
    fn projected_bars_are_finite_and_inside_the_plot(series in series_strategy()) {
        let plot = PlotArea { x: 50.0, y: 30.0, width: 500.0, height: 330.0 };
        let bars = project_bars(&series, &[], plot, BarLayout::default())
            .expect("projection");

        for bar in bars {
            prop_assert!(bar.x.is_finite() && bar.y.is_finite());
            prop_assert!(bar.width.is_finite() && bar.height >= 0.0);
            prop_assert!(bar.y >= plot.y - 1e-9);
            prop_assert!(bar.y + bar.height <= plot.bottom() + 1e-9);
        }
    }

    #[test]
    fn stacked_bars_never_overflow_the_plot(series in series_strategy()) {
        let plot = PlotArea { x: 0.0, y: 0.0, width: 300.0, height: 200.0 };
        let layout = BarLayout { stacked: true, ..BarLayout::default() };
        let bars = project_bars(&series, &[], plot, layout).expect("projection");

        for bar in bars {
            prop_assert!(bar.y >= plot.y - 1e-9);
            prop_assert!(bar.y + bar.height <= plot.bottom() + 1e-9);
        }
    }

    #[test]
    fn pie_sweeps_cover_the_full_circle(
        values in prop::collection::vec(0.0f64..1_000.0, 1..16)
    ) {
        prop_assume!(values.iter().sum::<f64>() > 0.0);

        let labels = (0..values.len()).map(|i| format!("s{i}")).collect();
        let series = ProportionSeries::new(labels, values);
        let slices = project_slices(&series, &[], 100.0, 100.0, 80.0, 0.0);

        let total_sweep: f64 = slices.iter().map(|slice| slice.sweep_angle).sum();
        prop_assert!((total_sweep - 360.0).abs() <= 1e-6);

        for slice in &slices {
            prop_assert!(slice.start_angle >= -90.0 - 1e-9);
            prop_assert!(slice.end_angle() <= 270.0 + 1e-6);
        }
    }

    #[test]
    fn pie_fractions_match_their_share_of_the_total(
        values in prop::collection::vec(0.0f64..1_000.0, 1..16)
    ) {
        prop_assume!(values.iter().sum::<f64>() > 0.0);

        let total: f64 = values.iter().sum();
        let labels = (0..values.len()).map(|i| format!("s{i}")).collect();
        let series = ProportionSeries::new(labels, values.clone());
        let slices = project_slices(&series, &[], 100.0, 100.0, 80.0, 0.0);

        prop_assert_eq!(slices.len(), values.len());
        for slice in &slices {
            prop_assert!((slice.fraction - values[slice.index] / total).abs() <= 1e-9);
        }
    }
}
