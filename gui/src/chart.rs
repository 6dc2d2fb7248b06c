use plotters_dioxus::{ChartSpec, Series, SeriesColour};
use std::sync::Arc;

use crate::controller::HoverSelection;
use crate::samples::ColorSample;

/// L, a and b against the sample number `n`.
///
/// The hover selection only triggers a redraw; the chart never depends on it.
pub fn lab_chart(samples: &[ColorSample], _hover: HoverSelection, size: (u32, u32)) -> ChartSpec {
    let series = |name: &str, colour: SeriesColour, value: fn(&ColorSample) -> f32| {
        Series::new(
            name,
            colour,
            samples
                .iter()
                .map(|s| (s.index as f64, value(s) as f64))
                .collect(),
        )
    };

    ChartSpec {
        size,
        x_label: Arc::from("n"),
        y_label: Arc::from("Values"),
        show_legend: true,
        series: vec![
            series("L", SeriesColour::Blue, |s| s.l),
            series("a", SeriesColour::Green, |s| s.a),
            series("b", SeriesColour::Red, |s| s.b),
        ],
    }
}
