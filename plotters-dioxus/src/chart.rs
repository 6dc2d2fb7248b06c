use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use std::io::Cursor;
use std::ops::Range;
use std::sync::Arc;

use crate::error::PlotError;
use crate::hover::{HitMap, HoverPoint};

pub type DioxusDrawingArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const RANGE_MARGIN: f64 = 0.05;

/// Named series colours, matching their CSS counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColour {
    Blue,
    Green,
    Red,
}

impl SeriesColour {
    pub fn rgb(&self) -> RGBColor {
        match self {
            SeriesColour::Blue => RGBColor(0, 0, 255),
            SeriesColour::Green => RGBColor(0, 128, 0),
            SeriesColour::Red => RGBColor(255, 0, 0),
        }
    }
}

/// One line-with-markers trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: Arc<str>,
    pub colour: SeriesColour,
    /// Marker diameter in pixels.
    pub marker_size: u32,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: &str, colour: SeriesColour, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: Arc::from(name),
            colour,
            marker_size: 10,
            points,
        }
    }
}

/// Everything needed to draw a chart. Equal specs render identical images.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub size: (u32, u32),
    pub x_label: Arc<str>,
    pub y_label: Arc<str>,
    pub show_legend: bool,
    pub series: Vec<Series>,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            size: (600, 600),
            x_label: Arc::from(""),
            y_label: Arc::from(""),
            show_legend: true,
            series: Vec::new(),
        }
    }
}

fn padded(min: f64, max: f64) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    if span == 0.0 {
        return (min - 1.0)..(max + 1.0);
    }
    let margin = span * RANGE_MARGIN;
    (min - margin)..(max + margin)
}

impl ChartSpec {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Axis ranges covering every point with a small margin.
    pub fn ranges(&self) -> (Range<f64>, Range<f64>) {
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);

        for &(x, y) in self.series.iter().flat_map(|s| s.points.iter()) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        (padded(x_min, x_max), padded(y_min, y_max))
    }

    fn draw(&self, drawing_area: &DioxusDrawingArea) -> Result<HitMap, PlotError> {
        drawing_area.fill(&WHITE).map_err(PlotError::draw)?;

        let (x_range, y_range) = self.ranges();
        let mut chart = ChartBuilder::on(drawing_area)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_range, y_range)
            .map_err(PlotError::draw)?;

        chart
            .configure_mesh()
            .x_desc(self.x_label.as_ref())
            .y_desc(self.y_label.as_ref())
            .draw()
            .map_err(PlotError::draw)?;

        let mut hit_map = HitMap::new();

        for (curve_number, series) in self.series.iter().enumerate() {
            let colour = series.colour.rgb();
            chart
                .draw_series(LineSeries::new(
                    series.points.iter().copied(),
                    colour.stroke_width(2),
                ))
                .map_err(PlotError::draw)?
                .label(series.name.as_ref())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], colour.stroke_width(2))
                });

            let radius = (series.marker_size / 2) as i32;
            chart
                .draw_series(
                    series
                        .points
                        .iter()
                        .map(|&p| Circle::new(p, radius, colour.filled())),
                )
                .map_err(PlotError::draw)?;

            for (point_index, &(x, y)) in series.points.iter().enumerate() {
                hit_map.push(
                    HoverPoint {
                        curve_number,
                        point_index,
                        x,
                        y,
                    },
                    chart.backend_coord(&(x, y)),
                );
            }
        }

        if self.show_legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(PlotError::draw)?;
        }

        drawing_area.present().map_err(PlotError::draw)?;
        Ok(hit_map)
    }

    /// Draws the chart into an RGB bitmap and encodes it as PNG.
    pub fn render(&self) -> Result<RenderedChart, PlotError> {
        let (width, height) = self.size;
        let mut buffer = vec![0u8; (width * height * 3) as usize];

        let hit_map = {
            let drawing_area =
                BitMapBackend::with_buffer(buffer.as_mut_slice(), (width, height))
                    .into_drawing_area();
            self.draw(&drawing_area)?
        };

        let mut png = Vec::new();
        PngEncoder::new(Cursor::new(&mut png))
            .write_image(buffer.as_slice(), width, height, ExtendedColorType::Rgb8)
            .map_err(|e| PlotError::Encode(e.to_string()))?;

        Ok(RenderedChart {
            size: self.size,
            png,
            hit_map,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub size: (u32, u32),
    pub png: Vec<u8>,
    pub hit_map: HitMap,
}

impl RenderedChart {
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", BASE64_STANDARD.encode(&self.png))
    }
}
