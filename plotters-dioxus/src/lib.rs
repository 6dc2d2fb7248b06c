pub mod chart;
pub mod error;
pub mod hover;
pub mod plotter;

pub use chart::{ChartSpec, RenderedChart, Series, SeriesColour};
pub use error::PlotError;
pub use hover::{HitMap, HoverData, HoverPoint};
pub use plotter::Plotters;
