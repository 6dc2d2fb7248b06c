use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Failed to encode chart image: {0}")]
    Encode(String),
    #[error("Chart render task failed: {0}")]
    Join(String),
}

impl PlotError {
    pub(crate) fn draw(e: impl std::fmt::Display) -> Self {
        PlotError::Draw(e.to_string())
    }
}
