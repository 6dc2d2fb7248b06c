use dioxus::logger::tracing::Level;

/// Fixed application settings. Nothing here is read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_title: &'static str,
    pub window_size: (f64, f64),
    pub chart_size: (u32, u32),
    /// Pointer distance, in pixels, at which a chart point counts as hovered.
    pub hover_radius: f64,
    /// Developer diagnostics: verbose logging.
    pub diagnostics: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Lab Colour Samples",
            window_size: (700.0, 820.0),
            chart_size: (600, 600),
            hover_radius: 10.0,
            diagnostics: true,
        }
    }
}

impl AppConfig {
    pub fn log_level(&self) -> Level {
        if self.diagnostics {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}
