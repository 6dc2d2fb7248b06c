#![allow(non_snake_case)]
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::controller::HoverSelection;
use crate::error::SwatchError;
use crate::lab::{Rgb, lab_to_rgb};
use crate::samples::ColorSample;

/// Visual attributes of the colour square. Only the background varies.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchStyle {
    pub width: &'static str,
    pub height: &'static str,
    pub margin: &'static str,
    pub border: &'static str,
    pub background_color: String,
}

impl SwatchStyle {
    pub fn with_background(rgb: Rgb) -> Self {
        Self {
            width: "100px",
            height: "100px",
            margin: "0 auto",
            border: "1px solid black",
            background_color: rgb.to_css(),
        }
    }

    pub fn white() -> Self {
        Self::with_background(Rgb::WHITE)
    }
}

/// Colour of the hovered sample, if any.
pub fn hovered_colour(
    selection: HoverSelection,
    samples: &[ColorSample],
) -> Result<Option<(ColorSample, Rgb)>, SwatchError> {
    let Some(position) = selection.position() else {
        return Ok(None);
    };
    let sample = samples
        .get(position)
        .copied()
        .ok_or(SwatchError::InvalidSelection {
            position,
            len: samples.len(),
        })?;
    let rgb = lab_to_rgb(sample.l, sample.a, sample.b)?;
    Ok(Some((sample, rgb)))
}

/// Style for the swatch under `selection`. Any failure falls back to white.
pub fn resolve_swatch(selection: HoverSelection, samples: &[ColorSample]) -> SwatchStyle {
    match hovered_colour(selection, samples) {
        Ok(Some((_, rgb))) => SwatchStyle::with_background(rgb),
        Ok(None) => SwatchStyle::white(),
        Err(e) => {
            warn!("{e}; showing the default swatch");
            SwatchStyle::white()
        }
    }
}

/// One-line description of the hovered sample.
pub fn swatch_caption(selection: HoverSelection, samples: &[ColorSample]) -> String {
    match hovered_colour(selection, samples) {
        Ok(Some((s, rgb))) => format!(
            "n = {}: L = {}, a = {}, b = {} → {}",
            s.index,
            s.l,
            s.a,
            s.b,
            rgb.to_css()
        ),
        _ => "Hover over a point to see its colour".to_string(),
    }
}

#[component]
pub fn Swatch(style: ReadSignal<SwatchStyle>, caption: ReadSignal<String>) -> Element {
    let s = style();
    rsx! {
        div {
            class: "swatch",
            width: s.width,
            height: s.height,
            margin: s.margin,
            border: s.border,
            background_color: "{s.background_color}",
        }
        p { class: "swatch-caption", "{caption}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::SAMPLES;

    #[test]
    fn idle_is_white() {
        let style = resolve_swatch(HoverSelection::Idle, &SAMPLES);
        assert_eq!(style.background_color, "rgb(255,255,255)");
        assert_eq!(style, SwatchStyle::white());
    }

    #[test]
    fn hovered_sample_colour() {
        let style = resolve_swatch(HoverSelection::Hovering(0), &SAMPLES);
        assert_eq!(style.background_color, "rgb(228,209,180)");
        assert_eq!(style, resolve_swatch(HoverSelection::Hovering(0), &SAMPLES));
    }

    #[test]
    fn every_position_matches_converter() {
        for (i, s) in SAMPLES.iter().enumerate() {
            let expected = lab_to_rgb(s.l, s.a, s.b).unwrap().to_css();
            let style = resolve_swatch(HoverSelection::Hovering(i), &SAMPLES);
            assert_eq!(style.background_color, expected);
        }
    }

    #[test]
    fn out_of_range_falls_back_to_white() {
        assert_eq!(
            hovered_colour(HoverSelection::Hovering(12), &SAMPLES),
            Err(SwatchError::InvalidSelection {
                position: 12,
                len: 12
            })
        );
        assert_eq!(
            resolve_swatch(HoverSelection::Hovering(12), &SAMPLES),
            SwatchStyle::white()
        );
    }

    #[test]
    fn conversion_failure_falls_back_to_white() {
        let broken = [ColorSample {
            l: f32::NAN,
            a: 0.0,
            b: 0.0,
            index: 1,
        }];
        assert!(matches!(
            hovered_colour(HoverSelection::Hovering(0), &broken),
            Err(SwatchError::Conversion { .. })
        ));
        assert_eq!(
            resolve_swatch(HoverSelection::Hovering(0), &broken),
            SwatchStyle::white()
        );
    }

    #[test]
    fn only_background_varies() {
        let styles: Vec<SwatchStyle> = std::iter::once(HoverSelection::Idle)
            .chain((0..SAMPLES.len()).map(HoverSelection::Hovering))
            .map(|sel| resolve_swatch(sel, &SAMPLES))
            .collect();
        for style in &styles {
            assert_eq!(
                (style.width, style.height, style.margin, style.border),
                ("100px", "100px", "0 auto", "1px solid black")
            );
        }
    }

    #[test]
    fn caption_describes_sample() {
        assert_eq!(
            swatch_caption(HoverSelection::Hovering(0), &SAMPLES),
            "n = 5: L = 84.8, a = 2.1, b = 16.8 → rgb(228,209,180)"
        );
        assert!(swatch_caption(HoverSelection::Idle, &SAMPLES).starts_with("Hover"));
    }
}
