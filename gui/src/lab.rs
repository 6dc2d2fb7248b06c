use dioxus::logger::tracing::debug;
use palette::convert::FromColorUnclamped;
use palette::white_point::D65;
use palette::{Clamp, IsWithinBounds, Lab, Srgb};

use crate::error::SwatchError;

/// Gamma-encoded sRGB with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Channels scaled to 0..=255, truncating toward zero.
    pub fn to_bytes(&self) -> [u8; 3] {
        let scale = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
        [scale(self.r), scale(self.g), scale(self.b)]
    }

    pub fn to_css(&self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("rgb({r},{g},{b})")
    }
}

/// CIE L*a*b* (D65, 2° observer) to sRGB. Out-of-gamut results are clamped.
pub fn lab_to_rgb(l: f32, a: f32, b: f32) -> Result<Rgb, SwatchError> {
    if !(l.is_finite() && a.is_finite() && b.is_finite()) {
        return Err(SwatchError::Conversion { l, a, b });
    }

    let lab = Lab::<D65, f32>::new(l, a, b);
    let mut srgb = Srgb::<f32>::from_color_unclamped(lab);
    if !srgb.is_within_bounds() {
        debug!(
            "Lab({l}, {a}, {b}) is out of sRGB gamut: ({}, {}, {})",
            srgb.red, srgb.green, srgb.blue
        );
        srgb = srgb.clamp();
    }

    Ok(Rgb {
        r: srgb.red,
        g: srgb.green,
        b: srgb.blue,
    })
}

/// sRGB back to CIE L*a*b* (D65).
pub fn rgb_to_lab(rgb: Rgb) -> (f32, f32, f32) {
    let lab = Lab::<D65, f32>::from_color_unclamped(Srgb::new(rgb.r, rgb.g, rgb.b));
    (lab.l, lab.a, lab.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::SAMPLES;
    use proptest::prelude::*;

    // Truncated sRGB of every sample, from the textbook D65 pipeline.
    const EXPECTED: [[u8; 3]; 12] = [
        [228, 209, 180],
        [228, 207, 177],
        [210, 180, 142],
        [180, 140, 94],
        [162, 122, 77],
        [151, 110, 66],
        [146, 105, 62],
        [150, 109, 65],
        [156, 114, 67],
        [167, 125, 77],
        [173, 131, 84],
        [182, 142, 93],
    ];

    #[test]
    fn samples_convert_into_unit_range() {
        for s in SAMPLES.iter() {
            let rgb = lab_to_rgb(s.l, s.a, s.b).unwrap();
            for c in [rgb.r, rgb.g, rgb.b] {
                assert!((0.0..=1.0).contains(&c), "{s:?} -> {rgb:?}");
            }
        }
    }

    #[test]
    fn samples_match_reference_pipeline() {
        for (s, expected) in SAMPLES.iter().zip(EXPECTED) {
            let bytes = lab_to_rgb(s.l, s.a, s.b).unwrap().to_bytes();
            assert_eq!(bytes, expected, "{s:?}");
        }
    }

    #[test]
    fn first_sample_css() {
        let rgb = lab_to_rgb(84.8, 2.1, 16.8).unwrap();
        assert_eq!(rgb.to_css(), "rgb(228,209,180)");
        assert_eq!(rgb, lab_to_rgb(84.8, 2.1, 16.8).unwrap());
    }

    #[test]
    fn out_of_gamut_is_clamped() {
        let rgb = lab_to_rgb(50.0, 127.0, -128.0).unwrap();
        for c in [rgb.r, rgb.g, rgb.b] {
            assert!((0.0..=1.0).contains(&c));
        }
        assert_eq!(lab_to_rgb(0.0, 0.0, 0.0).unwrap().to_css(), "rgb(0,0,0)");
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert!(matches!(
            lab_to_rgb(f32::NAN, 0.0, 0.0),
            Err(SwatchError::Conversion { .. })
        ));
        assert!(lab_to_rgb(50.0, f32::INFINITY, 0.0).is_err());
    }

    #[test]
    fn css_truncates_and_clamps() {
        let rgb = Rgb {
            r: 0.999,
            g: -0.2,
            b: 1.7,
        };
        assert_eq!(rgb.to_css(), "rgb(254,0,255)");
        assert_eq!(Rgb::WHITE.to_css(), "rgb(255,255,255)");
    }

    #[test]
    fn neutral_gray_round_trips() {
        let rgb = lab_to_rgb(50.0, 0.0, 0.0).unwrap();
        assert!((rgb.r - 0.4663).abs() < 1e-3);
        assert!((rgb.r - rgb.g).abs() < 1e-3 && (rgb.g - rgb.b).abs() < 1e-3);

        let (l, a, b) = rgb_to_lab(rgb);
        assert!(l.is_finite() && a.is_finite() && b.is_finite());
        assert!((l - 50.0).abs() < 0.05, "L = {l}");
        assert!(a.abs() < 0.05, "a = {a}");
        assert!(b.abs() < 0.05, "b = {b}");
    }

    proptest! {
        #[test]
        fn any_lab_converts_into_unit_range(
            l in 0.0f32..=100.0,
            a in -128.0f32..=127.0,
            b in -128.0f32..=127.0,
        ) {
            let rgb = lab_to_rgb(l, a, b).unwrap();
            for c in [rgb.r, rgb.g, rgb.b] {
                prop_assert!((0.0..=1.0).contains(&c));
            }
        }
    }
}
