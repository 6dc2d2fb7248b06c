/// One measured colour: CIE L*a*b* coordinates and its sample number `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    pub l: f32,
    pub a: f32,
    pub b: f32,
    pub index: u32,
}

const fn sample(l: f32, a: f32, b: f32, index: u32) -> ColorSample {
    ColorSample { l, a, b, index }
}

/// The fixed sample table, in plotting order.
pub static SAMPLES: [ColorSample; 12] = [
    sample(84.8, 2.1, 16.8, 5),
    sample(84.3, 2.6, 17.4, 9),
    sample(75.1, 5.4, 23.1, 17),
    sample(61.1, 9.5, 30.4, 24),
    sample(54.4, 10.0, 30.5, 34),
    sample(49.9, 10.9, 30.8, 44),
    sample(48.0, 11.3, 30.6, 53),
    sample(49.5, 11.1, 31.0, 63),
    sample(51.5, 11.2, 32.1, 73),
    sample(55.6, 10.4, 32.1, 82),
    sample(58.1, 10.0, 31.4, 90),
    sample(61.9, 9.2, 31.7, 96),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_samples_with_unique_indices() {
        let mut indices: Vec<u32> = SAMPLES.iter().map(|s| s.index).collect();
        assert_eq!(indices.len(), 12);
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), 12);
    }

    #[test]
    fn lightness_in_range() {
        assert!(SAMPLES.iter().all(|s| (0.0..=100.0).contains(&s.l)));
        assert_eq!(SAMPLES[0], sample(84.8, 2.1, 16.8, 5));
    }
}
