/// A single plotted point under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPoint {
    /// Position of the series in `ChartSpec::series`.
    pub curve_number: usize,
    /// Position of the point inside its series.
    pub point_index: usize,
    pub x: f64,
    pub y: f64,
}

/// Points currently hovered, nearest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverData {
    pub points: Vec<HoverPoint>,
}

impl HoverData {
    pub fn first(&self) -> Option<&HoverPoint> {
        self.points.first()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct HitPoint {
    point: HoverPoint,
    px: f64,
    py: f64,
}

/// Pixel positions of every point drawn on a rendered chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitMap {
    hits: Vec<HitPoint>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: HoverPoint, pixel: (i32, i32)) {
        self.hits.push(HitPoint {
            point,
            px: pixel.0 as f64,
            py: pixel.1 as f64,
        });
    }

    pub fn point_count(&self) -> usize {
        self.hits.len()
    }

    #[cfg(test)]
    pub(crate) fn pixel_of(&self, curve_number: usize, point_index: usize) -> Option<(f64, f64)> {
        self.hits
            .iter()
            .find(|h| h.point.curve_number == curve_number && h.point.point_index == point_index)
            .map(|h| (h.px, h.py))
    }

    /// Every point within `radius` pixels of `(px, py)`, sorted by distance.
    pub fn pick(&self, px: f64, py: f64, radius: f64) -> Option<HoverData> {
        let radius_sq = radius * radius;
        let mut near: Vec<(f64, HoverPoint)> = self
            .hits
            .iter()
            .filter_map(|h| {
                let d = (h.px - px).powi(2) + (h.py - py).powi(2);
                (d <= radius_sq).then_some((d, h.point))
            })
            .collect();

        if near.is_empty() {
            return None;
        }

        near.sort_by(|a, b| a.0.total_cmp(&b.0));
        Some(HoverData {
            points: near.into_iter().map(|(_, p)| p).collect(),
        })
    }
}
