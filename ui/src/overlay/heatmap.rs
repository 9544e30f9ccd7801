//! Grid heatmap: noise blended with exponential falloff around a few
//! synthetic cluster centres, one of which sits on the pin.

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::geometry::Point;
use super::ordered;
use crate::core::config::HeatmapTuning;
use crate::wizard::ImageFrame;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    pub center: Point,
    pub radius: f64,
}

impl Cluster {
    fn influence(&self, p: Point) -> f64 {
        (-p.distance(self.center) / self.radius).exp()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatBand {
    None,
    Faint,
    Low,
    Medium,
    High,
}

impl HeatBand {
    pub fn from_heat(heat: f64) -> Self {
        match heat {
            h if h < 0.2 => Self::None,
            h if h < 0.4 => Self::Faint,
            h if h < 0.6 => Self::Low,
            h if h < 0.8 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            Self::None => "transparent",
            Self::Faint => "rgb(254, 202, 202)",
            Self::Low => "rgb(248, 113, 113)",
            Self::Medium => "rgb(220, 38, 38)",
            Self::High => "rgb(153, 27, 27)",
        }
    }

    pub fn opacity(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Faint => 0.15,
            Self::Low => 0.3,
            Self::Medium => 0.45,
            Self::High => 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCell {
    pub col: usize,
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub heat: f64,
}

impl HeatCell {
    pub fn band(&self) -> HeatBand {
        HeatBand::from_heat(self.heat)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    pub cell_size: f64,
    pub cols: usize,
    pub rows: usize,
    pub clusters: Vec<Cluster>,
    pub cells: Vec<HeatCell>,
}

impl HeatmapGrid {
    /// Square cell edge that keeps roughly `target_columns` across the width.
    pub fn cell_size_for(width: f64, tuning: &HeatmapTuning) -> f64 {
        let (lo, hi) = ordered(tuning.min_cell_px.max(1.0), tuning.max_cell_px.max(1.0));
        (width / tuning.target_columns).max(lo).min(hi)
    }

    pub fn generate<R: Rng + ?Sized>(
        frame: ImageFrame,
        pin: Option<Point>,
        tuning: &HeatmapTuning,
        rng: &mut R,
    ) -> Self {
        let cell_size = Self::cell_size_for(frame.width, tuning);
        if frame.is_empty() {
            return Self {
                cell_size,
                cols: 0,
                rows: 0,
                clusters: Vec::new(),
                cells: Vec::new(),
            };
        }

        let cols = (frame.width / cell_size).ceil() as usize;
        let rows = (frame.height / cell_size).ceil() as usize;
        let min_side = frame.width.min(frame.height);
        let (radius_lo, radius_hi) = ordered(tuning.radius_fraction.0, tuning.radius_fraction.1);
        let radius = |rng: &mut R| (min_side * rng.gen_range(radius_lo..=radius_hi)).max(1.0);

        let mut clusters = Vec::new();
        if let Some(pin) = pin {
            clusters.push(Cluster {
                center: pin.clamp_to(frame),
                radius: radius(rng),
            });
        }
        let (extra_lo, extra_hi) = tuning.extra_clusters;
        let extra = rng.gen_range(extra_lo..=extra_hi.max(extra_lo));
        for _ in 0..extra {
            let center = Point::new(
                rng.gen_range(0.0..=frame.width),
                rng.gen_range(0.0..=frame.height),
            );
            clusters.push(Cluster {
                center,
                radius: radius(rng),
            });
        }

        let noise_weight = tuning.noise_weight.clamp(0.0, 1.0);
        let mut cells = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let x = col as f64 * cell_size;
                let y = row as f64 * cell_size;
                let width = cell_size.min(frame.width - x);
                let height = cell_size.min(frame.height - y);
                let center = Point::new(x + width / 2.0, y + height / 2.0);

                let influence: f64 = clusters.iter().map(|c| c.influence(center)).sum();
                let noise: f64 = rng.gen();
                let heat = (noise_weight * noise + (1.0 - noise_weight) * influence).min(1.0);

                cells.push(HeatCell {
                    col,
                    row,
                    x,
                    y,
                    width,
                    height,
                    heat,
                });
            }
        }

        Self {
            cell_size,
            cols,
            rows,
            clusters,
            cells,
        }
    }

    pub fn generate_with_seed(
        frame: ImageFrame,
        pin: Option<Point>,
        tuning: &HeatmapTuning,
        seed: u64,
    ) -> Self {
        Self::generate(frame, pin, tuning, &mut StdRng::seed_from_u64(seed))
    }

    /// Cells worth drawing (band above `None`).
    pub fn visible_cells(&self) -> impl Iterator<Item = &HeatCell> {
        self.cells.iter().filter(|cell| cell.band() != HeatBand::None)
    }
}
