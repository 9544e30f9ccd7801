//! Route overlay: a path from the pin to a random point on the image edge.
//! The `Smooth` variant is a single Bézier; `Squiggly` wanders and throws off
//! short branches that are only partly drawn before they fade.

use std::f64::consts::TAU;

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::geometry::{Point, SvgPath};
use super::ordered;
use crate::core::config::RouteTuning;
use crate::wizard::ImageFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteVariant {
    #[default]
    Smooth,
    Squiggly,
}

impl RouteVariant {
    pub fn toggled(self) -> Self {
        match self {
            Self::Smooth => Self::Squiggly,
            Self::Squiggly => Self::Smooth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    fn point(self, frame: ImageFrame, t: f64) -> Point {
        match self {
            Self::Top => Point::new(frame.width * t, 0.0),
            Self::Right => Point::new(frame.width, frame.height * t),
            Self::Bottom => Point::new(frame.width * t, frame.height),
            Self::Left => Point::new(0.0, frame.height * t),
        }
    }

    pub fn contains(self, frame: ImageFrame, p: Point) -> bool {
        const EPS: f64 = 1e-9;
        match self {
            Self::Top => p.y.abs() < EPS,
            Self::Right => (p.x - frame.width).abs() < EPS,
            Self::Bottom => (p.y - frame.height).abs() < EPS,
            Self::Left => p.x.abs() < EPS,
        }
    }
}

/// Side path of the squiggly variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub d: String,
    pub points: Vec<Point>,
    /// Fraction of the branch drawn before it fades, in `(0, 1]`.
    pub reveal: f64,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteOverlay {
    pub variant: RouteVariant,
    pub start: Point,
    pub end: Point,
    pub edge: Edge,
    /// Start, turning points or squiggle vertices, end.
    pub points: Vec<Point>,
    pub d: String,
    pub branches: Vec<Branch>,
}

impl RouteOverlay {
    /// Build a route from `pin` (or the image centre) to a random edge point.
    pub fn generate<R: Rng + ?Sized>(
        frame: ImageFrame,
        pin: Option<Point>,
        variant: RouteVariant,
        tuning: &RouteTuning,
        rng: &mut R,
    ) -> Self {
        let start = pin.unwrap_or_else(|| Point::center_of(frame)).clamp_to(frame);
        let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
        let end = edge.point(frame, rng.gen_range(0.0..=1.0));

        let (points, d, branches) = match variant {
            RouteVariant::Smooth => {
                let (points, d) = smooth(frame, start, end, tuning, rng);
                (points, d, Vec::new())
            }
            RouteVariant::Squiggly => {
                let points = squiggle(frame, start, end, tuning, rng);
                let d = SvgPath::smooth_through(&points).finish();
                let branches = branches(frame, &points, start.distance(end), tuning, rng);
                (points, d, branches)
            }
        };

        Self {
            variant,
            start,
            end,
            edge,
            points,
            d,
            branches,
        }
    }

    pub fn generate_with_seed(
        frame: ImageFrame,
        pin: Option<Point>,
        variant: RouteVariant,
        tuning: &RouteTuning,
        seed: u64,
    ) -> Self {
        Self::generate(
            frame,
            pin,
            variant,
            tuning,
            &mut StdRng::seed_from_u64(seed),
        )
    }
}

/// Unit normal of the segment `a → b`, or zero for a degenerate segment.
fn normal(a: Point, b: Point) -> (f64, f64) {
    let len = a.distance(b);
    if len < f64::EPSILON {
        (0.0, 0.0)
    } else {
        (-(b.y - a.y) / len, (b.x - a.x) / len)
    }
}

fn symmetric<R: Rng + ?Sized>(rng: &mut R, limit: f64) -> f64 {
    if limit <= 0.0 {
        0.0
    } else {
        rng.gen_range(-limit..=limit)
    }
}

fn smooth<R: Rng + ?Sized>(
    frame: ImageFrame,
    start: Point,
    end: Point,
    tuning: &RouteTuning,
    rng: &mut R,
) -> (Vec<Point>, String) {
    let len = start.distance(end);
    let (nx, ny) = normal(start, end);
    let turns: usize = rng.gen_range(1..=2);

    let controls: Vec<Point> = (1..=turns)
        .map(|i| {
            let t = i as f64 / (turns + 1) as f64 + symmetric(rng, 0.1);
            let offset = symmetric(rng, tuning.bend_fraction * len);
            start
                .lerp(end, t)
                .offset(nx * offset, ny * offset)
                .clamp_to(frame)
        })
        .collect();

    let path = SvgPath::move_to(start);
    let d = match controls.as_slice() {
        [c] => path.quad_to(*c, end),
        [c1, c2] => path.cubic_to(*c1, *c2, end),
        _ => path.line_to(end),
    }
    .finish();

    let mut points = Vec::with_capacity(controls.len() + 2);
    points.push(start);
    points.extend(controls);
    points.push(end);
    (points, d)
}

fn squiggle<R: Rng + ?Sized>(
    frame: ImageFrame,
    start: Point,
    end: Point,
    tuning: &RouteTuning,
    rng: &mut R,
) -> Vec<Point> {
    let len = start.distance(end);
    let (nx, ny) = normal(start, end);
    let (lo, hi) = tuning.squiggle_segments;
    let segments = rng.gen_range(lo.max(2)..=hi.max(lo.max(2)));
    let jitter = tuning.squiggle_jitter * len;

    let mut points = Vec::with_capacity(segments + 1);
    points.push(start);
    for i in 1..segments {
        let t = i as f64 / segments as f64;
        let sideways = symmetric(rng, jitter);
        let along = symmetric(rng, jitter * 0.3);
        let p = start
            .lerp(end, t)
            .offset(nx * sideways - ny * along, ny * sideways + nx * along)
            .clamp_to(frame);
        points.push(p);
    }
    points.push(end);
    points
}

fn branches<R: Rng + ?Sized>(
    frame: ImageFrame,
    route: &[Point],
    route_len: f64,
    tuning: &RouteTuning,
    rng: &mut R,
) -> Vec<Branch> {
    if route.len() < 3 {
        return Vec::new();
    }

    let (lo, hi) = tuning.branches;
    let count = rng.gen_range(lo..=hi.max(lo));
    let (reveal_lo, reveal_hi) = ordered(tuning.branch_reveal.0, tuning.branch_reveal.1);

    (0..count)
        .map(|_| {
            let anchor = route[rng.gen_range(1..route.len() - 1)];
            let angle = rng.gen_range(0.0..TAU);
            let length = (route_len * rng.gen_range(0.1..=0.3)).max(20.0);
            let steps: usize = rng.gen_range(2..=4);

            let mut points = vec![anchor];
            for step in 1..=steps {
                let reach = length * step as f64 / steps as f64;
                let wobble = symmetric(rng, length * 0.15);
                let p = anchor
                    .offset(angle.cos() * reach, angle.sin() * reach)
                    .offset(-angle.sin() * wobble, angle.cos() * wobble)
                    .clamp_to(frame);
                points.push(p);
            }

            Branch {
                d: SvgPath::smooth_through(&points).finish(),
                points,
                reveal: rng.gen_range(reveal_lo..=reveal_hi),
                delay_ms: rng.gen_range(200..=1_200),
            }
        })
        .collect()
}
