//! Decorative overlays drawn over the uploaded image on the result screen.
//!
//! Both generators are pure functions of the image frame, the optional pin
//! and an RNG. The view seeds them from the thread RNG so every trigger
//! draws something new; tests pass a seeded `StdRng`.

mod geometry;
pub mod heatmap;
pub mod route;

pub use geometry::{Point, SvgPath};
pub use heatmap::{Cluster, HeatBand, HeatCell, HeatmapGrid};
pub use route::{Branch, Edge, RouteOverlay, RouteVariant};

/// `(lo, hi)` in ascending order, so reversed tuning bounds never reach
/// `gen_range` or `clamp` as an empty range.
fn ordered(a: f64, b: f64) -> (f64, f64) {
    (a.min(b), a.max(b))
}
