//! 2D circular arc sampling.
//!
//! Angles are in radians, measured counter-clockwise from +x. A negative
//! sweep (`end < start`) traverses the arc clockwise.

use super::Point2;

/// Default number of angular steps per arc.
pub const DEFAULT_ARC_STEPS: usize = 40;

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Samples `steps + 1` points along the arc from `start_angle` to `end_angle`
/// inclusive, with uniformly interpolated angles.
///
/// A `steps` of zero yields the single start point.
#[must_use]
pub fn generate_arc(
    center: Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    steps: usize,
) -> Vec<Point2> {
    let sweep = end_angle - start_angle;
    if steps == 0 {
        return vec![arc_point_at(&center, radius, start_angle, sweep, 0.0)];
    }
    (0..=steps)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / steps as f64;
            arc_point_at(&center, radius, start_angle, sweep, t)
        })
        .collect()
}
