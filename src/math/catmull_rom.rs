//! Uniform Catmull-Rom interpolation through 2D control points.

use super::Point2;

/// Default number of samples per spline segment.
pub const DEFAULT_SPLINE_STEPS: usize = 300;

/// Evaluates one coordinate of the uniform Catmull-Rom cubic at `t` in `[0, 1]`.
///
/// The curve runs from `p1` (t = 0) to `p2` (t = 1).
#[must_use]
pub fn catmull_rom_blend(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Evaluates a point on the Catmull-Rom segment between `p1` and `p2`.
#[must_use]
pub fn catmull_rom_point(p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2, t: f64) -> Point2 {
    Point2::new(
        catmull_rom_blend(p0.x, p1.x, p2.x, p3.x, t),
        catmull_rom_blend(p0.y, p1.y, p2.y, p3.y, t),
    )
}

/// Samples a Catmull-Rom spline through every point of `points`.
///
/// Each segment `points[i] -> points[i + 1]` contributes `steps + 1` samples
/// at uniformly spaced `t` in `[0, 1]`, both ends included. Outside the
/// sequence the neighbor is replaced by the nearest endpoint, which flattens
/// curvature at the ends. Segment boundary points appear twice in the output.
///
/// Fewer than two points produce an empty curve. A `steps` of zero is treated
/// as one, giving two samples per segment instead of `steps + 1`; a single
/// sample at `t = 0` would drop the last control point.
#[must_use]
pub fn interpolate_curve(points: &[Point2], steps: usize) -> Vec<Point2> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let steps = steps.max(1);

    let mut result = Vec::with_capacity((n - 1) * (steps + 1));
    for i in 0..n - 1 {
        let p0 = if i == 0 { &points[i] } else { &points[i - 1] };
        let p1 = &points[i];
        let p2 = &points[i + 1];
        let p3 = points.get(i + 2).unwrap_or(p2);

        for j in 0..=steps {
            #[allow(clippy::cast_precision_loss)]
            let t = j as f64 / steps as f64;
            result.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    }
    result
}
