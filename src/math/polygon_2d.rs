use super::{Point2, TOLERANCE};

/// Signed area enclosed by `points`, treated as an implicitly closed loop.
///
/// Positive for counter-clockwise, negative for clockwise. Fewer than three
/// points enclose nothing.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let next = points.iter().cycle().skip(1);
    let twice: f64 = points
        .iter()
        .zip(next)
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice * 0.5
}

/// Reflects a half profile across the x-axis and reverses its order.
///
/// Appending the result to `half` walks back along the other side, so the
/// two halves join at the last point of `half`. The input is left untouched.
#[must_use]
pub fn mirror_reversed(half: &[Point2]) -> Vec<Point2> {
    half.iter().rev().map(|p| Point2::new(p.x, -p.y)).collect()
}

/// Returns `(min, max)` corners of the axis-aligned bounding box, or `None`
/// for an empty slice.
#[must_use]
pub fn bounding_box_2d(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// Returns `true` if the x-coordinates strictly increase along `points`.
#[must_use]
pub fn is_strictly_increasing_x(points: &[Point2]) -> bool {
    points.windows(2).all(|w| w[1].x - w[0].x > TOLERANCE)
}
