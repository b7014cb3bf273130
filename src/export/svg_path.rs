//! SVG path data for closed outlines.

use crate::math::polygon_2d::bounding_box_2d;
use crate::math::Point2;

/// Formats `points` as closed SVG path data: `M x y L x y ... Z`.
///
/// Coordinates are written with `precision` decimals. An empty slice gives
/// an empty string.
#[must_use]
pub fn path_data(points: &[Point2], precision: usize) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut d = format!("M{:.*} {:.*}", precision, first.x, precision, first.y);
    d.reserve(rest.len() * (2 * precision + 12));
    for p in rest {
        d.push_str(&format!(" L{:.*} {:.*}", precision, p.x, precision, p.y));
    }
    d.push_str(" Z");
    d
}

/// Returns a `[min_x, min_y, width, height]` view box around `points`,
/// padded by `margin` on every side.
#[must_use]
pub fn view_box(points: &[Point2], margin: f64) -> Option<[f64; 4]> {
    let (min, max) = bounding_box_2d(points)?;
    Some([
        min.x - margin,
        min.y - margin,
        max.x - min.x + 2.0 * margin,
        max.y - min.y + 2.0 * margin,
    ])
}
