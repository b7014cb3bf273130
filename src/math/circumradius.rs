use super::{Point2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the area of a triangle from its side lengths (Heron's formula).
///
/// Returns `NaN` when rounding pushes the product under the root below zero,
/// which only happens for (near-)collinear sides.
#[must_use]
pub fn heron_area(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) * 0.5;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Returns the radius of the circle through `p1`, `p2` and `p3`.
///
/// Uses `r = a·b·c / (4·area)` with the area from [`heron_area`].
///
/// # Errors
///
/// Returns `GeometryError::DegenerateGeometry` if the points are collinear or
/// coincident, i.e. the triangle area vanishes relative to its size.
pub fn circumradius(p1: &Point2, p2: &Point2, p3: &Point2) -> Result<f64> {
    let a = (p2 - p1).norm();
    let b = (p3 - p2).norm();
    let c = (p1 - p3).norm();

    let area = heron_area(a, b, c);
    let longest = a.max(b).max(c);

    // Scale-aware: the area of a near-flat triangle is O(longest · height).
    if area.is_nan() || longest < TOLERANCE || area <= TOLERANCE * longest * longest {
        return Err(GeometryError::DegenerateGeometry(format!(
            "points ({}, {}), ({}, {}), ({}, {}) are collinear",
            p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
        ))
        .into());
    }

    let radius = a * b * c / (4.0 * area);
    if !radius.is_finite() {
        return Err(GeometryError::DegenerateGeometry(format!(
            "circumradius overflowed for side lengths {a}, {b}, {c}"
        ))
        .into());
    }
    Ok(radius)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SkiformError;
    use approx::assert_relative_eq;

    #[test]
    fn right_triangle_is_half_the_hypotenuse() {
        let r = circumradius(
            &Point2::new(0.0, 0.0),
            &Point2::new(4.0, 0.0),
            &Point2::new(0.0, 3.0),
        )
        .unwrap();
        assert_relative_eq!(r, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn points_on_a_known_circle() {
        let center = Point2::new(10.0, -4.0);
        let radius = 7.5;
        let at = |deg: f64| {
            let a = deg.to_radians();
            Point2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        };
        let r = circumradius(&at(10.0), &at(100.0), &at(250.0)).unwrap();
        assert_relative_eq!(r, radius, epsilon = 1e-9);
    }

    #[test]
    fn order_does_not_matter() {
        let p = [
            Point2::new(350.0, 67.5),
            Point2::new(1035.0, 56.0),
            Point2::new(1620.0, 65.0),
        ];
        let r1 = circumradius(&p[0], &p[1], &p[2]).unwrap();
        let r2 = circumradius(&p[2], &p[0], &p[1]).unwrap();
        assert_relative_eq!(r1, r2, max_relative = 1e-12);
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let result = circumradius(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert!(matches!(
            result,
            Err(SkiformError::Geometry(GeometryError::DegenerateGeometry(_)))
        ));
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let p = Point2::new(5.0, 5.0);
        assert!(circumradius(&p, &p, &p).is_err());
        assert!(circumradius(&p, &p, &Point2::new(6.0, 5.0)).is_err());
    }

    #[test]
    fn heron_matches_base_times_height() {
        // 3-4-5 triangle.
        assert_relative_eq!(heron_area(3.0, 4.0, 5.0), 6.0, epsilon = 1e-12);
    }
}
