use super::control_points::ControlPointSet;
use crate::error::Result;
use crate::math::circumradius::circumradius;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// A closed ski silhouette and the control points it was built from.
///
/// The outline is the upper half profile (nose arc, sidecut, tail arc)
/// followed by its mirror image walked in reverse. The last point is not
/// repeated; whoever draws it closes the loop.
#[derive(Debug, Clone, PartialEq)]
pub struct SkiOutline {
    points: Vec<Point2>,
    upper_len: usize,
    control_points: ControlPointSet,
}

impl SkiOutline {
    pub(crate) fn new(points: Vec<Point2>, upper_len: usize, control_points: ControlPointSet) -> Self {
        debug_assert!(upper_len <= points.len());
        Self {
            points,
            upper_len,
            control_points,
        }
    }

    /// Returns the full closed outline.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the upper half profile (y ≥ 0 side).
    #[must_use]
    pub fn upper_half(&self) -> &[Point2] {
        &self.points[..self.upper_len]
    }

    /// Returns the mirrored lower half, ordered tail to tip.
    #[must_use]
    pub fn lower_half(&self) -> &[Point2] {
        &self.points[self.upper_len..]
    }

    /// Returns the control points the sidecut was interpolated through.
    #[must_use]
    pub fn control_points(&self) -> &ControlPointSet {
        &self.control_points
    }

    /// Returns the three points the sidecut radius is measured through.
    #[must_use]
    pub fn radius_control_points(&self) -> [Point2; 3] {
        self.control_points.radius_points()
    }

    /// Planform area enclosed by the outline, in square millimeters.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.points).abs()
    }

    /// Effective sidecut radius in millimeters.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateGeometry` if the radius points are
    /// collinear (a straight sidecut).
    pub fn sidecut_radius(&self) -> Result<f64> {
        let [a, b, c] = self.radius_control_points();
        circumradius(&a, &b, &c)
    }

    /// Effective sidecut radius in meters.
    ///
    /// # Errors
    ///
    /// See [`Self::sidecut_radius`].
    pub fn sidecut_radius_m(&self) -> Result<f64> {
        Ok(self.sidecut_radius()? / 1000.0)
    }
}
