use super::params::{Mode, SkiParameters};
use crate::math::Point2;

/// Parameter-derived points the sidecut curve passes through, ordered tip to tail.
///
/// Classic mode holds `[tip arc, waist, tail arc]`; tapered mode holds
/// `[tip arc, tip taper, waist, tail taper, tail arc]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointSet {
    mode: Mode,
    points: Vec<Point2>,
}

impl ControlPointSet {
    /// Derives the control points for `params` in the given `mode`.
    ///
    /// In tapered mode each taper offset is raised to at least its arc
    /// radius so a taper point never lands inside the arc's x-extent.
    #[must_use]
    pub fn from_parameters(params: &SkiParameters, mode: Mode) -> Self {
        let tip_arc = Point2::new(params.tip_arc_radius, params.tip_arc_radius);
        let waist = Point2::new(params.waist_x(), params.waist_width * 0.5);
        let tail_arc = Point2::new(
            params.total_length - params.tail_arc_radius,
            params.tail_arc_radius,
        );

        let points = match mode {
            Mode::Classic => vec![tip_arc, waist, tail_arc],
            Mode::Tapered => {
                let tip_offset = params.tip_taper_offset.max(params.tip_arc_radius);
                let tail_offset = params.tail_taper_offset.max(params.tail_arc_radius);
                let tip_taper = Point2::new(
                    tip_offset + params.tip_taper_length,
                    params.tip_taper_width * 0.5,
                );
                let tail_taper = Point2::new(
                    params.total_length - tail_offset - params.tail_taper_length,
                    params.tail_taper_width * 0.5,
                );
                vec![tip_arc, tip_taper, waist, tail_taper, tail_arc]
            }
        };

        Self { mode, points }
    }

    /// Returns the mode the points were derived for.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the ordered control points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of control points (3 or 5).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set holds no points. Derived sets never do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the three points used for the sidecut radius.
    ///
    /// Classic: all three. Tapered: tip taper, waist and tail taper.
    #[must_use]
    pub fn radius_points(&self) -> [Point2; 3] {
        let p = &self.points;
        match self.mode {
            Mode::Classic => [p[0], p[1], p[2]],
            Mode::Tapered => [p[1], p[2], p[3]],
        }
    }
}
