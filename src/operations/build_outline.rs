use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::geometry::{ControlPointSet, Mode, SkiOutline, SkiParameters};
use crate::math::arc_2d::{generate_arc, DEFAULT_ARC_STEPS};
use crate::math::catmull_rom::{interpolate_curve, DEFAULT_SPLINE_STEPS};
use crate::math::polygon_2d::mirror_reversed;
use crate::math::Point2;

/// Start angle of the tail arc. The tail is rounded over a shallower sweep
/// than the quarter-circle nose.
pub const TAIL_ARC_START_ANGLE: f64 = PI / 2.85;

/// Sampling density of a generated outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineResolution {
    /// Samples per sidecut spline segment.
    pub spline_steps: usize,
    /// Angular steps per nose/tail arc.
    pub arc_steps: usize,
}

impl Default for OutlineResolution {
    fn default() -> Self {
        Self {
            spline_steps: DEFAULT_SPLINE_STEPS,
            arc_steps: DEFAULT_ARC_STEPS,
        }
    }
}

/// Builds a closed ski outline from design parameters.
///
/// Parameters are used as given. Inputs where the arcs overlap or the taper
/// points cross the waist yield a self-intersecting outline rather than an
/// error; run [`super::ValidateParameters`] first to reject them.
pub struct BuildOutline {
    params: SkiParameters,
    mode: Mode,
    resolution: OutlineResolution,
}

impl BuildOutline {
    /// Creates a new `BuildOutline` operation with the default resolution.
    #[must_use]
    pub fn new(params: SkiParameters, mode: Mode) -> Self {
        Self {
            params,
            mode,
            resolution: OutlineResolution::default(),
        }
    }

    /// Overrides the sampling density.
    #[must_use]
    pub fn with_resolution(mut self, resolution: OutlineResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Executes the operation.
    #[must_use]
    pub fn execute(&self) -> SkiOutline {
        let p = &self.params;
        let control_points = ControlPointSet::from_parameters(p, self.mode);
        trace!(points = ?control_points.points(), "derived control points");

        let sidecut = interpolate_curve(control_points.points(), self.resolution.spline_steps);

        let nose = generate_arc(
            Point2::new(p.tip_arc_radius, 0.0),
            p.tip_arc_radius,
            PI,
            FRAC_PI_2,
            self.resolution.arc_steps,
        );
        let tail = generate_arc(
            Point2::new(p.total_length - p.tail_arc_radius, 0.0),
            p.tail_arc_radius,
            TAIL_ARC_START_ANGLE,
            0.0,
            self.resolution.arc_steps,
        );

        let mut upper = Vec::with_capacity(nose.len() + sidecut.len() + tail.len());
        upper.extend(nose);
        upper.extend(sidecut);
        upper.extend(tail);

        let lower = mirror_reversed(&upper);
        let upper_len = upper.len();
        let mut points = upper;
        points.extend(lower);

        debug!(
            mode = ?self.mode,
            control_points = control_points.len(),
            upper_len,
            total = points.len(),
            "built ski outline"
        );

        SkiOutline::new(points, upper_len, control_points)
    }
}

/// Builds an outline with the default resolution.
#[must_use]
pub fn build_outline(params: &SkiParameters, mode: Mode) -> SkiOutline {
    BuildOutline::new(*params, mode).execute()
}
