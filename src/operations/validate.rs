use crate::error::{GeometryError, Result, ValidationError};
use crate::geometry::{ControlPointSet, Mode, ParameterField, SkiParameters};
use crate::math::polygon_2d::is_strictly_increasing_x;

/// Accepted range of one parameter field, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConstraint {
    pub field: ParameterField,
    pub min: f64,
    pub max: f64,
}

impl FieldConstraint {
    const fn new(field: ParameterField, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Per-field bounds, one entry per [`ParameterField`], in declaration order.
pub const CONSTRAINTS: [FieldConstraint; 11] = [
    FieldConstraint::new(ParameterField::TotalLength, 1000.0, 2300.0),
    FieldConstraint::new(ParameterField::WaistWidth, 60.0, 160.0),
    FieldConstraint::new(ParameterField::TipArcRadius, 10.0, 150.0),
    FieldConstraint::new(ParameterField::TailArcRadius, 10.0, 150.0),
    FieldConstraint::new(ParameterField::TipTaperWidth, 60.0, 200.0),
    FieldConstraint::new(ParameterField::TailTaperWidth, 60.0, 200.0),
    FieldConstraint::new(ParameterField::TipTaperOffset, 0.0, 800.0),
    FieldConstraint::new(ParameterField::TailTaperOffset, 0.0, 800.0),
    FieldConstraint::new(ParameterField::TipTaperLength, 0.0, 800.0),
    FieldConstraint::new(ParameterField::TailTaperLength, 0.0, 800.0),
    FieldConstraint::new(ParameterField::Setback, -300.0, 300.0),
];

/// Looks up the constraint for `field`.
#[must_use]
pub fn constraint_for(field: ParameterField) -> &'static FieldConstraint {
    // CONSTRAINTS is indexed in the same order as ParameterField::ALL.
    &CONSTRAINTS[field as usize]
}

/// Returns a copy of `params` with every field clamped into its range.
///
/// Non-finite values are replaced by the field's default.
#[must_use]
pub fn clamp_to_constraints(params: &SkiParameters) -> SkiParameters {
    let defaults = SkiParameters::default();
    let mut clamped = *params;
    for c in &CONSTRAINTS {
        let value = c.field.get(params);
        let value = if value.is_finite() {
            value.clamp(c.min, c.max)
        } else {
            c.field.get(&defaults)
        };
        c.field.set(&mut clamped, value);
    }
    clamped
}

/// Checks that a parameter set yields a well-formed outline.
///
/// Only the fields relevant to `mode` are range-checked. Beyond the
/// per-field table, the arcs must fit within the total length and the
/// control points must advance strictly from tip to tail.
pub struct ValidateParameters<'a> {
    params: &'a SkiParameters,
    mode: Mode,
}

impl<'a> ValidateParameters<'a> {
    /// Creates a new `ValidateParameters` check.
    #[must_use]
    pub fn new(params: &'a SkiParameters, mode: Mode) -> Self {
        Self { params, mode }
    }

    /// Executes the check.
    ///
    /// # Errors
    ///
    /// - `ValidationError::NotFinite` for a NaN or infinite field,
    /// - `ValidationError::OutOfRange` for a field outside its constraint,
    /// - `GeometryError::InvalidGeometry` if the arcs overlap or the control
    ///   points are not ordered tip to tail.
    pub fn execute(&self) -> Result<()> {
        for c in CONSTRAINTS.iter().filter(|c| c.field.applies_to(self.mode)) {
            let value = c.field.get(self.params);
            if !value.is_finite() {
                return Err(ValidationError::NotFinite {
                    parameter: c.field.name(),
                }
                .into());
            }
            if !c.contains(value) {
                return Err(ValidationError::OutOfRange {
                    parameter: c.field.name(),
                    value,
                    min: c.min,
                    max: c.max,
                }
                .into());
            }
        }

        let p = self.params;
        let arcs = p.tip_arc_radius + p.tail_arc_radius;
        if p.total_length <= arcs {
            return Err(GeometryError::InvalidGeometry(format!(
                "total length {} does not exceed tip and tail arc radii ({arcs})",
                p.total_length
            ))
            .into());
        }

        let control_points = ControlPointSet::from_parameters(p, self.mode);
        if !is_strictly_increasing_x(control_points.points()) {
            let xs: Vec<f64> = control_points.points().iter().map(|q| q.x).collect();
            return Err(GeometryError::InvalidGeometry(format!(
                "control points are not ordered tip to tail: x = {xs:?}"
            ))
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SkiformError;

    #[test]
    fn table_order_matches_fields() {
        for (c, field) in CONSTRAINTS.iter().zip(ParameterField::ALL) {
            assert_eq!(c.field, field);
            assert_eq!(constraint_for(field).field, field);
            assert!(c.min < c.max);
        }
    }

    #[test]
    fn defaults_are_valid_in_both_modes() {
        let p = SkiParameters::default();
        ValidateParameters::new(&p, Mode::Classic).execute().unwrap();
        ValidateParameters::new(&p, Mode::Tapered).execute().unwrap();
    }

    #[test]
    fn out_of_range_field() {
        let p = SkiParameters {
            waist_width: 20.0,
            ..SkiParameters::default()
        };
        let err = ValidateParameters::new(&p, Mode::Classic).execute().unwrap_err();
        assert!(matches!(
            err,
            SkiformError::Validation(ValidationError::OutOfRange {
                parameter: "waist_width",
                ..
            })
        ));
    }

    #[test]
    fn taper_fields_ignored_in_classic() {
        let p = SkiParameters {
            tip_taper_width: 1.0,
            ..SkiParameters::default()
        };
        assert!(ValidateParameters::new(&p, Mode::Classic).execute().is_ok());
        assert!(ValidateParameters::new(&p, Mode::Tapered).execute().is_err());
    }

    #[test]
    fn nan_is_rejected() {
        let p = SkiParameters {
            setback: f64::NAN,
            ..SkiParameters::default()
        };
        let err = ValidateParameters::new(&p, Mode::Tapered).execute().unwrap_err();
        assert!(matches!(
            err,
            SkiformError::Validation(ValidationError::NotFinite { parameter: "setback" })
        ));
    }

    #[test]
    fn taper_crossing_waist_is_invalid_geometry() {
        // Tip taper lands at x = 250 + 800 = 1050, past the waist at 1035.
        let p = SkiParameters {
            tip_taper_length: 800.0,
            ..SkiParameters::default()
        };
        let err = ValidateParameters::new(&p, Mode::Tapered).execute().unwrap_err();
        assert!(matches!(
            err,
            SkiformError::Geometry(GeometryError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn clamp_pulls_fields_into_range() {
        let p = SkiParameters {
            total_length: 5000.0,
            waist_width: f64::INFINITY,
            setback: -1000.0,
            ..SkiParameters::default()
        };
        let c = clamp_to_constraints(&p);
        assert!((c.total_length - 2300.0).abs() < f64::EPSILON);
        assert!((c.waist_width - 112.0).abs() < f64::EPSILON);
        assert!((c.setback + 300.0).abs() < f64::EPSILON);
        assert!((c.tip_arc_radius - 56.0).abs() < f64::EPSILON);
    }
}
