//! End-to-end checks on the public API with the default ski.

#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use skiform::export::svg_path::path_data;
use skiform::math::arc_2d::generate_arc;
use skiform::math::catmull_rom::interpolate_curve;
use skiform::math::circumradius::circumradius;
use skiform::{
    build_outline, GeometryError, Mode, ParameterField, ParameterSession, Point2, SkiParameters,
    SkiformError,
};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn default_tapered_ski() {
    init_tracing();
    let outline = build_outline(&SkiParameters::default(), Mode::Tapered);

    assert_eq!(outline.points().len(), 2 * (41 + 4 * 301 + 41));
    assert_eq!(format!("{:.1}", outline.sidecut_radius_m().unwrap()), "19.7");

    let [a, b, c] = outline.radius_control_points();
    assert_abs_diff_eq!(a, Point2::new(350.0, 67.5));
    assert_abs_diff_eq!(b, Point2::new(1035.0, 56.0));
    assert_abs_diff_eq!(c, Point2::new(1620.0, 65.0));
}

#[test]
fn narrower_waist_tightens_the_radius() {
    let wide = build_outline(&SkiParameters::default(), Mode::Tapered);
    let narrow = build_outline(
        &SkiParameters {
            waist_width: 96.0,
            ..SkiParameters::default()
        },
        Mode::Tapered,
    );
    assert!(narrow.sidecut_radius().unwrap() < wide.sidecut_radius().unwrap());
}

#[test]
fn documented_primitives() {
    let r = circumradius(
        &Point2::new(0.0, 0.0),
        &Point2::new(4.0, 0.0),
        &Point2::new(0.0, 3.0),
    )
    .unwrap();
    assert_abs_diff_eq!(r, 2.5, epsilon = 1e-12);

    let err = circumradius(
        &Point2::new(0.0, 0.0),
        &Point2::new(1.0, 0.0),
        &Point2::new(2.0, 0.0),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SkiformError::Geometry(GeometryError::DegenerateGeometry(_))
    ));

    let arc = generate_arc(Point2::new(2.0, 1.0), 3.0, PI, FRAC_PI_2, 2);
    assert_eq!(arc.len(), 3);
    assert_abs_diff_eq!(arc[0], Point2::new(-1.0, 1.0), epsilon = 1e-12);
    assert_abs_diff_eq!(arc[2], Point2::new(2.0, 4.0), epsilon = 1e-12);

    let pts = [Point2::new(0.0, 0.0), Point2::new(3.0, 2.0), Point2::new(7.0, -1.0)];
    let curve = interpolate_curve(&pts, 17);
    assert_abs_diff_eq!(curve[0], pts[0], epsilon = 1e-12);
    assert_abs_diff_eq!(*curve.last().unwrap(), pts[2], epsilon = 1e-12);
}

#[test]
fn session_to_svg() {
    init_tracing();
    let mut session = ParameterSession::default();
    session.edit(ParameterField::TotalLength, "1780");
    session.edit(ParameterField::Setback, "60");
    session.commit().unwrap();

    let outline = session.outline();
    let max_x = outline
        .points()
        .iter()
        .map(|p| p.x)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_abs_diff_eq!(max_x, 1780.0, epsilon = 1e-9);

    let d = path_data(outline.points(), 1);
    assert!(d.starts_with('M') && d.ends_with('Z'));
}
