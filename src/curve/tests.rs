use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::profile::{CurvatureCase, ProfileSolver};

use super::{KnotStyle, SplineCurve};

fn zigzag() -> Vec<Point3<f64>> {
    vec![
        Point3::new(0., 0., 0.),
        Point3::new(1., 1., 0.),
        Point3::new(2., -1., 0.),
        Point3::new(3., 0.5, 0.),
        Point3::new(4., 0., 0.),
    ]
}

#[test]
fn interpolates_every_input_point() {
    for style in [KnotStyle::Uniform, KnotStyle::Chordal, KnotStyle::Centripetal] {
        let points = zigzag();
        let curve = SplineCurve::try_new(points.clone(), style, false).unwrap();
        let n = points.len();
        for (i, p) in points.iter().enumerate() {
            let t = i as f64 / (n - 1) as f64;
            assert_relative_eq!(curve.point_at(t), *p, epsilon = 1e-12);
        }
    }
}

#[test]
fn endpoint_property() {
    let points = zigzag();
    let curve = SplineCurve::try_new(points.clone(), KnotStyle::Centripetal, false).unwrap();
    assert_relative_eq!(curve.point_at(0.), points[0], epsilon = 1e-12);
    assert_relative_eq!(curve.point_at(1.), points[4], epsilon = 1e-12);
    assert_eq!(curve.domain(), (0., 1.));
}

#[test]
fn closed_curve_wraps() {
    let points = vec![
        Point3::new(1., 0., 0.),
        Point3::new(0., 1., 0.),
        Point3::new(-1., 0., 0.),
        Point3::new(0., -1., 0.),
    ];
    let curve = SplineCurve::try_new(points.clone(), KnotStyle::Centripetal, true).unwrap();
    assert_relative_eq!(curve.point_at(0.), curve.point_at(1.), epsilon = 1e-12);
    // all four points are on the curve, one per quarter
    for (i, p) in points.iter().enumerate() {
        let t = i as f64 / 4.;
        assert_relative_eq!(curve.point_at(t), *p, epsilon = 1e-12);
    }
}

#[test]
fn straight_segment_length_and_tangent() {
    let points = vec![Point3::new(0., 0., 0.), Point3::new(3., 4., 0.)];
    let curve = SplineCurve::try_new(points, KnotStyle::Centripetal, false).unwrap();
    assert_relative_eq!(curve.length(), 5., epsilon = 1e-9);
    assert_relative_eq!(
        curve.tangent_at(0.5),
        Vector3::new(0.6, 0.8, 0.),
        epsilon = 1e-9
    );
    // halfway along the arc length is halfway along the segment
    assert_relative_eq!(
        curve.point_at_norm_length(0.5),
        Point3::new(1.5, 2., 0.),
        epsilon = 1e-6
    );
}

#[test]
fn update_points_reshapes_in_place() {
    let sphere = ProfileSolver::try_new(CurvatureCase::Spindle, 1.)
        .unwrap()
        .try_solve(200)
        .unwrap();
    let mut curve = SplineCurve::try_from_profile(&sphere, KnotStyle::Centripetal).unwrap();
    let before = curve.point_at(0.5);
    // the profile is arc length parameterized, so the spline length is the
    // arc length domain of the solver
    assert_relative_eq!(curve.length(), std::f64::consts::PI, epsilon = 1e-3);

    let spindle = ProfileSolver::try_new(CurvatureCase::Spindle, 0.5)
        .unwrap()
        .try_solve(200)
        .unwrap();
    curve
        .try_update_points(
            spindle
                .points()
                .iter()
                .map(|p| Point3::new(p.x, p.y, 0.))
                .collect(),
        )
        .unwrap();

    let after = curve.point_at(0.5);
    assert!((before - after).norm() > 1e-3);
    // endpoints track the new sequence
    assert_relative_eq!(curve.point_at(0.).x, 0., epsilon = 1e-9);

    // the arc length table was rebuilt against the new points
    let line = vec![Point3::new(0., 0., 0.), Point3::new(0., 10., 0.)];
    curve.try_update_points(line).unwrap();
    assert_relative_eq!(curve.length(), 10., epsilon = 1e-9);
}

#[test]
fn arc_length_table_is_monotone() {
    let curve = SplineCurve::try_new(zigzag(), KnotStyle::Centripetal, false).unwrap();
    let table = curve.arc_lengths();
    assert_eq!(table[0], 0.);
    for w in table.windows(2) {
        assert!(w[0] < w[1]);
    }
    assert_relative_eq!(*table.last().unwrap(), curve.length());
}

#[test]
fn too_few_points() {
    assert!(SplineCurve::try_new(vec![Point3::new(0., 0., 0.)], KnotStyle::Uniform, false).is_err());
}
