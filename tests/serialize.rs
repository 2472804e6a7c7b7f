#![cfg(feature = "serde")]

use lathe::prelude::*;

#[test]
fn surface_mesh_roundtrip() {
    let profile = ProfileSolver::try_new(CurvatureCase::Pseudosphere, 0.5)
        .unwrap()
        .try_solve(200)
        .unwrap();
    let curve = SplineCurve::try_from_profile(&profile, KnotStyle::Centripetal).unwrap();
    let surface = SurfaceOfRevolution::new(curve);
    let mesh = surface
        .tessellate(SurfaceTessellationOptions::<f64>::default())
        .unwrap();

    let json = serde_json::to_string(&mesh).unwrap();
    let back: SurfaceMesh<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(mesh, back);
}

#[test]
fn curvature_case_roundtrip() {
    for case in [
        CurvatureCase::Spindle,
        CurvatureCase::Barrel,
        CurvatureCase::Trumpet,
        CurvatureCase::Pseudosphere,
    ] {
        let json = serde_json::to_string(&case).unwrap();
        let back: CurvatureCase = serde_json::from_str(&json).unwrap();
        assert_eq!(case, back);
    }
}
