use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

use crate::surface::ParametricSurface;

use super::{SurfaceTessellationOptions, Tessellation};

/// Unit sphere with exact radial normals
struct AnalyticSphere;

impl ParametricSurface<f64> for AnalyticSphere {
    fn u_domain(&self) -> (f64, f64) {
        (0., 2. * PI)
    }

    fn v_domain(&self) -> (f64, f64) {
        (0., PI)
    }

    fn point_at(&self, u: f64, v: f64) -> Point3<f64> {
        Point3::new(v.sin() * u.cos(), v.cos(), -v.sin() * u.sin())
    }

    fn normal_at(&self, u: f64, v: f64) -> Option<Vector3<f64>> {
        Some(self.point_at(u, v).coords)
    }
}

/// Flat rectangle without analytic normals, over a non-unit domain
struct Patch;

impl ParametricSurface<f64> for Patch {
    fn u_domain(&self) -> (f64, f64) {
        (-2., 2.)
    }

    fn v_domain(&self) -> (f64, f64) {
        (0., 3.)
    }

    fn point_at(&self, u: f64, v: f64) -> Point3<f64> {
        Point3::new(u, v, 0.)
    }
}

struct BrokenDomain;

impl ParametricSurface<f64> for BrokenDomain {
    fn u_domain(&self) -> (f64, f64) {
        (0., f64::NAN)
    }

    fn v_domain(&self) -> (f64, f64) {
        (0., 1.)
    }

    fn point_at(&self, u: f64, _v: f64) -> Point3<f64> {
        Point3::new(u, 0., 0.)
    }
}

#[test]
fn grid_counts() {
    let (nu, nv) = (8, 5);
    let options = SurfaceTessellationOptions::default()
        .with_u_segments(nu)
        .with_v_segments(nv);
    let mesh = Patch.tessellate(options).unwrap();

    assert_eq!(mesh.points().len(), (nu + 1) * (nv + 1));
    assert_eq!(mesh.normals().len(), (nu + 1) * (nv + 1));
    assert_eq!(mesh.uvs().len(), (nu + 1) * (nv + 1));
    assert_eq!(mesh.faces().len(), 2 * nu * nv);
}

#[test]
fn index_pattern() {
    let options = SurfaceTessellationOptions::default()
        .with_u_segments(2)
        .with_v_segments(2);
    let mesh = Patch.tessellate(options).unwrap();

    // cell (0, 0): v0 = 0, v1 = 3, v2 = 1, v3 = 4
    assert_eq!(mesh.faces()[0], [0, 1, 3]);
    assert_eq!(mesh.faces()[1], [3, 1, 4]);

    for face in mesh.faces() {
        assert!(face.iter().all(|i| *i < mesh.points().len()));
    }
}

#[test]
fn uvs_are_normalized_grid_indices() {
    let options = SurfaceTessellationOptions::default()
        .with_u_segments(4)
        .with_v_segments(2);
    // the patch domain is [-2, 2] x [0, 3], the uvs must not be
    let mesh = Patch.tessellate(options).unwrap();

    assert_relative_eq!(mesh.uvs()[0].x, 0.);
    assert_relative_eq!(mesh.uvs()[0].y, 0.);
    let last = mesh.uvs().last().unwrap();
    assert_relative_eq!(last.x, 1.);
    assert_relative_eq!(last.y, 1.);
    assert_relative_eq!(mesh.uvs()[2].x, 0.5);
}

#[test]
fn analytic_normals_are_used_verbatim() {
    let options = SurfaceTessellationOptions::default();
    let mesh = AnalyticSphere.tessellate(options).unwrap();

    for (p, n) in mesh.points().iter().zip(mesh.normals()) {
        assert_eq!(p.coords, *n);
    }
}

#[test]
fn averaged_normals_are_unit_length() {
    let options = SurfaceTessellationOptions::default();
    let mesh = Patch.tessellate(options).unwrap();

    for n in mesh.normals() {
        assert_relative_eq!(n.norm(), 1., epsilon = 1e-12);
        assert_relative_eq!(*n, Vector3::new(0., 0., 1.), epsilon = 1e-12);
    }
}

#[test]
fn rebuild_is_deterministic() {
    let options = SurfaceTessellationOptions::default();
    let first = AnalyticSphere.tessellate(options).unwrap();
    let second = AnalyticSphere.tessellate(options).unwrap();
    assert_eq!(first, second);

    let first = Patch.tessellate(options).unwrap();
    let second = Patch.tessellate(options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_input_is_rejected() {
    assert!(BrokenDomain
        .tessellate(SurfaceTessellationOptions::default())
        .is_err());
    assert!(Patch
        .tessellate(SurfaceTessellationOptions::default().with_u_segments(0))
        .is_err());
    assert!(Patch
        .tessellate(SurfaceTessellationOptions::default().with_v_segments(0))
        .is_err());
}
