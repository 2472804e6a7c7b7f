use nalgebra::{Point3, Vector2, Vector3};

use crate::misc::FloatingPoint;
use crate::surface::ParametricSurface;

use super::{SurfaceMesh, SurfaceTessellationOptions, Tessellation};

impl<T: FloatingPoint, S: ParametricSurface<T>> Tessellation<SurfaceTessellationOptions<T>> for S {
    type Output = anyhow::Result<SurfaceMesh<T>>;

    /// Sample the surface on a regular grid and triangulate it.
    ///
    /// Vertices are laid out row-major, the outer loop over `v`, so vertex
    /// `(i, j)` of the grid sits at index `i * (u_segments + 1) + j`. Every
    /// grid cell emits two triangles wound so the implied normals point away
    /// from the surface interior. UV coordinates are the normalized grid
    /// indices, independent of the extents of the parameter domain.
    ///
    /// Analytic normals are sampled verbatim when the surface provides them;
    /// otherwise per-vertex normals are averaged from adjacent faces,
    /// weighted by face area.
    fn tessellate(&self, options: SurfaceTessellationOptions<T>) -> Self::Output {
        let (u_min, u_max) = self.u_domain();
        let (v_min, v_max) = self.v_domain();
        for bound in [u_min, u_max, v_min, v_max] {
            anyhow::ensure!(
                bound.to_f64().map(f64::is_finite).unwrap_or(false),
                "Non-finite parameter domain bound: {:?}",
                bound
            );
        }
        anyhow::ensure!(
            options.u_segments >= 1 && options.v_segments >= 1,
            "Segment counts must be at least one, got {} x {}",
            options.u_segments,
            options.v_segments
        );

        let nu = options.u_segments;
        let nv = options.v_segments;
        let du = (u_max - u_min) / T::from_usize(nu).unwrap();
        let dv = (v_max - v_min) / T::from_usize(nv).unwrap();
        let inv_u = T::one() / T::from_usize(nu).unwrap();
        let inv_v = T::one() / T::from_usize(nv).unwrap();

        let vertex_count = (nu + 1) * (nv + 1);
        let mut points = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);
        let mut analytic = Some(Vec::with_capacity(vertex_count));

        for i in 0..=nv {
            let v = v_min + dv * T::from_usize(i).unwrap();
            for j in 0..=nu {
                let u = u_min + du * T::from_usize(j).unwrap();
                points.push(self.point_at(u, v));
                uvs.push(Vector2::new(
                    T::from_usize(j).unwrap() * inv_u,
                    T::from_usize(i).unwrap() * inv_v,
                ));
                if let Some(normals) = analytic.as_mut() {
                    match self.normal_at(u, v) {
                        Some(n) => normals.push(n),
                        None => analytic = None,
                    }
                }
            }
        }

        let mut faces = Vec::with_capacity(nu * nv * 2);
        for i in 0..nv {
            for j in 0..nu {
                let v0 = i * (nu + 1) + j;
                let v1 = (i + 1) * (nu + 1) + j;
                let v2 = v0 + 1;
                let v3 = v1 + 1;
                faces.push([v0, v2, v1]);
                faces.push([v1, v2, v3]);
            }
        }

        let normals = match analytic {
            Some(normals) => normals,
            None => averaged_normals(&points, &faces, options.normal_tolerance),
        };

        Ok(SurfaceMesh {
            points,
            normals,
            uvs,
            faces,
        })
    }
}

/// Per-vertex normals averaged from adjacent faces.
/// The raw cross product weights each face by twice its area, so slivers at
/// degenerate grid rows contribute next to nothing.
fn averaged_normals<T: FloatingPoint>(
    points: &[Point3<T>],
    faces: &[[usize; 3]],
    tolerance: T,
) -> Vec<Vector3<T>> {
    let mut normals = vec![Vector3::zeros(); points.len()];
    for [a, b, c] in faces {
        let e1 = points[*b] - points[*a];
        let e2 = points[*c] - points[*a];
        let n = e1.cross(&e2);
        normals[*a] += n;
        normals[*b] += n;
        normals[*c] += n;
    }
    for n in normals.iter_mut() {
        let sq = n.norm_squared();
        if sq > tolerance {
            *n /= sq.sqrt();
        }
    }
    normals
}
