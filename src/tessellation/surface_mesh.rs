use nalgebra::{Point3, Vector2, Vector3};
use simba::scalar::SupersetOf;

use crate::misc::FloatingPoint;

/// Triangulated surface buffer: positions, normals and texture coordinates
/// per vertex, plus triangle index triples. Regenerated in full on every
/// tessellation call, never patched partially.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceMesh<T: FloatingPoint> {
    pub(crate) points: Vec<Point3<T>>,
    pub(crate) normals: Vec<Vector3<T>>,
    pub(crate) uvs: Vec<Vector2<T>>,
    pub(crate) faces: Vec<[usize; 3]>,
}

impl<T: FloatingPoint> SurfaceMesh<T> {
    pub fn points(&self) -> &Vec<Point3<T>> {
        &self.points
    }

    pub fn normals(&self) -> &Vec<Vector3<T>> {
        &self.normals
    }

    pub fn uvs(&self) -> &Vec<Vector2<T>> {
        &self.uvs
    }

    pub fn faces(&self) -> &Vec<[usize; 3]> {
        &self.faces
    }

    /// Cast the mesh to another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> SurfaceMesh<F> {
        SurfaceMesh {
            points: self.points.iter().map(|p| p.clone().cast()).collect(),
            normals: self.normals.iter().map(|n| n.clone().cast()).collect(),
            uvs: self.uvs.iter().map(|uv| uv.cast()).collect(),
            faces: self.faces.clone(),
        }
    }
}
