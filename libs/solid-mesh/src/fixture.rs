//! Synthetic geometry kernel for tests.
//!
//! Faces carry their own triangulation and an analytic surface (plane or
//! sphere) so both normal modes can be checked without a modeling backend.

use glam::{DVec2, DVec3};

use crate::geometry::FaceMesh;
use crate::kernel::{GeometryKernel, KernelError, ObjectKind};

/// Analytic surface of a fixture face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// Constant normal; parameters are the point's x and y.
    Plane { normal: DVec3 },
    /// Parameters are (azimuth, polar angle) around `center`.
    Sphere { center: DVec3, radius: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixtureFace {
    pub vertices: Vec<DVec3>,
    pub triangles: Vec<[u32; 3]>,
    pub surface: Surface,
    pub fail_triangulation: bool,
}

impl FixtureFace {
    pub fn new(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>, surface: Surface) -> Self {
        Self {
            vertices,
            triangles,
            surface,
            fail_triangulation: false,
        }
    }

    pub fn planar(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self::new(vertices, triangles, Surface::Plane { normal: DVec3::Z })
    }

    /// A face whose triangulation always fails.
    pub fn failing() -> Self {
        Self {
            fail_triangulation: true,
            ..Self::planar(vec![], vec![])
        }
    }

    fn quad(corners: [DVec3; 4], normal: DVec3) -> Self {
        Self::new(
            corners.to_vec(),
            vec![[0, 1, 2], [0, 2, 3]],
            Surface::Plane { normal },
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FixtureObject {
    Solid(Vec<FixtureFace>),
    Curve,
    Instance,
    Point,
}

pub struct FixtureKernel;

impl GeometryKernel for FixtureKernel {
    type Object = FixtureObject;
    type Face = FixtureFace;

    fn kind(&self, object: &FixtureObject) -> ObjectKind {
        match object {
            FixtureObject::Solid(_) => ObjectKind::Solid,
            FixtureObject::Curve => ObjectKind::Curve,
            FixtureObject::Instance => ObjectKind::Instance,
            FixtureObject::Point => ObjectKind::Point,
        }
    }

    fn faces(&self, object: &FixtureObject) -> Vec<FixtureFace> {
        match object {
            FixtureObject::Solid(faces) => faces.clone(),
            _ => Vec::new(),
        }
    }

    fn triangulate(&self, face: &FixtureFace) -> Result<FaceMesh, KernelError> {
        if face.fail_triangulation {
            return Err(KernelError::triangulation("fixture face refuses to mesh"));
        }
        Ok(FaceMesh::new(face.vertices.clone(), face.triangles.clone()))
    }

    fn project(&self, face: &FixtureFace, point: DVec3) -> Result<DVec2, KernelError> {
        match face.surface {
            Surface::Plane { .. } => Ok(DVec2::new(point.x, point.y)),
            Surface::Sphere { center, radius } => {
                let d = (point - center) / radius;
                if !d.is_finite() {
                    return Err(KernelError::projection("point cannot be projected"));
                }
                Ok(DVec2::new(d.y.atan2(d.x), d.z.clamp(-1.0, 1.0).acos()))
            }
        }
    }

    fn normal_at(&self, face: &FixtureFace, uv: DVec2) -> Result<DVec3, KernelError> {
        match face.surface {
            Surface::Plane { normal } => Ok(normal),
            Surface::Sphere { .. } => {
                let (sin_v, cos_v) = uv.y.sin_cos();
                let (sin_u, cos_u) = uv.x.sin_cos();
                Ok(DVec3::new(sin_v * cos_u, sin_v * sin_u, cos_v))
            }
        }
    }
}

/// Axis-aligned cube from the origin to `size` on every axis; six planar
/// faces of two outward-wound triangles each.
pub fn cube(size: f64) -> FixtureObject {
    let s = size;
    let p = |x: f64, y: f64, z: f64| DVec3::new(x, y, z);
    FixtureObject::Solid(vec![
        FixtureFace::quad([p(0., 0., 0.), p(0., s, 0.), p(s, s, 0.), p(s, 0., 0.)], -DVec3::Z),
        FixtureFace::quad([p(0., 0., s), p(s, 0., s), p(s, s, s), p(0., s, s)], DVec3::Z),
        FixtureFace::quad([p(0., 0., 0.), p(s, 0., 0.), p(s, 0., s), p(0., 0., s)], -DVec3::Y),
        FixtureFace::quad([p(0., s, 0.), p(0., s, s), p(s, s, s), p(s, s, 0.)], DVec3::Y),
        FixtureFace::quad([p(0., 0., 0.), p(0., 0., s), p(0., s, s), p(0., s, 0.)], -DVec3::X),
        FixtureFace::quad([p(s, 0., 0.), p(s, s, 0.), p(s, s, s), p(s, 0., s)], DVec3::X),
    ])
}

/// Octahedron inscribed in a sphere, as a single spherical face.
pub fn octahedron(center: DVec3, radius: f64) -> FixtureObject {
    let vertices = [DVec3::X, -DVec3::X, DVec3::Y, -DVec3::Y, DVec3::Z, -DVec3::Z]
        .map(|d| center + d * radius)
        .to_vec();
    let triangles = vec![
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];
    FixtureObject::Solid(vec![FixtureFace::new(
        vertices,
        triangles,
        Surface::Sphere { center, radius },
    )])
}

/// A solid with one planar face holding a single triangle.
pub fn single_triangle(corners: [DVec3; 3]) -> FixtureObject {
    FixtureObject::Solid(vec![FixtureFace::planar(corners.to_vec(), vec![[0, 1, 2]])])
}
