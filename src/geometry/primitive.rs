//! Base mesh primitives shared by all instances.
//!
//! Generators satisfy the base-primitive contract: unit scale (radius 1,
//! and height 1 for the cylinder), centered at the origin, outward
//! normals. Per-atom radii and per-bond lengths are applied through
//! instance transforms, never by regenerating geometry.

use std::f32::consts::TAU;

use glam::Vec3;

use super::Aabb;

/// Immutable triangle-mesh data for one base primitive.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Per-vertex outward normals, parallel to `vertices`.
    pub normals: Vec<Vec3>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Bounding box of the raw vertices, or `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().copied())
    }
}

/// Unit-radius UV sphere centered at the origin.
///
/// `sectors` is the slice count around the Y axis (minimum 3), `stacks`
/// the ring count from pole to pole (minimum 2). Normals equal the vertex
/// positions on a unit sphere.
#[must_use]
pub fn unit_sphere(sectors: u32, stacks: u32) -> Geometry {
    let sectors = sectors.max(3);
    let stacks = stacks.max(2);
    let mut geo = Geometry::default();

    for stack in 0..=stacks {
        // phi: 0 at the north pole, pi at the south pole.
        let phi = std::f32::consts::PI * stack as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for sector in 0..=sectors {
            let theta = TAU * sector as f32 / sectors as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let p = Vec3::new(
                sin_phi * cos_theta,
                cos_phi,
                sin_phi * sin_theta,
            );
            geo.vertices.push(p);
            geo.normals.push(p);
        }
    }

    let ring = sectors + 1;
    for stack in 0..stacks {
        for sector in 0..sectors {
            let a = stack * ring + sector;
            let b = a + ring;
            if stack != 0 {
                geo.indices.extend([a, b, a + 1]);
            }
            if stack != stacks - 1 {
                geo.indices.extend([a + 1, b, b + 1]);
            }
        }
    }

    geo
}

/// Unit cylinder centered at the origin: radius 1, height 1 along Y
/// (caps at y = ±0.5), `slices` segments around the axis (minimum 3).
///
/// Cap rings share vertices with the body, so cap faces use radial
/// normals; cap centers use axial normals. Bonds are thin and far from
/// the camera, which keeps this tessellation acceptable.
#[must_use]
pub fn unit_cylinder(slices: u32) -> Geometry {
    let slices = slices.max(3);
    let mut geo = Geometry::default();
    let half = 0.5;

    for &y in &[half, -half] {
        for i in 0..slices {
            let theta = TAU * i as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            geo.vertices.push(Vec3::new(cos_theta, y, sin_theta));
            geo.normals
                .push(Vec3::new(cos_theta, 0.0, sin_theta));
        }
        // Cap center vertex.
        geo.vertices.push(Vec3::new(0.0, y, 0.0));
        geo.normals.push(Vec3::new(0.0, y.signum(), 0.0));
    }

    let bottom = slices + 1;
    for i in 0..slices {
        let next = (i + 1) % slices;
        // Top cap.
        geo.indices.extend([i, next, slices]);
        // Bottom cap.
        geo.indices
            .extend([bottom + i, bottom + next, bottom + slices]);
        // Body quad.
        geo.indices.extend([i, next, bottom + i]);
        geo.indices.extend([bottom + i, next, bottom + next]);
    }

    geo
}
