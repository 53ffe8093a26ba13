//! Shared base geometry and instanced-mesh machinery.
//!
//! A [`primitive::Geometry`] is immutable after creation and shared
//! (reference-counted) across every [`instanced::InstancedMesh`] that
//! renders the same primitive shape; instances never deep-copy it.

pub mod instanced;
pub mod primitive;

use glam::{Mat4, Vec3};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Degenerate box around a single point.
    #[must_use]
    pub const fn point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box containing all points, or `None` for an empty set.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::point(first);
        for p in iter {
            bounds.expand(p);
        }
        Some(bounds)
    }

    /// Grow to include a point.
    pub fn expand(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Grow to include another box.
    pub fn union(&mut self, other: Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// The eight corner points.
    #[must_use]
    pub const fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// This box transformed by `m`: the box of the eight transformed
    /// corners (not just the transformed center).
    #[must_use]
    pub fn transformed(&self, m: &Mat4) -> Self {
        let mut corners = self.corners().into_iter();
        // corners() always yields 8 points.
        let first = m.transform_point3(corners.next().unwrap_or(self.min));
        let mut out = Self::point(first);
        for c in corners {
            out.expand(m.transform_point3(c));
        }
        out
    }

    /// Length of the main diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f32 {
        self.min.distance(self.max)
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_empty_is_none() {
        assert_eq!(Aabb::from_points(std::iter::empty()), None);
    }

    #[test]
    fn transformed_uses_all_corners() {
        let unit = Aabb {
            min: Vec3::splat(-1.0),
            max: Vec3::splat(1.0),
        };
        // Rotating the unit cube 45 degrees about Y widens X/Z to sqrt(2).
        let rot = Mat4::from_rotation_y(std::f32::consts::FRAC_PI_4);
        let out = unit.transformed(&rot);
        let s = 2.0_f32.sqrt();
        assert!((out.max.x - s).abs() < 1e-5);
        assert!((out.max.z - s).abs() < 1e-5);
        assert!((out.max.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn diagonal_and_center() {
        let b = Aabb {
            min: Vec3::ZERO,
            max: Vec3::new(3.0, 4.0, 0.0),
        };
        assert!((b.diagonal() - 5.0).abs() < 1e-6);
        assert_eq!(b.center(), Vec3::new(1.5, 2.0, 0.0));
    }
}
