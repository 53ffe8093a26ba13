//! Instanced mesh: one shared base geometry, many per-instance
//! transform/color attributes.
//!
//! Every atom sphere and bond cylinder in a molecule is one instance of a
//! shared [`Geometry`]. Instance state is fully described by a 4×4 model
//! matrix and an RGBA color; the two attribute lists always have equal
//! length. Mutations set a dirty flag the render collaborator consumes
//! through [`crate::scene::Scene::sync`], re-uploading exactly once per
//! change-batch, never redundantly.

use std::sync::Arc;

use glam::{Mat4, Vec3, Vec4};

use super::primitive::Geometry;
use super::Aabb;

/// Per-instance attribute block in the layout the instance buffer uploads:
/// a column-major model matrix followed by an RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
    /// RGBA color.
    pub color: [f32; 4],
}

/// A growable set of positioned/scaled/colored copies of one base mesh.
pub struct InstancedMesh {
    geometry: Arc<Geometry>,
    transforms: Vec<Mat4>,
    colors: Vec<Vec4>,
    dirty: bool,
}

impl InstancedMesh {
    /// Empty instance set over a shared base geometry.
    #[must_use]
    pub const fn new(geometry: Arc<Geometry>) -> Self {
        Self {
            geometry,
            transforms: Vec::new(),
            colors: Vec::new(),
            dirty: true,
        }
    }

    /// The shared base geometry.
    #[must_use]
    pub fn geometry(&self) -> &Arc<Geometry> {
        &self.geometry
    }

    /// Number of instances.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.transforms.len()
    }

    /// Whether there are no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Append an instance with an identity transform and opaque white
    /// color. Returns the new instance index.
    pub fn add_instance(&mut self) -> usize {
        self.transforms.push(Mat4::IDENTITY);
        self.colors.push(Vec4::ONE);
        self.dirty = true;
        self.transforms.len() - 1
    }

    /// Remove every instance.
    pub fn clear_instances(&mut self) {
        self.transforms.clear();
        self.colors.clear();
        self.dirty = true;
    }

    /// Overwrite one instance's translation, leaving the rest of its
    /// transform untouched.
    ///
    /// Panics on an out-of-range index. `instance` must come from
    /// [`Self::add_instance`], as for every per-instance accessor below.
    pub fn set_position(&mut self, instance: usize, position: Vec3) {
        let m = &mut self.transforms[instance];
        m.w_axis.x = position.x;
        m.w_axis.y = position.y;
        m.w_axis.z = position.z;
        self.dirty = true;
    }

    /// One instance's translation.
    #[must_use]
    pub fn position(&self, instance: usize) -> Vec3 {
        self.transforms[instance].w_axis.truncate()
    }

    /// Overwrite one instance's scale by writing the diagonal. Only valid
    /// while the instance carries no rotation (atom spheres); oriented
    /// instances are written whole via [`Self::set_transform`].
    pub fn set_scale(&mut self, instance: usize, scale: Vec3) {
        let m = &mut self.transforms[instance];
        m.x_axis.x = scale.x;
        m.y_axis.y = scale.y;
        m.z_axis.z = scale.z;
        self.dirty = true;
    }

    /// Uniform-scale convenience over [`Self::set_scale`].
    pub fn set_uniform_scale(&mut self, instance: usize, scale: f32) {
        self.set_scale(instance, Vec3::splat(scale));
    }

    /// Replace one instance's full transform.
    pub fn set_transform(&mut self, instance: usize, transform: Mat4) {
        self.transforms[instance] = transform;
        self.dirty = true;
    }

    /// One instance's full transform.
    #[must_use]
    pub fn transform(&self, instance: usize) -> Mat4 {
        self.transforms[instance]
    }

    /// Set one instance's RGBA color.
    pub fn set_color(&mut self, instance: usize, color: Vec4) {
        self.colors[instance] = color;
        self.dirty = true;
    }

    /// One instance's RGBA color.
    #[must_use]
    pub fn color(&self, instance: usize) -> Vec4 {
        self.colors[instance]
    }

    /// Set every instance to the same color.
    pub fn set_color_all(&mut self, color: Vec4) {
        self.colors.fill(color);
        self.dirty = true;
    }

    /// Bounding box of every instance's *transformed* base-geometry
    /// bounds: all eight corners of the base box go through each instance
    /// transform. `None` when there are no instances (or the base mesh is
    /// empty).
    #[must_use]
    pub fn compute_bounds(&self) -> Option<Aabb> {
        let base = self.geometry.bounds()?;
        let mut out: Option<Aabb> = None;
        for m in &self.transforms {
            let b = base.transformed(m);
            match &mut out {
                Some(acc) => acc.union(b),
                None => out = Some(b),
            }
        }
        out
    }

    /// Whether instance data changed since the last [`Self::mark_clean`].
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after the render collaborator re-uploaded the
    /// instance buffers.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Instance attributes in upload layout, one entry per instance.
    #[must_use]
    pub fn instance_data(&self) -> Vec<InstanceRaw> {
        self.transforms
            .iter()
            .zip(&self.colors)
            .map(|(m, c)| InstanceRaw {
                model: m.to_cols_array_2d(),
                color: c.to_array(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitive::unit_sphere;

    fn mesh() -> InstancedMesh {
        InstancedMesh::new(Arc::new(unit_sphere(8, 4)))
    }

    #[test]
    fn add_instance_defaults() {
        let mut m = mesh();
        let i = m.add_instance();
        assert_eq!(i, 0);
        assert_eq!(m.instance_count(), 1);
        assert_eq!(m.transform(0), Mat4::IDENTITY);
        assert_eq!(m.color(0), Vec4::ONE);
    }

    #[test]
    fn position_and_scale_do_not_disturb_each_other() {
        let mut m = mesh();
        let i = m.add_instance();
        m.set_position(i, Vec3::new(1.0, 2.0, 3.0));
        m.set_uniform_scale(i, 0.5);
        assert_eq!(m.position(i), Vec3::new(1.0, 2.0, 3.0));
        let t = m.transform(i);
        assert_eq!(t.x_axis.x, 0.5);
        assert_eq!(t.y_axis.y, 0.5);
        assert_eq!(t.w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn bounds_cover_transformed_geometry_not_just_origins() {
        let mut m = mesh();
        let i = m.add_instance();
        m.set_position(i, Vec3::new(10.0, 0.0, 0.0));
        m.set_uniform_scale(i, 2.0);
        let b = m.compute_bounds().unwrap();
        // Unit sphere scaled by 2 at x=10 reaches [8, 12].
        assert!((b.min.x - 8.0).abs() < 1e-4);
        assert!((b.max.x - 12.0).abs() < 1e-4);
    }

    #[test]
    fn bounds_of_empty_mesh_is_none() {
        let m = mesh();
        assert_eq!(m.compute_bounds(), None);
    }

    #[test]
    fn dirty_flag_lifecycle() {
        let mut m = mesh();
        assert!(m.is_dirty()); // new meshes need a first upload
        m.mark_clean();
        assert!(!m.is_dirty());
        let i = m.add_instance();
        assert!(m.is_dirty());
        m.mark_clean();
        m.set_color(i, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert!(m.is_dirty());
        m.mark_clean();
        m.clear_instances();
        assert!(m.is_dirty());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn mutating_an_unknown_instance_panics() {
        let mut m = mesh();
        let _ = m.add_instance();
        m.set_position(5, Vec3::ZERO);
    }

    #[test]
    fn attribute_lists_stay_parallel() {
        let mut m = mesh();
        for _ in 0..5 {
            let _ = m.add_instance();
        }
        let data = m.instance_data();
        assert_eq!(data.len(), 5);
        m.clear_instances();
        assert!(m.instance_data().is_empty());
    }
}
