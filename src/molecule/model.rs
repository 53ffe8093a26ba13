//! One loaded structure: its atoms, bond frames, and the two instanced
//! meshes (spheres for atoms, cylinders for bonds) that render it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::{Vec3, Vec4};

use super::bonds::{bond_transform, infer_bond_frames, BondFrame};
use super::xyz::{load_xyz, Atom};
use crate::error::MolvizError;
use crate::geometry::instanced::InstancedMesh;
use crate::geometry::primitive::{unit_cylinder, unit_sphere, Geometry};
use crate::geometry::Aabb;
use crate::scene::{MeshId, Scene};

/// Sphere tessellation (sectors, stacks) for atom instances.
const SPHERE_RESOLUTION: (u32, u32) = (32, 16);
/// Cylinder slice count for bond instances.
const CYLINDER_SLICES: u32 = 24;

/// Uniform color for bond cylinders. Bond order does not change the
/// color; every bond renders identically.
const BOND_COLOR: Vec4 = Vec4::new(0.8, 0.8, 0.8, 1.0);

/// Shared unit primitives. One set serves every model in a chain: each
/// mesh holds a reference-counted handle to the same immutable geometry,
/// never a per-instance copy.
#[derive(Clone)]
pub struct BasePrimitives {
    /// Unit-radius sphere for atoms.
    pub sphere: Arc<Geometry>,
    /// Unit-radius, unit-height cylinder for bonds.
    pub cylinder: Arc<Geometry>,
}

impl Default for BasePrimitives {
    fn default() -> Self {
        Self {
            sphere: Arc::new(unit_sphere(
                SPHERE_RESOLUTION.0,
                SPHERE_RESOLUTION.1,
            )),
            cylinder: Arc::new(unit_cylinder(CYLINDER_SLICES)),
        }
    }
}

/// A single molecular structure with its atom and bond meshes.
///
/// The atom list is fixed at construction (file order, indices stable);
/// meshes are rebuilt wholesale then, and only the uniform rescale
/// operations touch them afterwards. The meshes live in the scene's
/// arena; the model holds handles.
pub struct MoleculeModel {
    path: PathBuf,
    atoms: Vec<Atom>,
    bonds: Vec<BondFrame>,
    atom_mesh: MeshId,
    bond_mesh: MeshId,
    atom_scale: f32,
    bond_radius: f32,
}

impl MoleculeModel {
    /// Load one XYZ structure file and build its meshes into the scene's
    /// arena (not yet attached for render).
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or its header is malformed;
    /// per-atom problems degrade to warnings inside the parser.
    pub fn from_file(
        path: &Path,
        primitives: &BasePrimitives,
        scene: &mut Scene,
    ) -> Result<Self, MolvizError> {
        let atoms = load_xyz(path)?;
        Ok(Self::from_atoms(path.to_path_buf(), atoms, primitives, scene))
    }

    /// Build a model from already-parsed atoms. Bonds are recomputed
    /// here; they are derived state, never loaded.
    #[must_use]
    pub fn from_atoms(
        path: PathBuf,
        atoms: Vec<Atom>,
        primitives: &BasePrimitives,
        scene: &mut Scene,
    ) -> Self {
        let bonds = infer_bond_frames(&atoms);

        let mut atom_mesh =
            InstancedMesh::new(Arc::clone(&primitives.sphere));
        for atom in &atoms {
            let i = atom_mesh.add_instance();
            atom_mesh.set_position(i, atom.position);
            atom_mesh
                .set_uniform_scale(i, atom.element.display_radius());
            atom_mesh
                .set_color(i, Vec4::from_array(atom.element.display_color()));
        }

        let mut bond_mesh =
            InstancedMesh::new(Arc::clone(&primitives.cylinder));
        for frame in &bonds {
            let i = bond_mesh.add_instance();
            bond_mesh.set_transform(i, bond_transform(frame, 1.0));
            bond_mesh.set_color(i, BOND_COLOR);
        }

        log::debug!(
            "{}: {} atoms, {} bonds",
            path.display(),
            atoms.len(),
            bonds.len()
        );

        Self {
            path,
            atoms,
            bonds,
            atom_mesh: scene.insert_mesh(atom_mesh),
            bond_mesh: scene.insert_mesh(bond_mesh),
            atom_scale: 1.0,
            bond_radius: 1.0,
        }
    }

    /// Source file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed atoms, in file order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The inferred bond frames.
    #[must_use]
    pub fn bonds(&self) -> &[BondFrame] {
        &self.bonds
    }

    /// Handle of the atom sphere mesh.
    #[must_use]
    pub const fn atom_mesh(&self) -> MeshId {
        self.atom_mesh
    }

    /// Handle of the bond cylinder mesh.
    #[must_use]
    pub const fn bond_mesh(&self) -> MeshId {
        self.bond_mesh
    }

    /// Rescale every atom sphere to `base_radius(element) × factor`.
    /// A pure function of element and factor: idempotent, no read-back
    /// of existing transforms.
    pub fn set_atom_scale(&mut self, scene: &mut Scene, factor: f32) {
        self.atom_scale = factor;
        let Some(mesh) = scene.mesh_mut(self.atom_mesh) else {
            return;
        };
        for (i, atom) in self.atoms.iter().enumerate() {
            mesh.set_uniform_scale(
                i,
                atom.element.display_radius() * factor,
            );
        }
    }

    /// Rescale every bond cylinder's cross-section to `radius`, leaving
    /// translation, rotation, and length (Y scale) untouched. The matrix
    /// is recomposed from the stored bond frame, so nothing is lost to a
    /// decompose round trip.
    pub fn set_bond_radius(&mut self, scene: &mut Scene, radius: f32) {
        self.bond_radius = radius;
        let Some(mesh) = scene.mesh_mut(self.bond_mesh) else {
            return;
        };
        for (i, frame) in self.bonds.iter().enumerate() {
            mesh.set_transform(i, bond_transform(frame, radius));
        }
    }

    /// Current atom scale factor.
    #[must_use]
    pub const fn atom_scale(&self) -> f32 {
        self.atom_scale
    }

    /// Current bond cross-section radius.
    #[must_use]
    pub const fn bond_radius(&self) -> f32 {
        self.bond_radius
    }

    /// Attach this model's meshes to the render set; the bond mesh only
    /// when `show_bonds`.
    pub fn attach(&self, scene: &mut Scene, show_bonds: bool) {
        let _ = scene.add_mesh(self.atom_mesh);
        if show_bonds {
            let _ = scene.add_mesh(self.bond_mesh);
        } else {
            scene.remove_mesh(self.bond_mesh);
        }
    }

    /// Detach this model's meshes from the render set (meshes stay in the
    /// arena and keep their state).
    pub fn detach(&self, scene: &mut Scene) {
        scene.remove_mesh(self.atom_mesh);
        scene.remove_mesh(self.bond_mesh);
    }

    /// Detach and release both meshes. Detachment always precedes the
    /// release so the render list never sees a freed mesh.
    pub fn release(&self, scene: &mut Scene) {
        let _ = scene.free_mesh(self.atom_mesh);
        let _ = scene.free_mesh(self.bond_mesh);
    }

    /// Bounding box of the atom mesh's transformed instances; `None` for
    /// an empty structure.
    #[must_use]
    pub fn bounds(&self, scene: &Scene) -> Option<Aabb> {
        scene.mesh(self.atom_mesh)?.compute_bounds()
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;
    use crate::chem::Element;

    fn test_atoms() -> Vec<Atom> {
        // Ethylene-ish fragment: C=C plus one hydrogen.
        vec![
            Atom {
                element: Element::C,
                position: Vec3::ZERO,
            },
            Atom {
                element: Element::C,
                position: Vec3::new(1.33, 0.0, 0.0),
            },
            Atom {
                element: Element::H,
                position: Vec3::new(-0.6, 0.9, 0.0),
            },
        ]
    }

    fn build() -> (Scene, MoleculeModel) {
        let mut scene = Scene::new();
        let primitives = BasePrimitives::default();
        let model = MoleculeModel::from_atoms(
            PathBuf::from("test.txt"),
            test_atoms(),
            &primitives,
            &mut scene,
        );
        (scene, model)
    }

    #[test]
    fn meshes_mirror_structure() {
        let (scene, model) = build();
        assert_eq!(model.atoms().len(), 3);
        assert_eq!(model.bonds().len(), 2); // C=C and C-H
        let atom_mesh = scene.mesh(model.atom_mesh()).unwrap();
        assert_eq!(atom_mesh.instance_count(), 3);
        let bond_mesh = scene.mesh(model.bond_mesh()).unwrap();
        assert_eq!(bond_mesh.instance_count(), 2);
    }

    #[test]
    fn atom_scale_is_pure_in_element_and_factor() {
        let (mut scene, mut model) = build();
        model.set_atom_scale(&mut scene, 0.5);
        model.set_atom_scale(&mut scene, 0.5); // idempotent
        let mesh = scene.mesh(model.atom_mesh()).unwrap();
        let t = mesh.transform(0);
        assert!((t.x_axis.x - 0.77 * 0.5).abs() < 1e-6);
        let t_h = mesh.transform(2);
        assert!((t_h.x_axis.x - 0.46 * 0.5).abs() < 1e-6);
        // Positions untouched.
        assert_eq!(mesh.position(1), Vec3::new(1.33, 0.0, 0.0));
    }

    #[test]
    fn bond_radius_rescale_preserves_everything_else() {
        let (mut scene, mut model) = build();
        let before: Vec<_> = {
            let mesh = scene.mesh(model.bond_mesh()).unwrap();
            (0..mesh.instance_count())
                .map(|i| mesh.transform(i).to_scale_rotation_translation())
                .collect()
        };

        model.set_bond_radius(&mut scene, 0.15);

        let mesh = scene.mesh(model.bond_mesh()).unwrap();
        for (i, (scale0, rot0, trans0)) in before.iter().enumerate() {
            let (scale, rot, trans) =
                mesh.transform(i).to_scale_rotation_translation();
            assert!((scale.x - 0.15).abs() < 1e-5);
            assert!((scale.z - 0.15).abs() < 1e-5);
            assert!((scale.y - scale0.y).abs() < 1e-5);
            assert!(trans.distance(*trans0) < 1e-5);
            // Quaternion sign may flip; compare as rotations.
            let delta = rot.mul_quat(rot0.inverse());
            assert!(
                delta.angle_between(Quat::IDENTITY) < 1e-4,
                "rotation disturbed for bond {i}"
            );
        }
    }

    #[test]
    fn attach_respects_show_bonds() {
        let (mut scene, model) = build();
        model.attach(&mut scene, false);
        assert!(scene.is_attached(model.atom_mesh()));
        assert!(!scene.is_attached(model.bond_mesh()));
        model.attach(&mut scene, true);
        assert!(scene.is_attached(model.bond_mesh()));
        model.detach(&mut scene);
        assert!(scene.attached().is_empty());
    }

    #[test]
    fn release_invalidates_handles() {
        let (mut scene, model) = build();
        model.attach(&mut scene, true);
        model.release(&mut scene);
        assert!(scene.mesh(model.atom_mesh()).is_none());
        assert!(scene.mesh(model.bond_mesh()).is_none());
        assert!(scene.attached().is_empty());
    }

    #[test]
    fn bounds_enclose_scaled_atoms() {
        let (mut scene, mut model) = build();
        model.set_atom_scale(&mut scene, 1.0);
        let b = model.bounds(&scene).unwrap();
        // Rightmost carbon at x=1.33 with radius 0.77.
        assert!((b.max.x - (1.33 + 0.77)).abs() < 1e-4);
    }
}
