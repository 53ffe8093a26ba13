//! An ordered sequence of molecules, one visible at a time, with
//! optional frame-by-frame animation over the sequence.

use std::path::Path;

use glam::Vec4;

use super::model::{BasePrimitives, MoleculeModel};
use crate::error::MolvizError;
use crate::scene::Scene;

/// Default atom sphere scale factor.
const DEFAULT_ATOM_SCALE: f32 = 0.5;
/// Default bond cylinder cross-section radius in angstroms.
const DEFAULT_BOND_RADIUS: f32 = 0.1;
/// Default per-tick animation-time increment.
const DEFAULT_ANIMATION_SPEED: f32 = 0.002;
/// Camera distance as a multiple of the active molecule's bounds
/// diagonal.
const CAMERA_DISTANCE_FACTOR: f32 = 2.0;

/// File extensions treated as structure files during a directory scan.
const STRUCTURE_EXTENSIONS: [&str; 2] = ["txt", "xyz"];

/// A loaded sequence of molecular structures.
///
/// Exactly one molecule (the active one) is attached to the scene at any
/// time; the rest keep their meshes resident in the arena so switching is
/// an attach/detach operation, not a rebuild. Display parameters (atom
/// scale, bond radius, bond visibility) are chain-wide and are re-applied
/// to a molecule whenever it becomes active.
pub struct MoleculeChain {
    molecules: Vec<MoleculeModel>,
    active: usize,
    atom_scale: f32,
    bond_radius: f32,
    show_bonds: bool,
    animate: bool,
    animation_speed: f32,
    animation_time: f32,
}

impl MoleculeChain {
    /// Load a chain from a structure file or a directory of them.
    ///
    /// A directory is scanned non-recursively for `.txt`/`.xyz` files,
    /// sorted lexicographically by path so numbered frames play in order.
    /// Files that fail to load are reported and skipped; an empty result
    /// is reported but not an error. The first molecule becomes active
    /// and is attached with the camera recentered on it.
    ///
    /// # Errors
    ///
    /// Fails when `path` is a single file that cannot be loaded, or when
    /// a directory cannot be read at all.
    pub fn load(
        path: &Path,
        primitives: &BasePrimitives,
        scene: &mut Scene,
    ) -> Result<Self, MolvizError> {
        let mut molecules = Vec::new();

        if path.is_dir() {
            let mut files: Vec<_> = std::fs::read_dir(path)
                .map_err(MolvizError::Io)?
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|p| {
                    p.extension()
                        .and_then(|e| e.to_str())
                        .is_some_and(|e| STRUCTURE_EXTENSIONS.contains(&e))
                })
                .collect();
            files.sort();

            for file in &files {
                match MoleculeModel::from_file(file, primitives, scene) {
                    Ok(model) => molecules.push(model),
                    Err(e) => {
                        log::error!("skipping {}: {e}", file.display());
                    }
                }
            }
            if molecules.is_empty() {
                log::warn!(
                    "no loadable structure files in {}",
                    path.display()
                );
            }
        } else {
            molecules.push(MoleculeModel::from_file(path, primitives, scene)?);
        }

        let mut chain = Self {
            molecules,
            active: 0,
            atom_scale: DEFAULT_ATOM_SCALE,
            bond_radius: DEFAULT_BOND_RADIUS,
            show_bonds: true,
            animate: false,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            animation_time: 0.0,
        };
        chain.activate(scene);
        Ok(chain)
    }

    /// Number of molecules in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    /// Whether the chain holds no molecules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }

    /// The loaded molecules, in play order.
    #[must_use]
    pub fn molecules(&self) -> &[MoleculeModel] {
        &self.molecules
    }

    /// Index of the active molecule.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// The active molecule, if any are loaded.
    #[must_use]
    pub fn active(&self) -> Option<&MoleculeModel> {
        self.molecules.get(self.active)
    }

    /// Switch the visible molecule. Out-of-range indices are a no-op;
    /// the chain never ends up with nothing attached.
    pub fn set_active_index(&mut self, scene: &mut Scene, index: usize) {
        if index >= self.molecules.len() || index == self.active {
            return;
        }
        if let Some(current) = self.molecules.get(self.active) {
            current.detach(scene);
        }
        self.active = index;
        self.activate(scene);
    }

    /// Apply the chain-wide display parameters to the newly active
    /// molecule, attach it, and recenter the camera on its bounds.
    fn activate(&mut self, scene: &mut Scene) {
        let Some(model) = self.molecules.get_mut(self.active) else {
            return;
        };
        model.set_atom_scale(scene, self.atom_scale);
        model.set_bond_radius(scene, self.bond_radius);
        model.attach(scene, self.show_bonds);
        if let Some(bounds) = model.bounds(scene) {
            scene.set_camera_distance(
                bounds.diagonal() * CAMERA_DISTANCE_FACTOR,
            );
        }
    }

    /// Chain-wide atom scale factor.
    #[must_use]
    pub const fn atom_scale(&self) -> f32 {
        self.atom_scale
    }

    /// Set the atom scale factor on every molecule.
    pub fn set_atom_scale(&mut self, scene: &mut Scene, factor: f32) {
        self.atom_scale = factor;
        for model in &mut self.molecules {
            model.set_atom_scale(scene, factor);
        }
    }

    /// Chain-wide bond cross-section radius.
    #[must_use]
    pub const fn bond_radius(&self) -> f32 {
        self.bond_radius
    }

    /// Set the bond radius on every molecule.
    pub fn set_bond_radius(&mut self, scene: &mut Scene, radius: f32) {
        self.bond_radius = radius;
        for model in &mut self.molecules {
            model.set_bond_radius(scene, radius);
        }
    }

    /// Whether bond cylinders render.
    #[must_use]
    pub const fn show_bonds(&self) -> bool {
        self.show_bonds
    }

    /// Toggle bond visibility; takes effect on the active molecule
    /// immediately.
    pub fn set_show_bonds(&mut self, scene: &mut Scene, show: bool) {
        self.show_bonds = show;
        if let Some(model) = self.molecules.get(self.active) {
            model.attach(scene, show);
        }
    }

    /// Set one bond color on every molecule.
    pub fn set_bond_color(&mut self, scene: &mut Scene, color: Vec4) {
        for model in &self.molecules {
            if let Some(mesh) = scene.mesh_mut(model.bond_mesh()) {
                mesh.set_color_all(color);
            }
        }
    }

    /// Whether the chain is animating.
    #[must_use]
    pub const fn animate(&self) -> bool {
        self.animate
    }

    /// Start or stop animation.
    pub fn set_animate(&mut self, animate: bool) {
        self.animate = animate;
    }

    /// Per-tick animation-time increment.
    #[must_use]
    pub const fn animation_speed(&self) -> f32 {
        self.animation_speed
    }

    /// Set the per-tick animation-time increment.
    pub fn set_animation_speed(&mut self, speed: f32) {
        self.animation_speed = speed;
    }

    /// Advance animation by one frame. Animation time accumulates in
    /// [0, 1) and wraps; the active index follows
    /// `floor(time * count) mod count`, so a full time cycle plays every
    /// molecule once.
    pub fn tick(&mut self, scene: &mut Scene) {
        if !self.animate || self.molecules.is_empty() {
            return;
        }
        self.animation_time =
            (self.animation_time + self.animation_speed).fract();
        let count = self.molecules.len();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index =
            (self.animation_time * count as f32).floor() as usize % count;
        self.set_active_index(scene, index);
    }

    /// Detach and release every molecule's meshes.
    pub fn release(&mut self, scene: &mut Scene) {
        for model in &self.molecules {
            model.release(scene);
        }
        self.molecules.clear();
        self.active = 0;
    }
}
