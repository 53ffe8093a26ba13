//! Bond geometry builder: classify atom pairs, derive cylinder frames.
//!
//! Every inferred bond keeps its semantic frame (midpoint, rotation,
//! length) rather than a baked matrix, so the bond-radius rescale can
//! recompose `Translate · Rotate · Scale` exactly instead of decomposing
//! a possibly lossy matrix.

use glam::{Mat3, Mat4, Quat, Vec3};

use super::Atom;
use crate::chem::{classify_bond, BondOrder};

/// One inferred bond between two atoms of a molecule, with the geometric
/// frame of its cylinder instance.
#[derive(Clone, Copy, Debug)]
pub struct BondFrame {
    /// Index of the first atom (larger index in scan order).
    pub atom_a: usize,
    /// Index of the second atom.
    pub atom_b: usize,
    /// Classified multiplicity; never [`BondOrder::None`].
    pub order: BondOrder,
    /// Bond center, the cylinder's translation.
    pub midpoint: Vec3,
    /// Rotation mapping the cylinder's +Y axis onto the bond direction.
    pub rotation: Quat,
    /// Interatomic distance, the cylinder's Y scale.
    pub length: f32,
}

/// Rotation mapping the canonical cylinder axis (+Y) onto `direction`
/// (unit). Look-at-style construction against world up; when the
/// direction is parallel or antiparallel to world up the construction is
/// degenerate, so +X takes over as the reference axis.
#[must_use]
pub fn bond_rotation(direction: Vec3) -> Quat {
    let reference = if direction.y.abs() > 0.999 {
        Vec3::X
    } else {
        Vec3::Y
    };
    let x_axis = reference.cross(direction).normalize();
    let z_axis = x_axis.cross(direction);
    Quat::from_mat3(&Mat3::from_cols(x_axis, direction, z_axis))
}

/// Cylinder instance transform for a bond frame at the given
/// cross-section radius: `Translate(midpoint) · Rotate · Scale(r, len, r)`.
/// The Y scale spans the bond length; X/Z carry only the radius.
#[must_use]
pub fn bond_transform(frame: &BondFrame, radius: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::new(radius, frame.length, radius),
        frame.rotation,
        frame.midpoint,
    )
}

/// Scan every unordered atom pair once (`i` over all atoms, `j < i`),
/// classify by distance, and emit a frame per bonded pair. Classification
/// runs with existence checking so exotic element pairs simply yield no
/// bond. O(n²), fine for the target molecule sizes (tens of atoms).
#[must_use]
pub fn infer_bond_frames(atoms: &[Atom]) -> Vec<BondFrame> {
    let mut frames = Vec::new();
    for (i, a) in atoms.iter().enumerate() {
        for (j, b) in atoms[..i].iter().enumerate() {
            let delta = b.position - a.position;
            let length = delta.length();
            if length <= 1e-6 {
                // Coincident atoms have no bond direction.
                continue;
            }
            let order =
                classify_bond(a.element, b.element, length, true);
            if order == BondOrder::None {
                continue;
            }
            frames.push(BondFrame {
                atom_a: i,
                atom_b: j,
                order,
                midpoint: (a.position + b.position) * 0.5,
                rotation: bond_rotation(delta / length),
                length,
            });
        }
    }
    frames
}
