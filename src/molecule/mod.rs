//! Molecular structures: parsing, bond inference, per-structure meshes,
//! and the steppable molecule chain.

mod bonds;
mod chain;
mod model;
mod xyz;

pub use bonds::{bond_rotation, bond_transform, infer_bond_frames, BondFrame};
pub use chain::MoleculeChain;
pub use model::{BasePrimitives, MoleculeModel};
pub use xyz::{load_xyz, parse_xyz, Atom};
