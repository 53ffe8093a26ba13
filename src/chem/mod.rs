//! Chemical species and empirical bond classification.
//!
//! [`Element`] is the closed alphabet of species the viewer understands;
//! [`classify_bond`] infers covalent bond order from interatomic distance
//! using per-element-pair reference lengths with tolerance margins.

mod bond_table;
mod element;

pub use bond_table::{classify_bond, pair_has_entry, BondOrder};
pub use element::Element;
