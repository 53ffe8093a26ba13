//! Empirical bond-length tables and distance-based bond classification.
//!
//! Reference lengths are integer picometers from empirical covalent
//! bond-length data. The raw data is stored per lookup element (and is
//! not symmetric for every pair), so it is normalized once at startup into
//! pair-keyed maps under a sorted element key; after that, lookup order
//! can never fault and classification is symmetric in its arguments.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::Element;

/// Classified covalent bond multiplicity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum BondOrder {
    /// No bond.
    #[default]
    None,
    /// Single bond.
    Single,
    /// Double bond.
    Double,
    /// Triple bond.
    Triple,
}

/// Tolerance added to a single-bond reference length, in picometers.
const MARGIN1: u32 = 10;
/// Tolerance added to a double-bond reference length, in picometers.
const MARGIN2: u32 = 5;
/// Tolerance added to a triple-bond reference length, in picometers.
const MARGIN3: u32 = 3;

type RawTable = &'static [(Element, &'static [(Element, u32)])];

use Element::{As, Br, Cl, Si, B, C, F, H, I, N, O, P, S};

/// Single-bond reference lengths (pm), keyed by the first element.
const BONDS1: RawTable = &[
    (
        H,
        &[
            (H, 74),
            (C, 109),
            (N, 101),
            (O, 96),
            (F, 92),
            (B, 119),
            (Si, 148),
            (P, 144),
            (As, 152),
            (S, 134),
            (Cl, 127),
            (Br, 141),
            (I, 161),
        ],
    ),
    (
        C,
        &[
            (H, 109),
            (C, 154),
            (N, 147),
            (O, 143),
            (F, 135),
            (Si, 185),
            (P, 184),
            (S, 182),
            (Cl, 177),
            (Br, 194),
            (I, 214),
        ],
    ),
    (
        N,
        &[
            (H, 101),
            (C, 147),
            (N, 145),
            (O, 140),
            (F, 136),
            (Cl, 175),
            (Br, 214),
            (S, 168),
            (I, 222),
            (P, 177),
        ],
    ),
    (
        O,
        &[
            (H, 96),
            (C, 143),
            (N, 140),
            (O, 148),
            (F, 142),
            (Br, 172),
            (S, 151),
            (P, 163),
            (Si, 163),
            (Cl, 164),
            (I, 194),
        ],
    ),
    (
        F,
        &[
            (H, 92),
            (C, 135),
            (N, 136),
            (O, 142),
            (F, 142),
            (S, 158),
            (Si, 160),
            (Cl, 166),
            (Br, 178),
            (P, 156),
            (I, 187),
        ],
    ),
    (B, &[(H, 119), (Cl, 175)]),
    (
        Si,
        &[
            (Si, 233),
            (H, 148),
            (C, 185),
            (O, 163),
            (S, 200),
            (F, 160),
            (Cl, 202),
            (Br, 215),
            (I, 243),
        ],
    ),
    (
        Cl,
        &[
            (Cl, 199),
            (H, 127),
            (C, 177),
            (N, 175),
            (O, 164),
            (P, 203),
            (S, 207),
            (B, 175),
            (Si, 202),
            (F, 166),
            (Br, 214),
        ],
    ),
    (
        S,
        &[
            (H, 134),
            (C, 182),
            (N, 168),
            (O, 151),
            (S, 204),
            (F, 158),
            (Cl, 207),
            (Br, 225),
            (Si, 200),
            (P, 210),
            (I, 234),
        ],
    ),
    (
        Br,
        &[
            (Br, 228),
            (H, 141),
            (C, 194),
            (O, 172),
            (N, 214),
            (Si, 215),
            (S, 225),
            (F, 178),
            (Cl, 214),
            (P, 222),
        ],
    ),
    (
        P,
        &[
            (P, 221),
            (H, 144),
            (C, 184),
            (O, 163),
            (Cl, 203),
            (S, 210),
            (F, 156),
            (N, 177),
            (Br, 222),
        ],
    ),
    (
        I,
        &[
            (H, 161),
            (C, 214),
            (Si, 243),
            (N, 222),
            (O, 194),
            (S, 234),
            (F, 187),
            (I, 266),
        ],
    ),
    (As, &[(H, 152)]),
];

/// Double-bond reference lengths (pm). Note the raw data is asymmetric:
/// C→S is listed but S→C is not; symmetrization repairs this.
const BONDS2: RawTable = &[
    (C, &[(C, 134), (N, 129), (O, 120), (S, 160)]),
    (N, &[(C, 129), (N, 125), (O, 121)]),
    (O, &[(C, 120), (N, 121), (P, 150)]),
    (P, &[(O, 150), (S, 186)]),
    (S, &[(P, 186)]),
];

/// Triple-bond reference lengths (pm).
const BONDS3: RawTable = &[
    (C, &[(C, 120), (N, 116), (O, 113)]),
    (N, &[(C, 116), (N, 110)]),
    (O, &[(C, 113)]),
];

type PairMap = FxHashMap<(Element, Element), u32>;

/// Symmetrized threshold maps, built once on first use.
struct BondTable {
    singles: PairMap,
    doubles: PairMap,
    triples: PairMap,
}

/// Canonical (sorted) key for an unordered element pair.
fn pair_key(a: Element, b: Element) -> (Element, Element) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Fold a raw per-element table into a symmetric pair-keyed map. When both
/// orderings of a pair carry different values, the smaller wins; the
/// reference data has no such conflict, so this is a deterministic
/// tie-break rather than a behavior change.
fn symmetrize(raw: RawTable) -> PairMap {
    let mut map = PairMap::default();
    for &(a, row) in raw {
        for &(b, length) in row {
            let entry = map.entry(pair_key(a, b)).or_insert(length);
            *entry = (*entry).min(length);
        }
    }
    map
}

fn table() -> &'static BondTable {
    static TABLE: OnceLock<BondTable> = OnceLock::new();
    TABLE.get_or_init(|| BondTable {
        singles: symmetrize(BONDS1),
        doubles: symmetrize(BONDS2),
        triples: symmetrize(BONDS3),
    })
}

/// Whether the element pair has a single-bond reference entry at all.
/// Pairs without one (e.g. As with anything but H) can never bond.
#[must_use]
pub fn pair_has_entry(a: Element, b: Element) -> bool {
    table().singles.contains_key(&pair_key(a, b))
}

/// Classify the covalent bond between two atoms from their distance.
///
/// `distance` is in angstroms; the reference tables are in picometers, so
/// the distance is converted (×100) before threshold comparison. Each
/// order's reference length is widened by its tolerance margin before the
/// cut is applied:
///
/// 1. at or beyond single + 10 pm → no bond
/// 2. else, no double entry or at or beyond double + 5 pm → single
/// 3. else, no triple entry or at or beyond triple + 3 pm → double
/// 4. else → triple
///
/// `check_exists` documents caller intent for untrusted element pairs;
/// because lookup is total over the symmetrized tables, a pair without a
/// single-bond entry classifies as [`BondOrder::None`] on either path.
#[must_use]
pub fn classify_bond(
    a: Element,
    b: Element,
    distance: f32,
    check_exists: bool,
) -> BondOrder {
    let t = table();
    let key = pair_key(a, b);

    let Some(&single) = t.singles.get(&key) else {
        // With `check_exists` the caller expects this outcome; without it
        // the pair is outside the contract, but the symmetrized table
        // makes the answer the same either way.
        let _ = check_exists;
        return BondOrder::None;
    };

    let d = distance * 100.0;
    if d >= threshold(single, MARGIN1) {
        return BondOrder::None;
    }
    match t.doubles.get(&key) {
        Some(&double) if d < threshold(double, MARGIN2) => {}
        _ => return BondOrder::Single,
    }
    match t.triples.get(&key) {
        Some(&triple) if d < threshold(triple, MARGIN3) => BondOrder::Triple,
        _ => BondOrder::Double,
    }
}

#[allow(clippy::cast_precision_loss)]
fn threshold(reference: u32, margin: u32) -> f32 {
    (reference + margin) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carbon_carbon_orders() {
        // bonds1[C][C]=154, bonds2=134, bonds3=120
        assert_eq!(classify_bond(C, C, 1.20, false), BondOrder::Triple);
        assert_eq!(classify_bond(C, C, 1.30, false), BondOrder::Double);
        assert_eq!(classify_bond(C, C, 1.54, false), BondOrder::Single);
        assert_eq!(classify_bond(C, C, 1.70, false), BondOrder::None);
    }

    #[test]
    fn hydrogen_pair_too_far() {
        // 150 pm vs threshold 74 + 10
        assert_eq!(classify_bond(H, H, 1.50, false), BondOrder::None);
        assert_eq!(classify_bond(H, H, 0.74, false), BondOrder::Single);
    }

    #[test]
    fn margins_are_inclusive_cuts() {
        // Exactly at single threshold (154 + 10) there is no bond.
        assert_eq!(classify_bond(C, C, 1.64, false), BondOrder::None);
        // Just inside it there is one.
        assert_eq!(classify_bond(C, C, 1.639, false), BondOrder::Single);
        // Exactly at triple threshold (120 + 3) the bond is double.
        assert_eq!(classify_bond(C, C, 1.23, false), BondOrder::Double);
    }

    #[test]
    fn missing_pair_is_no_bond_when_checked() {
        // Arsenic only has a single-bond entry against hydrogen.
        assert!(!pair_has_entry(As, C));
        assert_eq!(classify_bond(As, C, 1.5, true), BondOrder::None);
        assert!(pair_has_entry(As, H));
        assert_eq!(classify_bond(As, H, 1.52, true), BondOrder::Single);
    }

    #[test]
    fn classification_is_symmetric() {
        // The raw double-bond table lists C→S but not S→C; the
        // symmetrized map must answer identically for both orderings.
        for a in Element::ALL {
            for b in Element::ALL {
                for d in [0.8, 1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.4] {
                    assert_eq!(
                        classify_bond(a, b, d, true),
                        classify_bond(b, a, d, true),
                        "asymmetric classification for {a}-{b} at {d}"
                    );
                }
            }
        }
        assert_eq!(
            classify_bond(S, C, 1.62, true),
            classify_bond(C, S, 1.62, true)
        );
    }

    #[test]
    fn order_never_increases_with_distance() {
        for a in Element::ALL {
            for b in Element::ALL {
                let mut last = BondOrder::Triple;
                let mut d = 0.5;
                while d < 3.0 {
                    let order = classify_bond(a, b, d, true);
                    assert!(
                        order <= last,
                        "order increased with distance for {a}-{b} at {d}"
                    );
                    last = order;
                    d += 0.01;
                }
            }
        }
    }

    #[test]
    fn result_is_always_a_valid_order() {
        for a in Element::ALL {
            for b in Element::ALL {
                let order = classify_bond(a, b, 1.3, true);
                assert!(matches!(
                    order,
                    BondOrder::None
                        | BondOrder::Single
                        | BondOrder::Double
                        | BondOrder::Triple
                ));
            }
        }
    }
}
