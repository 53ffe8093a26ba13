//! The closed alphabet of chemical elements the viewer renders.

/// Chemical element, restricted to the species covered by the empirical
/// bond-length tables. The core QM9 set (H, C, N, O, F) carries the
/// dataset's display palette; the extended set exists for general bonding
/// and uses CPK colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    /// Hydrogen.
    H,
    /// Boron.
    B,
    /// Carbon.
    C,
    /// Nitrogen.
    N,
    /// Oxygen.
    O,
    /// Fluorine.
    F,
    /// Silicon.
    Si,
    /// Phosphorus.
    P,
    /// Sulfur.
    S,
    /// Chlorine.
    Cl,
    /// Arsenic.
    As,
    /// Bromine.
    Br,
    /// Iodine.
    I,
}

impl Element {
    /// Every supported element, in atomic-number order.
    pub const ALL: [Self; 13] = [
        Self::H,
        Self::B,
        Self::C,
        Self::N,
        Self::O,
        Self::F,
        Self::Si,
        Self::P,
        Self::S,
        Self::Cl,
        Self::As,
        Self::Br,
        Self::I,
    ];

    /// Parse an element symbol as it appears in an XYZ atom line.
    /// Symbols are matched case-sensitively ("Cl", not "CL").
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "H" => Some(Self::H),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "N" => Some(Self::N),
            "O" => Some(Self::O),
            "F" => Some(Self::F),
            "Si" => Some(Self::Si),
            "P" => Some(Self::P),
            "S" => Some(Self::S),
            "Cl" => Some(Self::Cl),
            "As" => Some(Self::As),
            "Br" => Some(Self::Br),
            "I" => Some(Self::I),
            _ => None,
        }
    }

    /// The element's symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::H => "H",
            Self::B => "B",
            Self::C => "C",
            Self::N => "N",
            Self::O => "O",
            Self::F => "F",
            Self::Si => "Si",
            Self::P => "P",
            Self::S => "S",
            Self::Cl => "Cl",
            Self::As => "As",
            Self::Br => "Br",
            Self::I => "I",
        }
    }

    /// Base display radius in angstroms, before the per-chain atom scale
    /// factor is applied. The QM9 set uses the dataset's radii (0.46 for
    /// hydrogen, 0.77 for heavy atoms); the extended set uses covalent
    /// radii.
    #[must_use]
    pub const fn display_radius(self) -> f32 {
        match self {
            Self::H => 0.46,
            Self::B => 0.82,
            Self::C | Self::N | Self::O | Self::F => 0.77,
            Self::Si => 1.11,
            Self::P => 1.06,
            Self::S => 1.02,
            Self::Cl => 0.99,
            Self::As => 1.19,
            Self::Br => 1.14,
            Self::I => 1.33,
        }
    }

    /// Display color as RGBA. Hydrogen keeps the dataset's translucent
    /// light-blue tint; the rest of the QM9 set uses the dataset palette
    /// and the extended set uses opaque CPK colors.
    #[must_use]
    pub const fn display_color(self) -> [f32; 4] {
        match self {
            Self::H => [0.9, 0.9, 1.0, 0.7],
            Self::C => [0.2, 0.2, 0.2, 1.0],
            Self::N => [0.0, 0.0, 1.0, 1.0],
            Self::O => [1.0, 0.0, 0.0, 1.0],
            Self::F => [0.0, 1.0, 0.0, 1.0],
            Self::B => [1.0, 0.71, 0.71, 1.0],
            Self::Si => [0.94, 0.78, 0.63, 1.0],
            Self::P => [1.0, 0.5, 0.0, 1.0],
            Self::S => [1.0, 1.0, 0.19, 1.0],
            Self::Cl => [0.12, 0.94, 0.12, 1.0],
            Self::As => [0.74, 0.5, 0.89, 1.0],
            Self::Br => [0.65, 0.16, 0.16, 1.0],
            Self::I => [0.58, 0.0, 0.58, 1.0],
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trips() {
        for elem in Element::ALL {
            assert_eq!(Element::from_symbol(elem.symbol()), Some(elem));
        }
    }

    #[test]
    fn unknown_symbols_rejected() {
        assert_eq!(Element::from_symbol("X"), None);
        assert_eq!(Element::from_symbol("CL"), None); // case-sensitive
        assert_eq!(Element::from_symbol(""), None);
    }

    #[test]
    fn qm9_palette_radii() {
        assert_eq!(Element::H.display_radius(), 0.46);
        assert_eq!(Element::C.display_radius(), 0.77);
        assert_eq!(Element::F.display_radius(), 0.77);
    }
}
