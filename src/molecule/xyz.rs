//! Parser for whitespace-delimited XYZ-style structure files.
//!
//! Format: line 1 is the declared atom count, line 2 is a comment (often
//! blank), every following non-empty line is `<symbol> <x> <y> <z>` with
//! coordinates in angstroms. Parsing degrades gracefully: malformed atom
//! lines and unknown symbols are skipped with a warning, and a mismatch
//! between the declared count and the lines actually parsed is reported
//! but not fatal.

use std::path::Path;

use glam::Vec3;

use crate::chem::Element;
use crate::error::MolvizError;

/// One parsed atom: an element at a position. Atoms are never mutated
/// after parse; their index within the molecule is stable (file order).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atom {
    /// Chemical species.
    pub element: Element,
    /// Position in angstroms.
    pub position: Vec3,
}

/// Parse XYZ-style text. `label` names the source in log messages.
///
/// # Errors
///
/// Fails only when the header line is missing or not an integer; every
/// per-atom problem degrades to a logged warning instead.
pub fn parse_xyz(content: &str, label: &str) -> Result<Vec<Atom>, MolvizError> {
    let mut lines = content.lines();

    let header = lines.next().unwrap_or("").trim();
    let declared: usize = header.parse().map_err(|_| {
        MolvizError::StructureParse(format!(
            "{label}: expected an atom count on the first line, got {header:?}"
        ))
    })?;

    // Second line is a comment.
    let _ = lines.next();

    let mut atoms = Vec::with_capacity(declared);
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_atom_line(line) {
            Some(atom) => atoms.push(atom),
            None => log::warn!("{label}: skipping malformed atom line {line:?}"),
        }
    }

    if atoms.len() != declared {
        log::warn!(
            "{label}: expected {declared} atoms, but found {}",
            atoms.len()
        );
    }

    Ok(atoms)
}

fn parse_atom_line(line: &str) -> Option<Atom> {
    let mut fields = line.split_whitespace();
    let element = Element::from_symbol(fields.next()?)?;
    let x: f32 = fields.next()?.parse().ok()?;
    let y: f32 = fields.next()?.parse().ok()?;
    let z: f32 = fields.next()?.parse().ok()?;
    Some(Atom {
        element,
        position: Vec3::new(x, y, z),
    })
}

/// Read and parse one structure file.
///
/// # Errors
///
/// Fails when the file cannot be read or its header is malformed.
pub fn load_xyz(path: &Path) -> Result<Vec<Atom>, MolvizError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| MolvizError::FileOpen(path.to_path_buf(), e))?;
    parse_xyz(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_atoms_in_file_order() {
        let atoms =
            parse_xyz("3\n\nH 0 0 0\nH 0 0 1\nO 1 1 1\n", "test").unwrap();
        assert_eq!(atoms.len(), 3);
        assert_eq!(atoms[0].element, Element::H);
        assert_eq!(atoms[0].position, Vec3::ZERO);
        assert_eq!(atoms[1].position, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(atoms[2].element, Element::O);
        assert_eq!(atoms[2].position, Vec3::ONE);
    }

    #[test]
    fn count_mismatch_is_not_fatal() {
        let atoms =
            parse_xyz("5\n\nH 0 0 0\nH 0 0 1\nO 1 1 1\n", "test").unwrap();
        assert_eq!(atoms.len(), 3);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let atoms = parse_xyz(
            "4\ncomment\nH 0 0 0\nXx 1 1 1\nC 1 nan-ish zero\nC 2 2 2\n",
            "test",
        )
        .unwrap();
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[1].element, Element::C);
    }

    #[test]
    fn bad_header_is_an_error() {
        assert!(parse_xyz("", "test").is_err());
        assert!(parse_xyz("atoms: 3\n\nH 0 0 0\n", "test").is_err());
    }

    #[test]
    fn negative_and_scientific_coordinates() {
        let atoms =
            parse_xyz("1\n\nN -1.5 2.25e-1 -3e0\n", "test").unwrap();
        assert_eq!(atoms[0].position, Vec3::new(-1.5, 0.225, -3.0));
    }
}
