use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

/// Elements that occur in protein and fibril topologies, including common
/// counter-ions and cofactor metals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
#[repr(u8)]
pub enum Element {
    H = 1,
    C = 6,
    N = 7,
    O = 8,
    F = 9,
    Na = 11,
    Mg = 12,
    P = 15,
    S = 16,
    Cl = 17,
    K = 19,
    Ca = 20,
    Fe = 26,
    Zn = 30,
    Se = 34,
}

impl Element {
    pub const ALL: [Element; 15] = [
        Element::H,
        Element::C,
        Element::N,
        Element::O,
        Element::F,
        Element::Na,
        Element::Mg,
        Element::P,
        Element::S,
        Element::Cl,
        Element::K,
        Element::Ca,
        Element::Fe,
        Element::Zn,
        Element::Se,
    ];

    /// Symbol and standard atomic weight (IUPAC, conventional values).
    fn data(self) -> (&'static str, f64) {
        match self {
            Element::H => ("H", 1.008),
            Element::C => ("C", 12.011),
            Element::N => ("N", 14.007),
            Element::O => ("O", 15.999),
            Element::F => ("F", 18.998),
            Element::Na => ("Na", 22.990),
            Element::Mg => ("Mg", 24.305),
            Element::P => ("P", 30.974),
            Element::S => ("S", 32.06),
            Element::Cl => ("Cl", 35.45),
            Element::K => ("K", 39.098),
            Element::Ca => ("Ca", 40.078),
            Element::Fe => ("Fe", 55.845),
            Element::Zn => ("Zn", 65.38),
            Element::Se => ("Se", 78.971),
        }
    }

    pub fn atomic_mass(self) -> f64 {
        self.data().1
    }

    pub fn atomic_number(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        self.data().0
    }

    /// Guesses the element of a topology atom from its name.
    ///
    /// Two-letter symbols are only honoured when the atom sits in a residue of
    /// the same name (`NA`/`NA`, `ZN`/`ZN`), which is how ions are written;
    /// otherwise the first letter decides, so `CA` in `ALA` is a carbon.
    pub fn guess(atom_name: &str, residue_name: &str) -> Option<Element> {
        let name = atom_name.trim().trim_start_matches(|c: char| c.is_ascii_digit());
        let first = name.chars().next()?;

        if name.is_ascii() && name.len() == 2 && name.eq_ignore_ascii_case(residue_name.trim()) {
            let symbol = format!(
                "{}{}",
                name[..1].to_ascii_uppercase(),
                name[1..].to_ascii_lowercase()
            );
            if let Ok(element) = symbol.parse() {
                return Some(element);
            }
        }

        first.to_ascii_uppercase().to_string().parse().ok()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    /// Symbols are case-sensitive: `Zn`, not `zn` or `ZN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::ALL
            .into_iter()
            .find(|e| e.symbol() == s)
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

impl TryFrom<String> for Element {
    type Error = ParseElementError;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        symbol.parse()
    }
}

/// Which of the two parallel input systems a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dataset {
    Fibril,
    Peptide,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Fibril => write!(f, "fibril"),
            Dataset::Peptide => write!(f, "peptide"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_sensitive_symbols() {
        assert_eq!("O".parse::<Element>(), Ok(Element::O));
        assert_eq!("Zn".parse::<Element>(), Ok(Element::Zn));
        assert_eq!(
            "zn".parse::<Element>().unwrap_err().to_string(),
            "invalid or unsupported element symbol: 'zn'"
        );
    }

    #[test]
    fn every_element_round_trips_through_its_symbol() {
        for element in Element::ALL {
            assert_eq!(element.symbol().parse::<Element>(), Ok(element));
            assert_eq!(element.to_string(), element.symbol());
        }
    }

    #[test]
    fn atomic_numbers_and_masses() {
        assert_eq!(Element::Na.atomic_number(), 11);
        assert_eq!(Element::Se.atomic_number(), 34);
        assert!((Element::H.atomic_mass() - 1.008).abs() < 1e-9);
        assert!((Element::S.atomic_mass() - 32.06).abs() < 1e-9);
    }

    #[test]
    fn guess_protein_atom_names() {
        assert_eq!(Element::guess("CA", "ALA"), Some(Element::C));
        assert_eq!(Element::guess("N", "GLY"), Some(Element::N));
        assert_eq!(Element::guess("OXT", "LEU"), Some(Element::O));
        assert_eq!(Element::guess("SD", "MET"), Some(Element::S));
        assert_eq!(Element::guess("1HB", "ALA"), Some(Element::H));
        assert_eq!(Element::guess("HN", "ALA"), Some(Element::H));
    }

    #[test]
    fn guess_ions_by_residue_name() {
        assert_eq!(Element::guess("NA", "NA"), Some(Element::Na));
        assert_eq!(Element::guess("ZN", "ZN"), Some(Element::Zn));
        assert_eq!(Element::guess("NA", "ALA"), Some(Element::N));
    }

    #[test]
    fn guess_rejects_unknown_names() {
        assert_eq!(Element::guess("", "ALA"), None);
        assert_eq!(Element::guess("XX", "UNK"), None);
    }

    #[test]
    fn dataset_display() {
        assert_eq!(Dataset::Fibril.to_string(), "fibril");
        assert_eq!(Dataset::Peptide.to_string(), "peptide");
    }
}
