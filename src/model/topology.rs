use super::atom::ResidueId;
use super::types::{Dataset, Element};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq)]
pub struct AtomTypeEntry {
    pub name: String,
    pub element: Element,
    pub mass: f64,
}

/// Unique atom types in first-seen order.
///
/// Shared across the fibril and peptide scans. Inserting a name that is
/// already present is a no-op: the first entry wins and keeps its position.
#[derive(Debug, Clone, Default)]
pub struct AtomTypeTable {
    entries: Vec<AtomTypeEntry>,
    index: HashMap<String, usize>,
}

impl AtomTypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` unless its name is known. Returns `true` when appended.
    pub fn insert(&mut self, entry: AtomTypeEntry) -> bool {
        if self.index.contains_key(&entry.name) {
            return false;
        }
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&AtomTypeEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &AtomTypeEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serial number to atom type, last write wins.
pub type SerialToTypeMap = BTreeMap<usize, String>;
/// Serial number to residue identity, last write wins.
pub type SerialToResidueMap = BTreeMap<usize, ResidueId>;
/// SMOG serial number to GROMOS atom index.
pub type NumberingMap = BTreeMap<usize, usize>;

/// Per-dataset lookup tables produced by one dictionary scan.
#[derive(Debug, Clone)]
pub struct AtomDictionary {
    pub dataset: Dataset,
    pub types: SerialToTypeMap,
    pub residues: SerialToResidueMap,
    pub numbering: NumberingMap,
}

impl AtomDictionary {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            types: SerialToTypeMap::new(),
            residues: SerialToResidueMap::new(),
            numbering: NumberingMap::new(),
        }
    }
}

/// One row of the regenerated topology `[ atoms ]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyAtom {
    pub serial: usize,
    pub atom_type: String,
    pub residue_index: i32,
    pub residue_name: String,
    pub atom_name: String,
    pub charge_group: usize,
    pub charge: f64,
    pub mass: f64,
}

/// A dihedral whose atoms are expressed in GROMOS numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemappedDihedral {
    pub dataset: Dataset,
    pub atoms: [usize; 4],
    pub parameters: Vec<String>,
    pub residue: ResidueId,
}

/// A nonbonded pair resolved to atom types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPair {
    pub dataset: Dataset,
    pub type_i: String,
    pub type_j: String,
    pub parameters: Vec<String>,
}

impl MergedPair {
    /// Order-independent identity of the pair.
    pub fn key(&self) -> (&str, &str) {
        canonical_pair(&self.type_i, &self.type_j)
    }
}

pub fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedPairs {
    pub neutral: Vec<MergedPair>,
    pub acidic: Vec<MergedPair>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, mass: f64) -> AtomTypeEntry {
        AtomTypeEntry {
            name: name.to_string(),
            element: Element::C,
            mass,
        }
    }

    #[test]
    fn atom_type_table_keeps_first_entry() {
        let mut table = AtomTypeTable::new();
        assert!(table.insert(entry("CA", 12.0)));
        assert!(table.insert(entry("CB", 13.0)));
        assert!(!table.insert(entry("CA", 99.0)));

        assert_eq!(table.len(), 2);
        assert_eq!(table.names(), vec!["CA", "CB"]);
        assert_eq!(table.get("CA").unwrap().mass, 12.0);
        assert!(table.contains("CB"));
        assert!(!table.contains("CG"));
    }

    #[test]
    fn canonical_pair_ignores_order() {
        assert_eq!(canonical_pair("N_1", "CA_2"), ("CA_2", "N_1"));
        assert_eq!(canonical_pair("CA_2", "N_1"), ("CA_2", "N_1"));
        assert_eq!(canonical_pair("O", "O"), ("O", "O"));
    }
}
