use std::fmt;

/// One line of an atom listing (`nr type resnr residue atom cgnr [charge [mass]]`).
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub serial: usize,
    pub atom_type: String,
    pub residue_index: i32,
    pub residue_name: String,
    pub atom_name: String,
    pub charge_group: usize,
    pub charge: f64,
    pub mass: Option<f64>,
}

impl AtomRecord {
    pub fn new(
        serial: usize,
        atom_type: impl Into<String>,
        residue_index: i32,
        residue_name: impl Into<String>,
        atom_name: impl Into<String>,
    ) -> Self {
        Self {
            serial,
            atom_type: atom_type.into(),
            residue_index,
            residue_name: residue_name.into(),
            atom_name: atom_name.into(),
            charge_group: serial,
            charge: 0.0,
            mass: None,
        }
    }

    pub fn residue(&self) -> ResidueId {
        ResidueId {
            name: self.residue_name.clone(),
            index: self.residue_index,
        }
    }
}

/// Amino-acid identity of an atom: residue name plus sequence position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueId {
    pub name: String,
    pub index: i32,
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.index)
    }
}
