//! Error types for the SMOG to GROMOS conversion.
//!
//! Every failure here is fatal: the pipeline stops at the first error and no
//! output is rendered.

use crate::model::types::Dataset;
use std::fmt;
use thiserror::Error;

/// The per-dataset dictionary a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Numbering,
    AtomTypes,
    Residues,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Numbering => write!(f, "numbering map"),
            Table::AtomTypes => write!(f, "atom type map"),
            Table::Residues => write!(f, "residue map"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Failed to parse a configuration TOML.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A dihedral or pair references an atom serial the dataset never listed.
    #[error("{dataset} atom {serial} is not in the {table}")]
    Lookup {
        dataset: Dataset,
        table: Table,
        serial: usize,
    },

    /// The element of an atom could not be derived from its name or type.
    #[error("cannot determine the element of atom {serial} ('{atom_name}', type '{atom_type}')")]
    UnknownElement {
        serial: usize,
        atom_name: String,
        atom_type: String,
    },
}

impl Error {
    pub fn lookup(dataset: Dataset, table: Table, serial: usize) -> Self {
        Self::Lookup {
            dataset,
            table,
            serial,
        }
    }
}
