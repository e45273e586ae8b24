//! Readers and writers for the GROMACS-style text listings.
//!
//! Inputs are whitespace-delimited `[ atoms ]`, `[ dihedrals ]` and
//! `[ pairs ]` style listings. Outputs are column-aligned fragments ready to
//! paste into a GROMOS force-field directory.

use crate::convert::NonbondedConfig;
use crate::model::atom::AtomRecord;
use crate::model::interaction::{DihedralRecord, PairRecord};
use crate::model::topology::{AtomTypeTable, MergedPair, RemappedDihedral, TopologyAtom};
use std::fmt;
use std::io::{BufRead, Write};

pub mod error;
pub(crate) mod util;

mod atoms {
    pub mod reader;
    pub mod writer;
}
mod atp {
    pub mod writer;
}
mod dihedrals {
    pub mod reader;
    pub mod writer;
}
mod nonbonded {
    pub mod writer;
}
mod pairs {
    pub mod reader;
}

pub use error::Error;

/// The kind of input listing a record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Atoms,
    Dihedrals,
    Pairs,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Listing::Atoms => write!(f, "atom"),
            Listing::Dihedrals => write!(f, "dihedral"),
            Listing::Pairs => write!(f, "pair"),
        }
    }
}

pub fn read_atoms<R: BufRead>(reader: R) -> Result<Vec<AtomRecord>, Error> {
    atoms::reader::read(reader)
}

pub fn read_dihedrals<R: BufRead>(reader: R) -> Result<Vec<DihedralRecord>, Error> {
    dihedrals::reader::read(reader)
}

pub fn read_pairs<R: BufRead>(reader: R, acid_marker: &str) -> Result<Vec<PairRecord>, Error> {
    pairs::reader::read(reader, acid_marker)
}

pub fn write_atomtypes_atp<W: Write>(
    writer: W,
    title: &str,
    types: &AtomTypeTable,
) -> Result<(), Error> {
    atp::writer::write(writer, title, types)
}

pub fn write_topology_atoms<W: Write>(
    writer: W,
    title: &str,
    atoms: &[TopologyAtom],
) -> Result<(), Error> {
    atoms::writer::write(writer, title, atoms)
}

pub fn write_dihedrals<W: Write>(
    writer: W,
    title: &str,
    dihedrals: &[RemappedDihedral],
) -> Result<(), Error> {
    dihedrals::writer::write(writer, title, dihedrals)
}

pub fn write_nonbonded<W: Write>(
    writer: W,
    title: &str,
    types: &AtomTypeTable,
    pairs: &[MergedPair],
    params: &NonbondedConfig,
) -> Result<(), Error> {
    nonbonded::writer::write(writer, title, types, pairs, params)
}
