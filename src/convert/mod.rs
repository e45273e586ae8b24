mod config;
mod dictionary;
mod dihedrals;
mod error;
mod pairs;
mod topology;

pub use config::{
    ConvertConfig, InputFiles, NonbondedConfig, OutputFiles, get_default_config, load_config,
};
pub use dictionary::build_dictionary;
pub use dihedrals::remap_dihedrals;
pub use error::{Error, Table};
pub use pairs::merge_pairs;
pub use topology::gromos_topology;

use crate::io;
use crate::model::atom::AtomRecord;
use crate::model::interaction::{DihedralRecord, PairRecord};
use crate::model::topology::{
    AtomDictionary, AtomTypeTable, MergedPairs, RemappedDihedral, TopologyAtom,
};
use crate::model::types::Dataset;
use log::info;
use std::fmt;

/// Every listing the conversion consumes, fully loaded.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub peptide_atoms: Vec<AtomRecord>,
    pub fibril_atoms: Vec<AtomRecord>,
    pub gromos_atoms: Vec<AtomRecord>,
    pub peptide_dihedrals: Vec<DihedralRecord>,
    pub fibril_dihedrals: Vec<DihedralRecord>,
    pub peptide_pairs: Vec<PairRecord>,
    pub fibril_pairs: Vec<PairRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Dictionaries,
    Topology,
    Dihedrals,
    Nonbonded,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Dictionaries => write!(f, "Peptide and fibril dictionaries created"),
            Phase::Topology => write!(f, "Topology atoms section prepared"),
            Phase::Dihedrals => write!(f, "Proper dihedrals remapped from SMOG to GROMOS"),
            Phase::Nonbonded => write!(f, "Nonbonded pairs merged for neutral and acidic pH"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    AtomTypes,
    Topology,
    Dihedrals,
    Nonbonded,
    AcidNonbonded,
}

impl OutputKind {
    pub fn file_name(self, files: &OutputFiles) -> &str {
        match self {
            OutputKind::AtomTypes => &files.atomtypes,
            OutputKind::Topology => &files.topology,
            OutputKind::Dihedrals => &files.dihedrals,
            OutputKind::Nonbonded => &files.nonbonded,
            OutputKind::AcidNonbonded => &files.acid_nonbonded,
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::AtomTypes => write!(f, "atom types"),
            OutputKind::Topology => write!(f, "topology atoms"),
            OutputKind::Dihedrals => write!(f, "dihedrals"),
            OutputKind::Nonbonded => write!(f, "nonbonded (neutral pH)"),
            OutputKind::AcidNonbonded => write!(f, "nonbonded (acidic pH)"),
        }
    }
}

/// One output serialized in memory, not yet on disk.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub kind: OutputKind,
    pub file_name: String,
    pub contents: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub atom_types: AtomTypeTable,
    pub fibril: AtomDictionary,
    pub peptide: AtomDictionary,
    pub topology: Vec<TopologyAtom>,
    pub dihedrals: Vec<RemappedDihedral>,
    pub pairs: MergedPairs,
    /// Completed phases, in order.
    pub phases: Vec<Phase>,
}

/// Runs the whole conversion over loaded inputs.
///
/// The fibril listing is scanned before the peptide listing so fibril atom
/// types anchor the start of the shared type table.
pub fn convert(inputs: &Inputs, config: &ConvertConfig) -> Result<Conversion, Error> {
    let mut phases = Vec::with_capacity(4);
    let mut atom_types = AtomTypeTable::new();
    let fallback = config.fallback_element;

    let fibril = build_dictionary(
        Dataset::Fibril,
        &inputs.fibril_atoms,
        &mut atom_types,
        fallback,
    )?;
    let peptide = build_dictionary(
        Dataset::Peptide,
        &inputs.peptide_atoms,
        &mut atom_types,
        fallback,
    )?;
    complete(&mut phases, Phase::Dictionaries);

    let topology = gromos_topology(&inputs.gromos_atoms, fallback)?;
    complete(&mut phases, Phase::Topology);

    let dihedrals = remap_dihedrals(
        &inputs.fibril_dihedrals,
        &fibril,
        &inputs.peptide_dihedrals,
        &peptide,
    )?;
    complete(&mut phases, Phase::Dihedrals);

    let pairs = merge_pairs(&inputs.peptide_pairs, &peptide, &inputs.fibril_pairs, &fibril)?;
    complete(&mut phases, Phase::Nonbonded);

    Ok(Conversion {
        atom_types,
        fibril,
        peptide,
        topology,
        dihedrals,
        pairs,
        phases,
    })
}

fn complete(phases: &mut Vec<Phase>, phase: Phase) {
    info!("{phase}");
    phases.push(phase);
}

impl Conversion {
    /// Serializes all five outputs into memory, in writing order.
    pub fn render(&self, config: &ConvertConfig) -> Result<Vec<RenderedFile>, io::Error> {
        let protein = &config.protein;
        let mut files = Vec::with_capacity(5);

        let mut push = |kind: OutputKind, contents: Vec<u8>| {
            files.push(RenderedFile {
                kind,
                file_name: kind.file_name(&config.outputs).to_string(),
                contents,
            });
        };

        let mut buf = Vec::new();
        io::write_atomtypes_atp(&mut buf, &format!("{protein} atom types"), &self.atom_types)?;
        push(OutputKind::AtomTypes, buf);

        let mut buf = Vec::new();
        io::write_topology_atoms(
            &mut buf,
            &format!("{protein} atoms section from the GROMOS listing"),
            &self.topology,
        )?;
        push(OutputKind::Topology, buf);

        let mut buf = Vec::new();
        io::write_dihedrals(
            &mut buf,
            &format!("{protein} proper dihedrals in GROMOS numbering"),
            &self.dihedrals,
        )?;
        push(OutputKind::Dihedrals, buf);

        let mut buf = Vec::new();
        io::write_nonbonded(
            &mut buf,
            &format!("{protein} merged nonbonded parameters, neutral pH"),
            &self.atom_types,
            &self.pairs.neutral,
            &config.nonbonded,
        )?;
        push(OutputKind::Nonbonded, buf);

        let mut buf = Vec::new();
        io::write_nonbonded(
            &mut buf,
            &format!("{protein} merged nonbonded parameters, acidic pH"),
            &self.atom_types,
            &self.pairs.acidic,
            &config.nonbonded,
        )?;
        push(OutputKind::AcidNonbonded, buf);

        Ok(files)
    }
}
