//! Converts SMOG-style coarse-grained force-field listings into GROMOS-style
//! topology fragments for peptide/fibril amyloid simulations.
//!
//! # Features
//!
//! - **Atom type table**: Unique atom types in first-seen order, scanning the
//!   fibril listing before the peptide listing
//! - **Dihedral remapping**: Proper dihedrals rewritten from SMOG to GROMOS
//!   atom numbering, fibril first
//! - **Pair merging**: Peptide and fibril nonbonded pairs deduplicated on
//!   their unordered atom-type pair, in a neutral-pH and an acidic-pH variant
//! - **Writers**: `atomtypes.atp`, the topology `[ atoms ]` section, merged
//!   dihedrals, and two `ffnonbonded.itp` files
//!
//! # Quick Start
//!
//! ```
//! use smog2gro::convert::get_default_config;
//! use smog2gro::{AtomRecord, Inputs, PairRecord, convert};
//!
//! let inputs = Inputs {
//!     fibril_atoms: vec![
//!         AtomRecord::new(1, "A", 1, "ALA", "N"),
//!         AtomRecord::new(2, "B", 1, "ALA", "CA"),
//!         AtomRecord::new(3, "A", 2, "ALA", "N"),
//!     ],
//!     peptide_atoms: vec![
//!         AtomRecord::new(1, "B", 1, "ALA", "CA"),
//!         AtomRecord::new(2, "C", 1, "ALA", "C"),
//!     ],
//!     peptide_pairs: vec![PairRecord::new(1, 2, vec!["1".into(), "0.1".into(), "1e-3".into()])],
//!     ..Inputs::default()
//! };
//!
//! let conversion = convert(&inputs, get_default_config())?;
//!
//! assert_eq!(conversion.atom_types.names(), vec!["A", "B", "C"]);
//! assert_eq!(conversion.pairs.neutral.len(), 1);
//! assert_eq!(conversion.pairs.acidic, conversion.pairs.neutral);
//! # Ok::<(), smog2gro::ConvertError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: Listing readers and output writers
//! - [`convert`]: Pipeline, configuration, and the individual conversion steps

pub mod convert;
pub mod io;
mod model;

pub use model::atom::{AtomRecord, ResidueId};
pub use model::interaction::{DihedralRecord, PairRecord};
pub use model::topology::{
    AtomDictionary, AtomTypeEntry, AtomTypeTable, MergedPair, MergedPairs, NumberingMap,
    RemappedDihedral, SerialToResidueMap, SerialToTypeMap, TopologyAtom, canonical_pair,
};
pub use model::types::{Dataset, Element, ParseElementError};

pub use convert::{
    Conversion, ConvertConfig, Inputs, OutputKind, Phase, RenderedFile, convert, load_config,
};

pub use convert::Error as ConvertError;
