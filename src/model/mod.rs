//! Core data structures flowing through the converter.
//!
//! - [`atom`] – Atom listing records and residue identity.
//! - [`interaction`] – Dihedral and pair records as read from SMOG listings.
//! - [`types`] – Elements and the fibril/peptide dataset tag.
//! - [`topology`] – Atom type table, per-dataset dictionaries, and the
//!   GROMOS-side rows produced by the conversion.
//!
//! Input records ([`atom::AtomRecord`], [`interaction::DihedralRecord`],
//! [`interaction::PairRecord`]) are never mutated; the [`crate::convert`]
//! pipeline derives fresh output rows from them.

pub mod atom;
pub mod interaction;
pub mod topology;
pub mod types;
