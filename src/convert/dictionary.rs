use super::error::Error;
use crate::model::atom::AtomRecord;
use crate::model::topology::{AtomDictionary, AtomTypeEntry, AtomTypeTable};
use crate::model::types::{Dataset, Element};
use log::{debug, info, warn};

/// Scans one atom listing.
///
/// New atom types are appended to the shared `table`; the returned dictionary
/// belongs to `dataset` alone. The GROMOS index of an atom is its 1-based
/// position in the listing. Per-serial entries are last-write-wins.
///
/// Atoms whose element cannot be guessed take `fallback` when one is given.
pub fn build_dictionary(
    dataset: Dataset,
    atoms: &[AtomRecord],
    table: &mut AtomTypeTable,
    fallback: Option<Element>,
) -> Result<AtomDictionary, Error> {
    let mut dict = AtomDictionary::new(dataset);
    let types_before = table.len();

    for (position, atom) in atoms.iter().enumerate() {
        if !table.contains(&atom.atom_type) {
            let element = element_of(atom, fallback)?;
            table.insert(AtomTypeEntry {
                name: atom.atom_type.clone(),
                element,
                mass: atom.mass.unwrap_or_else(|| element.atomic_mass()),
            });
            debug!(
                "{dataset}: new atom type '{}' ({element}) from atom {}",
                atom.atom_type, atom.serial
            );
        }

        dict.types.insert(atom.serial, atom.atom_type.clone());
        dict.residues.insert(atom.serial, atom.residue());
        dict.numbering.insert(atom.serial, position + 1);
    }

    info!(
        "{dataset} dictionary: {} atoms, {} new atom types ({} total)",
        atoms.len(),
        table.len() - types_before,
        table.len()
    );

    Ok(dict)
}

/// Element from the atom name, then the type name, then `fallback`.
pub(crate) fn element_of(atom: &AtomRecord, fallback: Option<Element>) -> Result<Element, Error> {
    let guessed = Element::guess(&atom.atom_name, &atom.residue_name)
        .or_else(|| Element::guess(&atom.atom_type, ""));

    match (guessed, fallback) {
        (Some(element), _) => Ok(element),
        (None, Some(element)) => {
            warn!(
                "atom {} ('{}', type '{}') has no recognizable element, using {element}",
                atom.serial, atom.atom_name, atom.atom_type
            );
            Ok(element)
        }
        (None, None) => Err(Error::UnknownElement {
            serial: atom.serial,
            atom_name: atom.atom_name.clone(),
            atom_type: atom.atom_type.clone(),
        }),
    }
}
