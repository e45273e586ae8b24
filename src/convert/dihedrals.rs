use super::error::{Error, Table};
use crate::model::interaction::DihedralRecord;
use crate::model::topology::{AtomDictionary, RemappedDihedral};
use log::info;

/// Rewrites fibril and peptide dihedrals into GROMOS numbering, each through
/// its own dataset's numbering map. Fibril records come first; order within
/// each dataset is preserved.
pub fn remap_dihedrals(
    fibril: &[DihedralRecord],
    fibril_dict: &AtomDictionary,
    peptide: &[DihedralRecord],
    peptide_dict: &AtomDictionary,
) -> Result<Vec<RemappedDihedral>, Error> {
    let mut out = Vec::with_capacity(fibril.len() + peptide.len());

    for record in fibril {
        out.push(remap_one(record, fibril_dict)?);
    }
    for record in peptide {
        out.push(remap_one(record, peptide_dict)?);
    }

    info!(
        "remapped {} fibril and {} peptide dihedrals",
        fibril.len(),
        peptide.len()
    );

    Ok(out)
}

fn remap_one(record: &DihedralRecord, dict: &AtomDictionary) -> Result<RemappedDihedral, Error> {
    let mut atoms = [0usize; 4];
    for (slot, serial) in record.atoms.iter().enumerate() {
        atoms[slot] = *dict
            .numbering
            .get(serial)
            .ok_or_else(|| Error::lookup(dict.dataset, Table::Numbering, *serial))?;
    }

    // The residue of the central bond's first atom labels the torsion.
    let central = record.atoms[1];
    let residue = dict
        .residues
        .get(&central)
        .cloned()
        .ok_or_else(|| Error::lookup(dict.dataset, Table::Residues, central))?;

    Ok(RemappedDihedral {
        dataset: dict.dataset,
        atoms,
        parameters: record.parameters.clone(),
        residue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::dictionary::build_dictionary;
    use crate::model::atom::AtomRecord;
    use crate::model::topology::AtomTypeTable;
    use crate::model::types::Dataset;

    fn listing(serials: &[usize]) -> Vec<AtomRecord> {
        serials
            .iter()
            .map(|&s| AtomRecord::new(s, format!("C{s}"), s as i32, "ALA", "CA"))
            .collect()
    }

    fn dihedral(atoms: [usize; 4]) -> DihedralRecord {
        DihedralRecord::new(atoms, vec!["9".into(), "180.0".into(), "0.5".into(), "2".into()])
    }

    fn dictionaries() -> (AtomDictionary, AtomDictionary) {
        let mut table = AtomTypeTable::new();
        let fib = build_dictionary(Dataset::Fibril, &listing(&[2, 4, 6, 8, 10]), &mut table, None).unwrap();
        let pep = build_dictionary(Dataset::Peptide, &listing(&[11, 12, 13, 14]), &mut table, None).unwrap();
        (fib, pep)
    }

    #[test]
    fn fibril_first_then_peptide_each_through_own_map() {
        let (fib, pep) = dictionaries();
        let fibril = vec![dihedral([2, 4, 6, 8]), dihedral([4, 6, 8, 10])];
        let peptide = vec![dihedral([11, 12, 13, 14])];

        let out = remap_dihedrals(&fibril, &fib, &peptide, &pep).unwrap();

        assert_eq!(out.len(), 3);
        assert_eq!(out[0].dataset, Dataset::Fibril);
        assert_eq!(out[0].atoms, [1, 2, 3, 4]);
        assert_eq!(out[1].atoms, [2, 3, 4, 5]);
        assert_eq!(out[2].dataset, Dataset::Peptide);
        assert_eq!(out[2].atoms, [1, 2, 3, 4]);
        assert_eq!(out[2].parameters, peptide[0].parameters);
    }

    #[test]
    fn every_output_index_resolves_through_origin_map() {
        let (fib, pep) = dictionaries();
        let fibril = vec![dihedral([10, 8, 6, 4])];
        let peptide = vec![dihedral([14, 13, 12, 11]), dihedral([11, 13, 12, 14])];

        let out = remap_dihedrals(&fibril, &fib, &peptide, &pep).unwrap();
        let inputs = fibril.iter().chain(peptide.iter());

        for (remapped, original) in out.iter().zip(inputs) {
            let dict = match remapped.dataset {
                Dataset::Fibril => &fib,
                Dataset::Peptide => &pep,
            };
            for (new, old) in remapped.atoms.iter().zip(original.atoms.iter()) {
                assert_eq!(dict.numbering[old], *new);
            }
        }
    }

    #[test]
    fn labels_with_central_residue() {
        let (fib, pep) = dictionaries();
        let out = remap_dihedrals(&[dihedral([2, 4, 6, 8])], &fib, &[], &pep).unwrap();
        assert_eq!(out[0].residue.to_string(), "ALA4");
    }

    #[test]
    fn missing_index_aborts_with_lookup_failure() {
        let mut table = AtomTypeTable::new();
        let serials: Vec<usize> = (1..=500).collect();
        let pep = build_dictionary(Dataset::Peptide, &listing(&serials), &mut table, None).unwrap();
        let fib = build_dictionary(Dataset::Fibril, &[], &mut table, None).unwrap();

        let peptide = vec![dihedral([1, 2, 3, 4]), dihedral([1, 2, 3, 9999])];
        let err = remap_dihedrals(&[], &fib, &peptide, &pep).unwrap_err();

        match err {
            Error::Lookup {
                dataset,
                table,
                serial,
            } => {
                assert_eq!(dataset, Dataset::Peptide);
                assert_eq!(table, Table::Numbering);
                assert_eq!(serial, 9999);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fibril_records_are_not_resolved_through_peptide_map() {
        let (fib, pep) = dictionaries();
        let err = remap_dihedrals(&[dihedral([11, 12, 13, 14])], &fib, &[], &pep).unwrap_err();
        assert!(matches!(
            err,
            Error::Lookup {
                dataset: Dataset::Fibril,
                serial: 11,
                ..
            }
        ));
    }
}
