use crate::io::{Listing, error::Error, util};
use crate::model::atom::AtomRecord;
use std::io::BufRead;

const MIN_COLUMNS: usize = 6;

pub fn read<R: BufRead>(reader: R) -> Result<Vec<AtomRecord>, Error> {
    let lines = util::collect_data_lines(reader)?;
    let mut atoms = Vec::with_capacity(lines.len());

    for line in &lines {
        line.require_columns(Listing::Atoms, MIN_COLUMNS)?;

        let serial = line.field::<usize>(Listing::Atoms, 0, "serial number")?;
        let residue_index = line.field::<i32>(Listing::Atoms, 2, "residue index")?;
        let charge_group = line.field::<usize>(Listing::Atoms, 5, "charge group")?;

        let charge = match line.fields.get(6) {
            Some(_) => line.field::<f64>(Listing::Atoms, 6, "charge")?,
            None => 0.0,
        };
        let mass = match line.fields.get(7) {
            Some(_) => Some(line.field::<f64>(Listing::Atoms, 7, "mass")?),
            None => None,
        };

        atoms.push(AtomRecord {
            serial,
            atom_type: line.fields[1].clone(),
            residue_index,
            residue_name: line.fields[3].clone(),
            atom_name: line.fields[4].clone(),
            charge_group,
            charge,
            mass,
        });
    }

    Ok(atoms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_full_and_short_rows() {
        let text = "\
[ atoms ]
;  nr  type  resnr residue  atom  cgnr  charge   mass
    1  NL      1    MET     N      1   0.000  14.0067
    2  CH1     1    MET     CA     2
";
        let atoms = read(Cursor::new(text)).unwrap();

        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[0].serial, 1);
        assert_eq!(atoms[0].atom_type, "NL");
        assert_eq!(atoms[0].residue_name, "MET");
        assert_eq!(atoms[0].atom_name, "N");
        assert_eq!(atoms[0].mass, Some(14.0067));
        assert_eq!(atoms[1].charge, 0.0);
        assert_eq!(atoms[1].mass, None);
        assert_eq!(atoms[1].charge_group, 2);
    }

    #[test]
    fn rejects_non_numeric_serial() {
        let err = read(Cursor::new("one CA 1 ALA CA 1\n")).unwrap_err();
        match err {
            Error::Parse { listing, line, .. } => {
                assert_eq!(listing, Listing::Atoms);
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_truncated_rows() {
        let err = read(Cursor::new("1 CA 1 ALA\n")).unwrap_err();
        assert!(err.to_string().contains("expected at least 6 columns, found 4"));
    }

    #[test]
    fn rejects_malformed_mass() {
        let err = read(Cursor::new("1 CA 1 ALA CA 1 0.0 heavy\n")).unwrap_err();
        assert!(err.to_string().contains("invalid mass 'heavy'"));
    }
}
