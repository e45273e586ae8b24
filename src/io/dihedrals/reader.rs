use crate::io::{Listing, error::Error, util};
use crate::model::interaction::DihedralRecord;
use std::io::BufRead;

pub fn read<R: BufRead>(reader: R) -> Result<Vec<DihedralRecord>, Error> {
    let lines = util::collect_data_lines(reader)?;
    let mut dihedrals = Vec::with_capacity(lines.len());

    for line in &lines {
        line.require_columns(Listing::Dihedrals, 5)?;

        let mut atoms = [0usize; 4];
        for (slot, atom) in atoms.iter_mut().enumerate() {
            *atom = line.field::<usize>(Listing::Dihedrals, slot, "atom index")?;
        }
        line.field::<u32>(Listing::Dihedrals, 4, "function type")?;

        dihedrals.push(DihedralRecord::new(atoms, line.rest(4)));
    }

    Ok(dihedrals)
}
