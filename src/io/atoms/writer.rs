use crate::io::error::Error;
use crate::model::topology::TopologyAtom;
use std::io::Write;

pub fn write<W: Write>(mut writer: W, title: &str, atoms: &[TopologyAtom]) -> Result<(), Error> {
    writeln!(writer, "; {}", title)?;
    writeln!(writer, "[ atoms ]")?;
    writeln!(
        writer,
        "; {:>4} {:>10} {:>6} {:>6} {:>6} {:>6} {:>10} {:>10}",
        "nr", "type", "resnr", "resid", "atom", "cgnr", "charge", "mass"
    )?;

    for atom in atoms {
        writeln!(
            writer,
            "{:>6} {:>10} {:>6} {:>6} {:>6} {:>6} {:>10.6} {:>10.5}",
            atom.serial,
            atom.atom_type,
            atom.residue_index,
            atom.residue_name,
            atom.atom_name,
            atom.charge_group,
            atom.charge,
            atom.mass,
        )?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_aligned_atom_rows() {
        let atoms = vec![TopologyAtom {
            serial: 1,
            atom_type: "NL".into(),
            residue_index: 1,
            residue_name: "MET".into(),
            atom_name: "N".into(),
            charge_group: 1,
            charge: 0.129,
            mass: 14.0067,
        }];

        let mut buf = Vec::new();
        write(&mut buf, "topology", &atoms).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "; topology");
        assert_eq!(lines[1], "[ atoms ]");
        assert_eq!(
            lines[3],
            "     1         NL      1    MET      N      1   0.129000   14.00670"
        );
    }
}
