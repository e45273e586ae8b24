use crate::io::error::Error;
use crate::model::topology::RemappedDihedral;
use std::io::Write;

pub fn write<W: Write>(
    mut writer: W,
    title: &str,
    dihedrals: &[RemappedDihedral],
) -> Result<(), Error> {
    writeln!(writer, "; {}", title)?;
    writeln!(writer, "[ dihedrals ]")?;
    writeln!(
        writer,
        "; {:>4}{:>6}{:>6}{:>6}{:>6}  parameters",
        "ai", "aj", "ak", "al", "func"
    )?;

    for dihedral in dihedrals {
        let [i, j, k, l] = dihedral.atoms;
        let mut line = format!("{:>6}{:>6}{:>6}{:>6}", i, j, k, l);
        format_parameters(&mut line, &dihedral.parameters);
        writeln!(writer, "{}  ; {} {}", line, dihedral.dataset, dihedral.residue)?;
    }

    writer.flush()?;
    Ok(())
}

/// Function type in a six-wide column, coefficients right-aligned after it.
pub(crate) fn format_parameters(line: &mut String, parameters: &[String]) {
    if let Some((func, coefficients)) = parameters.split_first() {
        line.push_str(&format!("{:>6}", func));
        for c in coefficients {
            line.push_str(&format!(" {:>13}", c));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::ResidueId;
    use crate::model::types::Dataset;

    #[test]
    fn writes_indices_parameters_and_origin() {
        let dihedrals = vec![RemappedDihedral {
            dataset: Dataset::Fibril,
            atoms: [5, 7, 9, 12],
            parameters: vec!["9".into(), "-1.3010e+02".into(), "1.000e-01".into(), "1".into()],
            residue: ResidueId {
                name: "ALA".into(),
                index: 2,
            },
        }];

        let mut buf = Vec::new();
        write(&mut buf, "dihedrals", &dihedrals).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let row = text.lines().nth(3).unwrap();

        assert!(row.starts_with("     5     7     9    12     9   -1.3010e+02"));
        assert!(row.ends_with("  ; fibril ALA2"));
    }

    #[test]
    fn format_parameters_handles_empty() {
        let mut line = String::from("x");
        format_parameters(&mut line, &[]);
        assert_eq!(line, "x");
    }
}
