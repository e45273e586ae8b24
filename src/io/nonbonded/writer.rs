use crate::convert::NonbondedConfig;
use crate::io::dihedrals::writer::format_parameters;
use crate::io::{error::Error, util::sci};
use crate::model::topology::{AtomTypeTable, MergedPair};
use std::io::Write;

const PTYPE: &str = "A";

pub fn write<W: Write>(
    mut writer: W,
    title: &str,
    types: &AtomTypeTable,
    pairs: &[MergedPair],
    params: &NonbondedConfig,
) -> Result<(), Error> {
    writeln!(writer, "; {}", title)?;
    writeln!(writer, "[ atomtypes ]")?;
    writeln!(
        writer,
        "; {:<8} {:>6} {:>10} {:>8} {:>5} {:>13} {:>13}",
        "name", "at.num", "mass", "charge", "ptype", "c6", "c12"
    )?;

    for entry in types.iter() {
        writeln!(
            writer,
            "  {:<8} {:>6} {:>10.5} {:>8.3} {:>5} {:>13} {:>13}",
            entry.name,
            entry.element.atomic_number(),
            entry.mass,
            0.0,
            PTYPE,
            sci(params.c6, 6),
            sci(params.c12_for(entry.element), 6),
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "[ nonbond_params ]")?;
    writeln!(writer, "; {:<8} {:<10} {:>6}  parameters", "i", "j", "func")?;

    for pair in pairs {
        let mut line = format!("  {:<8} {:<10}", pair.type_i, pair.type_j);
        format_parameters(&mut line, &pair.parameters);
        writeln!(writer, "{}  ; {}", line, pair.dataset)?;
    }

    writer.flush()?;
    Ok(())
}
