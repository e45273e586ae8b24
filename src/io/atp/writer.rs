use crate::io::error::Error;
use crate::model::topology::AtomTypeTable;
use std::io::Write;

pub fn write<W: Write>(mut writer: W, title: &str, types: &AtomTypeTable) -> Result<(), Error> {
    writeln!(writer, "; {}", title)?;
    writeln!(writer, "; {:<10} {:>10}", "name", "mass")?;

    for entry in types.iter() {
        writeln!(writer, "  {:<10} {:>10.5}", entry.name, entry.mass)?;
    }

    writer.flush()?;
    Ok(())
}
