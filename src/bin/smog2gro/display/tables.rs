use std::io::{self, Write};

use smog2gro::Conversion;
use smog2gro::convert::OutputFiles;

use crate::util::text::{truncate, wrap};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_summary(conversion: &Conversion) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Atom Types", conversion.atom_types.len().to_string()),
        ("Fibril Atoms", conversion.fibril.numbering.len().to_string()),
        ("Peptide Atoms", conversion.peptide.numbering.len().to_string()),
        ("Topology Atoms", conversion.topology.len().to_string()),
        ("Dihedrals", conversion.dihedrals.len().to_string()),
        ("Pairs (neutral)", conversion.pairs.neutral.len().to_string()),
        ("Pairs (acidic)", conversion.pairs.acidic.len().to_string()),
    ];

    print_kv_table(&mut out, "Conversion Summary", &rows);
}

/// Printed after every successful run, quiet or not.
pub fn print_mass_notice(outputs: &OutputFiles) {
    let mut stderr = io::stderr().lock();

    let msg = format!(
        "Remember to change the masses in {} and {}: the hydrogens are explicit.",
        outputs.atomtypes, outputs.nonbonded
    );

    let _ = writeln!(stderr);
    for (i, line) in wrap(&msg, BOX_INNER_WIDTH).iter().enumerate() {
        let marker = if i == 0 { "\x1b[33m!\x1b[0m" } else { " " };
        let _ = writeln!(stderr, "  {} {}", marker, line);
    }
    let _ = writeln!(stderr);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);
    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{left}{}{mid}{}{right}",
            INDENT,
            "─".repeat(key_w + 2),
            "─".repeat(val_w + 2)
        )
    };

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT,
        "Metric",
        "Value",
        key_w = key_w,
        val_w = val_w
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
    let _ = writeln!(out);
}
