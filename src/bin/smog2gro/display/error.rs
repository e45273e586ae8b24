use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

const INNER: usize = 62;

/// Prints `err`, its cause chain, and any hints in a boxed panel on stderr.
pub fn print_error(err: &Error) {
    let mut panel = Panel::new();

    panel.heading("✗ Error");
    panel.divider();
    panel.wrapped("", &err.to_string());

    for cause in err.chain().skip(1) {
        panel.divider();
        panel.heading("Caused by:");
        panel.wrapped("  ", &cause.to_string());
    }

    if let Some(hints) = HintCollector::collect(err) {
        panel.divider();
        panel.heading("Hints:");
        for hint in hints {
            panel.bullet(&hint);
        }
    }

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔{}╗", "═".repeat(INNER));
    for line in panel.lines {
        let _ = writeln!(stderr, "{line}");
    }
    let _ = writeln!(stderr, "   ╚{}╝", "═".repeat(INNER));
    let _ = writeln!(stderr);
}

struct Panel {
    lines: Vec<String>,
}

impl Panel {
    fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn row(&mut self, text: &str) {
        let width = INNER - 3;
        self.lines.push(format!("   ║  {text:<width$} ║"));
    }

    fn heading(&mut self, text: &str) {
        self.row(text);
    }

    fn divider(&mut self) {
        self.lines.push(format!("   ╟{}╢", "─".repeat(INNER)));
    }

    fn wrapped(&mut self, indent: &str, text: &str) {
        for line in wrap(text, INNER - 3 - indent.len()) {
            self.row(&format!("{indent}{line}"));
        }
    }

    fn bullet(&mut self, text: &str) {
        let wrapped = wrap(text, INNER - 7);
        for (i, line) in wrapped.iter().enumerate() {
            let marker = if i == 0 { "  • " } else { "    " };
            self.row(&format!("{marker}{line}"));
        }
    }
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_io_hints(err);
        collector.collect_convert_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use smog2gro::io::Error as IoError;

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.mark_typed();

        match io_err {
            IoError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            IoError::Parse { listing, line, .. } => {
                self.add(format!(
                    "Parser stopped at line {} of a {} listing",
                    line, listing
                ));
                self.add("Inspect the file around that line for malformed entries");
                self.add_listing_specific_hints(*listing);
            }
        }
    }

    fn add_listing_specific_hints(&mut self, listing: smog2gro::io::Listing) {
        use smog2gro::io::Listing;

        match listing {
            Listing::Atoms => {
                self.add("Atoms: expected `nr type resnr residue atom cgnr [charge [mass]]`");
                self.add("Atoms: nr, resnr and cgnr must be integers");
            }

            Listing::Dihedrals => {
                self.add("Dihedrals: expected `ai aj ak al funct [coefficients...]`");
                self.add("Dihedrals: the four atom indices and funct must be integers");
            }

            Listing::Pairs => {
                self.add("Pairs: expected `ai aj funct [coefficients...] [; acid]`");
                self.add("Pairs: the two atom indices and funct must be integers");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
                self.add("Ensure you have read/write access as needed");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid or corrupt data");
                self.add("Listings must be UTF-8 text");
            }

            ErrorKind::UnexpectedEof => {
                self.add("Unexpected end of file encountered");
                self.add("The file may be truncated or incomplete");
            }

            ErrorKind::WriteZero => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_convert_hints(&mut self, err: &Error) {
        use smog2gro::ConvertError;
        use smog2gro::convert::Table;

        let Some(convert_err) = err.downcast_ref::<ConvertError>() else {
            return;
        };

        self.mark_typed();

        match convert_err {
            ConvertError::Config(_) => {
                self.add("Configuration file has invalid TOML syntax or values");
                self.add("Check for missing quotes, brackets, or misspelled keys");
                self.add("Omit --config to fall back to the built-in defaults");
            }

            ConvertError::Lookup {
                dataset,
                table,
                serial,
            } => {
                self.add(format!(
                    "Atom {} is referenced but absent from the {} atom listing",
                    serial, dataset
                ));
                match table {
                    Table::Numbering | Table::Residues => {
                        self.add(format!(
                            "Check that the {} dihedral listing matches its atom listing",
                            dataset
                        ));
                    }
                    Table::AtomTypes => {
                        self.add(format!(
                            "Check that the {} pair listing matches its atom listing",
                            dataset
                        ));
                    }
                }
                self.add("Verify the [inputs] file names in the configuration");
            }

            ConvertError::UnknownElement { atom_name, .. } => {
                self.add(format!(
                    "No element could be guessed from atom name '{}'",
                    atom_name
                ));
                self.add("Atom names should start with an element symbol (H, C, N, O, S, ...)");
                self.add(
                    "For virtual sites or dummy atoms, set `fallback_element` (e.g. \"H\") in a --config file",
                );
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Use -i/--input-dir to point at the listing directory");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            self.add("Ensure you have the required access rights");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string().to_lowercase())
        .collect::<Vec<_>>()
        .join("\n")
}
