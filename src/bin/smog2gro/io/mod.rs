use std::fs::{self, File};
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::warn;
use tempfile::NamedTempFile;

use smog2gro::convert::InputFiles;
use smog2gro::{
    AtomRecord, ConvertConfig, DihedralRecord, Inputs, PairRecord, RenderedFile, io as listing,
    load_config,
};

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Loads the user configuration, or the built-in defaults when none is given.
pub fn read_config(path: Option<&Path>) -> Result<ConvertConfig> {
    let Some(path) = path else {
        return Ok(load_config(None)?);
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration: {}", path.display()))?;
    load_config(Some(&text))
        .with_context(|| format!("Invalid configuration: {}", path.display()))
}

/// Reads all seven listings from `dir`.
pub fn read_inputs(dir: &Path, files: &InputFiles, acid_marker: &str) -> Result<Inputs> {
    let atoms = |name: &str| -> Result<Vec<AtomRecord>> {
        let path = dir.join(name);
        listing::read_atoms(open_input(&path)?)
            .with_context(|| format!("Failed to read atom listing: {}", path.display()))
    };
    let dihedrals = |name: &str| -> Result<Vec<DihedralRecord>> {
        let path = dir.join(name);
        listing::read_dihedrals(open_input(&path)?)
            .with_context(|| format!("Failed to read dihedral listing: {}", path.display()))
    };
    let pairs = |name: &str| -> Result<Vec<PairRecord>> {
        let path = dir.join(name);
        listing::read_pairs(open_input(&path)?, acid_marker)
            .with_context(|| format!("Failed to read pair listing: {}", path.display()))
    };

    Ok(Inputs {
        peptide_atoms: atoms(&files.peptide_atoms)?,
        fibril_atoms: atoms(&files.fibril_atoms)?,
        gromos_atoms: atoms(&files.gromos_atoms)?,
        peptide_dihedrals: dihedrals(&files.peptide_dihedrals)?,
        fibril_dihedrals: dihedrals(&files.fibril_dihedrals)?,
        peptide_pairs: pairs(&files.peptide_pairs)?,
        fibril_pairs: pairs(&files.fibril_pairs)?,
    })
}

/// Writes already rendered outputs into `dir`, creating it if needed.
///
/// Each file is staged as a hidden temporary in `dir` and only renamed into
/// place once every file is staged. On failure the temporaries are removed
/// along with any output already renamed, so `dir` never holds a partial set.
pub fn write_outputs(dir: &Path, files: &[RenderedFile]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut staged: Vec<(NamedTempFile, PathBuf)> = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.file_name);
        let mut tmp = tempfile::Builder::new()
            .prefix(".smog2gro-")
            .tempfile_in(dir)
            .with_context(|| format!("Failed to stage output file: {}", path.display()))?;
        tmp.write_all(&file.contents)
            .and_then(|()| tmp.flush())
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        staged.push((tmp, path));
    }

    if let Some((_, path)) = staged.iter().find(|(_, path)| path.is_dir()) {
        bail!(
            "Failed to create output file: {} is a directory",
            path.display()
        );
    }

    let mut written: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for (tmp, path) in staged {
        if let Err(err) = tmp.persist(&path) {
            roll_back(&written);
            return Err(err.error)
                .with_context(|| format!("Failed to create output file: {}", path.display()));
        }
        written.push(path);
    }

    Ok(written)
}

fn roll_back(written: &[PathBuf]) {
    for path in written {
        if let Err(e) = fs::remove_file(path) {
            warn!("could not remove {} after a failed write: {e}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smog2gro::OutputKind;
    use tempfile::TempDir;

    fn rendered(kind: OutputKind, name: &str, contents: &str) -> RenderedFile {
        RenderedFile {
            kind,
            file_name: name.to_string(),
            contents: contents.as_bytes().to_vec(),
        }
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn writes_every_file_and_leaves_no_temporaries() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("nested").join("out");
        let files = [
            rendered(OutputKind::AtomTypes, "atomtypes.atp", "; types\n"),
            rendered(OutputKind::Nonbonded, "ffnonbonded.itp", "[ atomtypes ]\n"),
        ];

        let written = write_outputs(&out, &files).unwrap();

        assert_eq!(written, vec![out.join("atomtypes.atp"), out.join("ffnonbonded.itp")]);
        assert_eq!(entries(&out), vec!["atomtypes.atp", "ffnonbonded.itp"]);
        assert_eq!(fs::read_to_string(&written[0]).unwrap(), "; types\n");
    }

    #[test]
    fn blocked_target_leaves_existing_outputs_untouched() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path();
        fs::write(out.join("atomtypes.atp"), "previous run\n").unwrap();
        fs::create_dir(out.join("ffnonbonded.itp")).unwrap();
        let files = [
            rendered(OutputKind::AtomTypes, "atomtypes.atp", "new run\n"),
            rendered(OutputKind::Nonbonded, "ffnonbonded.itp", "[ atomtypes ]\n"),
        ];

        let err = write_outputs(out, &files).unwrap_err();

        assert!(err.to_string().contains("ffnonbonded.itp"));
        assert_eq!(entries(out), vec!["atomtypes.atp", "ffnonbonded.itp"]);
        assert_eq!(
            fs::read_to_string(out.join("atomtypes.atp")).unwrap(),
            "previous run\n"
        );
    }
}
