use anyhow::{Context, Result};
use log::debug;

use smog2gro::convert::InputFiles;
use smog2gro::{Inputs, RenderedFile, convert};

use crate::cli::Cli;
use crate::display::{Context as DisplayContext, Progress, print_mass_notice, print_summary};
use crate::io::{read_config, read_inputs, write_outputs};

const TOTAL_STEPS: u8 = 4;

/// Reads every listing, converts, renders all outputs in memory, then writes
/// them. A failure at any point leaves the output directory untouched.
pub fn run_convert(cli: Cli, ctx: DisplayContext) -> Result<()> {
    let config = read_config(cli.config.as_deref())?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading listings");
    let inputs = read_inputs(
        &cli.input_dir,
        &config.inputs,
        &config.nonbonded.acid_marker,
    )?;
    progress.complete_step(&build_read_substeps(&config.inputs, &inputs));

    progress.step("Converting SMOG numbering to GROMOS");
    let conversion = convert(&inputs, &config).context("Conversion failed")?;
    let phases: Vec<String> = conversion.phases.iter().map(ToString::to_string).collect();
    progress.complete_step(&phases);

    if ctx.interactive {
        print_summary(&conversion);
    }

    progress.step("Rendering outputs");
    let rendered = conversion
        .render(&config)
        .context("Failed to render outputs")?;
    progress.complete_step(&build_render_substeps(&rendered));

    progress.step("Writing outputs");
    let written = write_outputs(&cli.output_dir, &rendered)?;
    let written: Vec<String> = written
        .iter()
        .map(|path| {
            debug!("wrote {}", path.display());
            path.display().to_string()
        })
        .collect();
    progress.complete_step(&written);

    progress.finish(written.len());
    print_mass_notice(&config.outputs);

    Ok(())
}

fn build_read_substeps(files: &InputFiles, inputs: &Inputs) -> Vec<String> {
    let rows = [
        (&files.fibril_atoms, inputs.fibril_atoms.len(), "atoms"),
        (&files.peptide_atoms, inputs.peptide_atoms.len(), "atoms"),
        (&files.gromos_atoms, inputs.gromos_atoms.len(), "atoms"),
        (&files.fibril_dihedrals, inputs.fibril_dihedrals.len(), "dihedrals"),
        (&files.peptide_dihedrals, inputs.peptide_dihedrals.len(), "dihedrals"),
        (&files.fibril_pairs, inputs.fibril_pairs.len(), "pairs"),
        (&files.peptide_pairs, inputs.peptide_pairs.len(), "pairs"),
    ];

    rows.iter()
        .map(|(name, count, what)| format!("{name}: {count} {what}"))
        .collect()
}

fn build_render_substeps(rendered: &[RenderedFile]) -> Vec<String> {
    rendered
        .iter()
        .map(|file| {
            format!(
                "{} → {} ({} bytes)",
                file.kind,
                file.file_name,
                file.contents.len()
            )
        })
        .collect()
}
