use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "smog2gro",
    about = "Convert SMOG force-field listings into GROMOS topology fragments",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    /// Directory holding the seven input listings
    #[arg(short, long = "input-dir", value_name = "DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Directory the five outputs are written to (created if missing)
    #[arg(short, long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Configuration TOML replacing the built-in defaults
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_uses_current_directory() {
        let cli = Cli::try_parse_from(["smog2gro"]).unwrap();
        assert_eq!(cli.input_dir, PathBuf::from("."));
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(cli.config.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn short_flags_parse() {
        let cli =
            Cli::try_parse_from(["smog2gro", "-i", "in", "-o", "out", "-c", "ff.toml", "-q"])
                .unwrap();
        assert_eq!(cli.input_dir, PathBuf::from("in"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.config, Some(PathBuf::from("ff.toml")));
        assert!(cli.quiet);
    }
}
