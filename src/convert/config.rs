use super::error::Error;
use crate::model::types::Element;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

const DEFAULT_CONFIG_TOML: &str = include_str!("../../resources/default.config.toml");

static DEFAULT_CONFIG: OnceLock<ConvertConfig> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    #[serde(default = "default_protein")]
    pub protein: String,
    #[serde(default)]
    pub inputs: InputFiles,
    #[serde(default)]
    pub outputs: OutputFiles,
    #[serde(default)]
    pub nonbonded: NonbondedConfig,
    /// Element assumed for atoms whose name and type match no known element
    /// (virtual sites, dummies). Unset means such atoms abort the run.
    #[serde(default)]
    pub fallback_element: Option<Element>,
}

fn default_protein() -> String {
    "amyloid".to_string()
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            protein: default_protein(),
            inputs: InputFiles::default(),
            outputs: OutputFiles::default(),
            nonbonded: NonbondedConfig::default(),
            fallback_element: None,
        }
    }
}

/// File names of the seven input listings, relative to the input directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputFiles {
    pub peptide_atoms: String,
    pub fibril_atoms: String,
    pub gromos_atoms: String,
    pub peptide_dihedrals: String,
    pub fibril_dihedrals: String,
    pub peptide_pairs: String,
    pub fibril_pairs: String,
}

impl Default for InputFiles {
    fn default() -> Self {
        Self {
            peptide_atoms: "peptide_atoms.top".into(),
            fibril_atoms: "fibril_atoms.top".into(),
            gromos_atoms: "gromos_atoms.top".into(),
            peptide_dihedrals: "peptide_dihedrals.top".into(),
            fibril_dihedrals: "fibril_dihedrals.top".into(),
            peptide_pairs: "peptide_pairs.top".into(),
            fibril_pairs: "fibril_pairs.top".into(),
        }
    }
}

/// File names of the five outputs, relative to the output directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    pub atomtypes: String,
    pub topology: String,
    pub dihedrals: String,
    pub nonbonded: String,
    pub acid_nonbonded: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            atomtypes: "atomtypes.atp".into(),
            topology: "topology_atoms.top".into(),
            dihedrals: "smog_to_gromos_dihedrals.top".into(),
            nonbonded: "ffnonbonded.itp".into(),
            acid_nonbonded: "acid_ffnonbonded.itp".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NonbondedConfig {
    #[serde(default)]
    pub c6: f64,
    #[serde(default = "default_c12")]
    pub default_c12: f64,
    #[serde(default = "default_acid_marker")]
    pub acid_marker: String,
    /// Keyed by element symbol (`C`, `N`, `Zn`, ...).
    #[serde(default)]
    pub c12: HashMap<String, f64>,
}

fn default_c12() -> f64 {
    4.937284e-06
}
fn default_acid_marker() -> String {
    "acid".to_string()
}

impl Default for NonbondedConfig {
    fn default() -> Self {
        Self {
            c6: 0.0,
            default_c12: default_c12(),
            acid_marker: default_acid_marker(),
            c12: HashMap::new(),
        }
    }
}

impl NonbondedConfig {
    pub fn c12_for(&self, element: Element) -> f64 {
        self.c12
            .get(element.symbol())
            .copied()
            .unwrap_or(self.default_c12)
    }
}

pub fn load_config(custom_toml: Option<&str>) -> Result<ConvertConfig, Error> {
    match custom_toml {
        Some(toml) => {
            let config: ConvertConfig = toml::from_str(toml)?;
            Ok(config)
        }
        None => Ok(get_default_config().clone()),
    }
}

pub fn get_default_config() -> &'static ConvertConfig {
    DEFAULT_CONFIG.get_or_init(|| {
        toml::from_str(DEFAULT_CONFIG_TOML)
            .expect("Failed to parse embedded default configuration. This is a library bug.")
    })
}
