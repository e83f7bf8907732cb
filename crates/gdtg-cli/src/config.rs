use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Optional TOML run configuration; explicit command-line flags take
/// precedence over its values.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct RunFile {
    /// Edit-distance cutoffs for the `score` subcommand.
    pub cutoffs: Option<Vec<usize>>,
    /// Endpoint tolerance half-width for the `compare` subcommand.
    #[serde(rename = "half-width")]
    pub half_width: Option<u32>,
}

impl RunFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: RunFile = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "Loaded run-configuration file.");
        Ok(file)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_file_parses_both_fields() {
        let file: RunFile =
            toml::from_str("cutoffs = [10, 20]\nhalf-width = 3\n").unwrap();
        assert_eq!(file.cutoffs, Some(vec![10, 20]));
        assert_eq!(file.half_width, Some(3));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<RunFile>("window = 4\n").is_err());
    }
}
