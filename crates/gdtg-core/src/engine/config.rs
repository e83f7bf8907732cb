use thiserror::Error;

/// Cutoff set used when no overrides are given, mirroring the values the
/// GDT-graph_TS score is averaged over.
pub const DEFAULT_CUTOFFS: [usize; 4] = [25, 50, 100, 200];

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Parameters of a scoring run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Edit-distance cutoffs the final score is averaged over.
    pub cutoffs: Vec<usize>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            cutoffs: DEFAULT_CUTOFFS.to_vec(),
        }
    }
}

#[derive(Default)]
pub struct ScoringConfigBuilder {
    cutoffs: Option<Vec<usize>>,
}

impl ScoringConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cutoffs(mut self, cutoffs: impl IntoIterator<Item = usize>) -> Self {
        self.cutoffs = Some(cutoffs.into_iter().collect());
        self
    }

    pub fn build(self) -> Result<ScoringConfig, ConfigError> {
        let cutoffs = self.cutoffs.unwrap_or_else(|| DEFAULT_CUTOFFS.to_vec());
        if cutoffs.is_empty() {
            return Err(ConfigError::MissingParameter("cutoffs"));
        }
        Ok(ScoringConfig { cutoffs })
    }
}
