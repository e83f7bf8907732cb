use gdtgraph::core::io::bonds::BondFileError;
use gdtgraph::core::io::seqlen::SeqLenError;
use gdtgraph::engine::config::ConfigError;
use gdtgraph::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Failed to load bond listing '{path}': {source}", path = path.display())]
    BondFile {
        path: PathBuf,
        #[source]
        source: BondFileError,
    },

    #[error(transparent)]
    SeqLen(#[from] SeqLenError),

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
