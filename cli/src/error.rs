use thiserror::Error;
use token_engine::EngineError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    #[error("Invalid configuration format: {0}")]
    InvalidConfig(String),

    #[error("Invalid Pubkey format: {0}")]
    InvalidPubkey(String),

    #[error("No signer given: pass --signer or set `signer` in the config file")]
    MissingSigner,

    #[error("State file error: {0}")]
    StateError(String),

    #[error("IO Error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::IoError(e.to_string())
    }
}
