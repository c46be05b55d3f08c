//! Application layer errors

use thiserror::Error;

/// Top-level conversion errors, fatal to the run
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a timestamped chunk is skipped during parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("No `: ` separator between sender and content")]
    MissingSenderDelimiter,
}

/// Rendering errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Need at least two distinct senders for alignment, found {found}")]
    InsufficientParticipants { found: usize },
}

/// Media resolution errors
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Transcoder `{command}` exited with {status}")]
    TranscoderFailure {
        command: String,
        status: std::process::ExitStatus,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),
}
