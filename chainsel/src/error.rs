//! Unified error types for chainsel.

use thiserror::Error;

/// Top-level error type for the chainsel application.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be resolved, read, or parsed.
    #[error("config: {0}")]
    Config(String),

    /// Chain registry construction or lookup failed.
    #[error("chain: {0}")]
    Chain(String),
}

impl Error {
    /// Configuration error from a message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Configuration error from a message and an underlying cause.
    pub fn config_with(msg: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Config(format!("{}: {err}", msg.into()))
    }

    /// Chain error from a message.
    pub fn chain(msg: impl Into<String>) -> Self {
        Self::Chain(msg.into())
    }

    /// Chain error from a message and an underlying cause.
    pub fn chain_with(msg: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Chain(format!("{}: {err}", msg.into()))
    }
}
