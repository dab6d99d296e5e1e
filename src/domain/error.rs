use std::fmt;

use thiserror::Error;

/// A single key that could not be deleted during a scoped clear
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFailure {
    pub key: String,
    pub message: String,
}

impl KeyFailure {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for KeyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key, self.message)
    }
}

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Failed to deserialize value for key '{key}': {message}")]
    Deserialization { key: String, message: String },

    #[error("Failed to serialize value: {message}")]
    Serialization { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Storage quota exceeded: {requested} bytes requested, quota is {quota} bytes")]
    QuotaExceeded { requested: usize, quota: usize },

    #[error(
        "Failed to clear {} of {} cache entries: {}",
        .failures.len(),
        .attempted,
        format_failures(.failures)
    )]
    PartialClear {
        attempted: usize,
        failures: Vec<KeyFailure>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Shell error: {message}")]
    Shell { message: String },
}

fn format_failures(failures: &[KeyFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    pub fn deserialization(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Deserialization {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn quota_exceeded(requested: usize, quota: usize) -> Self {
        Self::QuotaExceeded { requested, quota }
    }

    pub fn partial_clear(attempted: usize, failures: Vec<KeyFailure>) -> Self {
        Self::PartialClear {
            attempted,
            failures,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn shell(message: impl Into<String>) -> Self {
        Self::Shell {
            message: message.into(),
        }
    }

    /// Keys whose deletion failed, if this is a partial clear
    pub fn failed_keys(&self) -> Vec<&str> {
        match self {
            Self::PartialClear { failures, .. } => {
                failures.iter().map(|f| f.key.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}
