//! Error types for scenario setup and agent operations.
//!
//! Configuration problems are reported before any agent is created; agent
//! errors cover operations addressed at a specific registry entry.

use crate::types::{AgentId, CellKind};
use thiserror::Error;

/// Result type for cicatrix operations.
pub type Result<T> = std::result::Result<T, CicatrixError>;

/// Errors that can occur while setting up or driving a scenario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CicatrixError {
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Agent-related errors.
    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),
    /// The population phase already ran for this tissue.
    #[error("Population already generated ({population} agents present)")]
    AlreadyPopulated { population: usize },
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CicatrixError {
    fn from(e: serde_json::Error) -> Self {
        CicatrixError::Serialization(e.to_string())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid value.
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
    /// Sampling bounds with `min > max` or non-finite ends.
    #[error("Invalid bounds: min {min} must be finite and not exceed max {max}")]
    InvalidBounds { min: f64, max: f64 },
    /// Substance name that is empty or contains characters outside `[A-Za-z0-9._-]`.
    #[error("Malformed substance name: {0:?}")]
    MalformedSubstanceName(String),
    /// Substance referenced by the scenario but missing from the substance table.
    #[error("Substance not defined: {0}")]
    UndefinedSubstance(String),
    /// The same substance name appears twice in the substance table.
    #[error("Substance defined more than once: {0}")]
    DuplicateSubstance(String),
}

/// Agent-related errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    /// Agent not found.
    #[error("Agent not found: {0}")]
    NotFound(AgentId),
    /// The agent's role does not support the requested operation.
    #[error("{operation} is not supported on {id} ({kind})")]
    Unsupported {
        id: AgentId,
        kind: CellKind,
        operation: &'static str,
    },
}

// Convenience constructors
impl CicatrixError {
    pub fn invalid_config(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        CicatrixError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        CicatrixError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    pub fn agent_not_found(id: AgentId) -> Self {
        CicatrixError::Agent(AgentError::NotFound(id))
    }

    /// Whether this error was raised by configuration validation.
    pub fn is_config(&self) -> bool {
        matches!(self, CicatrixError::Config(_))
    }
}
