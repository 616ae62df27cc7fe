/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation errors surfaced to the hosting request layer.
///
/// Computation is deterministic and pure: no retries are meaningful and no
/// partial results are produced. Either a full report comes back or one of
/// these is signaled.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Invalid input: {0}")]
    #[diagnostic(
        code(sim::invalid_input),
        help("A required field is missing, ill-typed, or semantically invalid (empty workload, non-positive size/frames/burst).")
    )]
    InvalidInput(String),

    #[error("Unsupported {category} algorithm '{name}'")]
    #[diagnostic(
        code(sim::unsupported_algorithm),
        help("The algorithm name is not in the known set for this simulation category.")
    )]
    UnsupportedAlgorithm { category: String, name: String },

    #[error("Internal error: {0}")]
    #[diagnostic(
        code(sim::internal_error),
        help("An unexpected internal fault occurred. Please report this issue.")
    )]
    Internal(String),
}

impl SimulationError {
    /// Missing or null required request field
    pub fn missing_field(field: &str) -> Self {
        SimulationError::InvalidInput(format!("missing required field `{}`", field))
    }

    /// Unknown algorithm for a simulation category
    pub fn unsupported(category: &str, name: &str) -> Self {
        SimulationError::UnsupportedAlgorithm {
            category: category.to_string(),
            name: name.to_string(),
        }
    }
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
