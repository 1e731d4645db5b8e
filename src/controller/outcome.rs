//! Invocation outcome and the failure taxonomy that feeds it.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::dns::PublishError;
use crate::params::RetrievalError;
use crate::phase::{Phase, UnknownPhase};

/// The sole return value of one invocation, serialized back to the caller.
///
/// Wire shape matches what downstream automation already consumes:
/// `{"status":"success","phase":...,"selected_ip":...}` or
/// `{"status":"error","message":...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Success {
        phase: Phase,
        selected_ip: String,
    },
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        phase: Option<Phase>,
        message: String,
    },
}

/// Terminal failure of one invocation. Never retried internally; the
/// scheduler that invokes the controller owns retry-on-schedule.
#[derive(Debug, Error)]
pub enum FailoverError {
    /// Environment configuration is incomplete or malformed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The phase parameter could not be read.
    #[error("Failed to get cluster phase parameter: {0}")]
    Retrieval(#[from] RetrievalError),

    /// The phase parameter holds a value outside the recognized set.
    #[error(transparent)]
    UnknownPhase(#[from] UnknownPhase),

    /// Every candidate failed its probe for this phase.
    #[error("No healthy nodes found during {phase}")]
    NoHealthyCandidate { phase: Phase },

    /// A candidate was selected but the DNS mutation failed.
    #[error("Route 53 update failed: {source}")]
    Publish { phase: Phase, source: PublishError },
}

impl FailoverError {
    /// The phase, where the failure happened late enough to know it.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            FailoverError::NoHealthyCandidate { phase } => Some(*phase),
            FailoverError::Publish { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}

impl From<FailoverError> for Outcome {
    fn from(error: FailoverError) -> Self {
        Outcome::Error {
            phase: error.phase(),
            message: error.to_string(),
        }
    }
}
