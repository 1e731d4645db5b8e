//! Cluster phase retrieval.
//!
//! # Responsibilities
//! - One parameter-store read per invocation, no caching
//! - Surface missing/denied/unreachable as a typed retrieval error
//!
//! No default phase is ever inferred on failure: a controller that guesses
//! the phase could run the wrong health predicate and fail over onto a
//! half-initialized node.

pub mod ssm;

use thiserror::Error;

pub use ssm::SsmPhaseReader;

/// Error reading the phase parameter.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The store rejected or failed the read (missing key, access denied,
    /// unreachable endpoint).
    #[error("{0}")]
    Store(String),

    /// The key exists but carries no value.
    #[error("parameter {0} has no value")]
    EmptyParameter(String),
}

/// Source of the raw phase string. Implemented by the SSM adapter and by
/// in-memory fakes in tests.
pub trait PhaseReader {
    fn read_phase(
        &self,
    ) -> impl std::future::Future<Output = Result<String, RetrievalError>> + Send;
}

impl<T: PhaseReader + Sync> PhaseReader for &T {
    async fn read_phase(&self) -> Result<String, RetrievalError> {
        (**self).read_phase().await
    }
}
