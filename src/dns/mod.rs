//! DNS record publication.
//!
//! # Responsibilities
//! - UPSERT one A-record to the selected address, idempotently
//! - Keep the TTL short so clients observe a failover within one TTL
//!
//! Publication happens only after a candidate is fully selected; there is
//! no partial update to roll back. Backend failures are surfaced verbatim
//! and never retried inside the invocation.

pub mod route53;

use thiserror::Error;

pub use route53::Route53Publisher;

use crate::config::RecordSettings;

/// The DNS backend rejected or failed the mutation.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The change batch could not be constructed (malformed record data).
    #[error("invalid change batch: {0}")]
    InvalidChange(String),

    /// The backend returned an error (auth, rate limit, bad zone).
    #[error("{0}")]
    Backend(String),
}

/// Applies the record mutation. Implemented by the Route 53 adapter and by
/// recording fakes in tests.
pub trait DnsPublisher {
    /// Upsert `record` to point at `address`. `comment` annotates the
    /// change for the zone's audit trail.
    fn publish(
        &self,
        record: &RecordSettings,
        address: &str,
        comment: &str,
    ) -> impl std::future::Future<Output = Result<(), PublishError>> + Send;
}

// Shared publishers (tests hold on to their recording fakes) delegate
// through the reference.
impl<T: DnsPublisher + Sync> DnsPublisher for &T {
    async fn publish(
        &self,
        record: &RecordSettings,
        address: &str,
        comment: &str,
    ) -> Result<(), PublishError> {
        (**self).publish(record, address, comment).await
    }
}
