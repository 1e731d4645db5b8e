//! Health probing subsystem.
//!
//! # Data Flow
//! ```text
//! decider asks: is candidate X healthy for phase P?
//!     → endpoint.rs maps P to a probe endpoint
//!         preinit  → TCP connect to candidate:health_port
//!         postinit → GET {scheme}://candidate:liveness_port{path}
//!     → probe.rs performs one attempt, classifies the failure
//!     → HealthVerdict (Ok(detail) | Err(typed failure))
//! ```
//!
//! # Design Decisions
//! - One attempt per candidate per invocation; no retries, no caching
//! - The phase → endpoint mapping is a declarative table, so a future
//!   phase is a new table row rather than a new branch in probe logic
//! - Failures are typed (timeout vs refused vs TLS vs bad status) instead
//!   of a bare boolean, but all of them mean "unhealthy" to the decider

pub mod endpoint;
pub mod probe;

pub use endpoint::ProbeEndpoint;
pub use probe::{EndpointProbe, HealthProbe, HealthVerdict, ProbeFailure, ProbeOk};
