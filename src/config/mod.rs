//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! Lambda environment variables
//!     → env.rs (read & parse)
//!     → Settings (validated, immutable)
//!     → passed by value into the controller and adapters
//! ```
//!
//! # Design Decisions
//! - Settings are read once per process and never mutated; a missing
//!   required variable fails the invocation before any probe runs
//! - Probe endpoints (ports, paths, scheme, cert validation) are all
//!   configuration, never hardcoded constants — the two deployed variants
//!   of this controller historically disagreed on defaults
//! - The phase parameter key is derived from the workspace name unless
//!   explicitly overridden

pub mod env;
pub mod schema;

pub use env::ConfigError;
pub use schema::{ProbeSettings, RecordSettings, Settings};
