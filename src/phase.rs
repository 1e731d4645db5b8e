//! Cluster lifecycle phase.
//!
//! The phase is a single SSM parameter written by the cluster bootstrap
//! tooling. It selects which health predicate a candidate must satisfy:
//! plain reachability before the control plane exists, apiserver liveness
//! once it does. Anything outside the known set is rejected outright so
//! that config drift never degrades into a silent no-op failover.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle phase of the managed cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Control plane not yet bootstrapped; only TCP reachability is testable.
    PreInit,
    /// Control plane up; the apiserver liveness endpoint is authoritative.
    PostInit,
}

impl Phase {
    /// The wire value stored in the parameter store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::PreInit => "preinit",
            Phase::PostInit => "postinit",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase value outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown cluster phase: {0}")]
pub struct UnknownPhase(pub String);

impl FromStr for Phase {
    type Err = UnknownPhase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preinit" => Ok(Phase::PreInit),
            "postinit" => Ok(Phase::PostInit),
            other => Err(UnknownPhase(other.to_string())),
        }
    }
}
