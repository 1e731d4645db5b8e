//! Failover decision engine.
//!
//! # States
//! ```text
//! AwaitingPhase → Deciding(phase) → Selected(candidate)   (terminal)
//!                                 → Exhausted             (terminal)
//!       │               │
//!       └── phase read  └── unknown phase value
//!           failed  ⇒ terminal error before any probe runs
//! ```
//!
//! # Design Decisions
//! - Candidates are probed strictly in priority order; the first healthy
//!   one wins and remaining candidates are never probed
//! - Zero healthy candidates is a terminal Exhausted result, never a
//!   fallback selection — the DNS record must keep its last known value
//! - The decider is single-use per invocation and carries no state between
//!   probes; each verdict is a pure function of (address, phase)

use crate::health::{HealthProbe, ProbeFailure};
use crate::phase::Phase;

/// One proxy node address eligible for DNS selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate(pub String);

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Terminal result of one decision pass.
#[derive(Debug)]
pub enum Selection {
    /// The first candidate that passed the phase's health predicate.
    Selected {
        candidate: Candidate,
        detail: String,
    },

    /// Every candidate failed; per-candidate failures kept for diagnostics.
    Exhausted {
        phase: Phase,
        attempts: Vec<(Candidate, ProbeFailure)>,
    },
}

/// Single-use decision pass over an ordered candidate list.
pub struct FailoverDecider<'a, P> {
    probe: &'a P,
}

impl<'a, P: HealthProbe> FailoverDecider<'a, P> {
    pub fn new(probe: &'a P) -> Self {
        Self { probe }
    }

    /// Probe candidates in priority order and select the first healthy one.
    pub async fn decide(&self, phase: Phase, candidates: &[Candidate]) -> Selection {
        let mut attempts = Vec::new();

        for candidate in candidates {
            match self.probe.probe(&candidate.0, phase).await {
                Ok(ok) => {
                    tracing::info!(
                        phase = %phase,
                        selected = %candidate,
                        probed = attempts.len() + 1,
                        "Healthy candidate selected"
                    );
                    return Selection::Selected {
                        candidate: candidate.clone(),
                        detail: ok.detail,
                    };
                }
                Err(failure) => {
                    attempts.push((candidate.clone(), failure));
                }
            }
        }

        tracing::warn!(
            phase = %phase,
            candidates = attempts.len(),
            "No candidate passed its health probe"
        );
        Selection::Exhausted { phase, attempts }
    }
}
