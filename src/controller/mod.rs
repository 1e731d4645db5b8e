//! Invocation orchestration.
//!
//! # Data Flow
//! ```text
//! run_once()
//!     → params: read phase string        (failure → error outcome)
//!     → phase: parse                     (unknown → error outcome, no probe)
//!     → decider: probe candidates        (exhausted → error outcome, no publish)
//!     → dns: UPSERT to the winner        (failure → error outcome)
//!     → success outcome
//! ```
//!
//! # Design Decisions
//! - Collaborators are injected, not process globals, so tests substitute
//!   fakes without touching shared state
//! - The controller adds no decision logic of its own; it only sequences
//!   the subsystems and folds their results into the outcome shape
//! - Publish happens strictly after selection, so an interrupted
//!   invocation can never leave a partially applied record

pub mod outcome;

pub use outcome::{FailoverError, Outcome};

use crate::config::Settings;
use crate::decider::{Candidate, FailoverDecider, Selection};
use crate::dns::DnsPublisher;
use crate::health::HealthProbe;
use crate::params::PhaseReader;
use crate::phase::Phase;

/// Wires the phase reader, prober and publisher together for one
/// invocation at a time.
pub struct Controller<R, P, D> {
    settings: Settings,
    reader: R,
    probe: P,
    publisher: D,
}

impl<R, P, D> Controller<R, P, D>
where
    R: PhaseReader,
    P: HealthProbe,
    D: DnsPublisher,
{
    pub fn new(settings: Settings, reader: R, probe: P, publisher: D) -> Self {
        Self {
            settings,
            reader,
            probe,
            publisher,
        }
    }

    /// Run one complete failover pass. Every failure path is folded into
    /// an error outcome; nothing is retried here.
    pub async fn run_once(&self) -> Outcome {
        match self.execute().await {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::error!(error = %error, "Invocation failed");
                error.into()
            }
        }
    }

    async fn execute(&self) -> Result<Outcome, FailoverError> {
        let raw_phase = self.reader.read_phase().await?;
        let phase: Phase = raw_phase.parse()?;
        tracing::info!(
            phase = %phase,
            param = %self.settings.phase_param,
            "Cluster phase read"
        );

        let candidates = [
            Candidate(self.settings.primary_ip.clone()),
            Candidate(self.settings.secondary_ip.clone()),
        ];

        match FailoverDecider::new(&self.probe)
            .decide(phase, &candidates)
            .await
        {
            Selection::Selected { candidate, .. } => {
                let comment = format!("{phase}: Set DNS to healthy endpoint");
                self.publisher
                    .publish(&self.settings.record, &candidate.0, &comment)
                    .await
                    .map_err(|source| FailoverError::Publish { phase, source })?;
                Ok(Outcome::Success {
                    phase,
                    selected_ip: candidate.0,
                })
            }
            Selection::Exhausted { phase, attempts } => {
                for (candidate, failure) in &attempts {
                    tracing::warn!(
                        candidate = %candidate,
                        failure = %failure,
                        "Candidate rejected"
                    );
                }
                Err(FailoverError::NoHealthyCandidate { phase })
            }
        }
    }
}
