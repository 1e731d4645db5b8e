//! Single-shot health probes.
//!
//! # Responsibilities
//! - Perform one reachability or liveness attempt against one candidate
//! - Classify the failure kind while preserving diagnostic detail
//! - Stay pure in (address, phase): no state carries between probes

use std::error::Error as StdError;
use std::io;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::ProbeSettings;
use crate::health::endpoint::ProbeEndpoint;
use crate::phase::Phase;

/// A passed probe, with whatever diagnostic text the target produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOk {
    pub detail: String,
}

/// Why a probe failed. Every variant means "unhealthy"; the distinction
/// exists for diagnostics and tests, not for the decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    /// No answer within the probe timeout.
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// The target actively refused the connection.
    #[error("connection refused")]
    Refused,

    /// TLS handshake or certificate failure.
    #[error("TLS error: {0}")]
    Tls(String),

    /// Any other connection or transport error.
    #[error("transport error: {0}")]
    Transport(String),

    /// The liveness endpoint answered, but not with 200.
    #[error("unexpected status {code}: {body}")]
    Status { code: u16, body: String },
}

/// Verdict of one probe attempt.
pub type HealthVerdict = Result<ProbeOk, ProbeFailure>;

/// A health probe strategy. Implemented by the production prober and by
/// scripted fakes in tests.
pub trait HealthProbe {
    fn probe(
        &self,
        address: &str,
        phase: Phase,
    ) -> impl std::future::Future<Output = HealthVerdict> + Send;
}

impl<T: HealthProbe + Sync> HealthProbe for &T {
    async fn probe(&self, address: &str, phase: Phase) -> HealthVerdict {
        (**self).probe(address, phase).await
    }
}

/// Production probe: resolves the endpoint for the phase from the table
/// and performs one TCP connect or one HTTP GET.
pub struct EndpointProbe {
    settings: ProbeSettings,
    client: reqwest::Client,
}

impl EndpointProbe {
    pub fn new(settings: ProbeSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .build()?;
        Ok(Self { settings, client })
    }

    async fn tcp_connect(&self, address: &str, port: u16, limit: Duration) -> HealthVerdict {
        match timeout(limit, TcpStream::connect((address, port))).await {
            Ok(Ok(_stream)) => Ok(ProbeOk {
                detail: format!("tcp connect to {address}:{port} succeeded"),
            }),
            Ok(Err(e)) if e.kind() == io::ErrorKind::ConnectionRefused => {
                Err(ProbeFailure::Refused)
            }
            Ok(Err(e)) => Err(ProbeFailure::Transport(e.to_string())),
            Err(_) => Err(ProbeFailure::Timeout(limit)),
        }
    }

    async fn http_get(&self, url: &str, limit: Duration) -> HealthVerdict {
        match self.client.get(url).timeout(limit).send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                if code == 200 {
                    Ok(ProbeOk { detail: body })
                } else {
                    Err(ProbeFailure::Status { code, body })
                }
            }
            Err(e) => Err(classify_request_error(e, limit)),
        }
    }
}

impl HealthProbe for EndpointProbe {
    async fn probe(&self, address: &str, phase: Phase) -> HealthVerdict {
        let endpoint = ProbeEndpoint::for_phase(phase, &self.settings);
        tracing::debug!(
            address = %address,
            phase = %phase,
            target = %endpoint.describe(address),
            "Probing candidate"
        );

        let verdict = match &endpoint {
            ProbeEndpoint::TcpConnect { port, timeout } => {
                self.tcp_connect(address, *port, *timeout).await
            }
            ProbeEndpoint::HttpGet { timeout, .. } => {
                self.http_get(&endpoint.describe(address), *timeout).await
            }
        };

        match &verdict {
            Ok(ok) => tracing::debug!(address = %address, detail = %ok.detail, "Probe passed"),
            Err(failure) => {
                tracing::warn!(address = %address, phase = %phase, failure = %failure, "Probe failed")
            }
        }
        verdict
    }
}

/// Fold a reqwest error into a probe failure, walking the source chain to
/// recover refused/TLS causes that reqwest reports as generic connect errors.
fn classify_request_error(error: reqwest::Error, limit: Duration) -> ProbeFailure {
    if error.is_timeout() {
        return ProbeFailure::Timeout(limit);
    }

    let mut source: Option<&(dyn StdError + 'static)> = error.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::ConnectionRefused {
                return ProbeFailure::Refused;
            }
        }
        let text = cause.to_string();
        let lower = text.to_lowercase();
        if lower.contains("certificate") || lower.contains("handshake") || lower.contains("tls") {
            return ProbeFailure::Tls(text);
        }
        source = cause.source();
    }

    ProbeFailure::Transport(error.to_string())
}
