//! Shared fakes and mock backends for integration testing.

use std::net::SocketAddr;
use std::sync::Mutex;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use haproxy_failover::config::RecordSettings;
use haproxy_failover::dns::{DnsPublisher, PublishError};
use haproxy_failover::health::{HealthProbe, HealthVerdict, ProbeFailure, ProbeOk};
use haproxy_failover::params::{PhaseReader, RetrievalError};
use haproxy_failover::phase::Phase;

/// Start a mock HTTP backend that answers every connection with a fixed
/// status and body.
pub async fn start_http_backend(addr: SocketAddr, status: u16, body: &'static str) {
    let listener = TcpListener::bind(addr).await.unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let reason = match status {
                            200 => "OK",
                            503 => "Service Unavailable",
                            _ => "Status",
                        };
                        let response = format!(
                            "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            reason,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Start a bare TCP listener that accepts and drops connections, enough to
/// pass a reachability probe.
#[allow(dead_code)]
pub async fn start_tcp_backend(addr: SocketAddr) {
    let listener = TcpListener::bind(addr).await.unwrap();
    tokio::spawn(async move {
        loop {
            if listener.accept().await.is_err() {
                break;
            }
        }
    });
}

/// Phase reader returning a canned result.
pub struct FakePhaseReader {
    result: Result<String, String>,
}

impl FakePhaseReader {
    pub fn phase(value: &str) -> Self {
        Self {
            result: Ok(value.to_string()),
        }
    }

    #[allow(dead_code)]
    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
        }
    }
}

impl PhaseReader for FakePhaseReader {
    async fn read_phase(&self) -> Result<String, RetrievalError> {
        self.result.clone().map_err(RetrievalError::Store)
    }
}

/// Probe with scripted verdicts that records which addresses were probed.
pub struct ScriptedProbe {
    verdicts: Vec<(String, bool)>,
    log: Mutex<Vec<String>>,
}

impl ScriptedProbe {
    pub fn new(verdicts: &[(&str, bool)]) -> Self {
        Self {
            verdicts: verdicts
                .iter()
                .map(|(a, h)| (a.to_string(), *h))
                .collect(),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn probed(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl HealthProbe for ScriptedProbe {
    async fn probe(&self, address: &str, _phase: Phase) -> HealthVerdict {
        self.log.lock().unwrap().push(address.to_string());
        let healthy = self
            .verdicts
            .iter()
            .find(|(a, _)| a == address)
            .map(|(_, h)| *h)
            .unwrap_or(false);
        if healthy {
            Ok(ProbeOk {
                detail: "ok".to_string(),
            })
        } else {
            Err(ProbeFailure::Refused)
        }
    }
}

/// One recorded publish attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishCall {
    pub zone: String,
    pub record: String,
    pub address: String,
    pub comment: String,
}

/// Publisher that records every attempt; optionally fails them all.
#[derive(Default)]
pub struct RecordingPublisher {
    pub calls: Mutex<Vec<PublishCall>>,
    pub fail_with: Option<String>,
}

impl RecordingPublisher {
    pub fn calls(&self) -> Vec<PublishCall> {
        self.calls.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }
}

impl DnsPublisher for RecordingPublisher {
    async fn publish(
        &self,
        record: &RecordSettings,
        address: &str,
        comment: &str,
    ) -> Result<(), PublishError> {
        self.calls.lock().unwrap().push(PublishCall {
            zone: record.hosted_zone.clone(),
            record: record.record_name.clone(),
            address: address.to_string(),
            comment: comment.to_string(),
        });
        match &self.fail_with {
            Some(message) => Err(PublishError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}
