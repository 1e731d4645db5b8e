//! Phase → probe endpoint table.

use std::time::Duration;

use crate::config::ProbeSettings;
use crate::phase::Phase;

/// What to probe for a given phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeEndpoint {
    /// Raw reachability: a TCP connect that is dropped immediately.
    /// Usable before any application-level service exists on the node.
    TcpConnect { port: u16, timeout: Duration },

    /// Application liveness: a GET that must return exactly 200.
    HttpGet {
        scheme: String,
        port: u16,
        path: String,
        timeout: Duration,
    },
}

impl ProbeEndpoint {
    /// Resolve the endpoint for a phase from probe settings.
    pub fn for_phase(phase: Phase, settings: &ProbeSettings) -> Self {
        match phase {
            Phase::PreInit => ProbeEndpoint::TcpConnect {
                port: settings.health_port,
                timeout: settings.connect_timeout(),
            },
            Phase::PostInit => ProbeEndpoint::HttpGet {
                scheme: settings.liveness_scheme.clone(),
                port: settings.liveness_port,
                path: settings.liveness_path.clone(),
                timeout: settings.request_timeout(),
            },
        }
    }

    /// Render the probe target for one candidate, for logs and diagnostics.
    pub fn describe(&self, address: &str) -> String {
        match self {
            ProbeEndpoint::TcpConnect { port, .. } => format!("tcp://{address}:{port}"),
            ProbeEndpoint::HttpGet {
                scheme, port, path, ..
            } => format!("{scheme}://{address}:{port}{path}"),
        }
    }
}
