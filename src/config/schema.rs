//! Configuration schema definitions.
//!
//! All types derive Serde traits so settings can be dumped as JSON by the
//! CLI and faked inline in tests.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for one controller process.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// The DNS record the controller manages.
    pub record: RecordSettings,

    /// Primary candidate address (host or IP). Checked first, always.
    pub primary_ip: String,

    /// Secondary candidate address. Only consulted when primary fails.
    pub secondary_ip: String,

    /// SSM parameter holding the cluster phase.
    pub phase_param: String,

    /// Health probe settings.
    #[serde(default)]
    pub probes: ProbeSettings,
}

/// The managed Route 53 record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordSettings {
    /// Hosted zone ID (e.g. "Z0123456789ABC").
    pub hosted_zone: String,

    /// Fully qualified record name (e.g. "api.cluster.example.com.").
    pub record_name: String,

    /// Record TTL in seconds. Kept short to bound the staleness window
    /// after a failover.
    #[serde(default = "default_ttl")]
    pub ttl: i64,
}

fn default_ttl() -> i64 {
    60
}

/// Health probe settings, per phase.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// Port for the preinit TCP reachability probe.
    pub health_port: u16,

    /// Scheme for the postinit liveness probe.
    pub liveness_scheme: String,

    /// Port for the postinit liveness probe.
    pub liveness_port: u16,

    /// Path of the liveness endpoint.
    pub liveness_path: String,

    /// Skip certificate validation on the liveness probe. The apiserver
    /// serves a self-signed cert; trust comes from network placement.
    /// Kept as a flag so it can be tightened without touching probe logic.
    pub accept_invalid_certs: bool,

    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Liveness request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            health_port: 8080,
            liveness_scheme: "https".to_string(),
            liveness_port: 6443,
            liveness_path: "/healthz".to_string(),
            accept_invalid_certs: true,
            connect_timeout_secs: 2,
            request_timeout_secs: 3,
        }
    }
}

impl ProbeSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
