use aws_config::BehaviorVersion;
use clap::{Parser, Subcommand};

use haproxy_failover::config::{ProbeSettings, Settings};
use haproxy_failover::controller::Controller;
use haproxy_failover::decider::{Candidate, FailoverDecider, Selection};
use haproxy_failover::dns::Route53Publisher;
use haproxy_failover::health::EndpointProbe;
use haproxy_failover::params::SsmPhaseReader;
use haproxy_failover::phase::Phase;

#[derive(Parser)]
#[command(name = "failover-cli")]
#[command(about = "Operational CLI for the HAProxy DNS failover controller", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe both candidates for a phase without touching DNS
    Check {
        /// Cluster phase to evaluate (preinit or postinit)
        #[arg(long)]
        phase: Phase,

        #[arg(long, env = "PRIMARY_IP")]
        primary: String,

        #[arg(long, env = "SECONDARY_IP")]
        secondary: String,

        #[arg(long, env = "HEALTH_PORT", default_value_t = 8080)]
        health_port: u16,

        #[arg(long, env = "LIVENESS_SCHEME", default_value = "https")]
        liveness_scheme: String,

        #[arg(long, env = "LIVENESS_PORT", default_value_t = 6443)]
        liveness_port: u16,

        #[arg(long, env = "LIVENESS_PATH", default_value = "/healthz")]
        liveness_path: String,

        /// Validate the liveness endpoint's certificate
        #[arg(long)]
        validate_certs: bool,
    },
    /// Run one full failover pass (reads SSM, updates Route 53)
    Run,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "haproxy_failover=info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Check {
            phase,
            primary,
            secondary,
            health_port,
            liveness_scheme,
            liveness_port,
            liveness_path,
            validate_certs,
        } => {
            let probe = EndpointProbe::new(ProbeSettings {
                health_port,
                liveness_scheme,
                liveness_port,
                liveness_path,
                accept_invalid_certs: !validate_certs,
                ..ProbeSettings::default()
            })?;
            let candidates = [Candidate(primary), Candidate(secondary)];
            let selection = FailoverDecider::new(&probe).decide(phase, &candidates).await;

            let report = match selection {
                Selection::Selected { candidate, detail } => serde_json::json!({
                    "phase": phase,
                    "selected": candidate.0,
                    "detail": detail,
                }),
                Selection::Exhausted { attempts, .. } => serde_json::json!({
                    "phase": phase,
                    "selected": null,
                    "attempts": attempts
                        .iter()
                        .map(|(candidate, failure)| serde_json::json!({
                            "candidate": candidate.0,
                            "failure": failure.to_string(),
                        }))
                        .collect::<Vec<_>>(),
                }),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Run => {
            let settings = Settings::from_env()?;
            let aws = aws_config::defaults(BehaviorVersion::latest()).load().await;
            let reader = SsmPhaseReader::new(
                aws_sdk_ssm::Client::new(&aws),
                settings.phase_param.clone(),
            );
            let probe = EndpointProbe::new(settings.probes.clone())?;
            let publisher = Route53Publisher::new(aws_sdk_route53::Client::new(&aws));

            let outcome = Controller::new(settings, reader, probe, publisher)
                .run_once()
                .await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}
