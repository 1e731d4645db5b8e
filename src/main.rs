//! Lambda entrypoint for the failover controller.
//!
//! Collaborators (SSM client, Route 53 client, probe HTTP client) are
//! constructed once per process and injected into the controller; each
//! invocation then runs one stateless failover pass.

use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

use haproxy_failover::config::Settings;
use haproxy_failover::controller::{Controller, Outcome};
use haproxy_failover::dns::Route53Publisher;
use haproxy_failover::health::EndpointProbe;
use haproxy_failover::params::SsmPhaseReader;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "haproxy_failover=info".into()),
        )
        .json()
        .init();

    // Missing configuration fails the process before any probing.
    let settings = Settings::from_env()?;
    tracing::info!(
        record = %settings.record.record_name,
        primary = %settings.primary_ip,
        secondary = %settings.secondary_ip,
        phase_param = %settings.phase_param,
        "Configuration loaded"
    );

    let aws = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let reader = SsmPhaseReader::new(
        aws_sdk_ssm::Client::new(&aws),
        settings.phase_param.clone(),
    );
    let probe = EndpointProbe::new(settings.probes.clone())?;
    let publisher = Route53Publisher::new(aws_sdk_route53::Client::new(&aws));

    let controller = Controller::new(settings, reader, probe, publisher);
    let controller = &controller;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        // The event payload is opaque scheduling noise; only the request id
        // is worth correlating.
        let (_payload, context) = event.into_parts();
        tracing::info!(request_id = %context.request_id, "Invocation received");
        Ok::<Outcome, Error>(controller.run_once().await)
    }))
    .await
}
