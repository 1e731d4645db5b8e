//! Route 53 adapter.

use aws_sdk_route53::error::DisplayErrorContext;
use aws_sdk_route53::types::{
    Change, ChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType,
};
use aws_sdk_route53::Client;

use crate::config::RecordSettings;
use crate::dns::{DnsPublisher, PublishError};

/// Publishes the managed A-record via ChangeResourceRecordSets.
pub struct Route53Publisher {
    client: Client,
}

impl Route53Publisher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl DnsPublisher for Route53Publisher {
    async fn publish(
        &self,
        record: &RecordSettings,
        address: &str,
        comment: &str,
    ) -> Result<(), PublishError> {
        let record_set = ResourceRecordSet::builder()
            .name(&record.record_name)
            .r#type(RrType::A)
            .ttl(record.ttl)
            .resource_records(
                ResourceRecord::builder()
                    .value(address)
                    .build()
                    .map_err(|e| PublishError::InvalidChange(e.to_string()))?,
            )
            .build()
            .map_err(|e| PublishError::InvalidChange(e.to_string()))?;

        let change_batch = ChangeBatch::builder()
            .comment(comment)
            .changes(
                Change::builder()
                    .action(ChangeAction::Upsert)
                    .resource_record_set(record_set)
                    .build()
                    .map_err(|e| PublishError::InvalidChange(e.to_string()))?,
            )
            .build()
            .map_err(|e| PublishError::InvalidChange(e.to_string()))?;

        self.client
            .change_resource_record_sets()
            .hosted_zone_id(&record.hosted_zone)
            .change_batch(change_batch)
            .send()
            .await
            .map_err(|e| PublishError::Backend(format!("{}", DisplayErrorContext(&e))))?;

        tracing::info!(
            zone = %record.hosted_zone,
            record = %record.record_name,
            address = %address,
            ttl = record.ttl,
            "DNS record upserted"
        );
        Ok(())
    }
}
