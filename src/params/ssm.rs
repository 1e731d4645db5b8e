//! SSM Parameter Store adapter.

use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::Client;

use crate::params::{PhaseReader, RetrievalError};

/// Reads the cluster phase from one SSM parameter.
pub struct SsmPhaseReader {
    client: Client,
    parameter_name: String,
}

impl SsmPhaseReader {
    pub fn new(client: Client, parameter_name: String) -> Self {
        Self {
            client,
            parameter_name,
        }
    }
}

impl PhaseReader for SsmPhaseReader {
    async fn read_phase(&self) -> Result<String, RetrievalError> {
        let response = self
            .client
            .get_parameter()
            .name(&self.parameter_name)
            .send()
            .await
            .map_err(|e| RetrievalError::Store(format!("{}", DisplayErrorContext(&e))))?;

        response
            .parameter()
            .and_then(|p| p.value())
            .map(str::to_owned)
            .ok_or_else(|| RetrievalError::EmptyParameter(self.parameter_name.clone()))
    }
}
