use crate::error::ApiError;
use crate::transport::{CallClass, Transport};
use core_types::{CompareExperimentsRequest, CreateExperimentRequest};
use serde_json::Value;
use std::sync::Arc;

/// Experiment manager: parameter-sweep definitions and their runs.
#[derive(Clone)]
pub struct ExperimentClient {
    transport: Arc<Transport>,
}

impl ExperimentClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// GET /experiments
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.transport.get("/experiments").await
    }

    /// POST /experiments
    pub async fn create(&self, request: &CreateExperimentRequest) -> Result<Value, ApiError> {
        self.transport
            .post("/experiments", request, CallClass::Standard)
            .await
    }

    /// GET /experiments/{id}
    pub async fn details(&self, experiment_id: &str) -> Result<Value, ApiError> {
        self.transport
            .get(&format!("/experiments/{experiment_id}"))
            .await
    }

    /// PUT /experiments/{id}
    pub async fn update(&self, experiment_id: &str, payload: &Value) -> Result<Value, ApiError> {
        self.transport
            .put(&format!("/experiments/{experiment_id}"), payload)
            .await
    }

    /// DELETE /experiments/{id}
    pub async fn delete(&self, experiment_id: &str) -> Result<Value, ApiError> {
        self.transport
            .delete(&format!("/experiments/{experiment_id}"))
            .await
    }

    /// POST /experiments/{id}/run. A full sweep, long-running budget.
    pub async fn run(&self, experiment_id: &str) -> Result<Value, ApiError> {
        self.transport
            .post_empty(
                &format!("/experiments/{experiment_id}/run"),
                CallClass::LongRunning,
            )
            .await
    }

    /// POST /experiments/compare
    pub async fn compare(&self, request: &CompareExperimentsRequest) -> Result<Value, ApiError> {
        self.transport
            .post("/experiments/compare", request, CallClass::Standard)
            .await
    }
}
