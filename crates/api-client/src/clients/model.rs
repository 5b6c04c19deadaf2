use crate::error::ApiError;
use crate::transport::{CallClass, Transport};
use core_types::{FeatureImportance, PredictionResult, TrainModelRequest};
use serde_json::Value;
use std::sync::Arc;

/// Model lifecycle: training, inspection, prediction, deletion.
#[derive(Clone)]
pub struct ModelClient {
    transport: Arc<Transport>,
}

impl ModelClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// GET /models
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.transport.get("/models").await
    }

    /// POST /models/train. Walk-forward training runs for minutes, so this
    /// uses the long-running budget.
    pub async fn train(&self, request: &TrainModelRequest) -> Result<Value, ApiError> {
        self.transport
            .post("/models/train", request, CallClass::LongRunning)
            .await
    }

    /// GET /models/{id}
    pub async fn details(&self, model_id: &str) -> Result<Value, ApiError> {
        self.transport.get(&format!("/models/{model_id}")).await
    }

    /// GET /models/{id}/feature-importance
    pub async fn feature_importance(
        &self,
        model_id: &str,
    ) -> Result<Vec<FeatureImportance>, ApiError> {
        self.transport
            .get(&format!("/models/{model_id}/feature-importance"))
            .await
    }

    /// POST /models/{id}/predict
    pub async fn predict(
        &self,
        model_id: &str,
        payload: &Value,
    ) -> Result<PredictionResult, ApiError> {
        self.transport
            .post(
                &format!("/models/{model_id}/predict"),
                payload,
                CallClass::Standard,
            )
            .await
    }

    /// DELETE /models/{id}
    pub async fn delete(&self, model_id: &str) -> Result<Value, ApiError> {
        self.transport.delete(&format!("/models/{model_id}")).await
    }
}
