use crate::error::ApiError;
use crate::transport::{CallClass, Transport};
use core_types::TestConnectionRequest;
use serde_json::Value;
use std::sync::Arc;

/// Backend-held configuration.
#[derive(Clone)]
pub struct SettingsClient {
    transport: Arc<Transport>,
}

impl SettingsClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// GET /settings
    pub async fn get(&self) -> Result<Value, ApiError> {
        self.transport.get("/settings").await
    }

    /// PUT /settings
    pub async fn update(&self, payload: &Value) -> Result<Value, ApiError> {
        self.transport.put("/settings", payload).await
    }

    /// POST /settings/test-connection
    pub async fn test_connection(&self, request: &TestConnectionRequest) -> Result<Value, ApiError> {
        self.transport
            .post("/settings/test-connection", request, CallClass::Standard)
            .await
    }
}
