use crate::error::ApiError;
use crate::transport::{CallClass, Transport};
use core_types::{DataSourceStatus, RefreshDataRequest};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Upstream data-source monitoring.
#[derive(Clone)]
pub struct DataClient {
    transport: Arc<Transport>,
}

impl DataClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// GET /data/status
    pub async fn status(&self) -> Result<Vec<DataSourceStatus>, ApiError> {
        self.transport.get("/data/status").await
    }

    /// GET /data/quality
    pub async fn quality(&self, source: Option<&str>) -> Result<Value, ApiError> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            source: Option<&'a str>,
        }
        self.transport
            .get_query("/data/quality", &Query { source })
            .await
    }

    /// POST /data/refresh
    pub async fn refresh(&self, request: &RefreshDataRequest) -> Result<Value, ApiError> {
        self.transport
            .post("/data/refresh", request, CallClass::Standard)
            .await
    }

    /// GET /data/sources
    pub async fn sources(&self) -> Result<Value, ApiError> {
        self.transport.get("/data/sources").await
    }
}
