use crate::error::ApiError;
use crate::transport::{CallClass, Transport};
use core_types::{ComputeFactorsRequest, CorrelationRequest, PcaRequest};
use serde_json::Value;
use std::sync::Arc;

/// Factor library exploration and computation.
///
/// Factor matrices are open-ended grids (rows keyed by date and ticker,
/// columns by factor name), so these return raw JSON.
#[derive(Clone)]
pub struct FactorClient {
    transport: Arc<Transport>,
}

impl FactorClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// GET /factors
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.transport.get("/factors").await
    }

    /// POST /factors/compute
    pub async fn compute(&self, request: &ComputeFactorsRequest) -> Result<Value, ApiError> {
        self.transport
            .post("/factors/compute", request, CallClass::Standard)
            .await
    }

    /// GET /factors/{factorName}/analysis
    pub async fn analysis(&self, factor_name: &str) -> Result<Value, ApiError> {
        self.transport
            .get(&format!("/factors/{factor_name}/analysis"))
            .await
    }

    /// POST /factors/pca
    pub async fn pca(&self, request: &PcaRequest) -> Result<Value, ApiError> {
        self.transport
            .post("/factors/pca", request, CallClass::Standard)
            .await
    }

    /// POST /factors/correlation
    pub async fn correlation(&self, request: &CorrelationRequest) -> Result<Value, ApiError> {
        self.transport
            .post("/factors/correlation", request, CallClass::Standard)
            .await
    }
}
