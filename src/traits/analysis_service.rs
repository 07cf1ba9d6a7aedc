use std::sync::Arc;
use async_trait::async_trait;
use crate::enums::service_error::ServiceError;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::service_envelope::ServiceEnvelope;

/// Remote backend that turns a free-text issue into a vulnerability assessment.
///
/// Implementations report transport and decoding problems as `Err`. An
/// envelope with `success: false` is a valid answer, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: AnalysisRequest) -> Result<ServiceEnvelope, ServiceError>;
}

#[async_trait]
impl<T: AnalysisService + ?Sized> AnalysisService for Arc<T> {
    async fn analyze(&self, request: AnalysisRequest) -> Result<ServiceEnvelope, ServiceError> {
        (**self).analyze(request).await
    }
}

#[async_trait]
impl<T: AnalysisService + ?Sized> AnalysisService for Box<T> {
    async fn analyze(&self, request: AnalysisRequest) -> Result<ServiceEnvelope, ServiceError> {
        (**self).analyze(request).await
    }
}
