use thiserror::Error;

/// Failures talking to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Analysis API error: {0}")]
    ApiError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),
    /// The service answered with `success: false`.
    #[error("Analysis failed")]
    Unsuccessful,
    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),
}

impl ServiceError {
    /// The underlying message without the category prefix, as shown to users.
    pub fn message(&self) -> String {
        match self {
            Self::ApiError(msg)
            | Self::NetworkError(msg)
            | Self::SerializationError(msg)
            | Self::AuthenticationError(msg)
            | Self::RateLimited(msg)
            | Self::MalformedResponse(msg) => msg.clone(),
            Self::Unsuccessful => self.to_string(),
        }
    }
}
