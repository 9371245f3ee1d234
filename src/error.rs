use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Required input missing; raised before any request is sent.
    #[error("{0}")]
    Validation(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.to_string()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ConfigError> for String {
    fn from(err: ConfigError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display_includes_status_and_message() {
        let err = ApiError::Http {
            status: 404,
            message: "Fonte não encontrada".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Fonte não encontrada");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_validation_error_converts_to_plain_message() {
        let err = ApiError::Validation("Preencha nome e tipo.".to_string());
        assert!(err.is_validation());
        let msg: String = err.into();
        assert_eq!(msg, "Preencha nome e tipo.");
    }
}
