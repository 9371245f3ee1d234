pub use http::Method;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// A file picked by the user, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Multipart form: the file goes under `file_field`, `fields` are plain text parts.
    Multipart {
        file_field: String,
        file: UploadFile,
        fields: Vec<(String, String)>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, always starting with `/`.
    pub path: String,
    pub body: RequestBody,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: RequestBody::Empty,
            bearer: None,
        }
    }

    pub fn post_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: RequestBody::Json(body),
            bearer: None,
        }
    }

    pub fn post_multipart(
        path: impl Into<String>,
        file_field: impl Into<String>,
        file: UploadFile,
        fields: Vec<(String, String)>,
    ) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: RequestBody::Multipart {
                file_field: file_field.into(),
                file,
                fields,
            },
            bearer: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            body: RequestBody::Empty,
            bearer: None,
        }
    }

    pub fn with_bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.map(str::to_string);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `None` for statuses outside 100..=999, e.g. the 0 of an opaque fetch.
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status).ok()
    }

    pub fn is_success(&self) -> bool {
        self.status_code().is_some_and(|s| s.is_success())
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Map a non-2xx response to `ApiError::Http`, passing 2xx responses through.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            return Ok(self);
        }
        let message = serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .map(|b| match b.detail {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .unwrap_or_else(|| {
                self.status_code()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Request failed")
                    .to_string()
            });
        Err(ApiError::Http {
            status: self.status,
            message,
        })
    }
}

/// Sends one request and resolves with the raw response.
///
/// Implementations only report transport-level failures as errors
/// (`ApiError::Network`); non-2xx statuses come back as ordinary responses.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}
