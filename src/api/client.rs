use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::api::transport::{ApiRequest, ApiResponse, Transport, UploadFile};
use crate::api::types::{
    ArtistTotal, HealthStatus, Ingestion, LoginRequest, NewSource, PlatformTotal, Source,
    SummaryResponse, TokenResponse, UploadKind,
};
use crate::error::ApiError;
use crate::session::Session;

pub const DEFAULT_TOP_ARTISTS: u32 = 10;

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub token: String,
    pub token_type: Option<String>,
}

/// A write that went through, plus the list re-fetched after it.
///
/// The refresh can fail on its own; that never turns the write into a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Refreshed<T> {
    pub refreshed: Result<T, ApiError>,
}

/// A CSV upload ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvUpload {
    pub kind: UploadKind,
    pub file: Option<UploadFile>,
    /// Distributor name, only sent with device reports.
    pub distributor: Option<String>,
}

impl CsvUpload {
    pub fn new(kind: UploadKind, file: Option<UploadFile>) -> Self {
        Self {
            kind,
            file,
            distributor: None,
        }
    }

    pub fn with_distributor(mut self, distributor: impl Into<String>) -> Self {
        self.distributor = Some(distributor.into());
        self
    }
}

/// Typed access to the Insights Hub HTTP API.
///
/// One method per user action. Every call takes the session explicitly so the
/// credential is never read from shared state.
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, session: &Session, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = request.with_bearer(session.token());
        let method = request.method.clone();
        let path = request.path.clone();
        debug!("{} {}", method.as_str(), path);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            warn!("{} {} returned {}", method.as_str(), path, response.status);
        }
        response.error_for_status()
    }

    async fn send_json<R: DeserializeOwned>(
        &self,
        session: &Session,
        request: ApiRequest,
    ) -> Result<R, ApiError> {
        self.send(session, request).await?.json()
    }

    /// Exchange credentials for an access token.
    ///
    /// Any failure clears the session token.
    pub async fn login(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, ApiError> {
        let body = serde_json::to_value(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ApiError::Decode(e.to_string()))?;

        let result: Result<TokenResponse, ApiError> = self
            .send_json(&Session::new(), ApiRequest::post_json("/auth/login", body))
            .await;

        match result {
            Ok(token) => {
                info!("Login succeeded for {}", username);
                session.set_token(token.access_token.clone());
                Ok(LoginOutcome {
                    token: token.access_token,
                    token_type: token.token_type,
                })
            }
            Err(e) => {
                session.clear();
                Err(e)
            }
        }
    }

    pub async fn list_sources(&self, session: &Session) -> Result<Vec<Source>, ApiError> {
        self.send_json(session, ApiRequest::get("/sources/")).await
    }

    pub async fn get_source(&self, session: &Session, id: i64) -> Result<Source, ApiError> {
        self.send_json(session, ApiRequest::get(format!("/sources/{}", id)))
            .await
    }

    /// Create an active source, then re-fetch the full list.
    pub async fn create_source(
        &self,
        session: &Session,
        name: &str,
        kind: &str,
    ) -> Result<Refreshed<Vec<Source>>, ApiError> {
        let (name, kind) = (name.trim(), kind.trim());
        if name.is_empty() || kind.is_empty() {
            return Err(ApiError::Validation("Preencha nome e tipo.".to_string()));
        }

        let body = serde_json::to_value(NewSource {
            name: name.to_string(),
            kind: kind.to_string(),
            active: true,
        })
        .map_err(|e| ApiError::Decode(e.to_string()))?;

        self.send(session, ApiRequest::post_json("/sources/", body))
            .await?;
        info!("Created source {} ({})", name, kind);

        Ok(Refreshed {
            refreshed: self.list_sources(session).await,
        })
    }

    pub async fn load_summary(&self, session: &Session) -> Result<SummaryResponse, ApiError> {
        self.send_json(session, ApiRequest::get("/reports/summary"))
            .await
    }

    pub async fn top_artists(
        &self,
        session: &Session,
        limit: u32,
    ) -> Result<Vec<ArtistTotal>, ApiError> {
        self.send_json(
            session,
            ApiRequest::get(format!("/reports/top-artists?limit={}", limit)),
        )
        .await
    }

    pub async fn streams_by_platform(
        &self,
        session: &Session,
    ) -> Result<Vec<PlatformTotal>, ApiError> {
        self.send_json(session, ApiRequest::get("/reports/streams-by-platform"))
            .await
    }

    /// Send a CSV as multipart form data and return the server's JSON verbatim.
    pub async fn upload_csv(
        &self,
        session: &Session,
        upload: CsvUpload,
    ) -> Result<serde_json::Value, ApiError> {
        let file = upload
            .file
            .ok_or_else(|| ApiError::Validation("Selecione um arquivo CSV".to_string()))?;

        let mut fields = Vec::new();
        if upload.kind == UploadKind::Devices {
            // Device reports are rejected by the server without a distributor
            let distributor = upload
                .distributor
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .ok_or_else(|| ApiError::Validation("Informe a distribuidora.".to_string()))?;
            fields.push(("distributor".to_string(), distributor));
        }

        info!(
            "Uploading {} ({} bytes) as {}",
            file.name,
            file.bytes.len(),
            upload.kind.as_str()
        );
        let request = ApiRequest::post_multipart(upload.kind.endpoint(), "file", file, fields);
        self.send_json(session, request).await
    }

    pub async fn list_ingestions(&self, session: &Session) -> Result<Vec<Ingestion>, ApiError> {
        self.send_json(session, ApiRequest::get("/ingestions/"))
            .await
    }

    /// Delete an ingestion and its data, then re-fetch the history.
    pub async fn delete_ingestion(
        &self,
        session: &Session,
        id: i64,
    ) -> Result<Refreshed<Vec<Ingestion>>, ApiError> {
        self.send(session, ApiRequest::delete(format!("/ingestions/{}", id)))
            .await?;
        info!("Deleted ingestion {}", id);
        Ok(Refreshed {
            refreshed: self.list_ingestions(session).await,
        })
    }

    pub async fn health(&self, session: &Session) -> Result<HealthStatus, ApiError> {
        self.send_json(session, ApiRequest::get("/health")).await
    }
}
