use serde::{Deserialize, Serialize};

// -- Auth --

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

// -- Sources --

/// A configured external data origin, e.g. a streaming platform.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Source {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSource {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub active: bool,
}

// -- Reports --

/// Aggregated plays and revenue for one artist/platform pairing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportRow {
    pub artist: String,
    pub platform: String,
    /// Kept as sent; some exports report plays as floats.
    pub plays: serde_json::Number,
    pub revenue: f64,
}

/// Body of `/reports/summary`.
///
/// `rows` may be absent or null. The server also reports overall totals,
/// which are kept when present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SummaryResponse {
    #[serde(default)]
    rows: Option<Vec<ReportRow>>,
    #[serde(default)]
    pub total_artists: Option<u64>,
    #[serde(default)]
    pub total_tracks: Option<u64>,
    #[serde(default)]
    pub total_streams: Option<u64>,
    #[serde(default)]
    pub first_date: Option<String>,
    #[serde(default)]
    pub last_date: Option<String>,
}

impl SummaryResponse {
    pub fn rows(&self) -> &[ReportRow] {
        self.rows.as_deref().unwrap_or(&[])
    }

    pub fn has_totals(&self) -> bool {
        self.total_artists.is_some() || self.total_tracks.is_some() || self.total_streams.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArtistTotal {
    pub artist_name: String,
    #[serde(default)]
    pub total_streams: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlatformTotal {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub total_streams: Option<u64>,
}

// -- Ingestions --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Artists,
    Devices,
}

impl UploadKind {
    pub const ALL: [UploadKind; 2] = [UploadKind::Artists, UploadKind::Devices];

    pub fn endpoint(&self) -> &'static str {
        match self {
            UploadKind::Artists => "/upload/artists",
            UploadKind::Devices => "/upload/devices",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::Artists => "artists",
            UploadKind::Devices => "devices",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "artists" => Some(UploadKind::Artists),
            "devices" => Some(UploadKind::Devices),
            _ => None,
        }
    }
}

/// One entry of the upload history.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ingestion {
    pub id: i64,
    pub source_id: Option<i64>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub ingested_at: Option<String>,
    #[serde(default)]
    pub total_rows: Option<u64>,
}

// -- Health --

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
