//! Pure view models: what each region of the page shows for a given result.

use crate::api::types::{Ingestion, ReportRow, Source, SummaryResponse, UploadKind};
use crate::api::LoginOutcome;
use crate::error::ApiError;

pub const LOGIN_FAILED: &str = "Falha no login";

// -- Navigation --

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Login,
    Sources,
    Reports,
    Upload,
    Ingestions,
    Health,
    Settings,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Login,
        Section::Sources,
        Section::Reports,
        Section::Upload,
        Section::Ingestions,
        Section::Health,
        Section::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Section::Login => "/",
            Section::Sources => "/sources",
            Section::Reports => "/reports",
            Section::Upload => "/upload",
            Section::Ingestions => "/ingestions",
            Section::Health => "/health",
            Section::Settings => "/settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Login => "Login",
            Section::Sources => "Fontes",
            Section::Reports => "Relatórios",
            Section::Upload => "Upload CSV",
            Section::Ingestions => "Ingestões",
            Section::Health => "Status",
            Section::Settings => "Configurações",
        }
    }

    /// The section whose route matches `pathname`. Unknown paths map to `None`.
    pub fn from_path(pathname: &str) -> Option<Section> {
        let trimmed = pathname.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        Section::ALL.into_iter().find(|s| s.path() == trimmed)
    }
}

// -- Login --

/// Status text shown after a login attempt.
///
/// The token is masked unless `reveal_token` is set.
pub fn login_status(result: &Result<LoginOutcome, ApiError>, reveal_token: bool) -> String {
    match result {
        Ok(outcome) if reveal_token => format!("Login OK, token: {}", outcome.token),
        Ok(outcome) => format!("Login OK, token: {}", mask_token(&outcome.token)),
        Err(ApiError::Http { .. }) => LOGIN_FAILED.to_string(),
        Err(e) => format!("{}: {}", LOGIN_FAILED, e),
    }
}

pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if token.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

// -- Tables --

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRowView {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub active: &'static str,
}

impl From<&Source> for SourceRowView {
    fn from(src: &Source) -> Self {
        Self {
            id: src.id.to_string(),
            name: src.name.clone(),
            kind: src.kind.clone(),
            active: if src.active { "Sim" } else { "Não" },
        }
    }
}

pub fn source_rows(sources: &[Source]) -> Vec<SourceRowView> {
    sources.iter().map(SourceRowView::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRowView {
    pub artist: String,
    pub platform: String,
    pub plays: String,
    pub revenue: String,
}

impl From<&ReportRow> for SummaryRowView {
    fn from(row: &ReportRow) -> Self {
        Self {
            artist: row.artist.clone(),
            platform: row.platform.clone(),
            plays: format_count(&row.plays),
            revenue: format!("{:.2}", row.revenue),
        }
    }
}

/// Integral values print without a fraction, so `5.0` shows as `5`.
pub fn format_count(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

pub fn summary_rows(summary: &SummaryResponse) -> Vec<SummaryRowView> {
    summary.rows().iter().map(SummaryRowView::from).collect()
}

/// Label/value pairs for whichever overall totals the server reported.
pub fn summary_totals(summary: &SummaryResponse) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();
    if let Some(n) = summary.total_artists {
        out.push(("Artistas", n.to_string()));
    }
    if let Some(n) = summary.total_tracks {
        out.push(("Faixas", n.to_string()));
    }
    if let Some(n) = summary.total_streams {
        out.push(("Streams", n.to_string()));
    }
    if let Some(d) = &summary.first_date {
        out.push(("Primeira data", d.clone()));
    }
    if let Some(d) = &summary.last_date {
        out.push(("Última data", d.clone()));
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionRowView {
    pub id: i64,
    pub file_name: String,
    pub ingested_at: String,
    pub total_rows: String,
}

impl From<&Ingestion> for IngestionRowView {
    fn from(ing: &Ingestion) -> Self {
        Self {
            id: ing.id,
            file_name: ing.file_name.clone().unwrap_or_else(|| "-".to_string()),
            ingested_at: ing.ingested_at.clone().unwrap_or_else(|| "-".to_string()),
            total_rows: ing
                .total_rows
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

// -- Dashboard region --

/// Contents of the shared dashboard region. Each change replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashboardView {
    #[default]
    Empty,
    Uploader(UploadKind),
    Json(String),
    Error(String),
}

impl DashboardView {
    pub fn open_uploader(kind: UploadKind) -> Self {
        DashboardView::Uploader(kind)
    }

    pub fn from_upload(result: Result<serde_json::Value, ApiError>) -> Self {
        match result {
            Ok(value) => DashboardView::Json(pretty_json(&value)),
            Err(e) => DashboardView::Error(e.to_string()),
        }
    }
}

/// Two-space indented JSON.
pub fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
