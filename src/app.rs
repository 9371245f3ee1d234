use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, Source, SummaryResponse};
use crate::components::sidebar::Sidebar;
use crate::config::{Config, ConfigContext};
use crate::pages::health::HealthPage;
use crate::pages::ingestions::IngestionsPage;
use crate::pages::login::LoginPage;
use crate::pages::reports::ReportsPage;
use crate::pages::settings::SettingsPage;
use crate::pages::sources::SourcesPage;
use crate::pages::upload::UploadPage;
use crate::session::{Session, SessionContext};
use crate::view::DashboardView;

/// Regions shared across sections. Each fetch replaces its region wholesale.
#[derive(Clone, Copy)]
pub struct DataContext {
    pub sources: RwSignal<Vec<Source>>,
    pub sources_error: RwSignal<Option<String>>,
    pub summary: RwSignal<SummaryResponse>,
    pub summary_error: RwSignal<Option<String>>,
    pub dashboard: RwSignal<DashboardView>,
}

impl DataContext {
    fn new() -> Self {
        Self {
            sources: RwSignal::new(Vec::new()),
            sources_error: RwSignal::new(None),
            summary: RwSignal::new(SummaryResponse::default()),
            summary_error: RwSignal::new(None),
            dashboard: RwSignal::new(DashboardView::Empty),
        }
    }
}

/// Fetch all sources into the shared table.
pub fn refresh_sources(config: ConfigContext, session: SessionContext, data: DataContext) {
    let client = api::browser_client(&config.config.get_untracked());
    let session = session.current();
    spawn_local(async move {
        match client.list_sources(&session).await {
            Ok(sources) => {
                data.sources.set(sources);
                data.sources_error.set(None);
            }
            Err(e) => {
                warn!("Failed to load sources: {}", e);
                data.sources_error.set(Some(format!("Erro ao carregar fontes: {}", e)));
            }
        }
    });
}

/// Fetch the report summary into the shared table.
pub fn refresh_summary(config: ConfigContext, session: SessionContext, data: DataContext) {
    let client = api::browser_client(&config.config.get_untracked());
    let session = session.current();
    spawn_local(async move {
        match client.load_summary(&session).await {
            Ok(summary) => {
                data.summary.set(summary);
                data.summary_error.set(None);
            }
            Err(e) => {
                warn!("Failed to load summary: {}", e);
                data.summary_error.set(Some(format!("Erro ao carregar resumo: {}", e)));
            }
        }
    });
}

#[component]
pub fn App(config: Config) -> impl IntoView {
    let config_ctx = ConfigContext {
        config: RwSignal::new(config),
    };
    let session_ctx = SessionContext {
        session: RwSignal::new(Session::new()),
    };
    let data_ctx = DataContext::new();
    provide_context(config_ctx);
    provide_context(session_ctx);
    provide_context(data_ctx);

    // Sources and summary load independently on mount
    Effect::new(move |_| {
        refresh_sources(config_ctx, session_ctx, data_ctx);
        refresh_summary(config_ctx, session_ctx, data_ctx);
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Página não encontrada"</p> }>
                        <Route path=path!("/") view=LoginPage />
                        <Route path=path!("/sources") view=SourcesPage />
                        <Route path=path!("/reports") view=ReportsPage />
                        <Route path=path!("/upload") view=UploadPage />
                        <Route path=path!("/ingestions") view=IngestionsPage />
                        <Route path=path!("/health") view=HealthPage />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
