use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::status_badge::{BadgeState, StatusBadge};
use crate::config::ConfigContext;
use crate::session::SessionContext;

#[component]
pub fn HealthPage() -> impl IntoView {
    let config = expect_context::<ConfigContext>();
    let session = expect_context::<SessionContext>();

    let (checking, set_checking) = signal(false);
    let api_state = RwSignal::new(BadgeState::Pending);
    let api_detail = RwSignal::new(String::new());

    let do_health_check = move || {
        let client = api::browser_client(&config.config.get_untracked());
        let current = session.current();
        set_checking.set(true);
        api_state.set(BadgeState::Pending);
        spawn_local(async move {
            let result = client.health(&current).await;
            api_state.set(match &result {
                Ok(h) if !h.is_ok() => BadgeState::Failed,
                _ => BadgeState::from_result(&result),
            });
            api_detail.set(match result {
                Ok(h) => h.status,
                Err(e) => e.to_string(),
            });
            set_checking.set(false);
        });
    };

    // Auto-run on mount
    Effect::new(move |_| {
        do_health_check();
    });

    let endpoint = move || {
        let base = config.config.get().api_base;
        if base.is_empty() {
            "mesma origem".to_string()
        } else {
            base
        }
    };

    view! {
        <div class="page health-page">
            <h2>"Status"</h2>
            <p class="page-description">"Verifica se a API de relatórios está respondendo."</p>

            <button
                class="btn btn-primary"
                on:click=move |_| do_health_check()
                disabled=move || checking.get()
            >
                {move || if checking.get() { "Verificando..." } else { "Verificar" }}
            </button>

            <div class="health-results">
                <StatusBadge label="API" state=api_state detail=api_detail />
                <StatusBadge
                    label="Sessão"
                    state=Signal::derive(move || {
                        if session.session.get().is_authenticated() { BadgeState::Ok } else { BadgeState::Failed }
                    })
                    detail=Signal::derive(move || {
                        if session.session.get().is_authenticated() { "Autenticado".to_string() } else { "Sem login".to_string() }
                    })
                />
                <div class="health-summary">{move || format!("Endpoint: {}", endpoint())}</div>
            </div>
        </div>
    }
}
