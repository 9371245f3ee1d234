use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::{refresh_sources, DataContext};
use crate::config::ConfigContext;
use crate::error::ApiError;
use crate::pages::alert;
use crate::session::SessionContext;
use crate::view::{source_rows, SourceRowView};

#[component]
pub fn SourcesPage() -> impl IntoView {
    let config = expect_context::<ConfigContext>();
    let session = expect_context::<SessionContext>();
    let data = expect_context::<DataContext>();

    // Create form state
    let (name, set_name) = signal(String::new());
    let (kind, set_kind) = signal(String::new());
    let (is_saving, set_is_saving) = signal(false);

    // Lookup state
    let (lookup_id, set_lookup_id) = signal(String::new());
    let (lookup_result, set_lookup_result) = signal::<Option<Result<SourceRowView, String>>>(None);

    let rows = move || source_rows(&data.sources.get());

    let create = move |_| {
        let client = api::browser_client(&config.config.get_untracked());
        let current = session.current();
        let (n, k) = (name.get_untracked(), kind.get_untracked());
        set_is_saving.set(true);
        spawn_local(async move {
            match client.create_source(&current, &n, &k).await {
                Ok(created) => {
                    set_name.set(String::new());
                    set_kind.set(String::new());
                    match created.refreshed {
                        Ok(sources) => {
                            data.sources.set(sources);
                            data.sources_error.set(None);
                        }
                        Err(e) => {
                            warn!("Source created but list refresh failed: {}", e);
                            data.sources_error.set(Some(format!("Erro ao carregar fontes: {}", e)));
                        }
                    }
                }
                Err(ApiError::Validation(msg)) => alert(&msg),
                Err(e) => {
                    warn!("Create source failed: {}", e);
                    alert("Erro ao criar fonte");
                }
            }
            set_is_saving.set(false);
        });
    };

    let lookup = move |_| {
        let raw = lookup_id.get_untracked();
        let Ok(id) = raw.trim().parse::<i64>() else {
            alert("Informe um ID numérico.");
            return;
        };
        let client = api::browser_client(&config.config.get_untracked());
        let current = session.current();
        spawn_local(async move {
            let result = client
                .get_source(&current, id)
                .await
                .map(|src| SourceRowView::from(&src))
                .map_err(String::from);
            set_lookup_result.set(Some(result));
        });
    };

    view! {
        <div class="page sources-page">
            <h2>"Fontes"</h2>

            <div class="actions">
                <button class="btn btn-secondary" on:click=move |_| refresh_sources(config, session, data)>
                    "Atualizar"
                </button>
            </div>

            {move || data.sources_error.get().map(|e| view! {
                <div class="status-text status-error">{e}</div>
            })}

            <table class="table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Nome"</th>
                        <th>"Tipo"</th>
                        <th>"Ativa"</th>
                    </tr>
                </thead>
                <tbody id="sources-table-body">
                    {move || {
                        rows()
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.id}</td>
                                    <td>{row.name}</td>
                                    <td>{row.kind}</td>
                                    <td>{row.active}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <section class="settings-section">
                <h3>"Nova fonte"</h3>
                <div class="form-group">
                    <label for="source-name">"Nome"</label>
                    <input
                        id="source-name"
                        class="input"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <label for="source-type">"Tipo"</label>
                    <input
                        id="source-type"
                        class="input"
                        placeholder="API, CSV, spotify..."
                        prop:value=move || kind.get()
                        on:input=move |ev| set_kind.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary" on:click=create disabled=move || is_saving.get()>
                        {move || if is_saving.get() { "Salvando..." } else { "Criar" }}
                    </button>
                </div>
            </section>

            <section class="settings-section">
                <h3>"Buscar por ID"</h3>
                <div class="input-row">
                    <input
                        class="input"
                        type="number"
                        min="1"
                        prop:value=move || lookup_id.get()
                        on:input=move |ev| set_lookup_id.set(event_target_value(&ev))
                    />
                    <button class="btn btn-secondary" on:click=lookup>"Buscar"</button>
                </div>
                {move || lookup_result.get().map(|r| match r {
                    Ok(row) => view! {
                        <p class="status-text">
                            {format!("#{} {} ({}) - ativa: {}", row.id, row.name, row.kind, row.active)}
                        </p>
                    }.into_any(),
                    Err(e) => view! {
                        <p class="status-text status-error">{e}</p>
                    }.into_any(),
                })}
            </section>
        </div>
    }
}
