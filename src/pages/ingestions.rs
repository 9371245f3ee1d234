use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, Ingestion};
use crate::config::ConfigContext;
use crate::session::SessionContext;
use crate::view::IngestionRowView;

#[component]
pub fn IngestionsPage() -> impl IntoView {
    let config = expect_context::<ConfigContext>();
    let session = expect_context::<SessionContext>();

    let (ingestions, set_ingestions) = signal::<Vec<Ingestion>>(vec![]);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (confirm_delete, set_confirm_delete) = signal::<Option<i64>>(None);

    let load = move || {
        let client = api::browser_client(&config.config.get_untracked());
        let current = session.current();
        set_is_loading.set(true);
        spawn_local(async move {
            match client.list_ingestions(&current).await {
                Ok(list) => {
                    set_ingestions.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Erro ao carregar ingestões: {}", e))),
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
    });

    let delete = move |id: i64| {
        let client = api::browser_client(&config.config.get_untracked());
        let current = session.current();
        set_confirm_delete.set(None);
        spawn_local(async move {
            match client.delete_ingestion(&current, id).await {
                Ok(deleted) => match deleted.refreshed {
                    Ok(list) => {
                        set_ingestions.set(list);
                        set_error.set(None);
                    }
                    Err(e) => {
                        // The row is gone server-side; drop it locally so it can't be deleted twice
                        set_ingestions.update(|list| list.retain(|ing| ing.id != id));
                        set_error.set(Some(format!("Erro ao carregar ingestões: {}", e)));
                    }
                },
                Err(e) => set_error.set(Some(format!("Erro ao remover ingestão {}: {}", id, e))),
            }
        });
    };

    let rows = move || {
        ingestions
            .get()
            .iter()
            .map(IngestionRowView::from)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page ingestions-page">
            <h2>"Ingestões"</h2>
            <div class="actions">
                <button class="btn btn-secondary" on:click=move |_| load() disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Carregando..." } else { "Atualizar" }}
                </button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="status-text status-error">{e}</div>
            })}

            <table class="table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Arquivo"</th>
                        <th>"Data"</th>
                        <th>"Linhas"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows()
                            .into_iter()
                            .map(|row| {
                                let id = row.id;
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{row.file_name}</td>
                                        <td>{row.ingested_at}</td>
                                        <td>{row.total_rows}</td>
                                        <td>
                                            <Show
                                                when=move || confirm_delete.get() == Some(id)
                                                fallback=move || view! {
                                                    <button
                                                        class="btn btn-delete"
                                                        on:click=move |_| set_confirm_delete.set(Some(id))
                                                    >
                                                        "Remover"
                                                    </button>
                                                }
                                            >
                                                <button class="btn btn-delete" on:click=move |_| delete(id)>
                                                    "Confirmar"
                                                </button>
                                                <button
                                                    class="btn btn-secondary"
                                                    on:click=move |_| set_confirm_delete.set(None)
                                                >
                                                    "Cancelar"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <Show when=move || !is_loading.get() && ingestions.get().is_empty()>
                <p class="page-description">"Nenhuma ingestão registrada."</p>
            </Show>
        </div>
    }
}
