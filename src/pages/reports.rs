use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, client::DEFAULT_TOP_ARTISTS, ArtistTotal, PlatformTotal};
use crate::app::{refresh_summary, DataContext};
use crate::config::ConfigContext;
use crate::session::SessionContext;
use crate::view::{summary_rows, summary_totals};

fn streams_label(total: Option<u64>) -> String {
    total.map(|n| n.to_string()).unwrap_or_else(|| "0".to_string())
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let config = expect_context::<ConfigContext>();
    let session = expect_context::<SessionContext>();
    let data = expect_context::<DataContext>();

    let (top_artists, set_top_artists) = signal::<Vec<ArtistTotal>>(vec![]);
    let (platforms, set_platforms) = signal::<Vec<PlatformTotal>>(vec![]);
    let (breakdown_error, set_breakdown_error) = signal::<Option<String>>(None);

    let load_breakdowns = move || {
        let client = api::browser_client(&config.config.get_untracked());
        let current = session.current();
        spawn_local(async move {
            let artists = client.top_artists(&current, DEFAULT_TOP_ARTISTS).await;
            let by_platform = client.streams_by_platform(&current).await;
            match (artists, by_platform) {
                (Ok(a), Ok(p)) => {
                    set_top_artists.set(a);
                    set_platforms.set(p);
                    set_breakdown_error.set(None);
                }
                (Err(e), _) | (_, Err(e)) => {
                    set_breakdown_error.set(Some(format!("Erro ao carregar detalhamento: {}", e)));
                }
            }
        });
    };

    Effect::new(move |_| {
        load_breakdowns();
    });

    let refresh = move |_| {
        refresh_summary(config, session, data);
        load_breakdowns();
    };

    view! {
        <div class="page reports-page">
            <h2>"Relatórios"</h2>

            <div class="actions">
                <button class="btn btn-secondary" on:click=refresh>"Atualizar"</button>
            </div>

            {move || data.summary_error.get().map(|e| view! {
                <div class="status-text status-error">{e}</div>
            })}

            <div class="card-grid">
                {move || {
                    summary_totals(&data.summary.get())
                        .into_iter()
                        .map(|(label, value)| view! {
                            <div class="card">
                                <h3>{value}</h3>
                                <p>{label}</p>
                            </div>
                        })
                        .collect_view()
                }}
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Artista"</th>
                        <th>"Plataforma"</th>
                        <th>"Plays"</th>
                        <th>"Receita"</th>
                    </tr>
                </thead>
                <tbody id="summary-table-body">
                    {move || {
                        summary_rows(&data.summary.get())
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.artist}</td>
                                    <td>{row.platform}</td>
                                    <td>{row.plays}</td>
                                    <td>{row.revenue}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            {move || breakdown_error.get().map(|e| view! {
                <div class="status-text status-error">{e}</div>
            })}

            <div class="report-breakdowns">
                <section class="settings-section">
                    <h3>"Top artistas"</h3>
                    <table class="table">
                        <thead>
                            <tr><th>"Artista"</th><th>"Streams"</th></tr>
                        </thead>
                        <tbody>
                            {move || top_artists.get().into_iter().map(|a| view! {
                                <tr>
                                    <td>{a.artist_name}</td>
                                    <td>{streams_label(a.total_streams)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </section>

                <section class="settings-section">
                    <h3>"Streams por plataforma"</h3>
                    <table class="table">
                        <thead>
                            <tr><th>"Plataforma"</th><th>"Streams"</th></tr>
                        </thead>
                        <tbody>
                            {move || platforms.get().into_iter().map(|p| view! {
                                <tr>
                                    <td>{p.platform.unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{streams_label(p.total_streams)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </section>
            </div>
        </div>
    }
}
