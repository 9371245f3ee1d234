use leptos::html::Input;
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, fetch::read_upload_file, CsvUpload, UploadKind};
use crate::app::DataContext;
use crate::config::ConfigContext;
use crate::error::ApiError;
use crate::pages::alert;
use crate::session::SessionContext;
use crate::view::DashboardView;

fn kind_label(kind: UploadKind) -> &'static str {
    match kind {
        UploadKind::Artists => "Artistas",
        UploadKind::Devices => "Dispositivos",
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let data = expect_context::<DataContext>();

    view! {
        <div class="page upload-page">
            <h2>"Upload CSV"</h2>
            <div class="actions">
                {UploadKind::ALL
                    .into_iter()
                    .map(|kind| view! {
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| data.dashboard.set(DashboardView::open_uploader(kind))
                        >
                            {kind_label(kind)}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div id="dashboard" class="dashboard">
                {move || match data.dashboard.get() {
                    DashboardView::Empty => view! {
                        <p class="page-description">"Escolha o tipo de relatório para enviar."</p>
                    }.into_any(),
                    DashboardView::Uploader(kind) => view! { <CsvUploader kind=kind /> }.into_any(),
                    DashboardView::Json(text) => view! { <pre>{text}</pre> }.into_any(),
                    DashboardView::Error(msg) => view! {
                        <div class="status-text status-error">{msg}</div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

/// File picker plus send button for one upload kind.
#[component]
fn CsvUploader(kind: UploadKind) -> impl IntoView {
    let config = expect_context::<ConfigContext>();
    let session = expect_context::<SessionContext>();
    let data = expect_context::<DataContext>();

    let file_input = NodeRef::<Input>::new();
    let (distributor, set_distributor) = signal(String::new());
    let (is_sending, set_is_sending) = signal(false);

    let send = move |_| {
        let selected = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let client = api::browser_client(&config.config.get_untracked());
        let current = session.current();
        let dist = distributor.get_untracked();
        set_is_sending.set(true);
        spawn_local(async move {
            let file = match selected {
                Some(f) => match read_upload_file(f).await {
                    Ok(file) => Some(file),
                    Err(e) => {
                        warn!("Failed to read file: {}", e);
                        data.dashboard.set(DashboardView::Error(e.to_string()));
                        set_is_sending.set(false);
                        return;
                    }
                },
                None => None,
            };

            let mut upload = CsvUpload::new(kind, file);
            if kind == UploadKind::Devices {
                upload = upload.with_distributor(dist);
            }

            match client.upload_csv(&current, upload).await {
                Err(ApiError::Validation(msg)) => alert(&msg),
                result => data.dashboard.set(DashboardView::from_upload(result)),
            }
            set_is_sending.set(false);
        });
    };

    view! {
        <div class="uploader">
            <h4>{format!("Upload CSV ({})", kind.as_str())}</h4>
            <input type="file" id="csvFile" accept=".csv,text/csv" class="input" node_ref=file_input />
            <Show when=move || kind == UploadKind::Devices>
                <label for="distributor">"Distribuidora"</label>
                <input
                    id="distributor"
                    class="input"
                    placeholder="FUGA, Vydia, The Orchard"
                    prop:value=move || distributor.get()
                    on:input=move |ev| set_distributor.set(event_target_value(&ev))
                />
            </Show>
            <button class="btn btn-primary" on:click=send disabled=move || is_sending.get()>
                {move || if is_sending.get() { "Enviando..." } else { "Enviar" }}
            </button>
        </div>
    }
}
