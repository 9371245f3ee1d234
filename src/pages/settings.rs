use leptos::prelude::*;
use tracing::info;

use crate::config::{Config, ConfigContext};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let config = expect_context::<ConfigContext>();
    let initial = config.config.get_untracked();

    let (api_base, set_api_base) = signal(initial.api_base);
    let (log_level, set_log_level) = signal(initial.log_level);
    let (reveal_token, set_reveal_token) = signal(initial.reveal_token);
    let (status, set_status) = signal::<Option<String>>(None);

    let save = move |_| {
        let updated = Config {
            api_base: api_base.get_untracked().trim().to_string(),
            log_level: log_level.get_untracked().trim().to_string(),
            reveal_token: reveal_token.get_untracked(),
        };
        match updated.save() {
            Ok(()) => {
                info!("Saved config, api_base={:?}", updated.api_base);
                config.config.set(updated);
                set_status.set(Some("Configurações salvas".to_string()));
            }
            Err(e) => set_status.set(Some(format!("Falha ao salvar: {}", e))),
        }
    };

    view! {
        <div class="page settings-page">
            <h2>"Configurações"</h2>

            <section class="settings-section">
                <h3>"API"</h3>
                <div class="form-group">
                    <label for="api-base">"URL base"</label>
                    <input
                        id="api-base"
                        type="text"
                        placeholder="http://localhost:8000 (vazio = mesma origem)"
                        class="input"
                        prop:value=move || api_base.get()
                        on:input=move |ev| set_api_base.set(event_target_value(&ev))
                    />
                </div>
            </section>

            <section class="settings-section">
                <h3>"Diagnóstico"</h3>
                <div class="form-group">
                    <label for="log-level">"Nível de log"</label>
                    <input
                        id="log-level"
                        type="text"
                        placeholder="info"
                        class="input"
                        prop:value=move || log_level.get()
                        on:input=move |ev| set_log_level.set(event_target_value(&ev))
                    />
                    <p class="section-description">"Aplicado no próximo carregamento da página."</p>
                </div>
                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || reveal_token.get()
                            on:change=move |ev| set_reveal_token.set(event_target_checked(&ev))
                        />
                        " Exibir token completo após login (somente depuração)"
                    </label>
                </div>
            </section>

            <button class="btn btn-save" on:click=save>"Salvar"</button>
            <Show when=move || status.get().is_some()>
                <span class="status-text">{move || status.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
