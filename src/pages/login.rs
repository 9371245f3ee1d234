use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::config::ConfigContext;
use crate::session::SessionContext;
use crate::view::login_status;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ConfigContext>();
    let session = expect_context::<SessionContext>();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (status, set_status) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);

    let do_login = move || {
        let cfg = config.config.get_untracked();
        let client = api::browser_client(&cfg);
        let user = username.get_untracked();
        let pass = password.get_untracked();
        set_is_loading.set(true);
        spawn_local(async move {
            let mut current = session.current();
            let result = client.login(&mut current, &user, &pass).await;
            session.session.set(current);
            set_status.set(Some(login_status(&result, cfg.reveal_token)));
            if result.is_ok() {
                set_password.set(String::new());
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="page login-page">
            <h2>"Login"</h2>
            <form
                class="form-group"
                on:submit=move |ev| {
                    ev.prevent_default();
                    do_login();
                }
            >
                <label for="username">"Usuário"</label>
                <input
                    id="username"
                    type="text"
                    class="input"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
                <label for="password">"Senha"</label>
                <input
                    id="password"
                    type="password"
                    class="input input-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
                <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                </button>
            </form>
            <Show when=move || status.get().is_some()>
                <span
                    id="login-status"
                    class="status-text"
                    class:status-saved=move || session.session.get().is_authenticated()
                    class:status-error=move || !session.session.get().is_authenticated()
                >
                    {move || status.get().unwrap_or_default()}
                </span>
            </Show>
        </div>
    }
}
