use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::session::SessionContext;
use crate::view::Section;

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let session = expect_context::<SessionContext>();

    let active = move || Section::from_path(&pathname.get());

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Insights Hub"</h1>
                <p class="sidebar-subtitle">"Music Insights"</p>
            </div>
            <ul class="nav-list">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li class="nav-item">
                                <a
                                    href=section.path()
                                    class="nav-link"
                                    class:active=move || active() == Some(section)
                                >
                                    {section.title()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="sidebar-footer">
                {move || {
                    if session.session.get().is_authenticated() {
                        view! { <span class="status-text status-saved">"Autenticado"</span> }.into_any()
                    } else {
                        view! { <span class="status-text status-not-set">"Não autenticado"</span> }.into_any()
                    }
                }}
            </div>
        </nav>
    }
}
