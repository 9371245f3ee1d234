use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeState {
    Ok,
    Failed,
    Pending,
}

impl BadgeState {
    pub fn from_result<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            BadgeState::Ok
        } else {
            BadgeState::Failed
        }
    }

    fn icon_and_class(&self) -> (&'static str, &'static str) {
        match self {
            BadgeState::Ok => ("\u{2713}", "status-badge status-pass"),
            BadgeState::Failed => ("\u{2717}", "status-badge status-fail"),
            BadgeState::Pending => ("\u{2026}", "status-badge status-unknown"),
        }
    }
}

/// One labelled check line whose state and detail follow signals.
#[component]
pub fn StatusBadge(
    #[prop(into)] label: String,
    #[prop(into)] state: Signal<BadgeState>,
    #[prop(into)] detail: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="health-item">
            <span class=move || state.get().icon_and_class().1>
                {move || state.get().icon_and_class().0}
            </span>
            <span class="health-name">{label}</span>
            <span class="health-detail">{move || detail.get()}</span>
        </div>
    }
}
