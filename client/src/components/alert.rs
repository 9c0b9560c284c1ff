//! Success/error banner.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert--success",
            Self::Error => "alert alert--error",
        }
    }
}

/// Banner that is hidden while `message` is empty.
#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class=kind.class() role="alert">
                {move || message.get()}
            </div>
        </Show>
    }
}
