//! Titled content panel.

use leptos::prelude::*;

#[component]
pub fn Card(#[prop(optional, into)] title: Option<String>, children: Children) -> impl IntoView {
    view! {
        <section class="card">
            {title.map(|t| view! { <h2 class="card__title">{t}</h2> })}
            <div class="card__body">{children()}</div>
        </section>
    }
}
