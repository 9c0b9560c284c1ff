//! Site navigation header with client-side auth-state detection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The "logged in" flag is best-effort UI state: it only reflects whether a
//! `userToken` key exists. It is re-checked on mount, on every route change,
//! on the same-document `authStatusChange` event (raised on `document` and
//! forwarded to `window`), and on the cross-tab `storage` event so every
//! mounted header stays consistent.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::session::{self, SessionInfo};

#[component]
pub fn Header() -> impl IntoView {
    let logged_in = RwSignal::new(false);
    let username = RwSignal::new(String::new());
    let menu_open = RwSignal::new(false);
    let location = use_location();

    let refresh = move || {
        let current = SessionInfo::load();
        logged_in.set(current.is_logged_in());
        username.set(current.username);
    };

    Effect::new(move || {
        location.pathname.track();
        refresh();
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::util::auth::{self, AUTH_STATUS_CHANGE};

        auth::forward_to_window();
        let on_auth_change =
            window_event_listener(leptos::ev::Custom::<web_sys::Event>::new(AUTH_STATUS_CHANGE), move |_| refresh());
        let on_storage = window_event_listener(leptos::ev::storage, move |_| refresh());
        on_cleanup(move || {
            on_auth_change.remove();
            on_storage.remove();
        });
    }

    view! {
        <header class="site-header">
            <nav class="site-header__nav">
                <A href="/" attr:class="site-header__brand">
                    <span class="site-header__brand-accent">"Stack"</span>
                    <span>"IT"</span>
                </A>

                <button
                    class="site-header__menu-toggle"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>

                <div
                    class="site-header__links"
                    class:site-header__links--open=move || menu_open.get()
                    on:click=move |_| menu_open.set(false)
                >
                    <A href="/" exact=true>"Home"</A>
                    <A href="/about">"About"</A>

                    <Show
                        when=move || logged_in.get()
                        fallback=|| {
                            view! {
                                <A href="/login" attr:class="btn btn--outline">"Log in"</A>
                                <A href="/register" attr:class="btn btn--primary">"Get Started"</A>
                            }
                        }
                    >
                        <span class="site-header__welcome">"Welcome " {move || username.get()}</span>
                        <button class="btn btn--outline" on:click=move |_| session::sign_out()>
                            "Log out"
                        </button>
                    </Show>
                </div>
            </nav>
        </header>
    }
}
