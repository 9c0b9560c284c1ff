//! Dashboard landing page linking to the views the session may use.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::card::Card;
use crate::state::session::SessionInfo;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = RwSignal::new(SessionInfo::default());
    Effect::new(move || session.set(SessionInfo::load()));

    view! {
        <div class="page dashboard-page">
            <h1>"Support Dashboard"</h1>
            <Show
                when=move || session.with(SessionInfo::is_logged_in)
                fallback=|| {
                    view! {
                        <p>"Log in to raise tickets and manage your account."</p>
                        <A href="/login" attr:class="btn btn--primary">"Log in"</A>
                    }
                }
            >
                <p class="page__byline">
                    "Signed in as " <b>{move || session.with(|s| s.username.clone())}</b>
                    " (" {move || session.with(|s| s.email.clone())} ")"
                </p>
                <Card title="What would you like to do?">
                    <div class="dashboard-page__actions">
                        <A href="/tickets/new" attr:class="btn btn--primary">"Create Ticket"</A>
                        <Show when=move || session.with(SessionInfo::can_manage_users)>
                            <A href="/users/new" attr:class="btn">"Create User"</A>
                            <A href="/users" attr:class="btn">"Manage Users"</A>
                        </Show>
                    </div>
                </Card>
            </Show>
        </div>
    }
}
