//! Create-ticket form page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::alert::{Alert, AlertKind};
use crate::components::card::Card;
use crate::config::ApiEndpoints;
use crate::net::types::{TicketCategory, TicketPriority};
use crate::state::session::SessionInfo;
use crate::state::ticket_form::TicketDraft;

#[component]
pub fn CreateTicketPage() -> impl IntoView {
    let endpoints = StoredValue::new(expect_context::<ApiEndpoints>());
    let session = RwSignal::new(SessionInfo::default());
    Effect::new(move || session.set(SessionInfo::load()));

    let draft = RwSignal::new(TicketDraft::default());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        success.set(String::new());

        let request = match draft.get_untracked().validate() {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::ticket_form::{SUCCESS_BANNER_MS, TICKET_CREATED, submit_error_message};

            let session = SessionInfo::load();
            match crate::net::api::create_ticket(&endpoints.get_value(), session.token(), &request).await {
                Ok(()) => {
                    draft.set(TicketDraft::default());
                    success.set(TICKET_CREATED.to_owned());
                    busy.set(false);
                    gloo_timers::future::TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                    success.set(String::new());
                }
                Err(e) => {
                    error.set(submit_error_message(&e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, endpoints);
            busy.set(false);
        }
    };

    let on_cancel = move |_| {
        draft.set(TicketDraft::default());
        error.set(String::new());
        success.set(String::new());
    };

    view! {
        <div class="page create-ticket-page">
            <div class="page__header">
                <h1>"Create New Ticket"</h1>
                <A href="/" attr:class="btn btn--outline">"Back to Dashboard"</A>
            </div>
            <p class="page__byline">
                "A new ticket is being created by " <b>{move || session.with(|s| s.username.clone())}</b>
                " having mail-id: " <b>{move || session.with(|s| s.email.clone())}</b>
            </p>

            <Card title="Ticket Details">
                <form class="form" on:submit=on_submit>
                    <p class="form__hint">"Fields marked with (*) are mandatory"</p>
                    <Alert kind=AlertKind::Success message=success/>
                    <Alert kind=AlertKind::Error message=error/>

                    <label class="form__field">
                        <span class="form__label">"Title*"</span>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Brief description of the issue"
                            prop:value=move || draft.with(|d| d.subject.clone())
                            on:input=move |ev| draft.update(|d| d.subject = event_target_value(&ev))
                        />
                    </label>

                    <label class="form__field">
                        <span class="form__label">"Category*"</span>
                        <select
                            class="form__input"
                            prop:value=move || draft.with(|d| d.category.map_or("", TicketCategory::as_str))
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.category = TicketCategory::parse(&value));
                            }
                        >
                            <option value="">"Select a category"</option>
                            {TicketCategory::ALL
                                .into_iter()
                                .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    <label class="form__field">
                        <span class="form__label">"Priority*"</span>
                        <select
                            class="form__input"
                            prop:value=move || draft.with(|d| d.priority.map_or("", TicketPriority::as_str))
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.priority = TicketPriority::parse(&value));
                            }
                        >
                            <option value="">"Select priority"</option>
                            {TicketPriority::ALL
                                .into_iter()
                                .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    <label class="form__field">
                        <span class="form__label">"Description*"</span>
                        <textarea
                            class="form__input"
                            rows="4"
                            placeholder="Please provide detailed information about the issue"
                            prop:value=move || draft.with(|d| d.issue.clone())
                            on:input=move |ev| draft.update(|d| d.issue = event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="form__actions">
                        <button class="btn" type="button" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Submitting..." } else { "Submit Ticket" }}
                        </button>
                    </div>
                </form>
            </Card>
        </div>
    }
}
