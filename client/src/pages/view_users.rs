//! User management table: search, filter, sort and restrict/unrestrict.
//!
//! SYSTEM CONTEXT
//! ==============
//! The full list is fetched once on mount and again after every successful
//! account action. Filtering and sorting run in a memo over the fetched rows
//! (see [`crate::state::user_list`]), so they never touch the network.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::alert::{Alert, AlertKind};
use crate::config::ApiEndpoints;
use crate::net::types::{AccountAction, UserRole};
use crate::state::user_list::{NO_MATCHES, SortKey, StatusFilter, UserQuery, UserRow, confirm_prompt};
use crate::util::dialog;

/// Signals owned by the page. All `Copy`, so handlers capture them freely.
#[derive(Clone, Copy)]
struct ListState {
    rows: RwSignal<Vec<UserRow>>,
    loading: RwSignal<bool>,
    error: RwSignal<String>,
    notice: RwSignal<String>,
    notice_error: RwSignal<String>,
    busy: RwSignal<bool>,
}

impl ListState {
    fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(String::new()),
            notice: RwSignal::new(String::new()),
            notice_error: RwSignal::new(String::new()),
            busy: RwSignal::new(false),
        }
    }
}

#[cfg(feature = "hydrate")]
async fn load_users(state: ListState, endpoints: &ApiEndpoints) {
    use crate::state::session::SessionInfo;
    use crate::state::user_list::fetch_error_message;

    state.loading.set(true);
    state.error.set(String::new());
    let session = SessionInfo::load();
    match crate::net::api::fetch_users(endpoints, session.token()).await {
        Ok(records) => state.rows.set(records.into_iter().map(UserRow::from).collect()),
        Err(e) => {
            log::error!("fetch users failed: {e}");
            state.error.set(fetch_error_message(&e));
        }
    }
    state.loading.set(false);
}

#[component]
pub fn ViewUsersPage() -> impl IntoView {
    let endpoints = StoredValue::new(expect_context::<ApiEndpoints>());
    let state = ListState::new();
    let query = RwSignal::new(UserQuery::default());
    let visible = Memo::new(move |_| query.with(|q| state.rows.with(|rows| q.apply(rows))));

    let refresh = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            load_users(state, &endpoints.get_value()).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = endpoints;
    };

    Effect::new(move || refresh());

    let run_action = move |user_id: String, action: AccountAction| {
        if state.busy.get_untracked() || !dialog::confirm(&confirm_prompt(action)) {
            return;
        }
        state.notice.set(String::new());
        state.notice_error.set(String::new());
        state.busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::session::SessionInfo;
            use crate::state::user_list::{action_error_message, action_success_message};

            let endpoints = endpoints.get_value();
            let session = SessionInfo::load();
            match crate::net::api::change_account_status(&endpoints, session.token(), &user_id, action).await {
                Ok(()) => {
                    load_users(state, &endpoints).await;
                    state.notice.set(action_success_message(action));
                }
                Err(e) => {
                    log::error!("{} user {user_id} failed: {e}", action.verb());
                    state.notice_error.set(action_error_message(action, &e));
                }
            }
            state.busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            state.busy.set(false);
        }
    };

    view! {
        <div class="page users-page">
            <div class="page__header">
                <h1>"User Management"</h1>
                <div class="page__header-actions">
                    <A href="/" attr:class="btn btn--outline">"Back to Dashboard"</A>
                    <button
                        class="btn btn--outline"
                        disabled=move || state.loading.get() || state.busy.get()
                        on:click=move |_| refresh()
                    >
                        "Refresh"
                    </button>
                    <A href="/users/new" attr:class="btn btn--primary">"Add New User"</A>
                </div>
            </div>

            <Alert kind=AlertKind::Success message=state.notice/>
            <Alert kind=AlertKind::Error message=state.notice_error/>

            <div class="users-toolbar">
                <input
                    class="form__input users-toolbar__search"
                    type="search"
                    placeholder="Search by name, email or department"
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                />
                <select
                    class="form__input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.role = UserRole::parse(&value));
                    }
                >
                    <option value="all">"All Roles"</option>
                    {UserRole::ALL
                        .into_iter()
                        .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="form__input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.status = StatusFilter::parse(&value));
                    }
                >
                    {StatusFilter::ALL
                        .into_iter()
                        .map(|filter| view! { <option value=filter.as_str()>{filter.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show
                when=move || state.error.with(String::is_empty)
                fallback=move || {
                    view! {
                        <div class="alert alert--error users-page__error" role="alert">
                            <span>{move || state.error.get()}</span>
                            <button class="btn btn--outline" on:click=move |_| refresh()>
                                "Try again"
                            </button>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !state.loading.get()
                    fallback=|| view! { <p class="users-page__loading">"Loading users..."</p> }
                >
                    <table class="users-table">
                        <thead>
                            <tr>
                                <SortHeader label="Name" key=SortKey::Name query=query/>
                                <SortHeader label="Email" key=SortKey::Email query=query/>
                                <SortHeader label="Department" key=SortKey::Department query=query/>
                                <th>"Role"</th>
                                <SortHeader label="Status" key=SortKey::Status query=query/>
                                <SortHeader label="Verified" key=SortKey::Verified query=query/>
                                <SortHeader label="Created" key=SortKey::Created query=query/>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible.get();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td class="users-table__empty" colspan="8">
                                                {NO_MATCHES}
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|row| user_row(row, state.busy, run_action))
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn SortHeader(label: &'static str, key: SortKey, query: RwSignal<UserQuery>) -> impl IntoView {
    view! {
        <th class="users-table__sortable" on:click=move |_| query.update(|q| q.toggle_sort(key))>
            {label}
            <span class="users-table__arrow">{move || query.with(|q| q.indicator(key)).unwrap_or("")}</span>
        </th>
    }
}

fn user_row<F>(row: UserRow, busy: RwSignal<bool>, on_action: F) -> impl IntoView
where
    F: Fn(String, AccountAction) + Copy + Send + Sync + 'static,
{
    let status_class = format!("badge badge--{}", row.status);
    let action = row.available_action().map(|action| {
        let id = row.id.clone();
        let class = match action {
            AccountAction::Restrict => "btn btn--small btn--danger",
            AccountAction::Unrestrict => "btn btn--small btn--success",
        };
        view! {
            <button class=class disabled=move || busy.get() on:click=move |_| on_action(id.clone(), action)>
                {action.label()}
            </button>
        }
    });

    view! {
        <tr>
            <td class="users-table__name">
                <span class="avatar">{row.initials()}</span>
                <span>{row.name.clone()}</span>
            </td>
            <td>{row.email.clone()}</td>
            <td>{row.department.clone().unwrap_or_default()}</td>
            <td>{row.display_role()}</td>
            <td>
                <span class=status_class>{row.display_status()}</span>
            </td>
            <td>{if row.verified { "Yes" } else { "No" }}</td>
            <td>{row.created_display()}</td>
            <td>{action}</td>
        </tr>
    }
}
