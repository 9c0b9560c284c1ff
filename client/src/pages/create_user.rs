//! Create-user form page.
//!
//! Validation runs over the whole draft on submit; each failing field shows
//! its own message until that field is edited again.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::alert::{Alert, AlertKind};
use crate::components::card::Card;
use crate::config::ApiEndpoints;
use crate::state::session::SessionInfo;
use crate::state::user_form::{DEPARTMENTS, FieldErrors, UserDraft, UserField, selectable_roles};

#[component]
pub fn CreateUserPage() -> impl IntoView {
    let endpoints = StoredValue::new(expect_context::<ApiEndpoints>());
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let session = RwSignal::new(SessionInfo::default());
    Effect::new(move || session.set(SessionInfo::load()));

    let draft = RwSignal::new(UserDraft::default());
    let errors = RwSignal::new(FieldErrors::default());
    let submit_error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        submit_error.set(String::new());

        let request = match draft.get_untracked().validate() {
            Ok(request) => {
                errors.set(FieldErrors::default());
                request
            }
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::state::user_form::{REDIRECT_DELAY_MS, USER_CREATED, submit_error_message, unlocks_after};

                let session = SessionInfo::load();
                let result = crate::net::api::create_user(&endpoints.get_value(), session.token(), &request).await;
                if unlocks_after(&result) {
                    busy.set(false);
                }
                match result {
                    Ok(()) => {
                        success.set(USER_CREATED.to_owned());
                        gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        navigate("/users", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("create user failed: {e}");
                        submit_error.set(submit_error_message(&e));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, endpoints);
            busy.set(false);
        }
    };

    view! {
        <div class="page create-user-page">
            <div class="page__header">
                <h1>"Create New User"</h1>
                <A href="/" attr:class="btn btn--outline">"Back to Dashboard"</A>
            </div>
            <p class="page__byline">
                <b>{move || session.with(|s| s.username.clone())}</b>
                " with email: "
                <b>{move || session.with(|s| s.email.clone())}</b>
                " is creating a new user for the system"
            </p>

            <Card>
                <form class="form" on:submit=on_submit>
                    <Alert kind=AlertKind::Success message=success/>
                    <Alert kind=AlertKind::Error message=submit_error/>

                    <div class="form__grid">
                        <TextField
                            label="Username"
                            field=UserField::Username
                            placeholder="johndoe"
                            draft=draft
                            errors=errors
                        />
                        <TextField
                            label="Email Address"
                            field=UserField::Email
                            input_type="email"
                            placeholder="john.doe@example.com"
                            draft=draft
                            errors=errors
                        />

                        <label class="form__field">
                            <span class="form__label">"Phone"</span>
                            <input
                                class="form__input"
                                type="tel"
                                placeholder="+1 555 0100"
                                prop:value=move || draft.with(|d| d.phone.clone())
                                on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                            />
                        </label>

                        <label class="form__field">
                            <span class="form__label">"Department"</span>
                            <select
                                class="form__input"
                                class:form__input--invalid=move || errors.with(|e| e.get(UserField::Department).is_some())
                                prop:value=move || draft.with(|d| d.department.clone())
                                on:change=move |ev| edit(draft, errors, UserField::Department, event_target_value(&ev))
                            >
                                <option value="">"Select Department"</option>
                                {DEPARTMENTS
                                    .into_iter()
                                    .map(|dept| view! { <option value=dept>{dept}</option> })
                                    .collect_view()}
                            </select>
                            <FieldError errors=errors field=UserField::Department/>
                        </label>

                        <PasswordField label="Password" field=UserField::Password draft=draft errors=errors/>
                        <PasswordField
                            label="Confirm Password"
                            field=UserField::ConfirmPassword
                            draft=draft
                            errors=errors
                        />
                    </div>

                    <fieldset class="form__field form__roles">
                        <legend class="form__label">"User Role"</legend>
                        {move || {
                            session.with(selectable_roles)
                                .into_iter()
                                .map(|role| {
                                    let selected = move || draft.with(|d| d.role == Some(role));
                                    view! {
                                        <label class="role-option" class:role-option--selected=selected>
                                            <input
                                                type="radio"
                                                name="role"
                                                value=role.as_str()
                                                prop:checked=selected
                                                on:change=move |_| {
                                                    edit(draft, errors, UserField::Role, role.as_str().to_owned());
                                                }
                                            />
                                            <span>{role.label()}</span>
                                        </label>
                                    }
                                })
                                .collect_view()
                        }}
                        <FieldError errors=errors field=UserField::Role/>
                    </fieldset>

                    <div class="form__actions">
                        <A href="/" attr:class="btn">"Cancel"</A>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating..." } else { "Create User" }}
                        </button>
                    </div>
                </form>
            </Card>
        </div>
    }
}

fn edit(draft: RwSignal<UserDraft>, errors: RwSignal<FieldErrors>, field: UserField, value: String) {
    draft.update(|d| d.set(field, value));
    errors.update(|e| e.clear(field));
}

fn field_value(draft: &UserDraft, field: UserField) -> String {
    match field {
        UserField::Username => draft.username.clone(),
        UserField::Email => draft.email.clone(),
        UserField::Department => draft.department.clone(),
        UserField::Role => draft.role.map(|r| r.as_str().to_owned()).unwrap_or_default(),
        UserField::Password => draft.password.clone(),
        UserField::ConfirmPassword => draft.confirm_password.clone(),
    }
}

#[component]
fn FieldError(errors: RwSignal<FieldErrors>, field: UserField) -> impl IntoView {
    let message = move || errors.with(|e| e.get(field));
    view! {
        <Show when=move || message().is_some()>
            <p class="form__error">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
fn TextField(
    label: &'static str,
    field: UserField,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
    draft: RwSignal<UserDraft>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <input
                class="form__input"
                class:form__input--invalid=move || errors.with(|e| e.get(field).is_some())
                type=input_type
                placeholder=placeholder
                prop:value=move || draft.with(|d| field_value(d, field))
                on:input=move |ev| edit(draft, errors, field, event_target_value(&ev))
            />
            <FieldError errors=errors field=field/>
        </label>
    }
}

#[component]
fn PasswordField(
    label: &'static str,
    field: UserField,
    draft: RwSignal<UserDraft>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <div class="form__password">
                <input
                    class="form__input"
                    class:form__input--invalid=move || errors.with(|e| e.get(field).is_some())
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder="••••••••"
                    prop:value=move || draft.with(|d| field_value(d, field))
                    on:input=move |ev| edit(draft, errors, field, event_target_value(&ev))
                />
                <button
                    class="form__reveal"
                    type="button"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
            <FieldError errors=errors field=field/>
        </label>
    }
}
