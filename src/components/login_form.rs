//! Login Form Component
//!
//! Mobile + password form. Submitting runs the login flow: simulated
//! round trip, credential check, session write, redirect to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use login_core::form::{LoginField, LoginForm as LoginFields};
use login_core::{AuthError, FlowKind, Route};

use crate::components::{SocialLoginButtons, TextField};
use crate::context::use_app_context;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let flow = StoredValue::new(ctx.services().login_flow());
    let form = RwSignal::new(LoginFields::default());
    let (loading, set_loading) = signal(false);
    let (invalid, set_invalid) = signal::<Option<String>>(None);

    // Leaving the page drops whatever the pending check would have done
    let abort = flow.with_value(|f| f.abort_handle());
    on_cleanup(move || abort.abort());

    let on_field = move |(name, value): (String, String)| {
        if let Some(field) = LoginField::from_name(&name) {
            form.update(|f| f.set(field, value));
        }
    };

    let go_register = {
        let navigate = navigate.clone();
        move |_| navigate(Route::Register.path(), Default::default())
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = form.get_untracked();
        if let Err(e) = fields.validate() {
            set_invalid.set(Some(e.to_string()));
            return;
        }
        set_invalid.set(None);

        let flow = flow.get_value();
        let Some(guard) = flow.begin() else {
            log::debug!("[LOGIN] Submit ignored, check already in flight");
            return;
        };
        set_loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = flow.submit(guard, fields).await;
            if matches!(result, Err(AuthError::Aborted)) {
                return;
            }
            set_loading.set(false);
            match result {
                Ok(outcome) => {
                    ctx.notify(outcome.notice);
                    navigate(outcome.redirect.path(), Default::default());
                }
                Err(e) => {
                    if let Some(notice) = e.notice(FlowKind::Login) {
                        ctx.notify(notice);
                    }
                }
            }
        });
    };

    view! {
        <div class="auth-card">
            <div class="auth-card__header">
                <h1>"Welcome Back"</h1>
                <p class="muted">"Enter your credentials to login"</p>
            </div>

            <form class="auth-form" on:submit=on_submit>
                <TextField
                    name="mobile"
                    label="Mobile Number"
                    input_type="tel"
                    placeholder="1234567890"
                    pattern="[0-9]{10}"
                    value=Signal::derive(move || form.with(|f| f.get(LoginField::Mobile).to_string()))
                    on_input=on_field
                />
                <TextField
                    name="password"
                    label="Password"
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.get(LoginField::Password).to_string()))
                    on_input=on_field
                />

                {move || invalid.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button class="primary-btn" type="submit" disabled=move || loading.get()>
                    {move || FlowKind::Login.submit_label(loading.get())}
                </button>
            </form>

            <SocialLoginButtons />

            <p class="auth-card__footer">
                "Don't have an account? "
                <button type="button" class="link-btn" on:click=go_register>"Register"</button>
            </p>
        </div>
    }
}
