//! Register Form Component
//!
//! Collects name, mobile and password. The mock flow accepts anything that
//! passes the field checks and sends the user to login; nothing is stored.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use login_core::form::{RegisterField, RegisterForm as RegisterFields};
use login_core::{AuthError, FlowKind, Route};

use crate::components::{SocialLoginButtons, TextField};
use crate::context::use_app_context;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let flow = StoredValue::new(ctx.services().register_flow());
    let form = RwSignal::new(RegisterFields::default());
    let (loading, set_loading) = signal(false);
    let (invalid, set_invalid) = signal::<Option<String>>(None);

    let abort = flow.with_value(|f| f.abort_handle());
    on_cleanup(move || abort.abort());

    let on_field = move |(name, value): (String, String)| {
        if let Some(field) = RegisterField::from_name(&name) {
            form.update(|f| f.set(field, value));
        }
    };
    let field_value = move |field: RegisterField| {
        Signal::derive(move || form.with(|f| f.get(field).to_string()))
    };

    let go_login = {
        let navigate = navigate.clone();
        move |_| navigate(Route::Login.path(), Default::default())
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
                    log::error!("[REGISTER] {}", e);
                    if let Some(notice) = e.notice(FlowKind::Register) {
                        ctx.notify(notice);
                    }
                }
            }
        });
    };

    view! {
        <div class="auth-card">
            <div class="auth-card__header">
                <h1>"Create an Account"</h1>
                <p class="muted">"Enter your details to register"</p>
            </div>

            <form class="auth-form" on:submit=on_submit>
                <TextField
                    name="firstName"
                    label="First Name"
                    placeholder="John"
                    value=field_value(RegisterField::FirstName)
                    on_input=on_field
                />
                <TextField
                    name="lastName"
                    label="Last Name"
                    placeholder="Doe"
                    value=field_value(RegisterField::LastName)
                    on_input=on_field
                />
                <TextField
                    name="mobile"
                    label="Mobile Number"
                    input_type="tel"
                    placeholder="1234567890"
                    pattern="[0-9]{10}"
                    value=field_value(RegisterField::Mobile)
                    on_input=on_field
                />
                <TextField
                    name="password"
                    label="Password"
                    input_type="password"
                    value=field_value(RegisterField::Password)
                    on_input=on_field
                />

                {move || invalid.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button class="primary-btn" type="submit" disabled=move || loading.get()>
                    {move || FlowKind::Register.submit_label(loading.get())}
                </button>
            </form>

            <SocialLoginButtons />

            <p class="auth-card__footer">
                "Already have an account? "
                <button type="button" class="link-btn" on:click=go_login>"Login"</button>
            </p>
        </div>
    }
}
