use leptos::prelude::*;

use crate::components::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <LoginForm />
        </div>
    }
}
