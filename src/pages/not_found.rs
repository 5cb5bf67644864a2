use leptos::prelude::*;
use login_core::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Page not found."</h1>
                <p class="muted">
                    <a href=Route::Login.path()>"Back to login"</a>
                </p>
            </div>
        </div>
    }
}
