//! Social Login Buttons
//!
//! Google / Facebook / Apple buttons. Placeholders only: each shows a
//! "coming soon" toast and changes nothing.

use leptos::prelude::*;
use login_core::SocialProvider;

use crate::context::use_app_context;

#[component]
pub fn SocialLoginButtons() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="divider">
            <span>"Or continue with"</span>
        </div>
        <div class="social-row">
            {SocialProvider::ALL.iter().map(|&provider| {
                let name = provider.to_string();
                view! {
                    <button
                        type="button"
                        class=format!("social-btn social-btn--{}", name.to_lowercase())
                        on:click=move |_| ctx.notify(provider.coming_soon())
                    >
                        {name.clone()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
