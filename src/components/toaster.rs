//! Toaster Component
//!
//! Stack of transient notifications in the corner of the screen.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_toasts, use_app_store};

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || store_toasts(&store)
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast toast--{}", toast.level.as_str())
                            title="Dismiss"
                            on:click=move |_| ctx.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
