//! Dashboard Page
//!
//! Protected: reads the session once on mount and bounces to login when
//! there is none.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use login_core::{greeting_now, guard_dashboard, logout, GuardDecision, Session};

use crate::components::TodoPanel;
use crate::context::use_app_context;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();

    match guard_dashboard(ctx.sessions().as_ref()) {
        GuardDecision::Render(session) => view! { <Dashboard session=session /> }.into_any(),
        GuardDecision::Redirect(route) => view! { <Redirect path=route.path() /> }.into_any(),
    }
}

#[component]
fn Dashboard(session: Session) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let services = ctx.services();
    let title = greeting_now(&session, services.clock.as_ref());
    log::info!("[DASHBOARD] Showing dashboard for {}", session.full_name());

    let on_logout = move |_| {
        let next = logout(ctx.sessions().as_ref());
        navigate(next.path(), Default::default());
    };

    view! {
        <div class="dashboard">
            <div class="dashboard__topbar">
                <button class="outline-btn" on:click=on_logout>"Logout"</button>
            </div>

            <div class="dashboard__content">
                <h1 class="greeting">{title}</h1>
                <TodoPanel />
            </div>
        </div>
    }
}
