//! Mobile Login Portal App
//!
//! Root component: provides services and the toast store, sets up routing.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::StaticSegment;
use login_core::Services;
use reactive_stores::Store;

use crate::components::Toaster;
use crate::context::AppContext;
use crate::pages::{DashboardPage, LoginPage, NotFoundPage, RegisterPage};
use crate::store::AppState;

#[component]
pub fn App(services: Services) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new(services, store));

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/login" /> } />
                    <Route path=StaticSegment("login") view=LoginPage />
                    <Route path=StaticSegment("register") view=RegisterPage />
                    <Route path=StaticSegment("dashboard") view=DashboardPage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}
