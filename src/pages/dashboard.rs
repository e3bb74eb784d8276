//! Dashboard page for the signed-in user.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::router::routes::{LANDING_PATH, TICKETS_PATH};
use crate::state::session::{CurrentSession, SessionRepository};
use crate::types::ToastState;

/// Dashboard page. Only reachable with a valid session (see `Guarded`).
#[component]
pub fn DashboardPage() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let greeting = use_context::<CurrentSession>()
        .and_then(|current| current.0)
        .map(|session| format!("Welcome, {}", session.display_name()))
        .unwrap_or_else(|| "Welcome".to_owned());

    let on_logout = move |_| {
        SessionRepository::browser().clear();
        toast.set(ToastState::info("You have been logged out."));
        navigate(LANDING_PATH, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <A href=TICKETS_PATH attr:class="btn btn--primary">"Manage tickets"</A>
        </div>
    }
}
