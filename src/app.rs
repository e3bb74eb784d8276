//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{guarded::Guarded, toast::Toast};
use crate::config::AppConfig;
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, login::LoginPage, sign_up::SignUpPage,
    tickets::TicketsPage,
};
use crate::router::routes::{
    DASHBOARD_PATH, LANDING_PATH, LOGIN_PATH, Page, SIGN_UP_PATH, TICKETS_PATH, by_page,
};
use crate::types::ToastState;

/// Root application component.
///
/// Provides shared state contexts and mounts every route-table entry behind
/// the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toast = RwSignal::new(ToastState::default());
    provide_context(toast);

    let base = AppConfig::from_env().base_url.unwrap_or_default();

    view! {
        <Title text="TicketApp"/>

        <Router base=base>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route
                    path=StaticSegment(by_page(Page::Landing).segment())
                    view=|| view! { <Guarded path=LANDING_PATH><LandingPage/></Guarded> }
                />
                <Route
                    path=StaticSegment(by_page(Page::Login).segment())
                    view=|| view! { <Guarded path=LOGIN_PATH><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment(by_page(Page::SignUp).segment())
                    view=|| view! { <Guarded path=SIGN_UP_PATH><SignUpPage/></Guarded> }
                />
                <Route
                    path=StaticSegment(by_page(Page::Dashboard).segment())
                    view=|| view! { <Guarded path=DASHBOARD_PATH><DashboardPage/></Guarded> }
                />
                <Route
                    path=StaticSegment(by_page(Page::Tickets).segment())
                    view=|| view! { <Guarded path=TICKETS_PATH><TicketsPage/></Guarded> }
                />
            </Routes>
        </Router>
        <Toast/>
    }
}
