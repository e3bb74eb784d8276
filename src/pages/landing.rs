//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::routes::{LOGIN_PATH, SIGN_UP_PATH};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"TicketApp"</h1>
            <p>"Track support requests from open to closed."</p>
            <nav class="landing-page__actions">
                <A href=LOGIN_PATH attr:class="btn btn--primary">"Log in"</A>
                <A href=SIGN_UP_PATH attr:class="btn">"Get started"</A>
            </nav>
        </div>
    }
}
