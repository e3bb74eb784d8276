//! Login page. Credential exchange belongs to the account service; a
//! successful login stores the session through `SessionRepository::save`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::routes::SIGN_UP_PATH;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log in"</h1>
                <p class="login-card__subtitle">"Welcome back."</p>
                <p>
                    "No account yet? "
                    <A href=SIGN_UP_PATH>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
