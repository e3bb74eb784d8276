//! Sign-up page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::routes::LOGIN_PATH;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <p>
                    "Already registered? "
                    <A href=LOGIN_PATH>"Log in"</A>
                </p>
            </div>
        </div>
    }
}
