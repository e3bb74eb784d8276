//! Toast notification overlay bound to the shared `ToastState` signal.

use leptos::prelude::*;

use crate::types::ToastState;

#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        <Show when=move || toast.get().show>
            <div class=move || format!("toast toast--{}", toast.get().kind.as_str()) role="status">
                <span class="toast__message">{move || toast.get().message}</span>
                <button class="toast__close" on:click=move |_| toast.update(ToastState::dismiss)>
                    "×"
                </button>
            </div>
        </Show>
    }
}
