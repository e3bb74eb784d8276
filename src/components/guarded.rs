//! Route wrapper that runs the navigation guard before mounting a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in `app` mounts its page through `Guarded`, so the guard is
//! evaluated on each navigation against the session in `localStorage`. The
//! session it resolved is provided to the page as `CurrentSession`.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::router::guard::{self, Navigation};
use crate::state::session::{CurrentSession, SessionRepository};

/// Mount `children` if the guard lets navigation to `path` proceed,
/// otherwise redirect.
#[component]
pub fn Guarded(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let outcome = guard::evaluate(path, &SessionRepository::browser());
    match outcome.navigation {
        Navigation::Proceed => {
            provide_context(CurrentSession(outcome.session));
            children().into_any()
        }
        Navigation::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
    }
}
