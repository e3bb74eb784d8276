//! Ticket list page.

use leptos::prelude::*;

use crate::types::TicketStatus;

#[component]
pub fn TicketsPage() -> impl IntoView {
    view! {
        <div class="tickets-page">
            <header class="tickets-page__header">
                <h1>"Tickets"</h1>
            </header>
            <ul class="tickets-page__legend">
                {TicketStatus::ALL
                    .into_iter()
                    .map(|status| {
                        view! {
                            <li class=format!("status-badge status-badge--{}", status.as_str())>
                                {status.label()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="tickets-page__empty">"No tickets yet."</p>
        </div>
    }
}
