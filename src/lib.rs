//! # ticketapp
//!
//! Leptos + WASM frontend for the ticket tracker: the route table, the
//! session guard that runs before each navigation, and the data contracts
//! shared with the API client.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod types;
pub mod util;
