//! Route table and the navigation guard that protects it.
//!
//! DESIGN
//! ======
//! Route policy lives in `routes` as data; `guard` holds the decision
//! function. Pages are wired to the table in `app`.

pub mod guard;
pub mod routes;

pub use guard::Navigation;
pub use routes::{ROUTES, Page, RouteDef};
