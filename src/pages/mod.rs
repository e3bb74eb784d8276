//! Top-level pages, one per route table entry.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod sign_up;
pub mod tickets;
