//! Reusable UI components shared across pages.

pub mod guarded;
pub mod toast;
