//! Shared application state provided to components via Leptos context.

pub mod session;
