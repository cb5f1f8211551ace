//! Route-level page components.

pub mod corners;
pub mod dashboard;
pub mod login;
pub mod posts;
pub mod users;
