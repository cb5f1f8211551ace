//! Reusable UI components and the authenticated shell chrome.

pub mod layout;
pub mod pagination;
pub mod sidebar;
pub mod stat_card;
