//! DTOs mirroring the backend's collection payloads.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the PocketBase-style wire format
//! (camelCase keys, `{ items, totalItems, totalPages }` envelopes) so
//! serde handles the boundary and page logic stays schema-driven. Fields
//! the backend may omit default instead of failing the whole page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response of `POST /admins/auth-with-password`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent collection requests.
    pub token: String,
    /// The admin account the token was issued for.
    pub admin: AdminRecord,
}

/// Admin account embedded in an auth response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminRecord {
    #[serde(default)]
    pub id: String,
    pub email: String,
}

/// One page of a collection listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for RecordPage<T> {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 0,
            total_items: 0,
            total_pages: 0,
            items: Vec::new(),
        }
    }
}

/// A user record from the `users` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Uploaded avatar file name; empty when the user has none.
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub pri_location: Option<Location>,
    /// IDs of following users.
    #[serde(default)]
    pub followers: Vec<String>,
    /// IDs of posts authored by this user.
    #[serde(default)]
    pub posts: Vec<String>,
}

/// Primary location attached to a user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

/// A post record from the `posts` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub address: String,
    /// ID of the authoring user record.
    #[serde(default)]
    pub author: String,
    /// Uploaded image file name; empty when the post has none.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default)]
    pub created: String,
}

/// A corner record from the `corners` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// IDs of member users.
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub created: String,
}
