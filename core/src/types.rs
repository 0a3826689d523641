//! Entity records exchanged with the fake-data API.
//!
//! # Design
//! All four kinds are flat value records keyed by a positive integer id.
//! Field declaration order matches the wire key order, so serde_json emits
//! request bodies with keys in exactly the order the remote documents.
//! Decoding ignores fields the demo never reads (address, phone, company on
//! users, for instance) — the remote's response shapes are trusted, not
//! validated.

use serde::{Deserialize, Serialize};

/// A user account.
///
/// `username` appears in the remote's responses and drives the
/// `?username=` filter, but is omitted from encoded request bodies: the
/// create/update payloads carry only `id`, `name`, and `email`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// A post authored by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// A comment attached to a post.
///
/// The wire format carries only `postId`; there is no embedded post object.
/// Callers that need the post itself must keep it from the call that
/// produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// A todo item belonging to a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

impl User {
    pub fn new(id: i64, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            username: None,
        }
    }
}
