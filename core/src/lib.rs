//! Synchronous client core for the jsonplaceholder fake-data API.
//!
//! # Overview
//! Typed operations over the users, posts, comments, and todos endpoints:
//! list, get, filter, create, update, delete, plus two derived lookups
//! (comments of a user's last post, a user's open todos).
//!
//! # Design
//! - `PlaceholderClient` is generic over `Transport`, the one seam where
//!   I/O happens; tests swap in canned responses.
//! - Requests and responses are plain data (`HttpRequest`/`HttpResponse`);
//!   the ureq transport executes them blocking, one connection per call.
//! - Non-2xx statuses are data, not errors: operations return `None`,
//!   an empty list, or `false`. Only I/O and codec failures are `ApiError`.
//! - Entities are flat serde records; the codec trusts the remote's
//!   documented shapes and ignores fields the demo never reads.

pub mod client;
pub mod codec;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{PlaceholderClient, PostComments, BASE_URL};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Comment, Post, Todo, User};
