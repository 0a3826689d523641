//! Typed client for the jsonplaceholder REST API.
//!
//! # Design
//! `PlaceholderClient` pairs a base URL with a `Transport` and exposes one
//! operation per endpoint the demo touches, plus two derived operations.
//! A non-2xx status is not an error: reading operations return an empty
//! list or `None`, `delete_user` maps the status class to a boolean. Only
//! transport and codec failures propagate as `ApiError`.

use serde::de::DeserializeOwned;

use crate::codec;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Comment, Post, Todo, User};

/// Base URL of the public fake-data service.
pub const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// The comments of a user's last post, together with that post's id.
///
/// Comments carry `post_id` on the wire but the selected post itself is an
/// intermediate of the lookup; callers that need the post id (the file
/// writer does, for its filename) take it from here instead of re-deriving
/// it from comment contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostComments {
    pub post_id: i64,
    pub comments: Vec<Comment>,
}

/// Synchronous client for the users/posts/comments/todos endpoints.
#[derive(Debug, Clone)]
pub struct PlaceholderClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl PlaceholderClient {
    /// Client against the public service, over a real blocking transport.
    pub fn new() -> Self {
        Self::with_transport(BASE_URL, UreqTransport::new())
    }

    /// Client against a different host (a local mock, for instance).
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl Default for PlaceholderClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> PlaceholderClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a collection endpoint; any non-200 status yields an empty list.
    fn get_many<E: DeserializeOwned>(&self, path: &str) -> Result<Vec<E>, ApiError> {
        let response = self.transport.execute(&HttpRequest::get(self.url(path)))?;
        if response.status != 200 {
            return Ok(Vec::new());
        }
        codec::decode_many(&response.body)
    }

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_many("/users")
    }

    pub fn get_user(&self, id: i64) -> Result<Option<User>, ApiError> {
        let response = self
            .transport
            .execute(&HttpRequest::get(self.url(&format!("/users/{id}"))))?;
        if response.status != 200 {
            return Ok(None);
        }
        codec::decode_one(&response.body).map(Some)
    }

    pub fn find_users_by_username(&self, username: &str) -> Result<Vec<User>, ApiError> {
        self.get_many(&format!("/users?username={username}"))
    }

    /// POST the user; the server assigns fields and echoes the record back.
    pub fn create_user(&self, user: &User) -> Result<Option<User>, ApiError> {
        let body = codec::encode(user)?;
        let response = self
            .transport
            .execute(&HttpRequest::post(self.url("/users"), body))?;
        if response.status != 201 {
            return Ok(None);
        }
        codec::decode_one(&response.body).map(Some)
    }

    pub fn update_user(&self, user: &User) -> Result<Option<User>, ApiError> {
        let body = codec::encode(user)?;
        let response = self
            .transport
            .execute(&HttpRequest::put(self.url(&format!("/users/{}", user.id)), body))?;
        if response.status != 200 {
            return Ok(None);
        }
        codec::decode_one(&response.body).map(Some)
    }

    /// True iff the remote answered with a 2xx status.
    pub fn delete_user(&self, id: i64) -> Result<bool, ApiError> {
        let response = self
            .transport
            .execute(&HttpRequest::delete(self.url(&format!("/users/{id}"))))?;
        Ok(response.is_success())
    }

    pub fn list_posts_of_user(&self, user_id: i64) -> Result<Vec<Post>, ApiError> {
        self.get_many(&format!("/users/{user_id}/posts"))
    }

    pub fn list_comments_of_post(&self, post_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.get_many(&format!("/posts/{post_id}/comments"))
    }

    pub fn list_todos_of_user(&self, user_id: i64) -> Result<Vec<Todo>, ApiError> {
        self.get_many(&format!("/users/{user_id}/todos"))
    }

    /// Comments of the user's last post — "last" meaning maximum post id,
    /// ties broken by first encountered. `None` when the user has no posts.
    pub fn comments_for_last_post(&self, user_id: i64) -> Result<Option<PostComments>, ApiError> {
        let posts = self.list_posts_of_user(user_id)?;

        // Strictly-greater comparison keeps the first post on equal ids.
        let mut last: Option<&Post> = None;
        for post in &posts {
            if last.map_or(true, |best| post.id > best.id) {
                last = Some(post);
            }
        }
        let Some(last) = last else {
            return Ok(None);
        };

        let comments = self.list_comments_of_post(last.id)?;
        Ok(Some(PostComments {
            post_id: last.id,
            comments,
        }))
    }

    /// The user's todos with `completed == false`, in server order.
    pub fn open_todos(&self, user_id: i64) -> Result<Vec<Todo>, ApiError> {
        let todos = self.list_todos_of_user(user_id)?;
        Ok(todos.into_iter().filter(|t| !t.completed).collect())
    }
}
