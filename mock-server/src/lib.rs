//! In-process replica of the jsonplaceholder endpoints the demo touches.
//!
//! Serves a fixed dataset: two users, a handful of posts, comments, and
//! todos for user 1. Like the real fake-data service, writes do not
//! persist — POST and PUT echo the payload back, DELETE answers 200 with
//! an empty body — so the state needs no locking.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
struct UserFilter {
    username: Option<String>,
}

/// The read-only dataset behind every route.
pub struct Fixture {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub todos: Vec<Todo>,
}

pub type Db = Arc<Fixture>;

fn user(id: i64, name: &str, username: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        username: Some(username.to_string()),
    }
}

/// Two users, three posts, comments on the posts, four todos — enough to
/// drive every demo step against user 1.
pub fn fixture() -> Fixture {
    Fixture {
        users: vec![
            user(1, "Leanne Graham", "Bret", "Sincere@april.biz"),
            user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
        ],
        posts: vec![
            Post {
                id: 1,
                user_id: 1,
                title: "sunt aut facere repellat".to_string(),
                body: "quia et suscipit suscipit recusandae".to_string(),
            },
            Post {
                id: 2,
                user_id: 1,
                title: "qui est esse".to_string(),
                body: "est rerum tempore vitae".to_string(),
            },
            Post {
                id: 3,
                user_id: 1,
                title: "ea molestias quasi exercitationem".to_string(),
                body: "et iusto sed quo iure".to_string(),
            },
        ],
        comments: vec![
            Comment {
                id: 1,
                post_id: 1,
                name: "id labore ex et quam laborum".to_string(),
                email: "Eliseo@gardner.biz".to_string(),
                body: "laudantium enim quasi est".to_string(),
            },
            Comment {
                id: 2,
                post_id: 3,
                name: "quo vero reiciendis velit".to_string(),
                email: "Jayne_Kuhic@sydney.com".to_string(),
                body: "est natus enim nihil est dolore".to_string(),
            },
            Comment {
                id: 3,
                post_id: 3,
                name: "odio adipisci rerum aut animi".to_string(),
                email: "Nikita@garfield.biz".to_string(),
                body: "quia molestiae reprehenderit quasi aspernatur".to_string(),
            },
        ],
        todos: vec![
            Todo {
                id: 1,
                user_id: 1,
                title: "delectus aut autem".to_string(),
                completed: false,
            },
            Todo {
                id: 2,
                user_id: 1,
                title: "quis ut nam facilis".to_string(),
                completed: false,
            },
            Todo {
                id: 3,
                user_id: 1,
                title: "fugiat veniam minus".to_string(),
                completed: true,
            },
            Todo {
                id: 4,
                user_id: 2,
                title: "et porro tempora".to_string(),
                completed: true,
            },
        ],
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(fixture());
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/{id}/posts", get(posts_of_user))
        .route("/users/{id}/todos", get(todos_of_user))
        .route("/posts/{id}/comments", get(comments_of_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(
    State(db): State<Db>,
    Query(filter): Query<UserFilter>,
) -> Json<Vec<User>> {
    let users = match filter.username {
        Some(ref username) => db
            .users
            .iter()
            .filter(|u| u.username.as_deref() == Some(username))
            .cloned()
            .collect(),
        None => db.users.clone(),
    };
    Json(users)
}

async fn get_user(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<User>, StatusCode> {
    db.users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

// The real service does not persist writes; echo like it does.
async fn create_user(Json(input): Json<User>) -> (StatusCode, Json<User>) {
    (StatusCode::CREATED, Json(input))
}

async fn update_user(Path(id): Path<i64>, Json(mut input): Json<User>) -> Json<User> {
    input.id = id;
    Json(input)
}

async fn delete_user(Path(_id): Path<i64>) -> StatusCode {
    StatusCode::OK
}

async fn posts_of_user(State(db): State<Db>, Path(id): Path<i64>) -> Json<Vec<Post>> {
    Json(db.posts.iter().filter(|p| p.user_id == id).cloned().collect())
}

async fn todos_of_user(State(db): State<Db>, Path(id): Path<i64>) -> Json<Vec<Todo>> {
    Json(db.todos.iter().filter(|t| t.user_id == id).cloned().collect())
}

async fn comments_of_post(State(db): State<Db>, Path(id): Path<i64>) -> Json<Vec<Comment>> {
    Json(
        db.comments
            .iter()
            .filter(|c| c.post_id == id)
            .cloned()
            .collect(),
    )
}
