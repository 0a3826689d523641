//! Demo driver: a fixed script of CRUD calls against the fake-data API.
//!
//! Runs without arguments, prints each result as one line, and writes the
//! comments of user 1's last post to a JSON file in the current directory.
//! A transport or decode failure aborts with a non-zero exit; a refused
//! remote status (absent user, empty list, false delete) is printed and the
//! script moves on.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use placeholder_core::{codec, PlaceholderClient, PostComments, Transport, User};

fn main() -> anyhow::Result<()> {
    run(&PlaceholderClient::new(), Path::new("."))
}

fn run<T: Transport>(client: &PlaceholderClient<T>, out_dir: &Path) -> anyhow::Result<()> {
    let new_user = User::new(11, "New User", "newuser@example.com");
    let created = client.create_user(&new_user)?;
    println!("Created user: {created:?}");

    // Rename and push the change back; if creation was refused, the local
    // record stands in for the server echo.
    let mut user = created.unwrap_or(new_user);
    user.name = "Updated User".to_string();
    let updated = client.update_user(&user)?;
    println!("Updated user: {updated:?}");

    let deleted = client.delete_user(user.id)?;
    println!("User deleted: {deleted}");

    let users = client.list_users()?;
    println!("All users: {users:?}");

    let by_id = client.get_user(1)?;
    println!("User by id: {by_id:?}");

    let by_username = client.find_users_by_username("Bret")?;
    println!("Users by username: {by_username:?}");

    let user_id = 1;
    let last_post = client.comments_for_last_post(user_id)?;
    save_comments(out_dir, user_id, last_post.as_ref())?;

    let open = client.open_todos(user_id)?;
    println!("Open todos for user {user_id}: {open:?}");

    Ok(())
}

/// Write `user-{uid}-post-{pid}-comments.json` into `dir`, overwriting any
/// existing file. The post id comes from the lookup result — comments alone
/// do not identify the selected post. Returns the written path, or `None`
/// when there were no comments to save.
fn save_comments(
    dir: &Path,
    user_id: i64,
    result: Option<&PostComments>,
) -> anyhow::Result<Option<PathBuf>> {
    let Some(last) = result.filter(|r| !r.comments.is_empty()) else {
        println!("No comments to save.");
        return Ok(None);
    };

    let path = dir.join(format!("user-{user_id}-post-{}-comments.json", last.post_id));
    let json = codec::encode_many(&last.comments)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    println!("Comments saved to file: {}", path.display());
    Ok(Some(path))
}
