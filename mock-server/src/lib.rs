use std::{sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub mod seed;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// Collections served by the app. Read-only for the lifetime of the router.
#[derive(Clone, Debug, Default)]
pub struct Fixtures {
    pub posts: Vec<Post>,
    pub users: Vec<User>,
}

pub type Db = Arc<Fixtures>;

/// Router over the built-in seed data.
pub fn app() -> Router {
    app_with(seed::fixtures())
}

pub fn app_with(fixtures: Fixtures) -> Router {
    let db: Db = Arc::new(fixtures);
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/status/{code}", get(fixed_status))
        .route("/broken/{kind}", get(broken_body))
        .route("/delay/{ms}/posts", get(delayed_posts))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    Json(db.posts.clone())
}

async fn get_post(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Post>, StatusCode> {
    db.posts
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    Json(db.users.clone())
}

async fn get_user(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<User>, StatusCode> {
    db.users
        .iter()
        .find(|u| u.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Answer with `code` and a well-formed empty array, so clients can tell
/// status handling apart from decoding.
async fn fixed_status(Path(code): Path<u16>) -> Result<Response, StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], "[]").into_response())
}

/// 200 responses whose body breaks the post shape in a specific way.
async fn broken_body(Path(kind): Path<String>) -> Result<Response, StatusCode> {
    let body = match kind.as_str() {
        "not-json" => "<html>not json</html>",
        "missing-title" => r#"[{"id":1,"userId":1,"title":"ok","body":"b"},{"id":2,"userId":1,"body":"b"}]"#,
        "duplicate-ids" => r#"[{"id":1,"userId":1,"title":"a","body":"b"},{"id":1,"userId":2,"title":"c","body":"d"}]"#,
        _ => return Err(StatusCode::NOT_FOUND),
    };
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

async fn delayed_posts(State(db): State<Db>, Path(ms): Path<u64>) -> Json<Vec<Post>> {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    Json(db.posts.clone())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn post_serializes_user_id_in_camel_case() {
        let post = Post {
            id: 1,
            user_id: 9,
            title: "Test".to_string(),
            body: "Body".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 9);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn user_serializes_nested_objects() {
        let user = seed::users().remove(0);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["address"]["geo"]["lat"], "-37.3159");
        assert_eq!(json["company"]["catchPhrase"], "Multi-layered client-server neural-net");
    }

    #[test]
    fn seed_ids_are_unique() {
        let fixtures = seed::fixtures();
        let post_ids: HashSet<i64> = fixtures.posts.iter().map(|p| p.id).collect();
        assert_eq!(post_ids.len(), fixtures.posts.len());
        let user_ids: HashSet<i64> = fixtures.users.iter().map(|u| u.id).collect();
        assert_eq!(user_ids.len(), fixtures.users.len());
    }
}
