use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Company,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// Everything the server knows. Ids are kept ordered so listings are stable.
#[derive(Debug, Default)]
pub struct Store {
    pub users: BTreeMap<u64, User>,
    pub posts: BTreeMap<u64, Post>,
}

/// (name, username, email, city, company)
const SEED_USERS: [(&str, &str, &str, &str, &str); 5] = [
    ("Leanne Graham", "Bret", "Sincere@april.biz", "Gwenborough", "Romaguera-Crona"),
    ("Ervin Howell", "Antonette", "Shanna@melissa.tv", "Wisokyburgh", "Deckow-Crist"),
    ("Clementine Bauch", "Samantha", "Nathan@yesenia.net", "McKenziehaven", "Romaguera-Jacobson"),
    ("Patricia Lebsack", "Karianne", "Julianne.OConner@kory.org", "South Elvis", "Robel-Corkery"),
    ("Chelsey Dietrich", "Kamren", "Lucio_Hettinger@annie.ca", "Roscoeview", "Keebler LLC"),
];

pub const SEED_POSTS_PER_USER: u64 = 2;

impl Store {
    /// Five users with two posts each.
    pub fn seeded() -> Self {
        let mut store = Store::default();
        for (i, (name, username, email, city, company)) in SEED_USERS.iter().enumerate() {
            let id = i as u64 + 1;
            store.users.insert(
                id,
                User {
                    id,
                    name: name.to_string(),
                    username: username.to_string(),
                    email: email.to_string(),
                    address: Address {
                        city: city.to_string(),
                        ..Address::default()
                    },
                    phone: String::new(),
                    website: String::new(),
                    company: Company {
                        name: company.to_string(),
                        ..Company::default()
                    },
                },
            );
            for n in 0..SEED_POSTS_PER_USER {
                let post_id = store.next_post_id();
                store.posts.insert(
                    post_id,
                    Post {
                        id: post_id,
                        user_id: id,
                        title: format!("{username} post {}", n + 1),
                        body: format!("Seeded post number {} by {name}", n + 1),
                    },
                );
            }
        }
        store
    }

    fn next_post_id(&self) -> u64 {
        self.posts.keys().next_back().copied().unwrap_or(0) + 1
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let store = db.read().await;
    Json(store.users.values().cloned().collect())
}

async fn get_user(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store.users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(mut input): Json<User>,
) -> Result<Json<User>, StatusCode> {
    let mut store = db.write().await;
    let user = store.users.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    input.id = id;
    *user = input;
    info!(user_id = id, "user updated");
    Ok(Json(user.clone()))
}

async fn delete_user(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    store.users.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    info!(user_id = id, "user deleted");
    Ok(Json(json!({})))
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(store.posts.values().cloned().collect())
}

async fn create_post(State(db): State<Db>, Json(input): Json<CreatePost>) -> (StatusCode, Json<Post>) {
    let mut store = db.write().await;
    let post = Post {
        id: store.next_post_id(),
        user_id: input.user_id,
        title: input.title,
        body: input.body,
    };
    store.posts.insert(post.id, post.clone());
    info!(post_id = post.id, user_id = post.user_id, "post created");
    (StatusCode::CREATED, Json(post))
}

async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Post>, StatusCode> {
    let store = db.read().await;
    store.posts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn delete_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    store.posts.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    info!(post_id = id, "post deleted");
    Ok(Json(json!({})))
}
