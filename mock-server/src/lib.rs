use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: Uuid,
    pub album_id: Uuid,
    pub url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPhoto {
    pub album_id: Uuid,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
pub struct PhotoFilter {
    #[serde(rename = "albumId")]
    pub album_id: Option<Uuid>,
}

#[derive(Default)]
pub struct Store {
    pub photos: HashMap<Uuid, Photo>,
    pub users: HashMap<Uuid, User>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/photos", get(list_photos).post(create_photo))
        .route("/photos/{id}", axum::routing::delete(delete_photo))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", axum::routing::delete(delete_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_photos(
    State(db): State<Db>,
    Query(filter): Query<PhotoFilter>,
) -> Json<Vec<Photo>> {
    let store = db.read().await;
    let photos = store
        .photos
        .values()
        .filter(|p| filter.album_id.map_or(true, |album_id| p.album_id == album_id))
        .cloned()
        .collect();
    Json(photos)
}

async fn create_photo(
    State(db): State<Db>,
    Json(input): Json<NewPhoto>,
) -> (StatusCode, Json<Photo>) {
    let photo = Photo {
        id: Uuid::new_v4(),
        album_id: input.album_id,
        url: input.url,
    };
    db.write().await.photos.insert(photo.id, photo.clone());
    (StatusCode::CREATED, Json(photo))
}

// Answers with the deleted resource, json-server style.
async fn delete_photo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Photo>, StatusCode> {
    let mut store = db.write().await;
    store.photos.remove(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let store = db.read().await;
    Json(store.users.values().cloned().collect())
}

async fn create_user(
    State(db): State<Db>,
    Json(mut fields): Json<serde_json::Map<String, serde_json::Value>>,
) -> (StatusCode, Json<User>) {
    fields.remove("id");
    let user = User {
        id: Uuid::new_v4(),
        fields,
    };
    db.write().await.users.insert(user.id, user.clone());
    (StatusCode::CREATED, Json(user))
}

// Answers 200 with an empty object, json-server style. The body says
// nothing about what was deleted.
async fn delete_user(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut store = db.write().await;
    store
        .users
        .remove(&id)
        .map(|_| Json(serde_json::json!({})))
        .ok_or(StatusCode::NOT_FOUND)
}
