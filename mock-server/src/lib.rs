use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub code: String,
    pub category: String,
    pub tags: Vec<String>,
    pub release_date: String,
    pub price: f64,
    pub description: String,
    pub star_rating: f64,
    pub image_url: String,
}

/// Body accepted by create and update. An `id` in the body is ignored;
/// identity comes from the store or the path.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub star_rating: f64,
    #[serde(default)]
    pub image_url: String,
}

impl ItemInput {
    fn into_item(self, id: u64) -> Item {
        Item {
            id,
            name: self.name,
            code: self.code,
            category: self.category,
            tags: self.tags,
            release_date: self.release_date,
            price: self.price,
            description: self.description,
            star_rating: self.star_rating,
            image_url: self.image_url,
        }
    }
}

/// Items in insertion order.
pub type Db = Arc<RwLock<Vec<Item>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(items: Vec<Item>) -> Router {
    let db: Db = Arc::new(RwLock::new(items));
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, items: Vec<Item>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(items)).await
}

/// A small catalog for local development.
pub fn sample_items() -> Vec<Item> {
    let item = |id: u64, name: &str, code: &str, category: &str, price: f64, rating: f64| Item {
        id,
        name: name.to_string(),
        code: code.to_string(),
        category: category.to_string(),
        tags: vec![category.to_lowercase()],
        release_date: "March 19, 2016".to_string(),
        price,
        description: format!("{name} from the sample catalog"),
        star_rating: rating,
        image_url: format!("/images/{code}.png"),
    };
    vec![
        item(1, "Leaf Rake", "GDN-0011", "Garden", 19.95, 3.2),
        item(2, "Garden Cart", "GDN-0023", "Garden", 32.99, 4.2),
        item(5, "Hammer", "TBX-0048", "Toolbox", 8.9, 4.8),
        item(8, "Saw", "TBX-0022", "Toolbox", 11.55, 3.7),
        item(10, "Video Game Controller", "GMG-0042", "Gaming", 35.95, 4.6),
    ]
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    Json(db.read().await.clone())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<ItemInput>,
) -> Result<(StatusCode, Json<Item>), StatusCode> {
    let mut items = db.write().await;
    let id = items
        .iter()
        .map(|i| i.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    let item = input.into_item(id);
    items.push(item.clone());
    info!(id, name = %item.name, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

async fn get_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, StatusCode> {
    let items = db.read().await;
    items
        .iter()
        .find(|i| i.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<ItemInput>,
) -> Result<Json<Item>, StatusCode> {
    let mut items = db.write().await;
    let slot = items
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = input.into_item(id);
    info!(id, "item updated");
    Ok(Json(slot.clone()))
}

async fn delete_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut items = db.write().await;
    let index = items
        .iter()
        .position(|i| i.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    items.remove(index);
    info!(id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}
