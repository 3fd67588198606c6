pub mod extract;
pub mod guard;
pub mod products;

use axum::{http::StatusCode, response::Html, Json};
use serde_json::json;

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": 200, "message": "OK" })))
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
