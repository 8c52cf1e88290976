use axum::{routing::post, Router};

use crate::modules::product::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/generate-product/", post(controller::generate_product))
}
