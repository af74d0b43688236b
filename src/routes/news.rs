use axum::{routing::get, Router};

use crate::handlers::{
    authors::{add_author, get_all_authors, get_author_by_id},
    news::{add_news, get_all_news},
    sources::{add_source_name, get_all_source_names, get_source_name_by_id},
};
use crate::utils::state::AppState;

pub fn news_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_news).post(add_news))
        .route("/authors", get(get_all_authors).post(add_author))
        .route("/authors/{id}", get(get_author_by_id))
        .route(
            "/sources/names",
            get(get_all_source_names).post(add_source_name),
        )
        .route("/sources/names/{id}", get(get_source_name_by_id))
}
