use crate::{
    models::{
        error::ApiError,
        news::{NewNews, NewsSubmission},
    },
    utils::state::AppState,
};
use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;

pub async fn get_all_news(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let all_news = state.store.list_news().await?;
    if all_news.is_empty() {
        return Err(ApiError::not_found("No news found"));
    }
    Ok((StatusCode::OK, Json(all_news)))
}

/// Accepts a submission, reuses or creates the referenced author and source
/// name, then writes the news row. Rejected before any write when the
/// source URL is already known.
pub async fn add_news(
    State(state): State<AppState>,
    Json(news): Json<NewsSubmission>,
) -> Result<impl IntoResponse, ApiError> {
    if state
        .store
        .news_by_source_url(&news.source_url)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("The news already exist in the database"));
    }

    let (author, _) = state.store.get_or_create_author(&news.author).await?;
    let (source, _) = state
        .store
        .get_or_create_source_name(&news.source_name)
        .await?;

    let created = state
        .store
        .insert_news(NewNews {
            title: news.title,
            description: news.description,
            image_url: news.image_url,
            source_url: news.source_url,
            published_at: news.published_at,
            author_id: author.id,
            source_id: source.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}
