pub mod postgres;

#[cfg(test)]
pub mod mem;

use async_trait::async_trait;

use crate::models::{
    author::Author,
    error::ApiError,
    news::{NewNews, News},
    source::SourceName,
};

/// Data access seam for the news tables. `make_app` wires the Postgres
/// implementation; tests drive the router with the in-memory one.
#[async_trait]
pub trait NewsStore: Send + Sync {
    async fn list_news(&self) -> Result<Vec<News>, ApiError>;
    async fn news_by_source_url(&self, source_url: &str) -> Result<Option<News>, ApiError>;
    async fn insert_news(&self, item: NewNews) -> Result<News, ApiError>;

    async fn list_authors(&self) -> Result<Vec<Author>, ApiError>;
    async fn author_by_id(&self, id: i32) -> Result<Option<Author>, ApiError>;
    /// Returns the author row for `name`, creating it if absent. The flag is
    /// true when this call created the row.
    async fn get_or_create_author(&self, name: &str) -> Result<(Author, bool), ApiError>;

    async fn list_source_names(&self) -> Result<Vec<SourceName>, ApiError>;
    async fn source_name_by_id(&self, id: i32) -> Result<Option<SourceName>, ApiError>;
    async fn get_or_create_source_name(&self, name: &str)
        -> Result<(SourceName, bool), ApiError>;
}
