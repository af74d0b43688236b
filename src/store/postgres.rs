use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{
    author::Author,
    error::ApiError,
    news::{NewNews, News},
    source::SourceName,
};
use crate::store::NewsStore;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsStore for PgStore {
    async fn list_news(&self) -> Result<Vec<News>, ApiError> {
        sqlx::query_as::<_, News>("SELECT * FROM news ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn news_by_source_url(&self, source_url: &str) -> Result<Option<News>, ApiError> {
        sqlx::query_as::<_, News>("SELECT * FROM news WHERE source_url = $1")
            .bind(source_url)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn insert_news(&self, item: NewNews) -> Result<News, ApiError> {
        sqlx::query_as::<_, News>(
            r#"
            INSERT INTO news (title, description, image_url, source_url, published_at, author_id, source_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&item.title)
        .bind(&item.description)
        .bind(&item.image_url)
        .bind(&item.source_url)
        .bind(item.published_at)
        .bind(item.author_id)
        .bind(item.source_id)
        .fetch_one(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn list_authors(&self) -> Result<Vec<Author>, ApiError> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn author_by_id(&self, id: i32) -> Result<Option<Author>, ApiError> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_or_create_author(&self, name: &str) -> Result<(Author, bool), ApiError> {
        let inserted = sqlx::query_as::<_, Author>(
            "INSERT INTO authors (name) VALUES ($1) ON CONFLICT (name) DO NOTHING RETURNING *",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(author) = inserted {
            return Ok((author, true));
        }

        // The insert returned no row, so another row owns the name.
        let existing = sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE name = $1")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok((existing, false))
    }

    async fn list_source_names(&self) -> Result<Vec<SourceName>, ApiError> {
        sqlx::query_as::<_, SourceName>("SELECT * FROM source_names ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn source_name_by_id(&self, id: i32) -> Result<Option<SourceName>, ApiError> {
        sqlx::query_as::<_, SourceName>("SELECT * FROM source_names WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_or_create_source_name(
        &self,
        name: &str,
    ) -> Result<(SourceName, bool), ApiError> {
        let inserted = sqlx::query_as::<_, SourceName>(
            "INSERT INTO source_names (name) VALUES ($1) ON CONFLICT (name) DO NOTHING RETURNING *",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(source) = inserted {
            return Ok((source, true));
        }

        let existing = sqlx::query_as::<_, SourceName>("SELECT * FROM source_names WHERE name = $1")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok((existing, false))
    }
}
