use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::models::{
    author::Author,
    error::ApiError,
    news::{NewNews, News},
    source::SourceName,
};
use crate::store::NewsStore;

/// In-memory [`NewsStore`] mirroring the Postgres schema, unique
/// constraints included. Backs the endpoint and store tests.
#[derive(Default)]
pub struct MemStore {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    news: Vec<News>,
    authors: Vec<Author>,
    source_names: Vec<SourceName>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NewsStore for MemStore {
    async fn list_news(&self) -> Result<Vec<News>, ApiError> {
        Ok(self.tables.lock().unwrap().news.clone())
    }

    async fn news_by_source_url(&self, source_url: &str) -> Result<Option<News>, ApiError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .news
            .iter()
            .find(|n| n.source_url == source_url)
            .cloned())
    }

    async fn insert_news(&self, item: NewNews) -> Result<News, ApiError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.news.iter().any(|n| n.source_url == item.source_url) {
            return Err(ApiError::conflict("The news already exist in the database"));
        }
        let row = News {
            id: tables.news.len() as i32 + 1,
            title: item.title,
            description: item.description,
            image_url: item.image_url,
            source_url: item.source_url,
            published_at: item.published_at,
            author_id: item.author_id,
            source_id: item.source_id,
            created_at: Utc::now(),
        };
        tables.news.push(row.clone());
        Ok(row)
    }

    async fn list_authors(&self) -> Result<Vec<Author>, ApiError> {
        Ok(self.tables.lock().unwrap().authors.clone())
    }

    async fn author_by_id(&self, id: i32) -> Result<Option<Author>, ApiError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.authors.iter().find(|a| a.id == id).cloned())
    }

    async fn get_or_create_author(&self, name: &str) -> Result<(Author, bool), ApiError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(existing) = tables.authors.iter().find(|a| a.name == name) {
            return Ok((existing.clone(), false));
        }
        let row = Author {
            id: tables.authors.len() as i32 + 1,
            name: name.to_string(),
        };
        tables.authors.push(row.clone());
        Ok((row, true))
    }

    async fn list_source_names(&self) -> Result<Vec<SourceName>, ApiError> {
        Ok(self.tables.lock().unwrap().source_names.clone())
    }

    async fn source_name_by_id(&self, id: i32) -> Result<Option<SourceName>, ApiError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.source_names.iter().find(|s| s.id == id).cloned())
    }

    async fn get_or_create_source_name(
        &self,
        name: &str,
    ) -> Result<(SourceName, bool), ApiError> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(existing) = tables.source_names.iter().find(|s| s.name == name) {
            return Ok((existing.clone(), false));
        }
        let row = SourceName {
            id: tables.source_names.len() as i32 + 1,
            name: name.to_string(),
        };
        tables.source_names.push(row.clone());
        Ok((row, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_or_create_author_is_idempotent() {
        let store = MemStore::new();

        let (first, created) = store.get_or_create_author("Jane Doe").await.unwrap();
        assert!(created);

        let (second, created) = store.get_or_create_author("Jane Doe").await.unwrap();
        assert!(!created);
        assert_eq!(first.id, second.id);

        assert_eq!(store.list_authors().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn distinct_names_get_distinct_ids() {
        let store = MemStore::new();

        let (jane, _) = store.get_or_create_author("Jane Doe").await.unwrap();
        let (john, _) = store.get_or_create_author("John Roe").await.unwrap();
        assert_ne!(jane.id, john.id);

        assert_eq!(store.author_by_id(jane.id).await.unwrap().unwrap().name, "Jane Doe");
        assert_eq!(store.author_by_id(john.id).await.unwrap().unwrap().name, "John Roe");
    }

    #[tokio::test]
    async fn duplicate_source_url_insert_is_rejected() {
        let store = MemStore::new();
        let (author, _) = store.get_or_create_author("Jane Doe").await.unwrap();
        let (source, _) = store.get_or_create_source_name("GameWire").await.unwrap();

        let item = NewNews {
            title: "Patch notes".to_string(),
            description: None,
            image_url: None,
            source_url: "https://example.com/patch".to_string(),
            published_at: None,
            author_id: author.id,
            source_id: source.id,
        };

        store.insert_news(item.clone()).await.unwrap();
        let err = store.insert_news(item).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
        assert_eq!(store.list_news().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_ids_resolve_to_none() {
        let store = MemStore::new();
        assert!(store.author_by_id(42).await.unwrap().is_none());
        assert!(store.source_name_by_id(42).await.unwrap().is_none());
        assert!(store
            .news_by_source_url("https://example.com/nope")
            .await
            .unwrap()
            .is_none());
    }
}
