use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

#[derive(FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub source_url: String,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: i32,
    pub source_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Inbound payload for `POST /news`. Carries author and source by name;
/// both are resolved to ids before the row is written.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsSubmission {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub source_url: String,
    pub published_at: Option<DateTime<Utc>>,
    pub author: String,
    pub source_name: String,
}

/// A news row ready for insertion, with both references already resolved.
#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub source_url: String,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: i32,
    pub source_id: i32,
}
