use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for catalog item
///
/// `category` is a plain slug string: it may reference a category that has
/// since been deleted, in which case the item sorts last on the browse-all
/// view.
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}

/// Hosted image reference owned by an item, cascade-deleted with it
#[derive(Debug, Clone, FromRow)]
pub struct ItemImage {
    #[allow(dead_code)]
    pub id: i64,
    pub item_id: i64,
    pub url: String,
}
