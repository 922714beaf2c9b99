use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for category
///
/// Ascending id is insertion order and doubles as the canonical display and
/// sort order for the storefront.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    pub slug: String,
    pub name: String,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}
