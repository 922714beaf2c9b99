use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::items::dtos::{
    image_extension, ItemResponseDto, ListItemsQuery, NewItem, NewItemImage,
};
use crate::features::items::models::{Item, ItemImage};
use crate::features::items::services::listing;
use crate::modules::storage::ImageHostClient;

/// Service for catalog items
pub struct ItemService {
    pool: PgPool,
    image_host: Arc<ImageHostClient>,
}

impl ItemService {
    pub fn new(pool: PgPool, image_host: Arc<ImageHostClient>) -> Self {
        Self { pool, image_host }
    }

    /// List items for the storefront.
    ///
    /// Fetches the full set in id order and lets the listing pipeline apply
    /// filter, sort, and pagination; image URLs are then loaded for the
    /// returned page only.
    pub async fn list(&self, query: &ListItemsQuery) -> Result<Vec<ItemResponseDto>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, description, price, category, created_at
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list items: {:?}", e);
            AppError::Database(e)
        })?;

        let category_order = sqlx::query_scalar::<_, String>(
            r#"
            SELECT slug
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load category order: {:?}", e);
            AppError::Database(e)
        })?;

        let page = listing::apply(items, &category_order, query);

        let ids: Vec<i64> = page.iter().map(|item| item.id).collect();
        let mut images_by_item = self.images_for(&ids).await?;

        Ok(page
            .into_iter()
            .map(|item| {
                let images = images_by_item.remove(&item.id).unwrap_or_default();
                ItemResponseDto::from_item(item, images)
            })
            .collect())
    }

    /// Image URLs for a set of items, grouped by owning item id
    async fn images_for(&self, ids: &[i64]) -> Result<HashMap<i64, Vec<String>>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ItemImage>(
            r#"
            SELECT id, item_id, url
            FROM item_images
            WHERE item_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load item images: {:?}", e);
            AppError::Database(e)
        })?;

        let mut by_item: HashMap<i64, Vec<String>> = HashMap::new();
        for row in rows {
            by_item.entry(row.item_id).or_default().push(row.url);
        }

        Ok(by_item)
    }

    /// Create an item with its images.
    ///
    /// Image bytes go to the image host first; the item row and all image
    /// rows then land in one transaction, so a failed upload leaves nothing
    /// behind and a committed item always has every requested image.
    pub async fn create(&self, new_item: NewItem, images: Vec<NewItemImage>) -> Result<i64> {
        let mut urls = Vec::with_capacity(images.len());
        for image in images {
            let extension = image_extension(&image.content_type).unwrap_or("bin");
            let key = self
                .image_host
                .generate_key(&format!("{}.{}", Uuid::new_v4(), extension));

            self.image_host
                .upload(&key, image.data, &image.content_type)
                .await?;

            urls.push(self.image_host.public_url(&key));
        }

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let item_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO items (title, description, price, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new_item.title)
        .bind(&new_item.description)
        .bind(new_item.price)
        .bind(&new_item.category)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert item: {:?}", e);
            AppError::Database(e)
        })?;

        for url in &urls {
            sqlx::query(
                r#"
                INSERT INTO item_images (item_id, url)
                VALUES ($1, $2)
                "#,
            )
            .bind(item_id)
            .bind(url)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert item image: {:?}", e);
                AppError::Database(e)
            })?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Item created: id={}, category={}, images={}",
            item_id,
            new_item.category,
            urls.len()
        );

        Ok(item_id)
    }

    /// Delete an item; image rows cascade, remote blobs are kept
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete item: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Item not found".to_string()));
        }

        tracing::info!("Item deleted: id={}", id);

        Ok(())
    }
}
