use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub slug: String,
    pub name: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            slug: c.slug,
            name: c.name,
        }
    }
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(
        length(min = 1, max = 50, message = "Slug must be 1-50 characters"),
        regex(
            path = "*crate::shared::validation::SLUG_REGEX",
            message = "Slug must be lowercase alphanumeric with hyphens"
        )
    )]
    pub slug: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Response body for a created category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryCreatedDto {
    pub status: String,
    pub id: i64,
}

impl CategoryCreatedDto {
    pub fn ok(id: i64) -> Self {
        Self {
            status: "ok".to_string(),
            id,
        }
    }
}

/// Response body for a deleted category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryDeletedDto {
    pub status: String,
}

impl CategoryDeletedDto {
    pub fn deleted() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_accepts_valid_slug() {
        let dto = CreateCategoryDto {
            slug: "hand-painted".to_string(),
            name: "Hand painted".to_string(),
        };

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn create_dto_rejects_bad_slug() {
        let dto = CreateCategoryDto {
            slug: "Hand Painted".to_string(),
            name: "Hand painted".to_string(),
        };

        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_dto_rejects_empty_name() {
        let dto = CreateCategoryDto {
            slug: "doll".to_string(),
            name: String::new(),
        };

        assert!(dto.validate().is_err());
    }
}
