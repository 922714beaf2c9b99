mod category_dto;

pub use category_dto::{
    CategoryCreatedDto, CategoryDeletedDto, CategoryResponseDto, CreateCategoryDto,
};
