mod item_dto;

pub use item_dto::{
    image_extension, is_image_mime_allowed, CreateItemDto, ItemCreatedDto, ItemDeletedDto,
    ItemResponseDto, ListItemsQuery, NewItem, NewItemImage, ALLOWED_IMAGE_MIME_TYPES,
    MAX_IMAGE_SIZE,
};
