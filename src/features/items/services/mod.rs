mod item_service;
pub mod listing;

pub use item_service::ItemService;
