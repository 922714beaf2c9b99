pub mod item_handler;

pub use item_handler::{create_item, delete_item, list_items};
