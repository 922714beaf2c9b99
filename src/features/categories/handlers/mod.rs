pub mod category_handler;

pub use category_handler::{create_category, delete_category, list_categories};
