mod page_handler;

pub use page_handler::{admin_panel, home, logout};
