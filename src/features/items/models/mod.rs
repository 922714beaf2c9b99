mod item;

pub use item::{Item, ItemImage};
