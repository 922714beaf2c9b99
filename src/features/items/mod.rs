//! Catalog item feature.
//!
//! Items are the storefront's products: title, description, price, a
//! category slug, and zero or more hosted image URLs. The listing pipeline
//! in [`services::listing`] is where all browse/search/pagination semantics
//! live.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/items` | No | List items (filter, search, paginate) |
//! | POST | `/api/items` | Admin | Create item with image uploads |
//! | DELETE | `/api/items/{id}` | Admin | Delete item (images cascade) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ItemService;
