//! Server-rendered pages: the storefront shell, the admin panel, and the
//! Basic-auth logout trick. Rendering happens through minijinja templates
//! loaded once at startup.

pub mod handlers;
pub mod routes;
pub mod services;

pub use services::PageTemplates;
