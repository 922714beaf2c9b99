//! Storage module for the hosted image store
//!
//! Provides the S3/MinIO-compatible client item images are uploaded to.

mod image_host;

pub use image_host::ImageHostClient;
