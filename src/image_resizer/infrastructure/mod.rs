pub mod error;
pub mod file_storage;
pub mod image_resizer;
