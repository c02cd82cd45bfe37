pub mod dimensions;
pub mod error;
pub mod image;
pub mod image_resizer_trait;
