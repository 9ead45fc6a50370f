pub mod image;
pub mod resource;

pub use image::ImageSource;
pub use resource::{AssetStore, ResourceError, ResourceProvider, SharedResourceData};
