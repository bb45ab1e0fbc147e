pub mod landing;
pub mod loader;
pub mod validate;
