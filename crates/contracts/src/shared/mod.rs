pub mod carousel;
pub mod config;
pub mod landing;
pub mod routing;
