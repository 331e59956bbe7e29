pub mod annotated;
pub mod media_loader;
