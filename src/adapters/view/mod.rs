//! Proyección HTML del estado del dashboard. Todo texto dinámico pasa por
//! [`escape`] antes de llegar al markup.

pub mod page;
pub mod render;

pub use page::render_page;
pub use render::escape;
