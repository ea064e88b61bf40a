//! Gallery server: HTTP surface for the image URL gallery.
mod app;
mod config;
pub mod logging;

pub use app::build_router;
pub use config::ServerConfig;
