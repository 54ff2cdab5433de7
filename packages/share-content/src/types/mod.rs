//! Domain types for share-content generation.

pub mod config;
pub mod event;
pub mod share;

pub use config::ShareConfig;
pub use event::{Event, EventStatus};
pub use share::ShareResult;
