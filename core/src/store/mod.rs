//! Persisted launcher state
//!
//! Settings document plus the identity-keyed title and cover maps.

pub mod config;
pub mod metadata;

pub use config::{LastDirs, Settings, ViewMode, config_dir};
pub use metadata::{COVER_EXTENSIONS, MetadataStore};
