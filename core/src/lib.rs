//! melonshelf core
//!
//! Presentation-agnostic core for an NDS ROM launcher: header/banner
//! decoding, stable game identity, persisted per-title metadata, and
//! the library scan pipeline. A front-end (GUI or the bundled CLI)
//! consumes the ordered entry list this crate produces and triggers
//! its mutating operations from discrete user actions.

pub mod cache;
pub mod launch;
pub mod library;
pub mod rom;
pub mod store;

pub use cache::ThumbnailCache;
pub use launch::{LaunchError, launch_rom, reveal};
pub use library::{ROM_EXTENSION, RomEntry, ScanFilter, scan_library};
pub use rom::{BannerIcon, RomHeader, identity_for, read_icon};
pub use store::{MetadataStore, Settings, ViewMode};
