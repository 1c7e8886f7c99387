//! Library scan pipeline

mod scan;

pub use scan::{ROM_EXTENSION, RomEntry, ScanFilter, scan_library};
