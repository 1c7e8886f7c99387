//! Settings document (`config.json`)
//!
//! Handles the persisted launcher settings: scan root, emulator path,
//! cover directory, view preferences, and the pinned-filename set.
//! Stored as human-editable JSON in the platform config directory.
//! A missing or corrupt document loads as the defaults, never an error.
//!
//! The field names match the documents written by the historical
//! launcher, so an existing install keeps its customizations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted launcher settings.
///
/// Every field carries a serde default so partially written or older
/// documents still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory scanned for ROM files
    #[serde(default)]
    pub rom_dir: PathBuf,
    /// External emulator executable launched with a ROM path argument
    #[serde(default, alias = "melonds_path")]
    pub emulator_path: PathBuf,
    /// Directory holding managed cover images
    #[serde(default = "default_covers_dir")]
    pub covers_dir: PathBuf,
    /// UI scale factor (presentation hint)
    #[serde(default = "default_ui_scale")]
    pub ui_scale: f32,
    /// Dark theme flag (presentation hint)
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Grid or list presentation
    #[serde(default)]
    pub view_mode: ViewMode,
    /// Whether tiles show titles under covers (presentation hint)
    #[serde(default = "default_true")]
    pub show_titles: bool,
    /// Pinned ROM filenames, kept sorted and duplicate-free
    #[serde(default)]
    pub pinned_files: Vec<String>,
    /// Restrict scans to pinned entries
    #[serde(default)]
    pub only_pinned: bool,
    /// Last-used directory per picker category
    #[serde(default)]
    pub last_dirs: LastDirs,
    /// UI language tag
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Directory for cached scaled thumbnails
    #[serde(default = "default_thumb_dir")]
    pub thumb_dir: PathBuf,
    /// Target thumbnail edge length in pixels
    #[serde(default = "default_thumb_size")]
    pub thumb_size: u32,
}

/// Library presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

/// Last-used directory hints per file picker category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LastDirs {
    #[serde(default)]
    pub rom: String,
    #[serde(default, alias = "melonds")]
    pub emulator: String,
    #[serde(default)]
    pub cover: String,
}

fn default_covers_dir() -> PathBuf {
    PathBuf::from("covers")
}
fn default_ui_scale() -> f32 {
    1.0
}
fn default_true() -> bool {
    true
}
fn default_lang() -> String {
    "en".to_string()
}
fn default_thumb_dir() -> PathBuf {
    PathBuf::from("thumbs")
}
fn default_thumb_size() -> u32 {
    256
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rom_dir: PathBuf::new(),
            emulator_path: PathBuf::new(),
            covers_dir: default_covers_dir(),
            ui_scale: default_ui_scale(),
            dark_mode: default_true(),
            view_mode: ViewMode::default(),
            show_titles: default_true(),
            pinned_files: Vec::new(),
            only_pinned: false,
            last_dirs: LastDirs::default(),
            lang: default_lang(),
            thumb_dir: default_thumb_dir(),
            thumb_size: default_thumb_size(),
        }
    }
}

impl Settings {
    /// Fresh defaults, identical to loading an absent document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the pinned-set invariant: sorted, duplicate-free.
    ///
    /// Externally edited documents may violate it; normalizing on load
    /// keeps persistence diffs deterministic.
    pub fn normalize(&mut self) {
        self.pinned_files.sort();
        self.pinned_files.dedup();
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Linux: `~/.config/melonshelf`
/// On macOS: `~/Library/Application Support/io.melonshelf`
/// On Windows: `%APPDATA%\melonshelf\config`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.melonshelf", "", "melonshelf")
        .map(|dirs| dirs.config_dir().to_path_buf())
}
