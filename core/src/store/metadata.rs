//! Metadata store: titles map, covers map, pinned set
//!
//! Three independent JSON documents in the config directory:
//!
//! - `config.json` — settings, including the pinned-filename set
//! - `titles_map.json` — identity -> display title
//! - `covers_map.json` — identity -> cover image path
//!
//! Titles and covers are keyed by content identity (see
//! [`crate::rom::identity`]); pins are keyed by filename, matching the
//! documents the historical launcher wrote. Every mutating operation
//! persists the affected document immediately. A write failure is
//! returned to the caller with context while the in-memory state is
//! kept, so the user can keep working with unsaved changes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::{self, Settings};

const SETTINGS_FILE: &str = "config.json";
const TITLES_MAP_FILE: &str = "titles_map.json";
const COVERS_MAP_FILE: &str = "covers_map.json";

/// Cover image extensions probed for stem-named covers, in priority order.
pub const COVER_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Process-wide persisted metadata, loaded once at startup.
#[derive(Debug)]
pub struct MetadataStore {
    config_dir: PathBuf,
    /// Launcher settings, including the pinned-filename set.
    pub settings: Settings,
    titles: BTreeMap<String, String>,
    covers: BTreeMap<String, String>,
}

impl MetadataStore {
    /// Open the store rooted at the platform config directory.
    pub fn open_default() -> Result<Self> {
        let dir = config::config_dir().context("Config directory not available")?;
        Ok(Self::open(dir))
    }

    /// Open the store rooted at an explicit directory.
    ///
    /// Loads all three documents; any missing or corrupt document
    /// falls back to its default without failing. The pinned set is
    /// normalized (sorted, deduplicated) on load.
    pub fn open(config_dir: PathBuf) -> Self {
        let mut settings: Settings = load_document(&config_dir.join(SETTINGS_FILE));
        settings.normalize();
        let titles = load_document(&config_dir.join(TITLES_MAP_FILE));
        let covers = load_document(&config_dir.join(COVERS_MAP_FILE));
        Self {
            config_dir,
            settings,
            titles,
            covers,
        }
    }

    /// Directory the documents live in.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    // === Titles ===

    /// Stored display title for `identity`, or `fallback_stem` when
    /// absent or empty.
    pub fn display_title(&self, identity: &str, fallback_stem: &str) -> String {
        match self.titles.get(identity) {
            Some(title) if !title.is_empty() => title.clone(),
            _ => fallback_stem.to_string(),
        }
    }

    /// Overwrite the display title for `identity` and persist now.
    pub fn set_display_title(&mut self, identity: &str, title: &str) -> Result<()> {
        self.titles
            .insert(identity.to_string(), title.trim().to_string());
        self.save_titles()
    }

    // === Covers ===

    /// Resolve the cover image for a ROM.
    ///
    /// The stored mapping wins if its file still exists on disk;
    /// otherwise the cover directory is probed for `{stem}.{png,jpg,jpeg}`
    /// in that order. Returns `None` when nothing matches.
    pub fn cover_path(&self, identity: &str, stem: &str) -> Option<PathBuf> {
        if let Some(stored) = self.covers.get(identity) {
            let stored = PathBuf::from(stored);
            if stored.exists() {
                return Some(stored);
            }
        }
        COVER_EXTENSIONS
            .iter()
            .map(|ext| self.settings.covers_dir.join(format!("{stem}.{ext}")))
            .find(|candidate| candidate.exists())
    }

    /// Adopt `source` as the cover for a ROM.
    ///
    /// Copies the image into the managed cover directory under the
    /// ROM's stem (overwriting any prior cover with that stem), records
    /// the mapping, and persists. Returns the managed path.
    pub fn set_cover(&mut self, identity: &str, stem: &str, source: &Path) -> Result<PathBuf> {
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_else(|| "png".to_string());
        let dest = self.settings.covers_dir.join(format!("{stem}.{ext}"));

        std::fs::create_dir_all(&self.settings.covers_dir).with_context(|| {
            format!(
                "Failed to create cover directory: {}",
                self.settings.covers_dir.display()
            )
        })?;
        std::fs::copy(source, &dest).with_context(|| {
            format!(
                "Failed to copy cover {} -> {}",
                source.display(),
                dest.display()
            )
        })?;

        self.covers
            .insert(identity.to_string(), dest.to_string_lossy().into_owned());
        self.save_covers()?;
        Ok(dest)
    }

    // === Pins ===

    /// Whether `filename` is pinned.
    ///
    /// Pins are keyed by filename rather than identity, so the flag
    /// follows the file across content changes but not across renames.
    pub fn is_pinned(&self, filename: &str) -> bool {
        self.settings
            .pinned_files
            .binary_search_by(|f| f.as_str().cmp(filename))
            .is_ok()
    }

    /// Toggle the pin for `filename` and persist the settings document.
    ///
    /// Returns the new pinned state. The persisted set stays sorted
    /// and duplicate-free.
    pub fn toggle_pinned(&mut self, filename: &str) -> Result<bool> {
        let pinned = match self
            .settings
            .pinned_files
            .binary_search_by(|f| f.as_str().cmp(filename))
        {
            Ok(index) => {
                self.settings.pinned_files.remove(index);
                false
            }
            Err(index) => {
                self.settings
                    .pinned_files
                    .insert(index, filename.to_string());
                true
            }
        };
        self.save_settings()?;
        Ok(pinned)
    }

    // === Persistence ===

    /// Persist the settings document.
    pub fn save_settings(&self) -> Result<()> {
        self.save_document(SETTINGS_FILE, &self.settings)
    }

    fn save_titles(&self) -> Result<()> {
        self.save_document(TITLES_MAP_FILE, &self.titles)
    }

    fn save_covers(&self) -> Result<()> {
        self.save_document(COVERS_MAP_FILE, &self.covers)
    }

    fn save_document<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.config_dir.join(name);
        std::fs::create_dir_all(&self.config_dir).with_context(|| {
            format!(
                "Failed to create config directory: {}",
                self.config_dir.display()
            )
        })?;
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {name}"))?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Load a JSON document, substituting the default on absence or corruption.
fn load_document<T: Default + DeserializeOwned>(path: &Path) -> T {
    let Ok(content) = std::fs::read_to_string(path) else {
        return T::default();
    };
    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Corrupt document {} ({}), using defaults", path.display(), e);
            T::default()
        }
    }
}
