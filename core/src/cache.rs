//! Decoded-thumbnail cache
//!
//! Cover images get decoded and scaled repeatedly while a library view
//! re-renders. This cache memoizes the scaled result keyed by
//! (source path, target dimensions, pin-overlay flag). Entries are
//! invalidated wholesale on rescan via [`ThumbnailCache::clear`].
//!
//! Single-threaded by design, like the rest of the core: the scan and
//! all lookups run on the calling thread.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use image::RgbaImage;

type ThumbKey = (PathBuf, u32, u32, bool);

/// Scan-scoped cache of decoded, box-fitted cover thumbnails.
#[derive(Debug, Default)]
pub struct ThumbnailCache {
    entries: HashMap<ThumbKey, RgbaImage>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the thumbnail for `path` scaled to fit `width` x `height`,
    /// decoding on a miss.
    ///
    /// Aspect ratio is preserved; the result fits within the target
    /// box. Returns `None` (and caches nothing) when the image cannot
    /// be read or decoded.
    pub fn get_or_decode(
        &mut self,
        path: &Path,
        width: u32,
        height: u32,
        pin_overlay: bool,
    ) -> Option<&RgbaImage> {
        let key = (path.to_path_buf(), width, height, pin_overlay);
        if !self.entries.contains_key(&key) {
            let decoded = match image::open(path) {
                Ok(img) => img.thumbnail(width, height).to_rgba8(),
                Err(e) => {
                    tracing::debug!("Thumbnail decode failed for {}: {}", path.display(), e);
                    return None;
                }
            };
            self.entries.insert(key.clone(), decoded);
        }
        self.entries.get(&key)
    }

    /// Drop every cached entry. Called on rescan.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
