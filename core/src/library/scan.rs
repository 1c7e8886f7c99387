//! Library scan pipeline
//!
//! Turns a directory tree into an ordered, queryable list of
//! [`RomEntry`] values: enumerate `.nds` files, resolve identity and
//! metadata for each, apply the text query and pinned filter, and
//! sort pinned-first then case-insensitively by display title.
//!
//! The scan never fails: unreadable directories and files are skipped
//! and whatever was successfully enumerated is returned.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::rom::{RomHeader, identity_with_header};
use crate::store::MetadataStore;

/// Supported ROM file extension, matched case-insensitively.
pub const ROM_EXTENSION: &str = "nds";

/// One discovered ROM file with its resolved metadata.
///
/// Entries are ephemeral: recreated on every scan, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomEntry {
    /// Filesystem path as discovered
    pub path: PathBuf,
    /// Filename component, the key for the pinned set
    pub file_name: String,
    /// Internal title from the ROM header (may be empty)
    pub internal_title: String,
    /// 4-character game code from the ROM header (may be empty)
    pub game_code: String,
    /// Stable identity keying titles and covers
    pub identity: String,
    /// Resolved title shown to the user; never empty
    pub display_title: String,
    /// Resolved cover image, if any
    pub cover_path: Option<PathBuf>,
    /// Whether the filename is in the pinned set
    pub pinned: bool,
}

/// Query and filter options for a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanFilter {
    /// Case-insensitive substring matched against title and filename
    pub query: String,
    /// Keep only pinned entries
    pub only_pinned: bool,
}

/// Scan `root` and produce the ordered entry list.
///
/// Ordering: pinned entries first, then case-insensitive lexicographic
/// by display title.
pub fn scan_library(root: &Path, store: &MetadataStore, filter: &ScanFilter) -> Vec<RomEntry> {
    let query = filter.query.trim().to_lowercase();
    let mut entries: Vec<RomEntry> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| has_rom_extension(entry.path()))
        .map(|entry| resolve_entry(entry.path(), store))
        .filter(|entry| query.is_empty() || entry.matches_query(&query))
        .filter(|entry| !filter.only_pinned || entry.pinned)
        .collect();

    entries.sort_by(|a, b| {
        (!a.pinned, a.display_title.to_lowercase())
            .cmp(&(!b.pinned, b.display_title.to_lowercase()))
    });
    tracing::info!("Scanned {}: {} entries", root.display(), entries.len());
    entries
}

/// Resolve one candidate file into an entry.
fn resolve_entry(path: &Path, store: &MetadataStore) -> RomEntry {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let header = RomHeader::read(path);
    let identity = identity_with_header(path, &header);

    // Title fallback chain: stored -> filename stem -> internal title.
    let fallback = if stem.is_empty() {
        header.internal_title.clone()
    } else {
        stem.clone()
    };
    let mut display_title = store.display_title(&identity, &fallback);
    if display_title.is_empty() {
        display_title = file_name.clone();
    }

    let cover_path = store.cover_path(&identity, &stem);
    let pinned = store.is_pinned(&file_name);

    RomEntry {
        path: path.to_path_buf(),
        file_name,
        internal_title: header.internal_title,
        game_code: header.game_code,
        identity,
        display_title,
        cover_path,
        pinned,
    }
}

impl RomEntry {
    /// Filename stem, used for cover probing and title fallback.
    pub fn stem(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.file_name)
    }

    fn matches_query(&self, lowercased_query: &str) -> bool {
        let haystack = format!("{} {}", self.display_title, self.file_name).to_lowercase();
        haystack.contains(lowercased_query)
    }
}

fn has_rom_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ROM_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Write a minimal ROM whose header carries `code`.
    fn write_rom(dir: &Path, name: &str, code: &[u8; 4]) -> PathBuf {
        let mut bytes = vec![0u8; 0x200];
        bytes[0x0C..0x10].copy_from_slice(code);
        let path = dir.join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    fn empty_store(temp_dir: &TempDir) -> MetadataStore {
        MetadataStore::open(temp_dir.path().join("config"))
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = empty_store(&temp_dir);
        let entries = scan_library(temp_dir.path(), &store, &ScanFilter::default());
        assert!(entries.is_empty());
    }

    #[test]
    fn test_scan_nonexistent_root_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = empty_store(&temp_dir);
        let entries = scan_library(
            Path::new("/nonexistent/roms"),
            &store,
            &ScanFilter::default(),
        );
        assert!(entries.is_empty());
    }

    #[test]
    fn test_scan_filters_by_extension_case_insensitively() {
        let temp_dir = TempDir::new().unwrap();
        let roms = temp_dir.path().join("roms");
        fs::create_dir_all(&roms).unwrap();
        write_rom(&roms, "lower.nds", b"AAAA");
        write_rom(&roms, "upper.NDS", b"BBBB");
        write_rom(&roms, "other.gba", b"CCCC");
        fs::write(roms.join("notes.txt"), "not a rom").unwrap();

        let store = empty_store(&temp_dir);
        let entries = scan_library(&roms, &store, &ScanFilter::default());
        let names: Vec<&str> = entries.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, vec!["lower.nds", "upper.NDS"]);
    }

    #[test]
    fn test_scan_recurses_into_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let roms = temp_dir.path().join("roms");
        fs::create_dir_all(roms.join("rpg/classics")).unwrap();
        write_rom(&roms, "top.nds", b"AAAA");
        write_rom(&roms.join("rpg/classics"), "deep.nds", b"BBBB");

        let store = empty_store(&temp_dir);
        let entries = scan_library(&roms, &store, &ScanFilter::default());
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_entry_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let roms = temp_dir.path().join("roms");
        fs::create_dir_all(&roms).unwrap();
        write_rom(&roms, "mario kart.nds", b"AMCE");

        let store = empty_store(&temp_dir);
        let entries = scan_library(&roms, &store, &ScanFilter::default());
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.identity, "NDS-AMCE");
        assert_eq!(entry.game_code, "AMCE");
        assert_eq!(entry.display_title, "mario kart");
        assert_eq!(entry.stem(), "mario kart");
        assert!(!entry.pinned);
        assert!(entry.cover_path.is_none());
    }

    #[test]
    fn test_stored_title_overrides_stem() {
        let temp_dir = TempDir::new().unwrap();
        let roms = temp_dir.path().join("roms");
        fs::create_dir_all(&roms).unwrap();
        write_rom(&roms, "amce_dump_final2.nds", b"AMCE");

        let mut store = empty_store(&temp_dir);
        store.set_display_title("NDS-AMCE", "Mario Kart DS").unwrap();

        let entries = scan_library(&roms, &store, &ScanFilter::default());
        assert_eq!(entries[0].display_title, "Mario Kart DS");
    }

    #[test]
    fn test_sort_pinned_first_then_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let roms = temp_dir.path().join("roms");
        fs::create_dir_all(&roms).unwrap();
        write_rom(&roms, "Zelda.nds", b"AAAA");
        write_rom(&roms, "Apple.nds", b"BBBB");
        write_rom(&roms, "apple2.nds", b"CCCC");

        let mut store = empty_store(&temp_dir);
        store.toggle_pinned("Apple.nds").unwrap();

        let entries = scan_library(&roms, &store, &ScanFilter::default());
        let titles: Vec<&str> = entries.iter().map(|e| e.display_title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "apple2", "Zelda"]);
        assert!(entries[0].pinned);
    }

    #[test]
    fn test_query_filters_on_title_and_filename() {
        let temp_dir = TempDir::new().unwrap();
        let roms = temp_dir.path().join("roms");
        fs::create_dir_all(&roms).unwrap();
        write_rom(&roms, "Zelda.nds", b"AAAA");
        write_rom(&roms, "Apple.nds", b"BBBB");
        write_rom(&roms, "apple2.nds", b"CCCC");

        let store = empty_store(&temp_dir);
        let filter = ScanFilter {
            query: "zel".to_string(),
            only_pinned: false,
        };
        let entries = scan_library(&roms, &store, &filter);
        let titles: Vec<&str> = entries.iter().map(|e| e.display_title.as_str()).collect();
        assert_eq!(titles, vec!["Zelda"]);
    }

    #[test]
    fn test_query_matches_renamed_title() {
        let temp_dir = TempDir::new().unwrap();
        let roms = temp_dir.path().join("roms");
        fs::create_dir_all(&roms).unwrap();
        write_rom(&roms, "dump001.nds", b"AMCE");

        let mut store = empty_store(&temp_dir);
        store.set_display_title("NDS-AMCE", "Mario Kart DS").unwrap();

        let filter = ScanFilter {
            query: "KART".to_string(),
            only_pinned: false,
        };
        let entries = scan_library(&roms, &store, &filter);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_only_pinned_filter() {
        let temp_dir = TempDir::new().unwrap();
        let roms = temp_dir.path().join("roms");
        fs::create_dir_all(&roms).unwrap();
        write_rom(&roms, "Zelda.nds", b"AAAA");
        write_rom(&roms, "Apple.nds", b"BBBB");

        let mut store = empty_store(&temp_dir);
        store.toggle_pinned("Apple.nds").unwrap();

        let filter = ScanFilter {
            query: String::new(),
            only_pinned: true,
        };
        let entries = scan_library(&roms, &store, &filter);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name, "Apple.nds");
    }

    #[test]
    fn test_unreadable_rom_still_listed_with_empty_header() {
        // A zero-length file is a valid candidate whose header decode
        // degrades to empty fields and a hash identity.
        let temp_dir = TempDir::new().unwrap();
        let roms = temp_dir.path().join("roms");
        fs::create_dir_all(&roms).unwrap();
        fs::write(roms.join("empty.nds"), b"").unwrap();

        let store = empty_store(&temp_dir);
        let entries = scan_library(&roms, &store, &ScanFilter::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].internal_title, "");
        assert_eq!(entries[0].display_title, "empty");
        assert!(entries[0].identity.starts_with("HASH-"));
    }
}
