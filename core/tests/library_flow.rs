//! End-to-end library flow: scan, rename, pin, cover, rescan.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use melonshelf_core::{MetadataStore, ScanFilter, scan_library};

fn write_rom(dir: &Path, name: &str, code: &[u8; 4]) -> PathBuf {
    let mut bytes = vec![0u8; 0x200];
    bytes[0x0C..0x10].copy_from_slice(code);
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_full_workflow_scan_decorate_rescan() {
    let temp_dir = TempDir::new().unwrap();
    let roms = temp_dir.path().join("roms");
    fs::create_dir_all(&roms).unwrap();
    write_rom(&roms, "amce_dump.nds", b"AMCE");
    write_rom(&roms, "zelda.nds", b"AZEE");

    let config_dir = temp_dir.path().join("config");
    let mut store = MetadataStore::open(config_dir.clone());
    store.settings.covers_dir = temp_dir.path().join("covers");

    // Initial scan: stems as titles, alphabetical.
    let entries = scan_library(&roms, &store, &ScanFilter::default());
    let titles: Vec<&str> = entries.iter().map(|e| e.display_title.as_str()).collect();
    assert_eq!(titles, vec!["amce_dump", "zelda"]);

    // Rename by identity, pin by filename, set a cover.
    store
        .set_display_title(&entries[0].identity, "Mario Kart DS")
        .unwrap();
    assert!(store.toggle_pinned("zelda.nds").unwrap());
    let source = temp_dir.path().join("art.png");
    fs::write(&source, b"png bytes").unwrap();
    store
        .set_cover(&entries[0].identity, entries[0].stem(), &source)
        .unwrap();

    // Rescan through a freshly loaded store: everything persisted.
    let mut reloaded = MetadataStore::open(config_dir);
    reloaded.settings.covers_dir = store.settings.covers_dir.clone();
    let entries = scan_library(&roms, &reloaded, &ScanFilter::default());

    // Pinned zelda sorts first; the rename and cover stuck.
    assert_eq!(entries[0].file_name, "zelda.nds");
    assert!(entries[0].pinned);
    assert_eq!(entries[1].display_title, "Mario Kart DS");
    assert!(
        entries[1]
            .cover_path
            .as_ref()
            .is_some_and(|p| p.ends_with("amce_dump.png"))
    );

    // A file rename keeps title and cover (identity) but drops the pin
    // (filename keying).
    fs::rename(roms.join("zelda.nds"), roms.join("hyrule.nds")).unwrap();
    let entries = scan_library(&roms, &reloaded, &ScanFilter::default());
    let renamed = entries
        .iter()
        .find(|e| e.file_name == "hyrule.nds")
        .unwrap();
    assert!(!renamed.pinned);
    assert_eq!(renamed.identity, "NDS-AZEE");
}

#[test]
fn test_query_and_pinned_filters_compose() {
    let temp_dir = TempDir::new().unwrap();
    let roms = temp_dir.path().join("roms");
    fs::create_dir_all(&roms).unwrap();
    write_rom(&roms, "mario kart.nds", b"AMCE");
    write_rom(&roms, "mario party.nds", b"A64E");
    write_rom(&roms, "zelda.nds", b"AZEE");

    let mut store = MetadataStore::open(temp_dir.path().join("config"));
    store.toggle_pinned("mario party.nds").unwrap();

    let filter = ScanFilter {
        query: "mario".to_string(),
        only_pinned: true,
    };
    let entries = scan_library(&roms, &store, &filter);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file_name, "mario party.nds");
}
