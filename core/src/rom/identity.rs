//! Stable game identity derivation
//!
//! User metadata (display titles, covers) is keyed by a string
//! identity that survives file moves, renames and recompression:
//!
//! 1. A ROM with a 4-character game code gets `"NDS-" + code`. The
//!    code is burned into the header, so identical games share
//!    metadata no matter what their files are called.
//! 2. Headerless or non-conforming files fall back to a SHA-256
//!    digest of the first 1 MiB of content: `"HASH-" + hex`.
//! 3. If even that read fails, the lowercase filename stem is used.
//!    Not stable across renames, but it only affects cosmetic lookup.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::header::RomHeader;

/// Bytes of content hashed for the fallback identity.
const HASH_PREFIX_LEN: u64 = 1024 * 1024;

/// Derive the stable identity for the ROM at `path`.
pub fn identity_for(path: &Path) -> String {
    let header = RomHeader::read(path);
    identity_with_header(path, &header)
}

/// Derive the identity when the header has already been read.
///
/// Avoids a second header read during library scans.
pub fn identity_with_header(path: &Path, header: &RomHeader) -> String {
    if header.game_code.len() == 4 {
        return format!("NDS-{}", header.game_code);
    }
    match content_digest(path) {
        Ok(digest) => format!("HASH-{}", digest),
        Err(e) => {
            tracing::debug!("Content hash failed for {}: {}", path.display(), e);
            file_stem_lower(path)
        }
    }
}

/// SHA-256 over the first 1 MiB of the file, hex-encoded.
fn content_digest(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut reader = file.take(HASH_PREFIX_LEN);
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Lowercase filename stem, last-resort identity.
fn file_stem_lower(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
