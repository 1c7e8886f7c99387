//! NDS ROM header reader
//!
//! Decodes the fixed-offset identification fields at the start of a
//! `.nds` file: the 12-byte internal title and the 4-byte game code.
//! Header reads are best-effort: an unreadable or truncated file yields
//! an empty header so a library scan never fails on a bad entry.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of bytes read from the start of a ROM file.
pub const HEADER_LEN: usize = 0x200;

/// Offset and length of the internal title field.
const TITLE_OFFSET: usize = 0x00;
const TITLE_LEN: usize = 12;

/// Offset and length of the game code field.
const GAME_CODE_OFFSET: usize = 0x0C;
const GAME_CODE_LEN: usize = 4;

/// Identification fields decoded from a ROM header.
///
/// Both fields are ASCII with NUL/space padding stripped. A file that
/// could not be read decodes to a header with both fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RomHeader {
    /// Internal title from bytes `0x00..0x0C`
    pub internal_title: String,
    /// Game code from bytes `0x0C..0x10` (e.g. `"AMCE"`)
    pub game_code: String,
}

impl RomHeader {
    /// Decode a header from raw bytes.
    ///
    /// Accepts any slice; fields whose byte ranges fall outside the
    /// slice decode as empty. Non-ASCII bytes are dropped, matching the
    /// padding-tolerant decoding of real dumps.
    pub fn parse(bytes: &[u8]) -> Self {
        Self {
            internal_title: ascii_field(bytes, TITLE_OFFSET, TITLE_LEN),
            game_code: ascii_field(bytes, GAME_CODE_OFFSET, GAME_CODE_LEN),
        }
    }

    /// Read and decode the header of the ROM at `path`.
    ///
    /// Reads at most the first 512 bytes. Any I/O failure (missing
    /// file, permission denied, short file) yields an empty header
    /// rather than an error.
    pub fn read(path: &Path) -> Self {
        let mut buf = [0u8; HEADER_LEN];
        let n = match File::open(path).and_then(|mut f| read_up_to(&mut f, &mut buf)) {
            Ok(n) => n,
            Err(e) => {
                tracing::debug!("Header read failed for {}: {}", path.display(), e);
                return Self::default();
            }
        };
        Self::parse(&buf[..n])
    }
}

/// Fill `buf` from `reader`, stopping at EOF. Returns the bytes read.
fn read_up_to(reader: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

/// Decode an ASCII field, dropping non-ASCII bytes and trimming NUL and
/// space padding from both ends.
fn ascii_field(bytes: &[u8], offset: usize, len: usize) -> String {
    let Some(raw) = bytes.get(offset..offset + len) else {
        return String::new();
    };
    let text: String = raw
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect();
    text.trim_matches(['\0', ' ']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn header_bytes(title: &[u8], code: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0u8; HEADER_LEN];
        bytes[..title.len()].copy_from_slice(title);
        bytes[GAME_CODE_OFFSET..GAME_CODE_OFFSET + code.len()].copy_from_slice(code);
        bytes
    }

    #[test]
    fn test_parse_basic_fields() {
        let bytes = header_bytes(b"MARIOKART DS", b"AMCE");
        let header = RomHeader::parse(&bytes);
        assert_eq!(header.internal_title, "MARIOKART DS");
        assert_eq!(header.game_code, "AMCE");
    }

    #[test]
    fn test_parse_strips_nul_padding() {
        let bytes = header_bytes(b"ZELDA\0\0\0\0\0\0\0", b"AZEE");
        let header = RomHeader::parse(&bytes);
        assert_eq!(header.internal_title, "ZELDA");
    }

    #[test]
    fn test_parse_strips_space_padding() {
        let bytes = header_bytes(b"  TETRIS    ", b"ATRE");
        let header = RomHeader::parse(&bytes);
        assert_eq!(header.internal_title, "TETRIS");
    }

    #[test]
    fn test_parse_drops_non_ascii_bytes() {
        let mut bytes = header_bytes(b"GAME\0\0\0\0\0\0\0\0", b"AAAA");
        bytes[4] = 0xFF;
        bytes[5] = 0x80;
        let header = RomHeader::parse(&bytes);
        assert_eq!(header.internal_title, "GAME");
    }

    #[test]
    fn test_parse_short_input_is_empty() {
        let header = RomHeader::parse(&[0x41; 8]);
        assert_eq!(header, RomHeader::default());
    }

    #[test]
    fn test_parse_never_panics_on_garbage() {
        let bytes: Vec<u8> = (0..HEADER_LEN).map(|i| (i * 37) as u8).collect();
        let _ = RomHeader::parse(&bytes);
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let header = RomHeader::read(Path::new("/nonexistent/game.nds"));
        assert_eq!(header, RomHeader::default());
    }

    #[test]
    fn test_read_truncated_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("short.nds");
        fs::write(&path, b"TOO SHORT").unwrap();

        let header = RomHeader::read(&path);
        assert_eq!(header, RomHeader::default());
    }

    #[test]
    fn test_read_full_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("game.nds");
        fs::write(&path, header_bytes(b"POKEMON D\0\0\0", b"ADAE")).unwrap();

        let header = RomHeader::read(&path);
        assert_eq!(header.internal_title, "POKEMON D");
        assert_eq!(header.game_code, "ADAE");
    }
}
