//! Reading the directory-tree export from disk.
//!
//! Tries, in order: BOM-marked UTF-8/UTF-16, BOM-less UTF-16 (detected by
//! NUL bytes), UTF-8, then GB18030 as used by Chinese-locale exports.

use encoding_rs::{Encoding, GB18030, UTF_16BE, UTF_16LE, UTF_8};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not UTF-8, UTF-16 or GB18030 text; re-save it as UTF-8", path.display())]
    Undecodable { path: PathBuf },
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

/// UTF-16 without a BOM: tree text never contains NUL, so NULs mark the
/// zero high bytes of ASCII code units. Their position gives the byte order.
fn sniff_utf16(bytes: &[u8]) -> Option<&'static Encoding> {
    if bytes.len() % 2 != 0 || !bytes.contains(&0) {
        return None;
    }
    let odd_nuls = bytes.iter().skip(1).step_by(2).filter(|b| **b == 0).count();
    let even_nuls = bytes.iter().step_by(2).filter(|b| **b == 0).count();
    Some(if odd_nuls >= even_nuls { UTF_16LE } else { UTF_16BE })
}

/// Decodes raw file contents, or `None` if no supported encoding fits.
pub fn decode_tree_text(bytes: &[u8]) -> Option<String> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_strict(encoding, &bytes[bom_len..]);
    }
    if let Some(encoding) = sniff_utf16(bytes) {
        return decode_strict(encoding, bytes);
    }
    decode_strict(UTF_8, bytes).or_else(|| decode_strict(GB18030, bytes))
}

/// Reads `path` and splits it into lines without terminators.
pub fn read_tree_lines(path: &Path) -> Result<Vec<String>, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_tree_text(&bytes).ok_or_else(|| InputError::Undecodable {
        path: path.to_path_buf(),
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(text: &str, big_endian: bool) -> Vec<u8> {
        text.encode_utf16()
            .flat_map(|unit| {
                if big_endian {
                    unit.to_be_bytes()
                } else {
                    unit.to_le_bytes()
                }
            })
            .collect()
    }

    #[test]
    fn plain_and_bom_utf8() {
        assert_eq!(decode_tree_text(b"|-- a.mkv").as_deref(), Some("|-- a.mkv"));
        assert_eq!(
            decode_tree_text(b"\xEF\xBB\xBF|-- a.mkv").as_deref(),
            Some("|-- a.mkv")
        );
    }

    #[test]
    fn utf16_with_bom() {
        let text = "|-- 剧集.mkv";
        let mut le = vec![0xFF, 0xFE];
        le.extend(utf16(text, false));
        let mut be = vec![0xFE, 0xFF];
        be.extend(utf16(text, true));
        assert_eq!(decode_tree_text(&le).as_deref(), Some(text));
        assert_eq!(decode_tree_text(&be).as_deref(), Some(text));
    }

    #[test]
    fn utf16_without_bom() {
        let text = "|-- Show\n|   |-- 第1集.mkv";
        assert_eq!(decode_tree_text(&utf16(text, false)).as_deref(), Some(text));
        assert_eq!(decode_tree_text(&utf16(text, true)).as_deref(), Some(text));
    }

    #[test]
    fn gb18030_export() {
        // "|-- 你好.mkv" in GBK/GB18030.
        let bytes = b"|-- \xC4\xE3\xBA\xC3.mkv";
        assert_eq!(decode_tree_text(bytes).as_deref(), Some("|-- 你好.mkv"));
    }

    #[test]
    fn invalid_bytes_rejected() {
        assert_eq!(decode_tree_text(&[0x41, 0xFF, 0x42]), None);
        assert_eq!(decode_tree_text(&[0xFF, 0xFE, 0x41]), None);
    }

    #[test]
    fn read_lines_strips_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.txt");
        std::fs::write(&path, "|-- A\r\n|   |-- a.mkv\r\n").unwrap();
        let lines = read_tree_lines(&path).unwrap();
        assert_eq!(lines, vec!["|-- A", "|   |-- a.mkv"]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_tree_lines(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
    }
}
