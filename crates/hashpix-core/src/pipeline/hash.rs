//! Streaming SHA-256 content hashing.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Number of hex characters in a SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Generate a SHA-256 hash of file contents.
///
/// Uses streaming to handle large files in constant memory; the digest
/// is returned as lowercase hex.
pub fn content_hash(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();

    // Use 64KB buffer for efficient reading
    let mut buffer = [0u8; 65536];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// True iff a file stem is exactly one SHA-256 digest in hex.
///
/// Such a file is already content-addressed and must be left untouched.
pub fn is_already_hashed(stem: &str) -> bool {
    stem.len() == DIGEST_HEX_LEN && stem.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-256 of the empty input.
    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_empty_file_digest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty");
        std::fs::write(&path, b"").unwrap();

        assert_eq!(content_hash(&path).unwrap(), EMPTY_SHA256);
    }

    #[test]
    fn test_digest_matches_one_shot_across_chunks() {
        // 200'000 bytes forces multiple buffer refills
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        std::fs::write(&path, &data).unwrap();

        let expected = format!("{:x}", Sha256::digest(&data));
        assert_eq!(content_hash(&path).unwrap(), expected);
    }

    #[test]
    fn test_digest_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        std::fs::write(&a, b"same content").unwrap();
        std::fs::write(&b, b"same content").unwrap();

        assert_eq!(content_hash(&a).unwrap(), content_hash(&b).unwrap());
    }

    #[test]
    fn test_is_already_hashed() {
        assert!(is_already_hashed(EMPTY_SHA256));
        assert!(is_already_hashed(&EMPTY_SHA256.to_uppercase()));
        assert!(!is_already_hashed("cat"));
        assert!(!is_already_hashed(&EMPTY_SHA256[..63]));
        assert!(!is_already_hashed(&format!("{}0", EMPTY_SHA256)));
        // right length, wrong alphabet
        assert!(!is_already_hashed(&format!("g{}", &EMPTY_SHA256[..63])));
    }
}
