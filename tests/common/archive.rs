use flate2::read::GzDecoder;
use std::io::Read;
use std::path::Path;

/// Decompresses a packed image and returns its raw record payload.
pub fn decode_archive(path: &Path) -> Vec<u8> {
    let compressed = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Failed to read archive {:?}: {}", path, e));

    let mut decoder = GzDecoder::new(&compressed[..]);
    let mut payload = Vec::new();
    decoder
        .read_to_end(&mut payload)
        .unwrap_or_else(|e| panic!("Failed to decompress archive {:?}: {}", path, e));

    payload
}
