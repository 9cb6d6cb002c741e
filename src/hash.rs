//! MD5 checksums for downloaded bootstrap wheels

use md5::{Digest, Md5};

/// Hex-encoded MD5 digest of `data`
pub fn md5_hex(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Verify a hex digest matches the expected value
///
/// Comparison ignores ASCII case so digests copied from index pages in
/// upper case still match.
pub fn verify_md5(expected: &str, actual: &str) -> bool {
    expected.eq_ignore_ascii_case(actual)
}
