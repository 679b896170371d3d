//! Binary Loader.
//!
//! Images are raw flat binaries (for example `objcopy -O binary vmlinux`), already in
//! big-endian word order. No header is parsed.

use std::fs;
use std::path::Path;

use crate::common::SimError;

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Returns
///
/// The raw bytes of the file, or `SimError::Io` carrying the path.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}
