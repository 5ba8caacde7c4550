//! Text file loading functionality.
//!
//! This module provides functions to load text files from disk or stdin into
//! [`Buffer`]s. Gzip-compressed input is decompressed transparently.

use crate::editor::buffer::Buffer;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads a text file from the filesystem into a buffer.
///
/// Files ending in `.gz` are decompressed first; the buffer is named after the
/// file.
///
/// # Examples
///
/// ```no_run
/// use markquill::file::loader::load_buffer;
///
/// let buffer = load_buffer("notes.txt").unwrap();
/// println!("{} lines", buffer.line_count());
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist
/// - The file cannot be read (permissions, etc.)
/// - The contents are not valid UTF-8
/// - A `.gz` file is not valid gzip
pub fn load_buffer<P: AsRef<Path>>(path: P) -> Result<Buffer> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    tracing::debug!(target: "io", file = %path_ref.display(), bytes = content.len(), "file_read_ok");
    Ok(Buffer::from_file(path_ref, &content))
}

/// Loads piped stdin into a buffer named `[stdin]`.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
pub fn load_buffer_from_stdin() -> Result<Buffer> {
    use std::io::{self, Read};

    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read from stdin")?;

    // Check for gzip magic bytes (0x1f 0x8b)
    let content = if bytes.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&bytes)?
    } else {
        String::from_utf8(bytes).context("Invalid UTF-8 in stdin")?
    };

    Ok(Buffer::from_text("[stdin]", &content))
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped stdin")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompress_gzip_bytes() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"alpha\nbeta\n").unwrap();
        let bytes = encoder.finish().unwrap();

        assert_eq!(decompress_gzip_bytes(&bytes).unwrap(), "alpha\nbeta\n");
    }

    #[test]
    fn test_decompress_rejects_garbage() {
        assert!(decompress_gzip_bytes(b"not gzip").is_err());
    }
}
