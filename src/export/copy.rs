//! Buffered file copy
//!
//! Chunked read/write copy used by artifact export. The destination is
//! truncated if it already exists.

use log::error;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Copies the source file's bytes to the destination, returning the byte count
pub fn copy_file_contents(
    source: &Path,
    dest: &Path,
    buffer_size: usize,
) -> Result<u64, std::io::Error> {
    let mut src_file = match File::open(source) {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to open source file {}: {}", source.display(), e);
            return Err(e);
        }
    };

    let mut dest_file = match File::create(dest) {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to create destination {}: {}", dest.display(), e);
            return Err(e);
        }
    };

    let mut buffer = vec![0u8; buffer_size];
    let mut total_bytes = 0u64;

    loop {
        let n = match src_file.read(&mut buffer) {
            Ok(0) => break, // EOF
            Ok(n) => n,
            Err(e) => {
                error!("Read error on {}: {}", source.display(), e);
                return Err(e);
            }
        };

        if let Err(e) = dest_file.write_all(&buffer[..n]) {
            error!("Write error on {}: {}", dest.display(), e);
            return Err(e);
        }

        total_bytes += n as u64;
    }

    // Ensure all data is written to disk before reporting success
    dest_file.flush()?;

    Ok(total_bytes)
}
