//! Rotating log file writer.
//!
//! The plugin's stdout is the render surface, so log output has to go to a
//! file. This module provides a thread-safe writer that rotates the file
//! when it exceeds a size threshold, keeping one previous generation, so
//! disk usage stays bounded without any external log management.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (5 MB).
const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Thread-safe rotating log file writer.
///
/// The file handle opens lazily on first write, so construction succeeds
/// even when the directory is not writable yet. On overflow the current
/// file is renamed to `<name>.old` (replacing the previous generation) and
/// a fresh file is started.
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle.
    handle: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a new writer for the given path.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            handle: Mutex::new(None),
        }
    }

    /// Appends bytes to the file, rotating first when it grew too large.
    fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut handle = self.handle.lock().map_err(|e| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("log writer mutex poisoned: {e}"),
            )
        })?;

        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *handle = None;
                let _ = fs::rename(&self.file_path, self.file_path.with_extension("log.old"));
            }
        }

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *handle = Some(file);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "no log file available"))?;
        file.write_all(buf)?;
        file.flush()
    }
}

/// Borrowed writer handed to the tracing subscriber per event.
pub struct FileWriterGuard<'a>(&'a FileWriter);

impl io::Write for FileWriterGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileWriterGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriterGuard(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_across_multiple_writes() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("zortal.log"));

        writer.append(b"first line\n").unwrap();
        writer.append(b"second line\n").unwrap();

        let contents = fs::read_to_string(dir.path().join("zortal.log")).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn rotates_when_the_file_grows_too_large() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zortal.log");
        let writer = FileWriter::new(path.clone());

        // Pre-grow the file past the threshold.
        fs::write(&path, vec![b'x'; (MAX_FILE_SIZE_BYTES + 1) as usize]).unwrap();

        writer.append(b"fresh\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
        assert!(path.with_extension("log.old").exists());
    }
}
