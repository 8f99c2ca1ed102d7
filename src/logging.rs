//! Logging utilities
//!
//! Provides a size-based rolling file writer for tracing output.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Maximum log file size before rotation (10MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Number of rotated files kept on disk
pub const DEFAULT_KEPT_FILES: usize = 5;

/// A size-based rolling file writer
///
/// Rotates the log file once it exceeds a size threshold. Rotated files get
/// a numeric suffix (app.log.1 is the most recent, app.log.N the oldest).
#[derive(Debug, Clone)]
pub struct RollingFileWriter {
    shared: Arc<Mutex<WriterState>>,
}

#[derive(Debug)]
struct WriterState {
    base_path: PathBuf,
    file: File,
    written: u64,
    max_size: u64,
    kept_files: usize,
}

impl RollingFileWriter {
    /// Create a rolling writer at `path`, rotating after `max_size` bytes
    /// and keeping at most `kept_files` rotated files.
    pub fn new(path: impl AsRef<Path>, max_size: u64, kept_files: usize) -> io::Result<Self> {
        let base_path = path.as_ref().to_path_buf();

        if let Some(parent) = base_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let written = fs::metadata(&base_path).map(|m| m.len()).unwrap_or(0);
        let file = open_append(&base_path)?;

        Ok(Self {
            shared: Arc::new(Mutex::new(WriterState {
                base_path,
                file,
                written,
                max_size,
                kept_files,
            })),
        })
    }

    /// Create a rolling writer with the default size and file count.
    pub fn with_defaults(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::new(path, DEFAULT_MAX_FILE_SIZE, DEFAULT_KEPT_FILES)
    }
}

impl WriterState {
    fn rotate(&mut self) -> io::Result<()> {
        // Shift app.log.N-1 -> app.log.N, dropping the oldest
        for i in (1..self.kept_files).rev() {
            let from = self.suffixed(i);
            if from.exists() {
                fs::rename(&from, self.suffixed(i + 1)).ok();
            }
        }

        if self.base_path.exists() {
            fs::rename(&self.base_path, self.suffixed(1))?;
        }

        self.file = open_append(&self.base_path)?;
        self.written = 0;

        Ok(())
    }

    fn suffixed(&self, index: usize) -> PathBuf {
        let mut path = self.base_path.clone();
        let name = path.file_name().unwrap_or_default().to_string_lossy().to_string();
        path.set_file_name(format!("{}.{}", name, index));
        path
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.shared.lock().unwrap();

        if state.written + buf.len() as u64 > state.max_size {
            state.rotate()?;
        }

        let written = state.file.write(buf)?;
        state.written += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.shared.lock().unwrap().file.flush()
    }
}

/// Make the writer usable with tracing-subscriber
impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for RollingFileWriter {
    type Writer = RollingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_writer_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skill.log");

        let _writer = RollingFileWriter::with_defaults(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_writer_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skill.log");

        let mut writer = RollingFileWriter::with_defaults(&path).unwrap();
        writer.write_all(b"first line\n").unwrap();
        writer.flush().unwrap();

        assert!(fs::read_to_string(&path).unwrap().contains("first line"));
    }

    #[test]
    fn test_writer_rotates_at_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skill.log");

        let mut writer = RollingFileWriter::new(&path, 64, 2).unwrap();
        for i in 0..8 {
            writeln!(writer, "log entry number {} with some padding", i).unwrap();
        }
        writer.flush().unwrap();

        assert!(dir.path().join("skill.log.1").exists());
    }
}
