//! Append-only line writer with size-based rotation.
//!
//! When a write would push the file past its size limit, the file is shifted to
//! `<name>.1`, existing backups move up one number, and the oldest beyond the
//! retention count is deleted:
//!
//! ```text
//! memberdesk-spans.jsonl   → memberdesk-spans.jsonl.1
//! memberdesk-spans.jsonl.1 → memberdesk-spans.jsonl.2
//! memberdesk-spans.jsonl.3 → (removed)
//! ```

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold for the span file (5 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of numbered backups kept next to the live file.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating line writer.
///
/// The file is opened lazily on first write, so construction never fails.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    /// Path of the live file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of backup number `n` (1 is the newest).
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Appends `line` plus a newline, rotating first if the file would outgrow
    /// its limit. A single line larger than the limit is still written.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if rotating, opening or writing fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;
        let current = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        if current > 0 && current + incoming > self.max_bytes {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            *handle = Some(file);
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "span file not open"))?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return remove_if_exists(&self.path);
        }

        remove_if_exists(&self.backup_path(self.backups))?;
        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn appends_until_limit() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("spans.jsonl"), 64, 3);
        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();
        assert_eq!(read(writer.path()), "one\ntwo\n");
        assert!(!writer.backup_path(1).exists());
    }

    #[test]
    fn rotates_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("spans.jsonl"), 8, 2);

        // each 7-byte line fills the file, so every write after the first rotates
        for line in ["line-a", "line-b", "line-c", "line-d"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(writer.path()), "line-d\n");
        assert_eq!(read(&writer.backup_path(1)), "line-c\n");
        assert_eq!(read(&writer.backup_path(2)), "line-b\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn oversized_line_is_written_whole() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("spans.jsonl"), 4, 1);
        writer.write_line("far too long").unwrap();
        assert_eq!(read(writer.path()), "far too long\n");
    }

    #[test]
    fn backup_names_are_numbered() {
        let writer = RotatingFile::new(PathBuf::from("/tmp/x/memberdesk-spans.jsonl"), 1, 3);
        assert_eq!(
            writer.backup_path(2),
            PathBuf::from("/tmp/x/memberdesk-spans.jsonl.2")
        );
    }
}
