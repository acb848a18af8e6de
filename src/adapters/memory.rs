//! In-memory adapters for deterministic tests and dry runs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;

/// In-memory filesystem keyed by absolute path.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory filesystem pre-seeded with `(path, contents)` pairs.
    #[must_use]
    pub fn with_files<I, P, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<PathBuf>,
        S: Into<String>,
    {
        let map =
            files.into_iter().map(|(path, contents)| (path.into(), contents.into())).collect();
        Self { files: Mutex::new(map) }
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path)
    }
}

/// Clock that always returns a fixed instant.
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock pinned to `instant`.
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// ID generator that yields `pass-1`, `pass-2`, ... in sequence.
#[derive(Default)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl IdGenerator for SequenceIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("pass-{n}")
    }
}
