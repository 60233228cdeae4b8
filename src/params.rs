//! Persisted key-value config store.
//!
//! One file per key under a directory. Values are plain text; booleans are
//! stored as `1` / `0`.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

/// Directory-backed parameter store.
#[derive(Clone, Debug)]
pub struct Params {
    dir: PathBuf,
}

impl Params {
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    pub fn dir(&self) -> &Path { &self.dir }

    fn key_path(&self, key: &str) -> PathBuf { self.dir.join(key) }

    /// `true` iff the key exists and its trimmed content is `1`.
    ///
    /// A missing key is `false`. Any other read failure is logged and also
    /// reads as `false`.
    pub fn get_bool(&self, key: &str) -> bool {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => value.trim() == "1",
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read param");
                false
            }
        }
    }

    /// Store a boolean, creating the directory if needed.
    pub fn put_bool(&self, key: &str, value: bool) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), if value { "1" } else { "0" })
    }
}
