//! Directory-backed key-value store.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::board::ports::{KeyValueStore, StoreResult, StoreUnavailable};

/// Key-value store persisting each key as one file in a capability-scoped
/// directory.
///
/// The well-known keys contain no path separators, so the key doubles as
/// the file name. Values are written in full on every save, matching the
/// whole-value store contract.
#[derive(Debug)]
pub struct DirStore {
    dir: Dir,
}

impl DirStore {
    /// Opens (creating if necessary) the data directory at `path`.
    ///
    /// This is the only place ambient filesystem authority is used; all
    /// subsequent access is scoped to the opened directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreUnavailable`] when the directory cannot be created
    /// or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        std::fs::create_dir_all(path.as_std_path()).map_err(StoreUnavailable::new)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(StoreUnavailable::new)?;
        Ok(Self { dir })
    }
}

impl KeyValueStore for DirStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        match self.dir.read_to_string(key) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreUnavailable::new(err)),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.dir.write(key, value).map_err(StoreUnavailable::new)
    }
}
