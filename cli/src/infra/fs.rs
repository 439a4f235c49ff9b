//! Filesystem infrastructure — implements the `LocalFs` port.

use std::path::Path;

use crate::application::ports::LocalFs;

/// Production filesystem access.
pub struct LocalDisk;

impl LocalFs for LocalDisk {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
