use std::io::{self, Write};

use super::archive_storage::ArchiveStorage;

/// An archive held in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage(Vec<u8>);

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl Write for MemoryStorage {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ArchiveStorage for MemoryStorage {}
