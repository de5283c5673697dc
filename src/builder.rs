use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::{
    archive_format::{
        block::{record_padding, BLOCK_SIZE, END_OF_ARCHIVE_SIZE},
        entry::DirectoryEntry,
        rootfs::{ROOTFS_ENTRIES, ROOTFS_FILE_NAME},
    },
    storage::{ArchiveStorage, FileBackedStorage},
};

pub struct ArchiveBuilder<S: ArchiveStorage> {
    builder: tar::Builder<S>,
    /// Bytes handed to the storage so far.
    len: u64,
    num_entries: usize,
}

impl<S: ArchiveStorage> ArchiveBuilder<S> {
    pub fn new(storage: S) -> Self {
        Self {
            builder: tar::Builder::new(storage),
            len: 0,
            num_entries: 0,
        }
    }

    pub fn num_entries(&self) -> usize {
        self.num_entries
    }

    /// Appends a header-only directory entry.
    pub fn append_directory(&mut self, entry: &DirectoryEntry) -> Result<()> {
        let header = entry
            .to_header()
            .with_context(|| format!("encoding header for {}", entry.path))?;

        self.builder
            .append(&header, io::empty())
            .with_context(|| format!("appending {}", entry.path))?;

        self.len += BLOCK_SIZE as u64;
        self.num_entries += 1;

        info!("[entry #{}] appended {entry}", self.num_entries);
        Ok(())
    }

    /// Writes the end-of-archive marker, pads the archive to a whole record and finalizes the
    /// storage.
    pub fn finish(mut self) -> Result<S> {
        self.builder
            .finish()
            .context("writing end-of-archive marker")?;
        let mut storage = self
            .builder
            .into_inner()
            .context("releasing archive storage")?;
        let len = self.len + END_OF_ARCHIVE_SIZE as u64;

        let padding = record_padding(len);
        io::copy(&mut io::repeat(0).take(padding), &mut storage)
            .context("padding archive to a record boundary")?;
        storage.finalize()?;

        info!(
            "wrote {} entries ({} bytes)",
            self.num_entries,
            len + padding
        );
        Ok(storage)
    }
}

/// Appends `entries` in order and finishes the archive.
pub fn write_entries<S: ArchiveStorage>(storage: S, entries: &[DirectoryEntry]) -> Result<S> {
    let mut builder = ArchiveBuilder::new(storage);

    for entry in entries {
        builder.append_directory(entry)?;
    }

    builder.finish()
}

/// Builds the root filesystem archive as [`ROOTFS_FILE_NAME`] in the current directory.
pub fn build() -> Result<()> {
    build_at(ROOTFS_FILE_NAME)
}

/// Builds the root filesystem archive at `path`.
pub fn build_at(path: impl AsRef<Path>) -> Result<()> {
    let storage = FileBackedStorage::create(path)?;
    info!("building {}", storage.path().display());

    write_entries(storage, &ROOTFS_ENTRIES)?;

    Ok(())
}
