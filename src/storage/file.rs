use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::archive_storage::ArchiveStorage;

#[derive(Debug)]
pub struct FileBackedStorage {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileBackedStorage {
    /// Creates the file at `path`, truncating it if it already exists.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("unable to create archive file {}", path.display()))?;

        Ok(FileBackedStorage {
            path: path.to_owned(),
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileBackedStorage {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl ArchiveStorage for FileBackedStorage {
    fn finalize(&mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("flushing {}", self.path.display()))?;
        self.writer
            .get_ref()
            .sync_all()
            .with_context(|| format!("syncing {}", self.path.display()))?;

        Ok(())
    }
}
