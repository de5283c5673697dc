use std::io::Write;

use anyhow::Result;

/// Somewhere an archive is written to.
pub trait ArchiveStorage: Write {
    /// Makes everything written so far durable. Called once, after the end-of-archive marker
    /// and record padding have been written.
    fn finalize(&mut self) -> Result<()> {
        self.flush()?;
        Ok(())
    }
}
