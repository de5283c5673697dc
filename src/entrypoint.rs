//! A container entrypoint: prints a readme to stderr, then replaces itself with an engine
//! process.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write};
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Error, Result};
use log::debug;

/// The operands of an entrypoint invocation.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    /// The file printed to stderr before the engine starts.
    pub readme: PathBuf,
    /// The program that replaces the entrypoint. Also passed as its `argv[0]`.
    pub engine: OsString,
    /// Arguments passed to the engine after `argv[0]`.
    pub engine_args: Vec<OsString>,
}

impl Invocation {
    /// Splits the operands (program name excluded) into readme, engine and engine arguments.
    /// Returns `None` if either the readme or the engine is missing.
    pub fn parse(operands: impl IntoIterator<Item = OsString>) -> Option<Self> {
        let mut operands = operands.into_iter();

        let readme = operands.next()?;
        let engine = operands.next()?;

        Some(Invocation {
            readme: readme.into(),
            engine,
            engine_args: operands.collect(),
        })
    }

    /// Copies the readme to `out`. Only opening the readme can fail; a read error part way
    /// through ends the copy early.
    pub fn copy_readme(&self, out: &mut impl Write) -> Result<()> {
        let mut readme = File::open(&self.readme)
            .with_context(|| format!("Failed to read: '{}'", self.readme.display()))?;

        match io::copy(&mut readme, out) {
            Ok(copied) => debug!("copied {copied} bytes from {}", self.readme.display()),
            Err(err) => debug!("stopped copying {}: {err}", self.readme.display()),
        }

        Ok(())
    }

    /// The path the engine is executed from. A bare name refers to the working directory and is
    /// never looked up in `PATH`.
    pub fn engine_path(&self) -> PathBuf {
        let engine = Path::new(&self.engine);

        if engine.as_os_str().as_encoded_bytes().contains(&b'/') {
            engine.to_owned()
        } else {
            Path::new(".").join(engine)
        }
    }

    /// Replaces the current process with the engine. Only returns on failure.
    pub fn exec(&self) -> Error {
        debug!("executing {:?} {:?}", self.engine, self.engine_args);

        let err = Command::new(self.engine_path())
            .arg0(&self.engine)
            .args(&self.engine_args)
            .exec();

        Error::new(err).context(format!(
            "Failed to exec: '{}'",
            self.engine.to_string_lossy()
        ))
    }

    /// Prints the readme to stderr and starts the engine.
    pub fn run(&self) -> Error {
        if let Err(err) = self.copy_readme(&mut io::stderr().lock()) {
            return err;
        }

        self.exec()
    }
}
