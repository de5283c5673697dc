use std::fmt;

use anyhow::{ensure, Context, Result};
use tar::Header;

use crate::metadata::{OwnershipMetadata, TimeMetadata};

/// The width of the ustar `name` field in bytes. A name that fills the field is not
/// nul-terminated.
pub const NAME_LEN: usize = 100;

/// The permission bits a header can carry, including setuid, setgid and the sticky bit.
pub const MODE_MASK: u32 = 0o7777;

/// The sticky bit.
pub const STICKY_BIT: u32 = 0o1000;

/// The kind of an archive entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryType {
    /// A directory. Carries metadata only, never a data payload.
    Directory,
}

impl From<EntryType> for tar::EntryType {
    fn from(entry_type: EntryType) -> Self {
        match entry_type {
            EntryType::Directory => tar::EntryType::Directory,
        }
    }
}

/// A directory record, fully specified by constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Path relative to the archive root, without a trailing slash.
    pub path: &'static str,
    pub entry_type: EntryType,
    /// POSIX permission bits.
    pub mode: u32,
    pub time: TimeMetadata,
    pub ownership: OwnershipMetadata,
}

impl DirectoryEntry {
    /// Constructs a root-owned directory entry with an epoch modification time.
    pub const fn new(path: &'static str, mode: u32) -> DirectoryEntry {
        DirectoryEntry {
            path,
            entry_type: EntryType::Directory,
            mode,
            time: TimeMetadata::EPOCH,
            ownership: OwnershipMetadata::ROOT,
        }
    }

    /// The contents of the header `name` field: the path with a trailing slash, nul-padded.
    pub fn name_field(&self) -> Result<[u8; NAME_LEN]> {
        let path = self.path.trim_end_matches('/');

        ensure!(!path.is_empty(), "entry path is empty");
        ensure!(
            !path.starts_with('/'),
            "entry path must be relative: {path}"
        );
        ensure!(
            path.len() < NAME_LEN,
            "entry path is more than {} bytes long: {path}",
            NAME_LEN - 1
        );

        let mut name = [0; NAME_LEN];
        name[..path.len()].copy_from_slice(path.as_bytes());
        name[path.len()] = b'/';

        Ok(name)
    }

    /// Encodes this entry as a ustar header with a valid checksum.
    pub fn to_header(&self) -> Result<Header> {
        let mut header = Header::new_ustar();

        header.as_old_mut().name = self.name_field()?;
        header.set_entry_type(self.entry_type.into());
        header.set_mode(self.mode & MODE_MASK);
        header.set_size(0);
        header.set_mtime(self.time.mtime_secs()?);
        header.set_uid(self.ownership.uid);
        header.set_gid(self.ownership.gid);
        header
            .set_username(self.ownership.user_name)
            .context("setting owner name")?;
        header
            .set_groupname(self.ownership.group_name)
            .context("setting group name")?;
        header.set_device_major(0).context("setting device major")?;
        header.set_device_minor(0).context("setting device minor")?;
        header.set_cksum();

        Ok(header)
    }
}

impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/ ({:04o})", self.path, self.mode & MODE_MASK)
    }
}
