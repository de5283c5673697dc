use std::time::SystemTime;

use anyhow::{Context, Result};

/// The time metadata recorded in an archive header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeMetadata {
    /// Last modification time.
    pub mtime: SystemTime,
}

impl TimeMetadata {
    /// Every timestamp pinned to the Unix epoch, so archives don't depend on the wall clock.
    pub const EPOCH: TimeMetadata = TimeMetadata {
        mtime: SystemTime::UNIX_EPOCH,
    };

    /// The modification time as whole seconds since the epoch, as stored in the header.
    pub fn mtime_secs(&self) -> Result<u64> {
        Ok(self
            .mtime
            .duration_since(SystemTime::UNIX_EPOCH)
            .context("modification time is before the Unix epoch")?
            .as_secs())
    }
}

impl Default for TimeMetadata {
    fn default() -> Self {
        Self::EPOCH
    }
}

/// The ownership metadata recorded in an archive header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnershipMetadata {
    /// Owner user ID.
    pub uid: u64,
    /// Owner group ID.
    pub gid: u64,
    /// Owner user name.
    pub user_name: &'static str,
    /// Owner group name.
    pub group_name: &'static str,
}

impl OwnershipMetadata {
    pub const ROOT: OwnershipMetadata = OwnershipMetadata {
        uid: 0,
        gid: 0,
        user_name: "root",
        group_name: "root",
    };
}

impl Default for OwnershipMetadata {
    fn default() -> Self {
        Self::ROOT
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_epoch_mtime() {
        assert_eq!(TimeMetadata::EPOCH.mtime_secs().unwrap(), 0);
        assert_eq!(TimeMetadata::default(), TimeMetadata::EPOCH);
    }

    #[test]
    fn test_mtime_truncates_to_seconds() {
        let time = TimeMetadata {
            mtime: SystemTime::UNIX_EPOCH + Duration::from_millis(1_500),
        };
        assert_eq!(time.mtime_secs().unwrap(), 1);
    }

    #[test]
    fn test_mtime_before_epoch() {
        let time = TimeMetadata {
            mtime: SystemTime::UNIX_EPOCH - Duration::from_secs(1),
        };
        assert!(time.mtime_secs().is_err());
    }

    #[test]
    fn test_root_ownership() {
        let root = OwnershipMetadata::default();
        assert_eq!((root.uid, root.gid), (0, 0));
        assert_eq!((root.user_name, root.group_name), ("root", "root"));
    }
}
