use super::entry::DirectoryEntry;

/// The file name the root filesystem archive is written to.
pub const ROOTFS_FILE_NAME: &str = "rootfs.tar";

/// The entries of the root filesystem archive, in the order they are written. Parents come
/// before their children.
pub const ROOTFS_ENTRIES: [DirectoryEntry; 2] = [
    DirectoryEntry::new("opt", 0o755),
    DirectoryEntry::new("opt/setting", 0o1777),
];
