/// Perform a const assertion.
macro_rules! const_assert {
    ($($tt:tt)*) => {
        const _: () = assert!($($tt)*);
    }
}

/// Tar blocks and records.
pub mod block;
/// Directory entries and their ustar headers.
pub mod entry;
/// The fixed entries of the root filesystem archive.
pub mod rootfs;
