use std::mem::size_of;

/// The size of a tar block in bytes.
pub const BLOCK_SIZE: usize = 512;

pub type Block = [u8; BLOCK_SIZE];
const_assert!(size_of::<Block>() == BLOCK_SIZE);
const_assert!(size_of::<tar::Header>() == BLOCK_SIZE);

/// The number of all-zero blocks that mark the end of an archive.
pub const END_OF_ARCHIVE_BLOCKS: usize = 2;

/// The number of bytes occupied by the end-of-archive marker.
pub const END_OF_ARCHIVE_SIZE: usize = END_OF_ARCHIVE_BLOCKS * BLOCK_SIZE;

/// The default blocking factor: archives are padded to a whole number of records of this many
/// blocks.
pub const BLOCKS_PER_RECORD: usize = 20;

/// The size of a record in bytes.
pub const RECORD_SIZE: usize = BLOCKS_PER_RECORD * BLOCK_SIZE;
const_assert!(RECORD_SIZE % BLOCK_SIZE == 0);
const_assert!(RECORD_SIZE >= END_OF_ARCHIVE_SIZE);

/// The number of zero bytes needed to pad an archive of `len` bytes to a record boundary.
pub fn record_padding(len: u64) -> u64 {
    let record_size = RECORD_SIZE as u64;

    len.next_multiple_of(record_size).max(record_size) - len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_padding_empty() {
        assert_eq!(record_padding(0), RECORD_SIZE as u64);
    }

    #[test]
    fn test_record_padding_partial_record() {
        let len = (4 * BLOCK_SIZE) as u64;
        assert_eq!(record_padding(len), (16 * BLOCK_SIZE) as u64);
    }

    #[test]
    fn test_record_padding_record_boundary() {
        assert_eq!(record_padding(RECORD_SIZE as u64), 0);
        assert_eq!(record_padding(2 * RECORD_SIZE as u64), 0);
    }

    #[test]
    fn test_record_padding_past_boundary() {
        let len = (RECORD_SIZE + BLOCK_SIZE) as u64;
        assert_eq!(record_padding(len), (RECORD_SIZE - BLOCK_SIZE) as u64);
    }
}
