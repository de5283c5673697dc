pub mod archive_format;
pub mod builder;
pub mod entrypoint;
pub mod metadata;
pub mod storage;
