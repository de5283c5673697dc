use anyhow::Result;
use clap::Parser;

use rootfs_tar::builder;

/// Builds rootfs.tar in the current directory.
#[derive(Parser)]
#[command(version)]
struct Args {}

fn main() -> Result<()> {
    env_logger::init();

    let _ = Args::parse();

    builder::build()
}
