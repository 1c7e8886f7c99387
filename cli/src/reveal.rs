//! `melonshelf reveal` - open the ROM's folder in the file manager

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use melonshelf_core::launch;

#[derive(Args)]
pub struct RevealArgs {
    /// ROM file to reveal
    pub rom: PathBuf,
}

pub fn execute(args: RevealArgs) -> Result<()> {
    launch::reveal(&args.rom)
}
