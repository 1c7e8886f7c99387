//! `melonshelf pin` - toggle the pinned flag for a ROM
//!
//! Pins are keyed by filename, so the flag stays with the file name,
//! not the content.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;

use melonshelf_core::MetadataStore;

#[derive(Args)]
pub struct PinArgs {
    /// ROM file to pin or unpin
    pub rom: PathBuf,
}

pub fn execute(args: PinArgs) -> Result<()> {
    let Some(file_name) = args.rom.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        bail!("Not a file path: {}", args.rom.display());
    };

    let mut store = MetadataStore::open_default()?;
    let pinned = store.toggle_pinned(&file_name)?;
    println!(
        "{} {}",
        file_name,
        if pinned { "pinned" } else { "unpinned" }
    );
    Ok(())
}
