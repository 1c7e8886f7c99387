//! `melonshelf rename` - set the display title for a ROM's identity

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use melonshelf_core::{MetadataStore, rom};

#[derive(Args)]
pub struct RenameArgs {
    /// ROM file whose title to change
    pub rom: PathBuf,

    /// New display title
    pub title: String,
}

pub fn execute(args: RenameArgs) -> Result<()> {
    let mut store = MetadataStore::open_default()?;
    let identity = rom::identity_for(&args.rom);
    store.set_display_title(&identity, &args.title)?;
    println!("{identity} -> {}", args.title.trim());
    Ok(())
}
