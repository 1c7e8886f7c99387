//! `melonshelf cover` - adopt an image as a ROM's cover

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;

use melonshelf_core::{MetadataStore, rom};

#[derive(Args)]
pub struct CoverArgs {
    /// ROM file to decorate
    pub rom: PathBuf,

    /// Image to copy into the managed cover directory
    pub image: PathBuf,
}

pub fn execute(args: CoverArgs) -> Result<()> {
    let Some(stem) = args.rom.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
        bail!("Not a file path: {}", args.rom.display());
    };

    let mut store = MetadataStore::open_default()?;
    let identity = rom::identity_for(&args.rom);
    let dest = store.set_cover(&identity, &stem, &args.image)?;
    println!("{identity} -> {}", dest.display());
    Ok(())
}
