//! `melonshelf info` - header, identity and banner details for one ROM

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use melonshelf_core::rom::{self, RomHeader};
use melonshelf_core::MetadataStore;

#[derive(Args)]
pub struct InfoArgs {
    /// ROM file to inspect
    pub rom: PathBuf,

    /// Write the decoded banner icon to a PNG file
    #[arg(long)]
    pub icon_out: Option<PathBuf>,
}

pub fn execute(args: InfoArgs) -> Result<()> {
    let store = MetadataStore::open_default()?;

    let header = RomHeader::read(&args.rom);
    let identity = rom::identity_with_header(&args.rom, &header);
    let stem = args
        .rom
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!("path:           {}", args.rom.display());
    println!("internal title: {}", header.internal_title);
    println!("game code:      {}", header.game_code);
    println!("identity:       {identity}");
    println!("display title:  {}", store.display_title(&identity, &stem));
    match store.cover_path(&identity, &stem) {
        Some(cover) => println!("cover:          {}", cover.display()),
        None => println!("cover:          (none)"),
    }
    println!(
        "pinned:         {}",
        store.is_pinned(
            &args
                .rom
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        )
    );

    match rom::read_icon(&args.rom) {
        Some(icon) => {
            println!("banner icon:    32x32");
            if let Some(out) = args.icon_out {
                icon.into_image()
                    .save(&out)
                    .with_context(|| format!("Failed to write icon to {}", out.display()))?;
                println!("icon written:   {}", out.display());
            }
        }
        None => println!("banner icon:    (none)"),
    }
    Ok(())
}
