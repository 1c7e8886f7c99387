//! `melonshelf run` - launch the configured emulator with a ROM

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use melonshelf_core::{MetadataStore, launch_rom};

#[derive(Args)]
pub struct RunArgs {
    /// ROM file to launch
    pub rom: PathBuf,

    /// Emulator executable (overrides the configured one)
    #[arg(long)]
    pub emulator: Option<PathBuf>,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let store = MetadataStore::open_default()?;

    let mut settings = store.settings.clone();
    if let Some(emulator) = args.emulator {
        settings.emulator_path = emulator;
    }

    let child = launch_rom(&settings, &args.rom)
        .with_context(|| format!("Launch failed for {}", args.rom.display()))?;
    println!("Launched {} (pid {})", args.rom.display(), child.id());
    Ok(())
}
