//! `melonshelf config` - show or change persisted settings

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use melonshelf_core::MetadataStore;

#[derive(Args)]
pub struct ConfigArgs {
    /// Set the ROM directory scanned by `list`
    #[arg(long)]
    pub rom_dir: Option<PathBuf>,

    /// Set the emulator executable used by `run`
    #[arg(long)]
    pub emulator: Option<PathBuf>,

    /// Set the managed cover directory
    #[arg(long)]
    pub covers_dir: Option<PathBuf>,

    /// Restrict scans to pinned entries by default (true/false)
    #[arg(long)]
    pub only_pinned: Option<bool>,
}

pub fn execute(args: ConfigArgs) -> Result<()> {
    let mut store = MetadataStore::open_default()?;

    let mut changed = false;
    if let Some(rom_dir) = args.rom_dir {
        store.settings.rom_dir = rom_dir;
        changed = true;
    }
    if let Some(emulator) = args.emulator {
        store.settings.emulator_path = emulator;
        changed = true;
    }
    if let Some(covers_dir) = args.covers_dir {
        store.settings.covers_dir = covers_dir;
        changed = true;
    }
    if let Some(only_pinned) = args.only_pinned {
        store.settings.only_pinned = only_pinned;
        changed = true;
    }

    if changed {
        store.save_settings()?;
    }

    println!("config dir:  {}", store.config_dir().display());
    println!("rom dir:     {}", store.settings.rom_dir.display());
    println!("emulator:    {}", store.settings.emulator_path.display());
    println!("covers dir:  {}", store.settings.covers_dir.display());
    println!("view mode:   {}", store.settings.view_mode.as_str());
    println!("only pinned: {}", store.settings.only_pinned);
    println!("pinned:      {}", store.settings.pinned_files.len());
    Ok(())
}
