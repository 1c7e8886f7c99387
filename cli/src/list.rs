//! `melonshelf list` - scan the library and print the ordered entries

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;

use melonshelf_core::{MetadataStore, ScanFilter, scan_library};

#[derive(Args)]
pub struct ListArgs {
    /// Directory to scan (defaults to the configured ROM directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Case-insensitive substring matched against title and filename
    #[arg(long, short)]
    pub query: Option<String>,

    /// Show only pinned entries
    #[arg(long)]
    pub pinned: bool,

    /// Print identities and paths as well
    #[arg(long, short)]
    pub verbose: bool,
}

pub fn execute(args: ListArgs) -> Result<()> {
    let store = MetadataStore::open_default()?;

    let root = match args.root {
        Some(root) => root,
        None if !store.settings.rom_dir.as_os_str().is_empty() => store.settings.rom_dir.clone(),
        None => bail!("No ROM directory configured; pass --root or set one with `melonshelf config --rom-dir`"),
    };

    let filter = ScanFilter {
        query: args.query.unwrap_or_default(),
        only_pinned: args.pinned || store.settings.only_pinned,
    };
    let entries = scan_library(&root, &store, &filter);

    for entry in &entries {
        let pin = if entry.pinned { "*" } else { " " };
        let code = if entry.game_code.is_empty() {
            "----"
        } else {
            entry.game_code.as_str()
        };
        println!("{pin} [{code}] {}", entry.display_title);
        if args.verbose {
            println!("      id:    {}", entry.identity);
            println!("      path:  {}", entry.path.display());
            if let Some(cover) = &entry.cover_path {
                println!("      cover: {}", cover.display());
            }
        }
    }
    println!("{} entries", entries.len());
    Ok(())
}
