//! melonshelf - CLI front-end for the NDS ROM library
//!
//! # Commands
//!
//! - `melonshelf list` - Scan the library and print the ordered entries
//! - `melonshelf info` - Show header, identity and banner info for one ROM
//! - `melonshelf rename` - Set the display title for a ROM's identity
//! - `melonshelf pin` - Toggle the pinned flag for a ROM
//! - `melonshelf cover` - Adopt an image as a ROM's cover
//! - `melonshelf run` - Launch the configured emulator with a ROM
//! - `melonshelf reveal` - Open the ROM's folder in the file manager
//! - `melonshelf config` - Show or change persisted settings
//!
//! # Usage
//!
//! ```bash
//! # Point the library at a ROM directory and scan it
//! melonshelf config --rom-dir ~/roms
//! melonshelf list
//!
//! # Only pinned entries matching a query
//! melonshelf list --query mario --pinned
//!
//! # Launch a game
//! melonshelf config --emulator /usr/bin/melonDS
//! melonshelf run ~/roms/game.nds
//! ```

mod config;
mod cover;
mod info;
mod list;
mod pin;
mod rename;
mod reveal;
mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// CLI front-end for the melonshelf ROM library
#[derive(Parser)]
#[command(name = "melonshelf")]
#[command(about = "Browse, decorate and launch an NDS ROM library")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the library and print the ordered entries
    List(list::ListArgs),

    /// Show header, identity and banner info for one ROM
    Info(info::InfoArgs),

    /// Set the display title for a ROM's identity
    Rename(rename::RenameArgs),

    /// Toggle the pinned flag for a ROM
    Pin(pin::PinArgs),

    /// Adopt an image as a ROM's cover
    Cover(cover::CoverArgs),

    /// Launch the configured emulator with a ROM
    Run(run::RunArgs),

    /// Open the ROM's folder in the file manager
    Reveal(reveal::RevealArgs),

    /// Show or change persisted settings
    Config(config::ConfigArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => list::execute(args),
        Commands::Info(args) => info::execute(args),
        Commands::Rename(args) => rename::execute(args),
        Commands::Pin(args) => pin::execute(args),
        Commands::Cover(args) => cover::execute(args),
        Commands::Run(args) => run::execute(args),
        Commands::Reveal(args) => reveal::execute(args),
        Commands::Config(args) => config::execute(args),
    }
}
