//! Emulator invocation
//!
//! Spawns the configured external emulator with the selected ROM path
//! as its sole positional argument. Each failure mode gets its own
//! variant so the front-end can show a specific message: emulator not
//! configured, configured path gone, or the spawn itself failing.

use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use thiserror::Error;

use crate::store::Settings;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("No emulator executable configured")]
    EmulatorNotSet,
    #[error("Emulator not found: {0}")]
    EmulatorNotFound(PathBuf),
    #[error("Failed to spawn emulator: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Launch the configured emulator with `rom` as its argument.
///
/// Returns the child process handle; lifecycle beyond the spawn is the
/// caller's concern.
pub fn launch_rom(settings: &Settings, rom: &Path) -> Result<Child, LaunchError> {
    let emulator = &settings.emulator_path;
    if emulator.as_os_str().is_empty() {
        return Err(LaunchError::EmulatorNotSet);
    }
    if !emulator.exists() {
        return Err(LaunchError::EmulatorNotFound(emulator.clone()));
    }

    tracing::info!("Launching {} with {}", emulator.display(), rom.display());
    let child = Command::new(emulator).arg(rom).spawn()?;
    Ok(child)
}

/// Open the ROM's containing directory in the platform file manager.
pub fn reveal(rom: &Path) -> anyhow::Result<()> {
    let parent = rom.parent().unwrap_or(Path::new("."));
    open::that(parent)
        .map_err(|e| anyhow::anyhow!("Failed to open folder {}: {}", parent.display(), e))
}
