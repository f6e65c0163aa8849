//! Save rendering command implementation.

use std::path::PathBuf;

use eridu::persistence::load_game;
use eridu::render::render_ascii;

use super::CliError;

/// Execute the show command: load a save and print the board.
///
/// # Errors
///
/// Returns an error if the save cannot be read.
pub(crate) fn execute(save: PathBuf) -> Result<(), CliError> {
    let state = load_game(&save)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", save.display())))?;
    print!("{}", render_ascii(&state));
    Ok(())
}
