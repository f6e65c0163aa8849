//! Game creation command implementation.

use std::path::PathBuf;

use eridu::game::GameState;
use eridu::persistence::save_game;
use eridu::SeededHost;

use super::CliError;

/// Execute the new command: create, shuffle, deal, and save a game.
///
/// # Errors
///
/// Returns an error for an unsupported player count or a write failure.
pub(crate) fn execute(players: usize, seed: u64, output: PathBuf) -> Result<(), CliError> {
    let mut state = GameState::new(players)?;
    let mut host = SeededHost::new(seed);
    state.setup(&mut host);

    save_game(&state, &output)
        .map_err(|e| CliError::new(format!("Failed to write {}: {e}", output.display())))?;

    println!(
        "Created a {players}-player game (seed {seed}) at {}",
        output.display()
    );
    Ok(())
}
