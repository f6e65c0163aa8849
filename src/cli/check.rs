//! Save validation command implementation.

use std::path::PathBuf;

use eridu::game::check_invariants;
use eridu::persistence::load_game;

use super::CliError;

/// Execute the check command: load a save and run the structural
/// invariant checks.
///
/// # Errors
///
/// Returns an error if the save cannot be read or any invariant fails.
pub(crate) fn execute(save: PathBuf) -> Result<(), CliError> {
    let state = load_game(&save)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", save.display())))?;

    let violations = check_invariants(&state);
    if violations.is_empty() {
        println!("{}: all invariants hold", save.display());
        return Ok(());
    }

    for violation in &violations {
        println!("  ✗ {violation}");
    }
    Err(CliError::new(format!(
        "{} invariant violation(s)",
        violations.len()
    )))
}
