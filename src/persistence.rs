//! Save and load of full game states.
//!
//! JSON with a versioned envelope: saves are small and worth keeping
//! human-inspectable.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::GameState;

/// Current save format version.
const VERSION: u32 = 1;

/// Envelope around a saved game.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SaveFile {
    /// Format version.
    version: u32,
    /// The saved state.
    state: GameState,
}

/// Save a game state to a file.
///
/// # Errors
///
/// Returns an error if serialization or file I/O fails.
pub fn save_game(state: &GameState, path: &Path) -> io::Result<()> {
    let envelope = SaveFile {
        version: VERSION,
        state: state.clone(),
    };
    let encoded = serde_json::to_string_pretty(&envelope)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, encoded)
}

/// Load a game state from a file.
///
/// # Errors
///
/// Returns an error if the file is unreadable, malformed, or carries an
/// unsupported version.
pub fn load_game(path: &Path) -> io::Result<GameState> {
    let contents = fs::read_to_string(path)?;
    let envelope: SaveFile = serde_json::from_str(&contents)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if envelope.version != VERSION {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("unsupported save version: {}", envelope.version),
        ));
    }
    Ok(envelope.state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{wage_temple_tiles, CivType, ConflictPhase, Coord, Tile};
    use crate::host::SeededHost;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_roundtrip() {
        let mut state = GameState::new(4).unwrap();
        state.setup(&mut SeededHost::new(11));
        let leader = state.players[0].take_leader(CivType::Farm).unwrap();
        state.board.get_mut(Coord::new(3, 4)).unwrap().leader = Some(leader);
        state.board.get_mut(Coord::new(3, 5)).unwrap().tile =
            Some(Tile::civilization(CivType::Farm));
        state
            .kingdoms
            .create([Coord::new(3, 4), Coord::new(3, 5)].into_iter().collect());

        let dir = tempdir().unwrap();
        let path = dir.path().join("game.json");

        save_game(&state, &path).unwrap();
        let loaded = load_game(&path).unwrap();
        assert_eq!(state, loaded);
    }

    #[test]
    fn test_midconflict_state_roundtrips() {
        let mut state = GameState::new(3).unwrap();
        let defender = state.players[1].take_leader(CivType::Temple).unwrap();
        state.board.get_mut(Coord::new(6, 4)).unwrap().leader = Some(defender);
        let attacker = state.players[0].take_leader(CivType::Temple).unwrap();
        state.board.get_mut(Coord::new(4, 4)).unwrap().leader = Some(attacker);
        state.board.get_mut(Coord::new(5, 4)).unwrap().tile =
            Some(Tile::civilization(CivType::Settlement));
        state.kingdoms.create(
            [Coord::new(4, 4), Coord::new(5, 4), Coord::new(6, 4)]
                .into_iter()
                .collect(),
        );
        for _ in 0..2 {
            state.players[0].hand.push(Tile::civilization(CivType::Temple));
        }
        wage_temple_tiles(&mut state, 0, 2, false, Coord::new(4, 4)).unwrap();
        assert_eq!(state.revolt.phase(), ConflictPhase::WageInProgress);

        let dir = tempdir().unwrap();
        let path = dir.path().join("midconflict.json");
        save_game(&state, &path).unwrap();
        let loaded = load_game(&path).unwrap();

        assert_eq!(state, loaded);
        assert_eq!(loaded.revolt.attacker, Some(0));
        assert_eq!(loaded.players[0].revolt.waged_tiles.len(), 2);

        // The reloaded state can finish the conflict.
        let mut resumed = loaded;
        wage_temple_tiles(&mut resumed, 1, 0, true, Coord::new(6, 4)).unwrap();
        assert_eq!(resumed.revolt.phase(), ConflictPhase::Idle);
        assert_eq!(resumed.players[0].points.temple, 1);
    }

    #[test]
    fn test_malformed_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not a save").unwrap();
        assert!(load_game(&path).is_err());
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let mut state = GameState::new(3).unwrap();
        state.setup(&mut SeededHost::new(1));

        let dir = tempdir().unwrap();
        let path = dir.path().join("future.json");
        save_game(&state, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let bumped = contents.replacen("\"version\": 1", "\"version\": 9", 1);
        fs::write(&path, bumped).unwrap();

        let err = load_game(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
