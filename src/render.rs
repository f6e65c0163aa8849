//! ASCII renderer for terminal viewing.

use std::fmt::Write as _;

use crate::game::{CivType, Coord, GameState, Tile, BOARD_HEIGHT, BOARD_WIDTH};

/// Render a game state to ASCII.
///
/// Output format:
/// ```text
/// ┌─────────────────────────────────┐
/// │ . . ~ t . * . . . . . . . . . . │
/// │ . T . ~ f . . . . . X . . . . . │
/// └─────────────────────────────────┘
/// Kingdoms: 3   Bag: 120   Treasures: 9
/// Player 0 (Archer)  T:2 F:0 M:1 S:0  hand 6
/// ```
///
/// Legend: lowercase = tile, uppercase = leader, `*` = treasure temple,
/// `#` = monument, `X` = catastrophe, `~` = river, `.` = empty.
#[must_use]
pub fn render_ascii(state: &GameState) -> String {
    let mut output = String::new();
    render_board(&mut output, state);
    render_summary(&mut output, state);
    output
}

fn render_board(output: &mut String, state: &GameState) {
    output.push('┌');
    for _ in 0..(u16::from(BOARD_WIDTH) * 2 + 1) {
        output.push('─');
    }
    output.push_str("┐\n");

    for y in 0..BOARD_HEIGHT {
        output.push_str("│ ");
        for x in 0..BOARD_WIDTH {
            let coord = Coord::new(x, y);
            output.push(space_glyph(state, coord));
            output.push(' ');
        }
        output.push_str("│\n");
    }

    output.push('└');
    for _ in 0..(u16::from(BOARD_WIDTH) * 2 + 1) {
        output.push('─');
    }
    output.push_str("┘\n");
}

fn space_glyph(state: &GameState, coord: Coord) -> char {
    let Some(space) = state.board.get(coord) else {
        return '?';
    };
    if let Some(leader) = space.leader {
        return civ_glyph(leader.civ).to_ascii_uppercase();
    }
    if space.monument.is_some() {
        return '#';
    }
    match space.tile {
        Some(Tile::Catastrophe) => 'X',
        Some(Tile::Unification) => 'u',
        Some(Tile::Dynasty(_)) => 'd',
        Some(tile) => match tile.faceup_civ() {
            Some(CivType::Temple) if space.treasure => '*',
            Some(civ) => civ_glyph(civ),
            None => '#', // face-down
        },
        None if space.river => '~',
        None => '.',
    }
}

const fn civ_glyph(civ: CivType) -> char {
    match civ {
        CivType::Temple => 't',
        CivType::Farm => 'f',
        CivType::Market => 'm',
        CivType::Settlement => 's',
    }
}

fn render_summary(output: &mut String, state: &GameState) {
    let _ = writeln!(
        output,
        "Kingdoms: {}   Bag: {}   Treasures: {}",
        state.kingdoms.len(),
        state.tile_bag.len(),
        state.board.treasure_count()
    );
    for (idx, player) in state.players.iter().enumerate() {
        let p = &player.points;
        let _ = writeln!(
            output,
            "Player {idx} ({:?})  T:{} F:{} M:{} S:{}  hand {}",
            player.dynasty, p.temple, p.farm, p.market, p.settlement,
            player.hand.len()
        );
    }
}
