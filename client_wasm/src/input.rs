//! Keyboard and pointer input handling

use game_core::Direction;

/// Map a `KeyboardEvent.key` to a paddle direction
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}

/// Pointer y relative to the arena's top edge
pub fn arena_relative_y(client_y: f64, arena_top: f64) -> f32 {
    (client_y - arena_top) as f32
}
