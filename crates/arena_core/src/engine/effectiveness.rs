//! Base damage table for simultaneous action pairs.

use crate::models::Action;

/// Base damage for every ordered `(player, opponent)` action pair, before
/// skill scaling and jitter. Rows are the player's action and columns the
/// opponent's, both in `Action::ALL` order. Each cell is
/// `(damage the player deals, damage the opponent deals)`; the first lands
/// on the opponent, the second on the player.
#[rustfmt::skip]
const BASE_DAMAGE: [[(i32, i32); 4]; 4] = [
    // opponent:  attack    defend    special   heal
    /* attack  */ [(25, 25), (10, 0),  (30, 35), (35, 0)],
    /* defend  */ [(0, 10),  (0, 0),   (15, 20), (0, 0)],
    /* special */ [(35, 30), (20, 15), (40, 40), (45, 0)],
    /* heal    */ [(0, 35),  (0, 0),   (0, 45),  (0, 0)],
];

/// Look up the base damage pair for an action combination. Total: every
/// pair has a cell, and cells without listed damage are `(0, 0)`.
pub fn base_damage(player: Action, opponent: Action) -> (i32, i32) {
    BASE_DAMAGE[player.index()][opponent.index()]
}
