use crate::core::{Cell, GameChangeType, GameState, GameUpdate, Level, MoveRejection, UserAction};

/// Resolves one action against `game` without touching it.
/// A rejected action yields the reason and no new state.
pub fn step(level: &Level, game: &GameState, action: UserAction) -> GameUpdate {
    let dir = match action {
        UserAction::Move(d) => d.delta(),
    };

    let next = game.player + dir;
    match level.cell(&next) {
        None => return GameUpdate::Rejected(MoveRejection::OutOfBounds),
        Some(Cell::Wall) => return GameUpdate::Rejected(MoveRejection::Wall),
        Some(Cell::Floor) => {}
    }

    let Some(crate_index) = game.index_of_crate_at(&next) else {
        return GameUpdate::NextState(
            GameState {
                player: next,
                crates: game.crates.clone(),
            },
            GameChangeType::PlayerMove,
        );
    };

    let beyond = next + dir;
    if !level.is_walkable(&beyond) || game.has_crate_at(&beyond) {
        return GameUpdate::Rejected(MoveRejection::CrateBlocked);
    }

    let mut crates = game.crates.clone();
    crates[crate_index] = beyond;
    crates.sort_unstable();

    GameUpdate::NextState(
        GameState {
            player: next,
            crates,
        },
        GameChangeType::PlayerAndCrateMove,
    )
}
