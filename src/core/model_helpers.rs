use crate::core::{Cell, Direction, GameState, Level, Position, Tile};

impl Level {
    pub fn height(&self) -> i32 {
        self.cells.height()
    }

    pub fn width(&self) -> i32 {
        self.cells.width()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.cells.contains(pos)
    }

    pub fn cell(&self, pos: &Position) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    pub fn is_target(&self, pos: &Position) -> bool {
        self.targets.get(pos).copied().unwrap_or(false)
    }

    pub fn is_walkable(&self, pos: &Position) -> bool {
        matches!(self.cell(pos), Some(Cell::Floor))
    }

    pub fn target_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.targets.size().iter().filter(|pos| self.targets[pos])
    }

    pub fn total_targets(&self) -> usize {
        self.target_positions().count()
    }

    /// Composes the static layer with the dynamic entities of `game`.
    pub fn tile_at(&self, game: &GameState, pos: &Position) -> Option<Tile> {
        let tile = match self.cell(pos)? {
            Cell::Wall => Tile::Wall,
            Cell::Floor if *pos == game.player => Tile::Player,
            Cell::Floor if game.has_crate_at(pos) => Tile::Crate,
            Cell::Floor => Tile::Floor,
        };
        Some(tile)
    }

    pub fn count_crates_on_targets(&self, game: &GameState) -> usize {
        game.crates.iter().filter(|pos| self.is_target(pos)).count()
    }
}

impl GameState {
    pub fn has_crate_at(&self, pos: &Position) -> bool {
        self.crates.binary_search(pos).is_ok()
    }

    pub fn index_of_crate_at(&self, pos: &Position) -> Option<usize> {
        self.crates.binary_search(pos).ok()
    }

    /// Every target holds a crate. Vacuously true for a level without targets.
    pub fn is_won(&self, level: &Level) -> bool {
        level.target_positions().all(|pos| self.has_crate_at(&pos))
    }
}

impl Direction {
    pub fn delta(self) -> Position {
        match self {
            Direction::Up => Position::new(0, -1),
            Direction::Down => Position::new(0, 1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        }
    }
}
