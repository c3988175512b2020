use std::fmt;

/// Static layer of the grid. Crates and the player are tracked as positions on top of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
}

/// What a grid cell holds, as seen from outside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Floor,
    Wall,
    Crate,
    Player,
}

/// Grid coordinate. `x` is the column and `y` the row, origin at the top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

impl std::ops::Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
}

/// The immutable part of a loaded level: walls, floor and the target overlay.
#[derive(Clone, Debug)]
pub struct Level {
    pub(crate) cells: super::BoundedGrid<Cell>,
    pub(crate) targets: super::BoundedGrid<bool>,
}

/// The mutable part of a level: where the player and the crates are.
/// Crates are kept sorted so two states with the same layout compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub player: Position,
    pub crates: Vec<Position>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    Rejected(MoveRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndCrateMove,
}

/// Why a move left the state untouched. Rejections are normal outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    OutOfBounds,
    Wall,
    CrateBlocked,
    AlreadySolved,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveRejection::OutOfBounds => "cannot move out of bounds",
            MoveRejection::Wall => "cannot walk into a wall",
            MoveRejection::CrateBlocked => "cannot push crate",
            MoveRejection::AlreadySolved => "puzzle already solved",
        };
        f.write_str(text)
    }
}

/// Result of `PuzzleEngine::apply_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub accepted: bool,
    pub solved: bool,
    pub change: Option<GameChangeType>,
    pub rejection: Option<MoveRejection>,
}
