mod bounded_grid;
mod bounds;
pub mod consts;
mod engine;
mod level;
mod model_helpers;
mod models;
mod update;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use engine::{EngineOptions, PuzzleEngine};
pub use level::{LoadError, LoadOptions, load_level_file, parse_level, render_level_text};
pub use models::{
    Cell, Direction, GameChangeType, GameState, GameUpdate, Level, MoveOutcome, MoveRejection,
    Position, Tile, UserAction,
};
pub use update::step;
