//! Sokoban puzzle engine: level loading, push rules and win detection, plus a
//! level-editor model. The terminal front end in `main.rs` is one consumer of it.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod editor;
pub mod models;

#[cfg(test)]
mod test;

pub use crate::core::{
    Direction, EngineOptions, LoadError, LoadOptions, MoveOutcome, MoveRejection, Position,
    PuzzleEngine, Tile,
};
