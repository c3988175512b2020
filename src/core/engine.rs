use std::path::Path;

use crate::core::level::{LoadError, LoadOptions, load_level_file, parse_level, render_level_text};
use crate::core::{
    Direction, GameChangeType, GameState, GameUpdate, Level, MoveOutcome, MoveRejection, Position,
    Tile, UserAction, step,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    pub load: LoadOptions,
    /// Reject every move once all targets are filled.
    pub lock_after_win: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            load: LoadOptions::default(),
            lock_after_win: true,
        }
    }
}

/// Owns one level and the player/crate state played on it.
///
/// Presentation code holds the engine and talks to it through the query methods and
/// [`PuzzleEngine::apply_move`]. A move either replaces the whole state or leaves it alone.
#[derive(Clone, Debug)]
pub struct PuzzleEngine {
    level: Level,
    initial: GameState,
    state: GameState,
    options: EngineOptions,
    won: bool,
    moves: u32,
    pushes: u32,
}

impl PuzzleEngine {
    pub fn load(text: &str, options: EngineOptions) -> Result<Self, LoadError> {
        let (state, level) = parse_level(text, &options.load)?;
        Ok(Self::from_parts(state, level, options))
    }

    pub fn load_file(path: impl AsRef<Path>, options: EngineOptions) -> Result<Self, LoadError> {
        let (state, level) = load_level_file(path, &options.load)?;
        Ok(Self::from_parts(state, level, options))
    }

    fn from_parts(state: GameState, level: Level, options: EngineOptions) -> Self {
        let won = state.is_won(&level);
        log::info!(
            "loaded {}x{} level with {} crates and {} targets",
            level.width(),
            level.height(),
            state.crates.len(),
            level.total_targets()
        );
        PuzzleEngine {
            level,
            initial: state.clone(),
            state,
            options,
            won,
            moves: 0,
            pushes: 0,
        }
    }

    /// Replaces the current level. On error the engine keeps playing the old one.
    pub fn reload(&mut self, text: &str) -> Result<(), LoadError> {
        *self = Self::load(text, self.options)?;
        Ok(())
    }

    pub fn reload_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        *self = Self::load_file(path, self.options)?;
        Ok(())
    }

    /// Puts the player and crates back where the level started them.
    pub fn restart(&mut self) {
        self.state = self.initial.clone();
        self.won = self.state.is_won(&self.level);
        self.moves = 0;
        self.pushes = 0;
        log::debug!("level restarted");
    }

    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        self.apply_action(UserAction::Move(direction))
    }

    pub fn apply_action(&mut self, action: UserAction) -> MoveOutcome {
        if self.won && self.options.lock_after_win {
            return self.reject(action, MoveRejection::AlreadySolved);
        }

        match step(&self.level, &self.state, action) {
            GameUpdate::NextState(next, change) => {
                self.state = next;
                self.moves += 1;
                if change == GameChangeType::PlayerAndCrateMove {
                    self.pushes += 1;
                }

                let was_won = self.won;
                self.won = self.state.is_won(&self.level);
                if self.won && !was_won {
                    log::info!("puzzle solved in {} moves, {} pushes", self.moves, self.pushes);
                }

                MoveOutcome {
                    accepted: true,
                    solved: self.won,
                    change: Some(change),
                    rejection: None,
                }
            }
            GameUpdate::Rejected(reason) => self.reject(action, reason),
        }
    }

    fn reject(&self, action: UserAction, reason: MoveRejection) -> MoveOutcome {
        log::debug!("{:?} rejected at {}: {}", action, self.state.player, reason);
        MoveOutcome {
            accepted: false,
            solved: self.won,
            change: None,
            rejection: Some(reason),
        }
    }

    pub fn tile_at(&self, pos: Position) -> Option<Tile> {
        self.level.tile_at(&self.state, &pos)
    }

    pub fn is_target(&self, pos: Position) -> bool {
        self.level.is_target(&pos)
    }

    pub fn player(&self) -> Position {
        self.state.player
    }

    pub fn crates(&self) -> &[Position] {
        &self.state.crates
    }

    pub fn width(&self) -> i32 {
        self.level.width()
    }

    pub fn height(&self) -> i32 {
        self.level.height()
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// `(targets holding a crate, all targets)`
    pub fn targets_filled(&self) -> (usize, usize) {
        (
            self.level.count_crates_on_targets(&self.state),
            self.level.total_targets(),
        )
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pushes(&self) -> u32 {
        self.pushes
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn to_level_text(&self) -> String {
        render_level_text(&self.level, &self.state)
    }
}
