//! Paintable level grid. Exports the same text the loader reads.

use crate::core::consts::{
    CRATE, CRATE_ON_TARGET, EDITOR_DEFAULT_HEIGHT, EDITOR_DEFAULT_WIDTH, FLOOR, PLAYER,
    PLAYER_ON_TARGET, TARGET, WALL,
};
use crate::core::{
    BoundedGrid, BoundsOriginRoot, EngineOptions, LoadError, Position, PuzzleEngine, Tile,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorTile {
    Floor,
    Wall,
    Crate,
    Target,
    CrateOnTarget,
    Player,
    PlayerOnTarget,
}

impl EditorTile {
    pub fn symbol(self) -> char {
        match self {
            EditorTile::Floor => FLOOR,
            EditorTile::Wall => WALL,
            EditorTile::Crate => CRATE,
            EditorTile::Target => TARGET,
            EditorTile::CrateOnTarget => CRATE_ON_TARGET,
            EditorTile::Player => PLAYER,
            EditorTile::PlayerOnTarget => PLAYER_ON_TARGET,
        }
    }

    fn is_player(self) -> bool {
        matches!(self, EditorTile::Player | EditorTile::PlayerOnTarget)
    }

    fn has_target(self) -> bool {
        matches!(
            self,
            EditorTile::Target | EditorTile::CrateOnTarget | EditorTile::PlayerOnTarget
        )
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EditError {
    #[error("cell {0} is outside the {1}x{2} editor grid")]
    OutOfBounds(Position, i32, i32),
}

#[derive(Clone, Debug)]
pub struct LevelEditor {
    tiles: BoundedGrid<EditorTile>,
    player: Option<Position>,
}

impl Default for LevelEditor {
    fn default() -> Self {
        LevelEditor::new(EDITOR_DEFAULT_WIDTH, EDITOR_DEFAULT_HEIGHT)
    }
}

impl LevelEditor {
    pub fn new(width: i32, height: i32) -> Self {
        LevelEditor {
            tiles: BoundedGrid::new(BoundsOriginRoot::new(width, height), EditorTile::Floor),
            player: None,
        }
    }

    pub fn from_engine(engine: &PuzzleEngine) -> Self {
        let mut editor = LevelEditor::new(engine.width(), engine.height());
        for pos in editor.tiles.size().iter() {
            let on_target = engine.is_target(pos);
            let tile = match (engine.tile_at(pos), on_target) {
                (Some(Tile::Wall), _) => EditorTile::Wall,
                (Some(Tile::Crate), false) => EditorTile::Crate,
                (Some(Tile::Crate), true) => EditorTile::CrateOnTarget,
                (Some(Tile::Player), false) => EditorTile::Player,
                (Some(Tile::Player), true) => EditorTile::PlayerOnTarget,
                (Some(Tile::Floor) | None, false) => EditorTile::Floor,
                (Some(Tile::Floor) | None, true) => EditorTile::Target,
            };
            editor.tiles[&pos] = tile;
        }
        editor.player = Some(engine.player());
        editor
    }

    pub fn width(&self) -> i32 {
        self.tiles.width()
    }

    pub fn height(&self) -> i32 {
        self.tiles.height()
    }

    pub fn tile_at(&self, pos: Position) -> Option<EditorTile> {
        self.tiles.get(&pos).copied()
    }

    pub fn player(&self) -> Option<Position> {
        self.player
    }

    /// Paints one cell. There is at most one player: placing a new one clears the old spot,
    /// keeping its target mark.
    pub fn paint(&mut self, pos: Position, tile: EditorTile) -> Result<(), EditError> {
        if !self.tiles.contains(&pos) {
            return Err(EditError::OutOfBounds(pos, self.width(), self.height()));
        }

        if tile.is_player() {
            if let Some(old) = self.player.filter(|&old| old != pos) {
                let vacated = if self.tiles[&old].has_target() {
                    EditorTile::Target
                } else {
                    EditorTile::Floor
                };
                self.tiles[&old] = vacated;
            }
            self.player = Some(pos);
        } else if self.player == Some(pos) {
            self.player = None;
        }

        self.tiles[&pos] = tile;
        Ok(())
    }

    /// Walls the outer ring of the grid.
    pub fn enclose(&mut self) {
        let bounds = self.tiles.size();
        for pos in bounds.iter().filter(|pos| bounds.is_border(pos)) {
            if self.player == Some(pos) {
                self.player = None;
            }
            self.tiles[&pos] = EditorTile::Wall;
        }
    }

    pub fn to_level_text(&self) -> String {
        let mut result = String::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                result.push(self.tiles[&Position::new(x, y)].symbol());
            }
            result.push('\n');
        }
        result
    }

    /// Exports the grid and loads it, surfacing whatever the loader rejects.
    pub fn build(&self, options: EngineOptions) -> Result<PuzzleEngine, LoadError> {
        PuzzleEngine::load(&self.to_level_text(), options)
    }
}
