use std::path::{Path, PathBuf};

use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::consts::{CRATE, CRATE_ON_TARGET, FLOOR, PLAYER, PLAYER_ON_TARGET, TARGET, WALL};
use crate::core::{Cell, GameState, Level, Position};

/// Knobs for how strictly level text is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Pad short rows with floor up to the widest row instead of rejecting them.
    pub pad_ragged_rows: bool,
    /// Reject levels whose outer border is not entirely wall.
    pub require_closed_perimeter: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("level is empty")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("level has no player")]
    MissingPlayer,
    #[error("level has more than one player, at {first} and {second}")]
    MultiplePlayers { first: Position, second: Position },
    #[error("level border is open at ({x}, {y})")]
    OpenPerimeter { x: i32, y: i32 },
    #[error("failed to read level {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn load_level_file(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<(GameState, Level), LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read level file {}", path.display());
    parse_level(&text, options)
}

pub fn parse_level(s: &str, options: &LoadOptions) -> Result<(GameState, Level), LoadError> {
    let mut rows: Vec<Vec<char>> = s
        .lines()
        .map(|line| line.trim_end_matches('\r').chars().collect())
        .collect();

    // raw string levels usually carry a newline on either side
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    let leading_blank = rows.iter().take_while(|row| row.is_empty()).count();
    rows.drain(..leading_blank);

    let Some(first_row) = rows.first() else {
        return Err(LoadError::Empty);
    };

    let width = if options.pad_ragged_rows {
        rows.iter().map(Vec::len).max().unwrap_or(0)
    } else {
        let expected = first_row.len();
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .map(|(row, cells)| (row, cells.len()))
            .find(|&(_, found)| found != expected)
        {
            return Err(LoadError::RaggedRow {
                row,
                expected,
                found,
            });
        }
        expected
    };

    let bounds = BoundsOriginRoot::new(width as i32, rows.len() as i32);
    let mut cells = BoundedGrid::new(bounds, Cell::Floor);
    let mut targets = BoundedGrid::new(bounds, false);
    let mut crates = Vec::new();
    let mut players = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        for (x, &ch) in row.iter().enumerate() {
            let pos = Position::new(x as i32, y as i32);
            match ch {
                WALL => cells[&pos] = Cell::Wall,
                TARGET => targets[&pos] = true,
                CRATE => crates.push(pos),
                CRATE_ON_TARGET => {
                    crates.push(pos);
                    targets[&pos] = true;
                }
                PLAYER => players.push(pos),
                PLAYER_ON_TARGET => {
                    players.push(pos);
                    targets[&pos] = true;
                }
                _ => {}
            }
        }
    }

    let player = match players.as_slice() {
        [] => return Err(LoadError::MissingPlayer),
        [player] => *player,
        [first, second, ..] => {
            return Err(LoadError::MultiplePlayers {
                first: *first,
                second: *second,
            });
        }
    };

    if options.require_closed_perimeter
        && let Some(open) = bounds
            .iter()
            .find(|pos| bounds.is_border(pos) && cells[pos] != Cell::Wall)
    {
        return Err(LoadError::OpenPerimeter {
            x: open.x,
            y: open.y,
        });
    }

    crates.sort_unstable();
    log::debug!(
        "parsed level {}x{}: {} crates, player at {}",
        bounds.extent.x,
        bounds.extent.y,
        crates.len(),
        player
    );

    Ok((GameState { player, crates }, Level { cells, targets }))
}

/// Writes a state back out in the same notation `parse_level` reads.
pub fn render_level_text(level: &Level, game: &GameState) -> String {
    let mut result = String::new();
    for y in 0..level.height() {
        for x in 0..level.width() {
            let pos = Position::new(x, y);
            let has_player = pos == game.player;
            let has_crate = game.has_crate_at(&pos);
            let on_target = level.is_target(&pos);
            let ch = match level.cells[&pos] {
                Cell::Wall => WALL,
                Cell::Floor => match (has_player, has_crate, on_target) {
                    (true, _, false) => PLAYER,
                    (true, _, true) => PLAYER_ON_TARGET,
                    (false, true, false) => CRATE,
                    (false, true, true) => CRATE_ON_TARGET,
                    (false, false, false) => FLOOR,
                    (false, false, true) => TARGET,
                },
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}
