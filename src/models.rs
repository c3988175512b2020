use crate::core::{MoveOutcome, PuzzleEngine};

pub struct GameRenderState<'a> {
    pub engine: &'a PuzzleEngine,
    pub last_outcome: Option<MoveOutcome>,
    pub error: Option<String>,
}
