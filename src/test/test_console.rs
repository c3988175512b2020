
#[cfg(test)]
mod test {
    use crossterm::event::KeyCode;

    use crate::console_interface::{
        after_move, console_input_from_key, instructions_line, status_line, AfterMove, ConsoleInput,
    };
    use crate::core::*;
    use crate::models::GameRenderState;
    use crate::test::test_util::free_play;

    fn direction_of(input: ConsoleInput) -> Option<Direction> {
        match input {
            ConsoleInput::UserAction(UserAction::Move(dir)) => Some(dir),
            _ => None,
        }
    }

    #[test]
    fn keys_map_to_moves(){
        assert_eq!(Some(Direction::Up), direction_of(console_input_from_key(KeyCode::Char('w'))));
        assert_eq!(Some(Direction::Up), direction_of(console_input_from_key(KeyCode::Up)));
        assert_eq!(Some(Direction::Down), direction_of(console_input_from_key(KeyCode::Char('S'))));
        assert_eq!(Some(Direction::Left), direction_of(console_input_from_key(KeyCode::Left)));
        assert_eq!(Some(Direction::Right), direction_of(console_input_from_key(KeyCode::Char('d'))));
        assert!(matches!(console_input_from_key(KeyCode::Esc), ConsoleInput::Quit));
        assert!(matches!(console_input_from_key(KeyCode::Char('r')), ConsoleInput::Restart));
        assert!(matches!(console_input_from_key(KeyCode::Char('x')), ConsoleInput::Unknown));
    }

    #[test]
    fn status_reports_progress(){
        let mut engine = PuzzleEngine::load("#@$ . .#", free_play()).unwrap();
        let outcome = engine.apply_move(Direction::Right);

        let state = GameRenderState {
            engine: &engine,
            last_outcome: Some(outcome),
            error: None,
        };

        assert_eq!(
            "Moves: 1 | Pushes: 1 | Targets: 0/2 | Last: PlayerAndCrateMove",
            status_line(&state)
        );
    }

    #[test]
    fn instructions_show_rejection_and_win(){
        let mut engine = PuzzleEngine::load("#@$.#", EngineOptions::default()).unwrap();
        let outcome = engine.apply_move(Direction::Left);
        let state = GameRenderState {
            engine: &engine,
            last_outcome: Some(outcome),
            error: outcome.rejection.map(|reason| reason.to_string()),
        };
        assert!(instructions_line(&state).ends_with("| Error: cannot walk into a wall"));

        engine.apply_move(Direction::Right);
        let state = GameRenderState {
            engine: &engine,
            last_outcome: None,
            error: None,
        };
        assert!(instructions_line(&state).contains("You Win!"));
    }

    #[test]
    fn locked_win_ends_the_game(){
        let mut engine = PuzzleEngine::load("#@$.#", EngineOptions::default()).unwrap();

        let walk = engine.apply_move(Direction::Left);
        assert_eq!(AfterMove::KeepPlaying, after_move(&engine, &walk));

        let win = engine.apply_move(Direction::Right);
        assert!(win.solved);
        assert_eq!(AfterMove::ShowWinThenQuit, after_move(&engine, &win));
    }

    #[test]
    fn unlocked_win_keeps_playing(){
        let mut engine = PuzzleEngine::load("# @$. #", free_play()).unwrap();

        let win = engine.apply_move(Direction::Right);
        assert!(win.solved);
        assert_eq!(AfterMove::KeepPlaying, after_move(&engine, &win));
        let state = GameRenderState {
            engine: &engine,
            last_outcome: Some(win),
            error: None,
        };
        assert!(instructions_line(&state).contains("Keep playing"));

        let past_win = engine.apply_move(Direction::Right);
        assert!(past_win.accepted);
        assert!(!past_win.solved);
        assert_eq!(AfterMove::KeepPlaying, after_move(&engine, &past_win));
    }
}
