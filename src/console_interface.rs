use crate::core::{Direction, MoveOutcome, PuzzleEngine, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        let game_paragraph = Paragraph::new(state.engine.to_level_text())
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status_paragraph = Paragraph::new(status_line(state))
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        let instruction_paragraph = Paragraph::new(instructions_line(state))
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub fn status_line(state: &GameRenderState) -> String {
    let engine = state.engine;
    let (filled, total) = engine.targets_filled();
    let status = format!(
        "Moves: {} | Pushes: {} | Targets: {}/{}",
        engine.moves(),
        engine.pushes(),
        filled,
        total
    );

    match state.last_outcome.and_then(|outcome| outcome.change) {
        Some(change_type) => format!("{} | Last: {:?}", status, change_type),
        None => status,
    }
}

pub fn instructions_line(state: &GameRenderState) -> String {
    let instructions = if state.engine.is_won() && state.engine.options().lock_after_win {
        "🎉 You Win! Press any key to quit."
    } else if state.engine.is_won() {
        "🎉 You Win! Keep playing, R to restart, Q to quit"
    } else {
        "Controls: WASD or Arrow keys to move, R to restart, Q to quit"
    };

    if let Some(err) = &state.error {
        format!("{} | Error: {}", instructions, err)
    } else {
        instructions.to_string()
    }
}

/// What the game loop does once an action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterMove {
    KeepPlaying,
    /// Hold the win screen until a key is pressed, then leave the game.
    ShowWinThenQuit,
}

pub fn after_move(engine: &PuzzleEngine, outcome: &MoveOutcome) -> AfterMove {
    // an unlocked board stays playable after the win
    if outcome.solved && engine.options().lock_after_win {
        AfterMove::ShowWinThenQuit
    } else {
        AfterMove::KeepPlaying
    }
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Restart,
    Quit,
    Timeout,
    Unknown,
}

pub fn console_input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(console_input_from_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}
