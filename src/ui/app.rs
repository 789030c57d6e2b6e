use crate::error::MoveError;
use crate::game::{Game, GameStatus};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game: Game,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    difficulty_label: String,
}

impl App {
    pub fn new(game: Game, difficulty_label: impl Into<String>) -> Self {
        let selected_column = game.board().cols() / 2; // Start in middle
        App {
            game,
            selected_column,
            should_quit: false,
            message: None,
            difficulty_label: difficulty_label.into(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.game.status() == GameStatus::AiTurn {
                self.message = Some("AI is thinking...".to_string());
                self.draw(terminal)?;
                self.ai_move();
            }

            self.draw(terminal)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal
            .draw(|f| self.render(f))
            .map(|_| ())
            .map_err(|e| io::Error::other(e.to_string()))
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let cols = self.game.board().cols();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.message = None;
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                self.message = None;
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let col = c.to_digit(10).unwrap_or(0) as usize;
                if col < cols {
                    self.selected_column = col;
                    self.drop_piece();
                } else {
                    self.message = Some(format!("Column {col} is off the board!"));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game.restart();
                self.selected_column = cols / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the player's piece in the selected column
    fn drop_piece(&mut self) {
        self.message = match self.game.play_player_move(self.selected_column) {
            Ok(status) => outcome_message(status),
            Err(MoveError::ColumnFull(_)) => Some("Column is full!".to_string()),
            Err(MoveError::InvalidColumn(_)) => Some("Invalid column!".to_string()),
            Err(MoveError::OutOfTurn) => Some("Wait for the AI to move.".to_string()),
            Err(MoveError::GameOver) | Err(MoveError::NoLegalMove) => {
                Some("Game over! Press 'r' to restart.".to_string())
            }
        };
    }

    fn ai_move(&mut self) {
        self.message = match self.game.play_ai_move() {
            Ok(col) => outcome_message(self.game.status())
                .or_else(|| Some(format!("AI played column {col}."))),
            Err(e) => {
                log::error!("AI could not move: {e}");
                Some(format!("AI could not move: {e}"))
            }
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            self.selected_column,
            &self.message,
            &self.difficulty_label,
        );
    }
}

fn outcome_message(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::PlayerWon => Some("Player wins!".to_string()),
        GameStatus::AiWon => Some("AI wins!".to_string()),
        GameStatus::Draw => Some("It's a draw!".to_string()),
        GameStatus::PlayerTurn | GameStatus::AiTurn => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Piece};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_arrow_keys_clamp() {
        let mut app = App::new(Game::new(6, 7, Piece::Player, 1), "Easy");
        assert_eq!(app.selected_column, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_enter_drops_player_piece() {
        let mut app = App::new(Game::new(6, 7, Piece::Player, 1), "Easy");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().board().get(5, 3), Cell::Player);
        assert_eq!(app.game().status(), GameStatus::AiTurn);
    }

    #[test]
    fn test_digit_out_of_range() {
        let mut app = App::new(Game::new(6, 7, Piece::Player, 1), "Easy");
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.game().move_count(), 0);
        assert!(app.message.is_some());
    }

    #[test]
    fn test_ai_reply_and_restart() {
        let mut app = App::new(Game::new(6, 7, Piece::Player, 1), "Easy");
        press(&mut app, KeyCode::Char('0'));
        app.ai_move();
        assert_eq!(app.game().move_count(), 2);
        assert_eq!(app.game().status(), GameStatus::PlayerTurn);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game().move_count(), 0);
        assert_eq!(app.message.as_deref(), Some("New game started!"));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Game::new(6, 7, Piece::Player, 1), "Easy");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
