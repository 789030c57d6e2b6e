use crate::game::{Board, Cell, Game, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLAYER_COLOR: Color = Color::Red;
const AI_COLOR: Color = Color::Blue;

pub fn render(
    frame: &mut Frame,
    game: &Game,
    selected_column: usize,
    message: &Option<String>,
    difficulty: &str,
) {
    let board_height = game.board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, game, difficulty, chunks[0]);
    render_board(frame, game.board(), selected_column, game.last_move(), chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &Game, difficulty: &str, area: Rect) {
    let (status, color) = match game.status() {
        GameStatus::PlayerTurn => ("Your move".to_string(), PLAYER_COLOR),
        GameStatus::AiTurn => ("AI to move".to_string(), AI_COLOR),
        GameStatus::PlayerWon => ("Game Over: Player wins".to_string(), PLAYER_COLOR),
        GameStatus::AiWon => ("Game Over: AI wins".to_string(), AI_COLOR),
        GameStatus::Draw => ("Game Over: draw".to_string(), Color::White),
    };
    let text = format!(
        "{}  |  {} (depth {})  |  Moves: {}",
        status,
        difficulty,
        game.depth(),
        game.move_count()
    );

    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn cell_span(cell: Cell, highlight: bool) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Player => (" ● ", PLAYER_COLOR),
        Cell::Ai => (" ● ", AI_COLOR),
    };
    let mut style = Style::default().fg(color);
    if highlight {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    last_move: Option<(usize, usize)>,
    area: Rect,
) {
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..cols {
        let label = format!("{col:^3}");
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..cols {
            let highlight = last_move == Some((row, col));
            row_spans.push(cell_span(board.get(row, col), highlight));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw("←/→ or 0-9: Column  |  Enter: Drop  |  R: Restart  |  Q: Quit   "),
        Span::styled("You", Style::default().fg(PLAYER_COLOR).add_modifier(Modifier::BOLD)),
        Span::raw(" vs "),
        Span::styled("AI", Style::default().fg(AI_COLOR).add_modifier(Modifier::BOLD)),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Piece;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn renders_header_and_pieces() {
        let mut game = Game::new(6, 7, Piece::Player, 2);
        game.play_player_move(3).unwrap();
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, &game, 3, &Some("hello".to_string()), "Easy"))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Connect Four"));
        assert!(text.contains("AI to move"));
        assert!(text.contains("Easy (depth 2)"));
        assert!(text.contains("hello"));
        assert!(text.contains('●'));
    }
}
