//! Line-oriented play over any reader/writer pair: prompts on one line,
//! the board as ASCII below it.

use std::io::{self, BufRead, Write};

use crate::config::{AppConfig, Difficulty, FirstMover};
use crate::error::MoveError;
use crate::game::{Board, Cell, Game, GameStatus, Piece};

pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Player => 'X',
        Cell::Ai => 'O',
    }
}

/// `| X | O |` rows, top first, followed by the column indices.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..board.rows() {
        let cells: Vec<String> = (0..board.cols())
            .map(|col| cell_symbol(board.get(row, col)).to_string())
            .collect();
        out.push_str("| ");
        out.push_str(&cells.join(" | "));
        out.push_str(" |\n");
    }
    let labels: Vec<String> = (0..board.cols()).map(|col| col.to_string()).collect();
    out.push_str("  ");
    out.push_str(&labels.join("   "));
    out.push('\n');
    out
}

/// "player" starts the player; any other answer lets the AI go first.
pub fn parse_first_mover(answer: &str) -> FirstMover {
    if answer.trim().eq_ignore_ascii_case("player") {
        FirstMover::Player
    } else {
        FirstMover::Ai
    }
}

/// "easy" and "medium" are recognised; anything else plays hard.
pub fn parse_difficulty(answer: &str) -> Difficulty {
    match answer.trim().to_ascii_lowercase().as_str() {
        "easy" => Difficulty::Easy,
        "medium" => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

/// A column number, or `None` when the line is not an integer.
pub fn parse_column(line: &str) -> Option<usize> {
    line.trim().parse().ok()
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the game finished",
        ));
    }
    Ok(line)
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    read_answer(input)
}

/// Setup answers that need no question. Command-line values come first, then
/// a config file that was actually loaded. An explicit search depth makes the
/// difficulty moot, so it is never asked for.
pub fn preset_answers(
    config: &AppConfig,
    from_file: bool,
    first: Option<FirstMover>,
    difficulty: Option<Difficulty>,
) -> (Option<FirstMover>, Option<Difficulty>) {
    let first = first.or(from_file.then_some(config.game.first));
    let difficulty = difficulty.or(
        (from_file || config.search.depth.is_some()).then_some(config.search.difficulty),
    );
    (first, difficulty)
}

/// Ask for whichever of the first mover and difficulty was not already chosen.
pub fn prompt_setup<R: BufRead, W: Write>(
    first: Option<FirstMover>,
    difficulty: Option<Difficulty>,
    input: &mut R,
    output: &mut W,
) -> io::Result<(FirstMover, Difficulty)> {
    let first = match first {
        Some(first) => first,
        None => parse_first_mover(&ask(input, output, "Who should play first? (player/ai): ")?),
    };
    let difficulty = match difficulty {
        Some(difficulty) => difficulty,
        None => parse_difficulty(&ask(
            input,
            output,
            "Choose difficulty level (Easy, Medium, Hard): ",
        )?),
    };
    Ok((first, difficulty))
}

/// Play `game` to the end, reading player columns from `input`.
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    output: &mut W,
) -> io::Result<GameStatus> {
    write!(output, "{}", render_board(game.board()))?;

    while !game.is_over() {
        match game.status() {
            GameStatus::PlayerTurn => {
                let prompt = format!(
                    "Player ({}), choose a column (0-{}): ",
                    cell_symbol(Cell::Player),
                    game.board().cols().saturating_sub(1)
                );
                let line = ask(input, output, &prompt)?;
                let Some(col) = parse_column(&line) else {
                    writeln!(output, "Invalid input. Please enter a number.")?;
                    continue;
                };
                match game.play_player_move(col) {
                    Ok(_) => {}
                    Err(MoveError::InvalidColumn(_)) | Err(MoveError::ColumnFull(_)) => {
                        writeln!(output, "Invalid move. Try again.")?;
                        continue;
                    }
                    Err(e) => return Err(io::Error::other(e)),
                }
            }
            GameStatus::AiTurn => {
                let col = game.play_ai_move().map_err(io::Error::other)?;
                writeln!(output, "{} plays column {col}", Piece::Ai.name())?;
            }
            _ => unreachable!("loop exits on terminal status"),
        }
        write!(output, "{}", render_board(game.board()))?;
    }

    let verdict = match game.status() {
        GameStatus::PlayerWon => "Player wins!",
        GameStatus::AiWon => "AI wins!",
        _ => "It's a draw!",
    };
    writeln!(output, "{verdict}")?;
    Ok(game.status())
}
