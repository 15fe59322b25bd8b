//! Terminal Threes runner (default binary).
//!
//! This is a deliberately thin presentation layer: it owns the terminal and
//! the key loop, and consumes the core only through the session API (board
//! view, peek, shift). No game rules live here.

use std::io::{stdout, Stdout, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::{cursor, execute, terminal};

use tui_threes::core::{GameSession, SessionConfig};
use tui_threes::types::{Direction, BOARD_SIZE};

fn main() -> Result<()> {
    let mut out = stdout();
    terminal::enable_raw_mode()?;
    execute!(out, cursor::Hide)?;

    let result = run(&mut out);

    // Always try to restore terminal state.
    let _ = execute!(out, cursor::Show);
    let _ = terminal::disable_raw_mode();
    result
}

fn run(out: &mut Stdout) -> Result<()> {
    let seed = std::process::id();
    let mut session = GameSession::new(SessionConfig::default(), seed);
    let mut notice = String::new();

    loop {
        draw(out, &mut session, &notice)?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let direction = match key.code {
                KeyCode::Left => Some(Direction::Left),
                KeyCode::Up => Some(Direction::Up),
                KeyCode::Right => Some(Direction::Right),
                KeyCode::Down => Some(Direction::Down),
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => None,
            };
            if let Some(direction) = direction {
                session.shift(direction);
                if let Some(warning) = session.take_last_warning() {
                    notice = warning.to_string();
                }
            }
        }
    }
}

fn draw(out: &mut Stdout, session: &mut GameSession, notice: &str) -> Result<()> {
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let next = session.peek();
    execute!(out, Print(format!("next: {}\r\n\r\n", next)))?;

    let board = session.board();
    for row in 0..BOARD_SIZE {
        let mut line = String::new();
        for col in 0..BOARD_SIZE {
            let v = board.at(row, col);
            if v == 0 {
                line.push_str("    .");
            } else {
                line.push_str(&format!("{:>5}", v));
            }
        }
        execute!(out, Print(line), Print("\r\n"))?;
    }

    execute!(out, Print("\r\narrows: shift   q: quit\r\n"))?;
    if !notice.is_empty() {
        execute!(out, Print(format!("{}\r\n", notice)))?;
    }
    out.flush()?;
    Ok(())
}
