//! Text rendering of board state. Pure projection of the grid; rule
//! decisions never read from here.

use std::fmt::Write;

use crate::board::{Board, Cell};
use crate::game::Game;
use crate::geometry::Point;

fn cell_char(cell: Cell, reveal_ships: bool) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Ship => {
            if reveal_ships {
                'S'
            } else {
                '.'
            }
        }
        Cell::Hit => 'X',
        Cell::Miss | Cell::Blocked => 'o',
    }
}

/// Render a board as a text grid with 1-based row and column labels.
/// With `reveal_ships` unset, unhit ship cells display as empty water.
pub fn render_board(board: &Board, reveal_ships: bool) -> String {
    let mut out = String::new();
    out.push_str("  |");
    for c in 1..=board.size() {
        let _ = write!(out, " {} |", c);
    }
    out.push('\n');
    for r in 0..board.size() {
        let _ = write!(out, "{} |", r + 1);
        for c in 0..board.size() {
            let cell = board.cell(Point::new(r, c)).unwrap_or(Cell::Empty);
            let ch = cell_char(cell, reveal_ships);
            let _ = write!(out, " {} |", ch);
        }
        out.push('\n');
    }
    out
}

/// Print both boards: the player's own (revealed) above the opponent's.
/// `reveal_opponent` is only set in automated games.
pub fn print_boards(game: &Game, reveal_opponent: bool) {
    println!("{}", "-".repeat(20));
    println!("Your board:");
    print!("{}", render_board(game.human_board(), true));
    println!("{}", "-".repeat(20));
    println!("Opponent board:");
    print!("{}", render_board(game.opponent_board(), reveal_opponent));
    println!("{}", "-".repeat(20));
}
