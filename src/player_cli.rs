use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::common::{BoardError, ShotOutcome};
use crate::geometry::Point;
use crate::player::Strategy;

/// Human strategy: reads 1-based `row col` pairs from stdin. Malformed
/// text is re-prompted here; domain errors (off-board, repeated cell)
/// come back through `handle_shot_error` and trigger a fresh prompt.
pub struct CliStrategy;

impl CliStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliStrategy {
    fn default() -> Self {
        Self::new()
    }
}

fn coord_to_string(p: Point) -> String {
    format!("{} {}", p.row + 1, p.col + 1)
}

/// Parse two 1-based integers into a 0-based point. Bounds are checked
/// by the board, not here.
fn parse_target(line: &str) -> Option<Point> {
    let mut parts = line.split_whitespace();
    let row: i32 = parts.next()?.parse().ok()?;
    let col: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row < 1 || col < 1 {
        return None;
    }
    Some(Point::new(row - 1, col - 1))
}

impl Strategy for CliStrategy {
    fn select_target(&mut self, _rng: &mut SmallRng) -> Option<Point> {
        let stdin = io::stdin();
        loop {
            print!("Your move (row col): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            match parse_target(line.trim()) {
                Some(p) => return Some(p),
                None => println!("Enter two numbers, row then column (e.g. 2 4)"),
            }
        }
    }

    fn handle_shot_result(&mut self, target: Point, outcome: ShotOutcome) {
        println!("You fired at {}: {}", coord_to_string(target), outcome);
    }

    fn handle_shot_error(&mut self, _target: Point, err: &BoardError) {
        println!("{}", err);
    }

    fn handle_incoming_shot(&mut self, target: Point, outcome: ShotOutcome) {
        println!("Opponent fired at {}: {}", coord_to_string(target), outcome);
    }
}
