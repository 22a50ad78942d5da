mod board;
mod common;
mod config;
mod game;
mod generator;
mod geometry;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod ship;
mod ui;

pub use board::{Board, Cell};
pub use common::{BoardError, ShotOutcome};
pub use config::{BOARD_SIZE, FLEET_LENGTHS, MAX_PLACEMENT_ATTEMPTS};
pub use game::{Game, GameStatus, Side};
pub use generator::{random_board, try_place_fleet};
pub use geometry::Point;
pub use logging::init_logging;
pub use player::Strategy;
pub use player_ai::RandomStrategy;
pub use player_cli::CliStrategy;
pub use ship::{Orientation, Ship};
pub use ui::{print_boards, render_board};
