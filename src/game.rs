//! Turn controller: alternates two boards, applies the repeat-on-wound
//! rule and detects victory.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::player::Strategy;

/// One of the two opponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

/// Controller state after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
    /// A strategy signalled end of input.
    Aborted,
}

/// Two boards and two strategies; each side shoots at the other side's
/// board, only ever through `step`.
pub struct Game {
    human_board: Board,
    opponent_board: Board,
    human: Box<dyn Strategy>,
    opponent: Box<dyn Strategy>,
    turn: Side,
    status: GameStatus,
}

impl Game {
    pub fn new(
        human_board: Board,
        opponent_board: Board,
        human: Box<dyn Strategy>,
        opponent: Box<dyn Strategy>,
    ) -> Self {
        Self {
            human_board,
            opponent_board,
            human,
            opponent,
            turn: Side::Human,
            status: GameStatus::InProgress,
        }
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn human_board(&self) -> &Board {
        &self.human_board
    }

    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    /// Play one successful shot for the active side. Rejected shots are
    /// reported back to the acting strategy and retried without passing
    /// the turn. A wound keeps the turn; a sink or a miss passes it.
    pub fn step(&mut self, rng: &mut SmallRng) -> GameStatus {
        if self.status != GameStatus::InProgress {
            return self.status;
        }
        let side = self.turn;
        let outcome = loop {
            let (shooter, target_board) = match side {
                Side::Human => (&mut self.human, &mut self.opponent_board),
                Side::Opponent => (&mut self.opponent, &mut self.human_board),
            };
            let Some(target) = shooter.select_target(rng) else {
                self.status = GameStatus::Aborted;
                return self.status;
            };
            match target_board.shoot(target) {
                Ok(outcome) => {
                    log::debug!("{:?} fires at {:?}: {:?}", side, target, outcome);
                    shooter.handle_shot_result(target, outcome);
                    let defender = match side {
                        Side::Human => &mut self.opponent,
                        Side::Opponent => &mut self.human,
                    };
                    defender.handle_incoming_shot(target, outcome);
                    break outcome;
                }
                Err(err) => {
                    log::debug!("{:?} shot at {:?} rejected: {}", side, target, err);
                    shooter.handle_shot_error(target, &err);
                }
            }
        };
        let target_board = match side {
            Side::Human => &self.opponent_board,
            Side::Opponent => &self.human_board,
        };
        if target_board.is_defeated() {
            self.status = GameStatus::Won(side);
        } else if !outcome.repeat_turn() {
            self.turn = side.other();
        }
        self.status
    }
}
