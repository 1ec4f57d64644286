use rand::prelude::*;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Wall-clock time of a single game, frozen once stopped.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GameClock {
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl GameClock {
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Freezes a running clock, returns whether this call was the one that stopped it.
    pub fn stop(&mut self, now: Instant) -> bool {
        if self.is_running() {
            self.ended_at = Some(now);
            true
        } else {
            false
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_none()
    }

    /// Whole seconds since the clock started, 0 if it hasn't.
    pub fn elapsed_secs_at(&self, now: Instant) -> u32 {
        match self.started_at {
            Some(started_at) => {
                let end = self.ended_at.unwrap_or(now);
                let secs = end.saturating_duration_since(started_at).as_secs();
                secs.try_into().unwrap_or(u32::MAX)
            }
            None => 0,
        }
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs_at(Instant::now())
    }
}

/// Final report of a game, handed to whoever keeps the best times.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub difficulty: Difficulty,
    pub won: bool,
    pub elapsed_secs: u32,
}

/// Numbers shown next to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub mines_left: isize,
    pub elapsed_secs: u32,
}

/// A player's sitting: the current board, its difficulty and its clock.
///
/// Starting a new game or changing difficulty throws the board away and builds a fresh one, mine
/// placement for every board is seeded from the session's own generator.
#[derive(Clone, Debug)]
pub struct Session {
    difficulty: Difficulty,
    board: Board,
    clock: GameClock,
    rng: SmallRng,
}

impl Session {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = fresh_board(difficulty, &mut rng);
        log::debug!("Session started on {}", difficulty);
        Self {
            difficulty,
            board,
            clock: GameClock::default(),
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn new_game(&mut self) {
        self.board = fresh_board(self.difficulty, &mut self.rng);
        self.clock = GameClock::default();
        log::debug!("New {} game", self.difficulty);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.new_game();
    }

    /// Switches to the next difficulty and starts over, returns the new difficulty.
    pub fn cycle_difficulty(&mut self) -> Difficulty {
        self.set_difficulty(self.difficulty.next());
        self.difficulty
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let outcome = self.board.reveal(coords)?;
        self.sync_clock(Instant::now());
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.board.toggle_flag(coords)
    }

    pub fn hint(&mut self) -> RevealOutcome {
        let outcome = self.board.hint();
        self.sync_clock(Instant::now());
        outcome
    }

    pub fn status(&self) -> Status {
        Status {
            mines_left: self.board.mines_left(),
            elapsed_secs: self.clock.elapsed_secs(),
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(&self.board)
    }

    /// Available once the board is won or lost.
    pub fn result(&self) -> Option<GameResult> {
        let won = match self.board.state() {
            BoardState::Won => true,
            BoardState::Lost => false,
            BoardState::Unstarted | BoardState::InProgress => return None,
        };
        Some(GameResult {
            difficulty: self.difficulty,
            won,
            elapsed_secs: self.clock.elapsed_secs(),
        })
    }

    fn sync_clock(&mut self, now: Instant) {
        let state = self.board.state();
        if state.is_started() {
            self.clock.start(now);
        }
        if state.is_finished() && self.clock.stop(now) {
            log::debug!(
                "{} game ended {:?} after {}s",
                self.difficulty,
                state,
                self.clock.elapsed_secs_at(now)
            );
        }
    }
}

fn fresh_board(difficulty: Difficulty, rng: &mut SmallRng) -> Board {
    Board::new(difficulty.config(), RandomPlacer::new(rng.random()))
}
