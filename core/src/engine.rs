use serde::Serialize;

use crate::tile;
use crate::{slide, Board, Direction, Score, ScoreSlot, StepOutcome, TileSpawner};

/// Read-only view handed to renderers between steps.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub score: Score,
    pub high_score: Score,
    pub game_over: bool,
}

/// A single play session: the board, the running score, the sticky
/// game-over flag and the persisted high score.
///
/// Not reentrant; a `step` runs to completion before the next input.
#[derive(Clone, Debug)]
pub struct Game<S, P> {
    board: Board,
    score: Score,
    game_over: bool,
    high_score: Score,
    spawner: S,
    slot: P,
}

impl<S: TileSpawner, P: ScoreSlot> Game<S, P> {
    /// Starts a session: empty board, score 0, two spawned tiles. The
    /// high-score slot is read once, here.
    pub fn new(spawner: S, mut slot: P) -> Self {
        let high_score = slot.load();
        let mut game = Self {
            board: Board::empty(),
            score: 0,
            game_over: false,
            high_score,
            spawner,
            slot,
        };
        game.spawn_initial();
        game
    }

    /// Begins a fresh session in place. The in-memory high score carries
    /// over; the slot is not re-read.
    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.score = 0;
        self.game_over = false;
        self.spawn_initial();
        log::debug!("session reset");
    }

    fn spawn_initial(&mut self) {
        for _ in 0..2 {
            self.spawner
                .spawn(&mut self.board)
                .expect("an empty board has room for the starting tiles");
        }
    }

    /// Applies one direction. Spawns a tile and checks for the end of the
    /// game only when the slide changed the board.
    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        if self.game_over {
            log::debug!("ignoring {:?}, session is over", direction);
            return StepOutcome::NoOp;
        }

        let outcome = slide::apply(&mut self.board, direction);
        if !outcome.changed {
            return StepOutcome::NoOp;
        }

        self.score += outcome.score_delta;
        self.spawner
            .spawn(&mut self.board)
            .expect("a changed board has at least one empty cell");

        if is_terminal(&self.board) {
            self.end_session();
        }

        StepOutcome::Moved {
            score_delta: outcome.score_delta,
            game_over: self.game_over,
        }
    }

    fn end_session(&mut self) {
        self.game_over = true;
        log::debug!("no move can change the board, final score {}", self.score);
        if self.score > self.high_score {
            self.high_score = self.score;
            self.slot.store(self.high_score);
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: &self.board,
            score: self.score,
            high_score: self.high_score,
            game_over: self.game_over,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn high_score(&self) -> Score {
        self.high_score
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }
}

/// A board is terminal when no empty cell remains and no two horizontally
/// or vertically adjacent cells are equal; equivalently, when every
/// direction would leave it unchanged.
pub fn is_terminal(board: &Board) -> bool {
    let n = board.side();
    for i in 0..n {
        for j in 0..n {
            let cell = board.get((i, j));
            if tile::is_empty(cell) {
                return false;
            }
            if j + 1 < n && board.get((i, j + 1)) == cell {
                return false;
            }
            if i + 1 < n && board.get((i + 1, j)) == cell {
                return false;
            }
        }
    }
    true
}
