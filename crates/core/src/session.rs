//! Session module - one game from first spawn to game over
//!
//! The session owns the grid and the active piece and is the only thing that
//! mutates them. Callers drive it with [`Session::on_tick`] from a fixed-rate
//! clock and [`Session::on_command`] from input, then read a snapshot to draw.

use tracing::{debug, info};

use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::PieceRng;
use crate::snapshot::{ActiveSnapshot, SessionSnapshot};
use crate::types::{Command, Direction, PieceKind, SessionState, LINE_CLEAR_BONUS};

/// What happened when the last piece landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_delta: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    active: Option<Piece>,
    rng: PieceRng,
    score: u32,
    lines: u32,
    paused: bool,
    game_over: bool,
    /// Last landing (consumed by observers).
    last_event: Option<LockEvent>,
}

impl Session {
    /// Create a session on an empty grid. The first tick spawns a piece.
    pub fn new(seed: u64) -> Self {
        Self::with_grid(Grid::new(), seed)
    }

    /// Create a session that starts from an already populated grid
    pub fn with_grid(grid: Grid, seed: u64) -> Self {
        Self {
            grid,
            active: None,
            rng: PieceRng::new(seed),
            score: 0,
            lines: 0,
            paused: false,
            game_over: false,
            last_event: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active_piece(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total lines cleared this session
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn state(&self) -> SessionState {
        if self.game_over {
            SessionState::GameOver
        } else if self.paused {
            SessionState::Paused
        } else {
            SessionState::Running
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply one gravity step.
    ///
    /// Returns false when the tick was ignored (paused or game over).
    pub fn on_tick(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        self.gravity_step();
        true
    }

    /// Apply a player command. Returns the outcome of the delegated move,
    /// rotation or drop; `TogglePause` always succeeds unless the game is over.
    pub fn on_command(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }

        match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
                true
            }
            _ if self.paused || self.active.is_none() => false,
            Command::MoveLeft => self.shift_active(Direction::Left),
            Command::MoveRight => self.shift_active(Direction::Right),
            Command::RotateCw => self.rotate_active(),
            Command::SoftDrop => self.gravity_step(),
        }
    }

    fn shift_active(&mut self, direction: Direction) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.shift(&self.grid, direction),
            None => false,
        }
    }

    fn rotate_active(&mut self) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.rotate(&self.grid),
            None => false,
        }
    }

    /// Move the active piece down one row, or spawn if there is none.
    ///
    /// Returns true while the piece is still falling. On landing the grid is
    /// swept, the score updated and the next piece spawned.
    fn gravity_step(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            self.spawn();
            return false;
        };

        if piece.move_down(&mut self.grid) {
            return true;
        }

        let kind = piece.kind();
        self.active = None;

        let lines_cleared = self.grid.sweep_and_clear();
        let score_delta = LINE_CLEAR_BONUS * lines_cleared;
        self.score += score_delta;
        self.lines += lines_cleared;

        if lines_cleared > 0 {
            info!(lines_cleared, score = self.score, "lines cleared");
        } else {
            debug!(?kind, "piece landed");
        }

        self.last_event = Some(LockEvent {
            kind,
            lines_cleared,
            score_delta,
        });

        self.spawn();
        false
    }

    /// Put a random piece at the spawn position. If it overlaps the stack the
    /// game is over; the blocked piece stays visible but is never stamped.
    fn spawn(&mut self) {
        let kind = self.rng.next_kind();
        let piece = Piece::new(kind);
        self.active = Some(piece);

        if piece.collides_with(&self.grid) {
            self.game_over = true;
            info!(?kind, score = self.score, lines = self.lines, "game over");
            return;
        }

        debug!(?kind, "spawned");
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.grid.write_codes(&mut out.grid);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
