//! One game's worth of state: the board, the counters, and the bookkeeping
//! that keeps delayed pair resolutions from touching a board they were not
//! issued for.

use log::{debug, info};
use rand::Rng;
use std::time::Duration;

use crate::board::Board;
use crate::schema::{GameError, GameResult, SymbolId, TileState};

/// What a pending pair turns into once its delay has elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveTicket {
    generation: u64,
    target: TileState,
    delay: Duration,
}

impl ResolveTicket {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_match(&self) -> bool {
        self.target == TileState::Matched
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Nothing changed: the tile was already face-up or a pair is pending.
    Ignored,
    /// First tile of a pair is now face-up.
    Revealed,
    /// Second tile is face-up and the pair was counted as a try. The caller
    /// hands `ticket` back to [`Session::resolve`] after `ticket.delay()`.
    Compared { matched: bool, ticket: ResolveTicket },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The ticket belonged to a board that has since been discarded.
    Stale,
    /// The pair settled and the game goes on.
    Settled,
    /// Every tile is matched; the end-of-game callback should follow.
    Completed,
}

/// Board and counters for the game currently on screen
#[derive(Debug, Clone, Default)]
pub struct Session {
    board: Option<Board>,
    try_count: u32,
    matches_made: u32,
    generation: u64,
    resolve_delay: Duration,
}

impl Session {
    pub fn new(resolve_delay: Duration) -> Self {
        Self {
            resolve_delay,
            ..Self::default()
        }
    }

    /// Starts the session with a board laid out in a known order.
    pub fn with_board(resolve_delay: Duration, board: Board) -> Self {
        Self {
            board: Some(board),
            ..Self::new(resolve_delay)
        }
    }

    /// Returns the session's board, generating it on first use. Later calls
    /// hand back the same board until [`Session::reset`].
    pub fn board_or_generate<R: Rng + ?Sized>(
        &mut self,
        tile_count: usize,
        palette: &[SymbolId],
        rng: &mut R,
    ) -> GameResult<&Board> {
        if tile_count % 2 != 0 {
            return Err(GameError::OddTileCount(tile_count));
        }

        let board = match self.board.take() {
            Some(board) => board,
            None => {
                let board = Board::generate(tile_count, palette, rng)?;
                info!("new board of {} tiles (game {})", board.len(), self.generation);
                board
            }
        };
        Ok(self.board.insert(board))
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn try_count(&self) -> u32 {
        self.try_count
    }

    pub fn matches_made(&self) -> u32 {
        self.matches_made
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether work scheduled during game `generation` still applies, i.e.
    /// no reset happened since.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn flip(&mut self, index: usize) -> GameResult<FlipOutcome> {
        let board = self.board.as_mut().ok_or(GameError::NoBoard)?;
        let flipped = board.get(index)?;

        if flipped.state != TileState::Hidden {
            debug!("tile {} is {}, ignoring flip", index, flipped.state);
            return Ok(FlipOutcome::Ignored);
        }

        let revealed = board.revealed();
        if revealed.len() >= 2 {
            debug!("pair pending, ignoring flip of tile {}", index);
            return Ok(FlipOutcome::Ignored);
        }

        let partner = revealed
            .first()
            .map(|&first| board.tiles()[first].content == flipped.content);
        board.set_state(index, TileState::Revealed);

        let Some(matched) = partner else {
            debug!("revealed tile {}", index);
            return Ok(FlipOutcome::Revealed);
        };

        self.try_count += 1;
        let target = if matched {
            self.matches_made += 1;
            TileState::Matched
        } else {
            TileState::Hidden
        };
        debug!(
            "try {}: tile {} {}",
            self.try_count,
            index,
            if matched { "matches" } else { "misses" }
        );

        Ok(FlipOutcome::Compared {
            matched,
            ticket: ResolveTicket {
                generation: self.generation,
                target,
                delay: self.resolve_delay,
            },
        })
    }

    /// Applies a pending pair resolution. Tickets issued before the last
    /// reset are ignored.
    pub fn resolve(&mut self, ticket: ResolveTicket) -> Resolution {
        if !self.is_current(ticket.generation) {
            return Resolution::Stale;
        }
        let Some(board) = self.board.as_mut() else {
            return Resolution::Stale;
        };

        board.settle_revealed(ticket.target);

        if board.is_complete() {
            info!("board cleared in {} tries", self.try_count);
            // The count is zeroed as soon as the board is cleared, before the
            // end callback runs.
            self.matches_made = 0;
            Resolution::Completed
        } else {
            Resolution::Settled
        }
    }

    /// Drops the board and counters. Tickets already handed out go stale.
    pub fn reset(&mut self) {
        self.board = None;
        self.try_count = 0;
        self.matches_made = 0;
        self.generation = self.generation.wrapping_add(1);
        info!("session reset (game {})", self.generation);
    }
}
