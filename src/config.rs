use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

use crate::schema::{GameError, GameResult, SymbolId};

/// Icons shipped with the game, in the order boards draw from them.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "hearts",
    "water-drop",
    "dice-six-faces-five",
    "umbrella",
    "cube",
    "beach-ball",
    "dragonfly",
    "hummingbird",
    "flower-emblem",
    "open-book",
];

/// Tunable parameters for a game. Fields missing from a JSON override keep
/// their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pause before a revealed pair is matched or turned back over.
    pub resolve_delay_ms: u32,
    /// Pause between the last match settling and the end-of-game callback.
    pub end_delay_ms: u32,
    /// Intensity passed to the celebration effect on a match.
    pub celebrate_ticks: u32,
    /// Ordered, distinct symbol ids. Boards use a prefix of this list.
    pub palette: Vec<SymbolId>,
}

impl GameConfig {
    pub const TILE_COUNT: usize = 16;
    pub const COLUMNS: usize = 4;

    pub const DEFAULT_RESOLVE_DELAY_MS: u32 = 1000;
    pub const DEFAULT_END_DELAY_MS: u32 = 0;
    pub const DEFAULT_CELEBRATE_TICKS: u32 = 1000;

    pub fn new() -> Self {
        Self {
            resolve_delay_ms: Self::DEFAULT_RESOLVE_DELAY_MS,
            end_delay_ms: Self::DEFAULT_END_DELAY_MS,
            celebrate_ticks: Self::DEFAULT_CELEBRATE_TICKS,
            palette: DEFAULT_PALETTE.iter().copied().map(SymbolId::from).collect(),
        }
    }

    /// Parses a JSON override and checks it can still fill a board.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The palette must cover `TILE_COUNT / 2` pairs with distinct symbols.
    pub fn validate(&self) -> GameResult<()> {
        check_palette(&self.palette, Self::TILE_COUNT / 2)
    }

    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.resolve_delay_ms))
    }

    pub fn end_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.end_delay_ms))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn check_palette(palette: &[SymbolId], pairs: usize) -> GameResult<()> {
    if palette.len() < pairs {
        return Err(GameError::PaletteTooSmall {
            needed: pairs,
            available: palette.len(),
        });
    }

    let mut seen = HashSet::with_capacity(pairs);
    for symbol in &palette[..pairs] {
        if !seen.insert(symbol) {
            return Err(GameError::DuplicateSymbol(symbol.to_string()));
        }
    }
    Ok(())
}
