use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while building or playing a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the number of tiles must be even, got {0}")]
    OddTileCount(usize),

    #[error("a board needs at least one pair of tiles")]
    EmptyBoard,

    #[error("palette has {available} symbols but {needed} pairs were requested")]
    PaletteTooSmall { needed: usize, available: usize },

    #[error("symbol '{0}' appears more than once in the palette")]
    DuplicateSymbol(String),

    #[error("symbol '{symbol}' appears {count} times, boards need exactly two")]
    UnpairedSymbol { symbol: String, count: usize },

    #[error("invalid tile state '{0}'")]
    UnknownTileState(String),

    #[error("tile {index} is out of range for a board of {len} tiles")]
    TileOutOfRange { index: usize, len: usize },

    #[error("no board has been generated for this session")]
    NoBoard,
}

pub type GameResult<T> = Result<T, GameError>;

/// Opaque identifier of one pictogram in the palette
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(String);

impl SymbolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SymbolId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Visibility of a tile. `Matched` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileState {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

impl TileState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Revealed => "revealed",
            Self::Matched => "matched",
        }
    }
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TileState {
    type Err = GameError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "hidden" => Ok(Self::Hidden),
            "revealed" => Ok(Self::Revealed),
            "matched" => Ok(Self::Matched),
            other => Err(GameError::UnknownTileState(other.to_string())),
        }
    }
}

/// One board cell: the symbol it hides and whether it is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub content: SymbolId,
    pub state: TileState,
}

impl Tile {
    /// Creates a face-down tile
    pub fn new(content: SymbolId) -> Self {
        Self {
            content,
            state: TileState::Hidden,
        }
    }
}
