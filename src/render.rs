use crate::schema::{GameResult, SymbolId, TileState};

const TILE_BOX: &str = "inline-block h-16 w-16";

/// How a single tile looks on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileVisual {
    /// Face-down placeholder; activating it flips the tile.
    Back,
    /// Face-up and waiting for its pair to be resolved.
    Front(SymbolId),
    /// Faded symbol of a pair already found.
    Matched(SymbolId),
}

impl TileVisual {
    pub fn class(&self) -> String {
        let look = match self {
            Self::Back => "bg-indigo-300 text-center flex-1 rounded-md cursor-pointer",
            Self::Front(_) => "bg-indigo-500 text-white rounded-md",
            Self::Matched(_) => "flex-1 opacity-5",
        };
        format!("{} {}", TILE_BOX, look)
    }

    pub fn symbol(&self) -> Option<&SymbolId> {
        match self {
            Self::Back => None,
            Self::Front(symbol) | Self::Matched(symbol) => Some(symbol),
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Back)
    }
}

pub fn render(content: &SymbolId, state: TileState) -> TileVisual {
    match state {
        TileState::Hidden => TileVisual::Back,
        TileState::Revealed => TileVisual::Front(content.clone()),
        TileState::Matched => TileVisual::Matched(content.clone()),
    }
}

/// Renders a tile whose state arrives as text, e.g. from markup or JSON.
pub fn render_raw(content: &SymbolId, raw_state: &str) -> GameResult<TileVisual> {
    let state = raw_state.parse::<TileState>()?;
    Ok(render(content, state))
}
