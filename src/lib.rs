pub mod board;
pub mod config;
pub mod render;
pub mod schema;
pub mod session;

pub use board::Board;
pub use config::{GameConfig, DEFAULT_PALETTE};
pub use render::{render, render_raw, TileVisual};
pub use schema::{GameError, GameResult, SymbolId, Tile, TileState};
pub use session::{FlipOutcome, ResolveTicket, Resolution, Session};
