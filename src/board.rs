use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

use crate::config::check_palette;
use crate::schema::{GameError, GameResult, SymbolId, Tile, TileState};

/// An ordered set of tiles where every symbol appears exactly twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Builds a shuffled board of `tile_count` face-down tiles from the
    /// first `tile_count / 2` palette symbols.
    pub fn generate<R: Rng + ?Sized>(
        tile_count: usize,
        palette: &[SymbolId],
        rng: &mut R,
    ) -> GameResult<Self> {
        if tile_count % 2 != 0 {
            return Err(GameError::OddTileCount(tile_count));
        }
        if tile_count == 0 {
            return Err(GameError::EmptyBoard);
        }

        let pairs = tile_count / 2;
        check_palette(palette, pairs)?;

        let used = &palette[..pairs];
        let mut contents: Vec<SymbolId> = used.iter().chain(used).cloned().collect();
        // Fisher-Yates
        contents.shuffle(rng);

        Ok(Self::laid_out(contents))
    }

    /// Lays out face-down tiles in exactly the given order. Every symbol
    /// must appear exactly twice.
    pub fn from_contents(contents: Vec<SymbolId>) -> GameResult<Self> {
        if contents.len() % 2 != 0 {
            return Err(GameError::OddTileCount(contents.len()));
        }
        if contents.is_empty() {
            return Err(GameError::EmptyBoard);
        }

        let unpaired = {
            let mut counts: HashMap<&SymbolId, usize> = HashMap::new();
            for symbol in &contents {
                *counts.entry(symbol).or_default() += 1;
            }
            counts
                .into_iter()
                .find(|&(_, count)| count != 2)
                .map(|(symbol, count)| (symbol.to_string(), count))
        };
        if let Some((symbol, count)) = unpaired {
            return Err(GameError::UnpairedSymbol { symbol, count });
        }

        Ok(Self::laid_out(contents))
    }

    fn laid_out(contents: Vec<SymbolId>) -> Self {
        Self {
            tiles: contents.into_iter().map(Tile::new).collect(),
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: usize) -> GameResult<&Tile> {
        self.tiles.get(index).ok_or(GameError::TileOutOfRange {
            index,
            len: self.tiles.len(),
        })
    }

    pub(crate) fn set_state(&mut self, index: usize, state: TileState) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.state = state;
        }
    }

    /// Indices of tiles currently face-up and awaiting comparison
    pub fn revealed(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.state == TileState::Revealed)
            .map(|(index, _)| index)
            .collect()
    }

    /// Moves every revealed tile to `state`
    pub(crate) fn settle_revealed(&mut self, state: TileState) {
        for tile in &mut self.tiles {
            if tile.state == TileState::Revealed {
                tile.state = state;
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.tiles.is_empty() && self.tiles.iter().all(|tile| tile.state == TileState::Matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PALETTE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn palette() -> Vec<SymbolId> {
        DEFAULT_PALETTE.iter().copied().map(SymbolId::from).collect()
    }

    #[test]
    fn every_used_symbol_appears_twice() {
        let palette = palette();
        let mut rng = StdRng::seed_from_u64(7);

        for tile_count in (2..=20).step_by(2) {
            let board = Board::generate(tile_count, &palette, &mut rng).unwrap();
            assert_eq!(board.len(), tile_count);

            let mut counts: HashMap<&SymbolId, usize> = HashMap::new();
            for tile in board.tiles() {
                *counts.entry(&tile.content).or_default() += 1;
                assert_eq!(tile.state, TileState::Hidden);
            }
            assert_eq!(counts.len(), tile_count / 2);
            assert!(counts.values().all(|&count| count == 2));
            for symbol in &palette[..tile_count / 2] {
                assert_eq!(counts.get(symbol), Some(&2));
            }
        }
    }

    #[test]
    fn odd_tile_count_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        for tile_count in [1, 3, 15, 17] {
            assert_eq!(
                Board::generate(tile_count, &palette(), &mut rng),
                Err(GameError::OddTileCount(tile_count))
            );
        }
    }

    #[test]
    fn zero_tiles_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Board::generate(0, &palette(), &mut rng),
            Err(GameError::EmptyBoard)
        );
    }

    #[test]
    fn palette_must_cover_requested_pairs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Board::generate(22, &palette(), &mut rng),
            Err(GameError::PaletteTooSmall {
                needed: 11,
                available: 10
            })
        );
    }

    #[test]
    fn same_seed_gives_same_order() {
        let a = Board::generate(16, &palette(), &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Board::generate(16, &palette(), &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_moves_tiles_around() {
        let ordered: Vec<SymbolId> = palette()[..8]
            .iter()
            .chain(&palette()[..8])
            .cloned()
            .collect();
        let mut rng = StdRng::seed_from_u64(3);
        let reordered = (0..10).any(|_| {
            let board = Board::generate(16, &palette(), &mut rng).unwrap();
            board.tiles().iter().map(|t| &t.content).ne(ordered.iter())
        });
        assert!(reordered);
    }

    #[test]
    fn complete_only_when_every_tile_matched() {
        let mut board = Board::from_contents(vec!["a".into(), "a".into()]).unwrap();
        assert!(!board.is_complete());
        board.set_state(0, TileState::Matched);
        assert!(!board.is_complete());
        board.set_state(1, TileState::Matched);
        assert!(board.is_complete());
    }

    #[test]
    fn fixed_layout_keeps_given_order() {
        let board = Board::from_contents(vec!["b".into(), "a".into(), "a".into(), "b".into()]).unwrap();
        let order: Vec<&str> = board.tiles().iter().map(|t| t.content.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "a", "b"]);
        assert!(board.tiles().iter().all(|t| t.state == TileState::Hidden));
    }

    #[test]
    fn fixed_layout_must_hold_exact_pairs() {
        fn contents(ids: &[&str]) -> Vec<SymbolId> {
            ids.iter().copied().map(SymbolId::from).collect()
        }

        assert_eq!(
            Board::from_contents(contents(&["A", "B", "C"])),
            Err(GameError::OddTileCount(3))
        );
        assert_eq!(Board::from_contents(Vec::new()), Err(GameError::EmptyBoard));
        assert_eq!(
            Board::from_contents(contents(&["A", "A", "A", "A"])),
            Err(GameError::UnpairedSymbol {
                symbol: "A".to_string(),
                count: 4
            })
        );
        assert!(matches!(
            Board::from_contents(contents(&["A", "B", "A", "C"])),
            Err(GameError::UnpairedSymbol { count: 1, .. })
        ));
    }
}
