//! The board and its layout validation.
//!
//! A board is an ordered sequence of `2 * pairs_needed` tiles in which every
//! image key occurs exactly twice. Boards are replaced wholesale between
//! games; only tile states change in place.
//!
//! Tiles are stored in an `im::Vector`, so handing a snapshot of the board
//! to listeners is an O(1) clone.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tile::{ImageKey, Tile, TileId, TileState, MAX_TILES};

/// Why a layout is not a valid board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("{actual} tiles exceed the {max} addressable slots")]
    TooManyTiles { max: usize, actual: usize },

    #[error("slot {slot} holds {id}")]
    SlotMismatch { slot: usize, id: TileId },

    #[error("expected {expected} tiles, got {actual}")]
    TileCount { expected: usize, actual: usize },

    #[error("expected {expected} distinct images, got {actual}")]
    DistinctImages { expected: usize, actual: usize },

    #[error("{image} appears {count} times, expected 2")]
    Occurrences { image: ImageKey, count: usize },
}

/// Check that `images` holds exactly `pairs_needed` pairs.
///
/// Checks run in order: addressable size, tile count, distinct image count,
/// then per-image occurrences in layout order, so the first offending image
/// is reported.
pub fn validate_layout(images: &[ImageKey], pairs_needed: u16) -> Result<(), LayoutError> {
    let expected_tiles = 2 * pairs_needed as usize;
    if expected_tiles > MAX_TILES {
        return Err(LayoutError::TooManyTiles {
            max: MAX_TILES,
            actual: expected_tiles,
        });
    }
    if images.len() != expected_tiles {
        return Err(LayoutError::TileCount {
            expected: expected_tiles,
            actual: images.len(),
        });
    }

    let mut counts: FxHashMap<ImageKey, usize> = FxHashMap::default();
    for &image in images {
        *counts.entry(image).or_insert(0) += 1;
    }

    if counts.len() != pairs_needed as usize {
        return Err(LayoutError::DistinctImages {
            expected: pairs_needed as usize,
            actual: counts.len(),
        });
    }

    for image in images {
        let count = counts[image];
        if count != 2 {
            return Err(LayoutError::Occurrences {
                image: *image,
                count,
            });
        }
    }

    Ok(())
}

/// Ordered grid of tiles.
///
/// Deserialized boards go through the same layout validation as
/// [`Board::from_layout`]; tile states are kept as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredBoard")]
pub struct Board {
    tiles: Vector<Tile>,
}

#[derive(Deserialize)]
struct StoredBoard {
    tiles: Vector<Tile>,
}

impl TryFrom<StoredBoard> for Board {
    type Error = LayoutError;

    fn try_from(stored: StoredBoard) -> Result<Self, Self::Error> {
        let tiles = stored.tiles;
        if tiles.len() > MAX_TILES {
            return Err(LayoutError::TooManyTiles {
                max: MAX_TILES,
                actual: tiles.len(),
            });
        }
        if let Some((slot, tile)) = tiles.iter().enumerate().find(|(i, t)| t.id.index() != *i) {
            return Err(LayoutError::SlotMismatch { slot, id: tile.id });
        }

        let images: Vec<ImageKey> = tiles.iter().map(|t| t.image).collect();
        let pairs = u16::try_from(images.len() / 2).unwrap_or(u16::MAX);
        validate_layout(&images, pairs)?;
        Ok(Self { tiles })
    }
}

impl Board {
    /// Build a face-down board from an explicit layout.
    ///
    /// `images[i]` becomes the image of `TileId(i)`.
    pub fn from_layout(images: &[ImageKey], pairs_needed: u16) -> Result<Self, LayoutError> {
        validate_layout(images, pairs_needed)?;
        Ok(Self::from_validated(images))
    }

    pub(crate) fn from_validated(images: &[ImageKey]) -> Self {
        debug_assert!(images.len() <= MAX_TILES);
        let tiles = (0..=u16::MAX)
            .zip(images)
            .map(|(i, &image)| Tile::new(TileId::new(i), image))
            .collect();
        Self { tiles }
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the board has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    /// Look up a tile by slot.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Iterate tiles in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Image keys in slot order.
    #[must_use]
    pub fn layout(&self) -> Vec<ImageKey> {
        self.tiles.iter().map(|t| t.image).collect()
    }

    /// Count tiles currently in `state`.
    #[must_use]
    pub fn count_in_state(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|t| t.state == state).count()
    }

    /// Whether every tile is matched.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.tiles.iter().all(|t| t.state == TileState::Matched)
    }

    /// Change a tile's state. Returns false for an off-board id.
    pub(crate) fn set_state(&mut self, id: TileId, state: TileState) -> bool {
        match self.tiles.get_mut(id.index()) {
            Some(tile) => {
                tile.state = state;
                true
            }
            None => false,
        }
    }

    /// Turn every tile face down, keeping the layout.
    pub(crate) fn hide_all(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.state = TileState::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(raw: &[u16]) -> Vec<ImageKey> {
        raw.iter().copied().map(ImageKey::new).collect()
    }

    #[test]
    fn test_valid_layout() {
        let layout = keys(&[1, 2, 1, 3, 2, 3, 4, 4]);
        assert_eq!(validate_layout(&layout, 4), Ok(()));
    }

    #[test]
    fn test_wrong_tile_count() {
        let layout = keys(&[1, 2, 1, 2, 3, 3]);
        assert_eq!(
            validate_layout(&layout, 4),
            Err(LayoutError::TileCount { expected: 8, actual: 6 })
        );
    }

    #[test]
    fn test_wrong_distinct_count() {
        let layout = keys(&[1, 1, 1, 1, 2, 2, 3, 3]);
        assert_eq!(
            validate_layout(&layout, 4),
            Err(LayoutError::DistinctImages { expected: 4, actual: 3 })
        );
    }

    #[test]
    fn test_wrong_occurrences() {
        let layout = keys(&[1, 2, 3, 4, 1, 1, 2, 3]);
        assert_eq!(
            validate_layout(&layout, 4),
            Err(LayoutError::Occurrences {
                image: ImageKey::new(1),
                count: 3,
            })
        );
    }

    #[test]
    fn test_empty_layout_zero_pairs() {
        assert_eq!(validate_layout(&[], 0), Ok(()));
    }

    #[test]
    fn test_from_layout_assigns_ids_in_order() {
        let layout = keys(&[5, 6, 6, 5]);
        let board = Board::from_layout(&layout, 2).unwrap();

        assert_eq!(board.len(), 4);
        assert_eq!(board.pair_count(), 2);
        for (i, tile) in board.iter().enumerate() {
            assert_eq!(tile.id, TileId::new(i as u16));
            assert_eq!(tile.state, TileState::Hidden);
        }
        assert_eq!(board.layout(), layout);
    }

    #[test]
    fn test_from_layout_rejects_invalid() {
        let layout = keys(&[5, 6, 7, 5]);
        assert!(Board::from_layout(&layout, 2).is_err());
    }

    #[test]
    fn test_set_state_and_hide_all() {
        let mut board = Board::from_layout(&keys(&[1, 1, 2, 2]), 2).unwrap();

        assert!(board.set_state(TileId::new(0), TileState::Matched));
        assert!(board.set_state(TileId::new(1), TileState::Matched));
        assert!(board.set_state(TileId::new(2), TileState::Flipped));
        assert!(!board.set_state(TileId::new(9), TileState::Flipped));

        assert_eq!(board.count_in_state(TileState::Matched), 2);
        assert_eq!(board.count_in_state(TileState::Flipped), 1);
        assert!(!board.is_cleared());

        board.hide_all();
        assert_eq!(board.count_in_state(TileState::Hidden), 4);
        assert_eq!(board.layout(), keys(&[1, 1, 2, 2]));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::from_layout(&keys(&[1, 1]), 1).unwrap();
        let snapshot = board.clone();

        board.set_state(TileId::new(0), TileState::Flipped);

        assert_eq!(snapshot.get(TileId::new(0)).unwrap().state, TileState::Hidden);
        assert_eq!(board.get(TileId::new(0)).unwrap().state, TileState::Flipped);
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::from_layout(&keys(&[3, 4, 4, 3]), 2).unwrap();
        board.set_state(TileId::new(1), TileState::Flipped);

        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }

    #[test]
    fn test_oversized_layout_is_rejected() {
        let pairs = 33000u16;
        let layout: Vec<ImageKey> = (1..=pairs).chain(1..=pairs).map(ImageKey::new).collect();

        assert_eq!(
            Board::from_layout(&layout, pairs),
            Err(LayoutError::TooManyTiles {
                max: MAX_TILES,
                actual: 66000,
            })
        );
    }

    #[test]
    fn test_largest_board_keeps_ids_unique() {
        let pairs = 32768u16;
        let layout: Vec<ImageKey> = (1..=pairs).chain(1..=pairs).map(ImageKey::new).collect();
        let board = Board::from_layout(&layout, pairs).unwrap();

        assert_eq!(board.len(), MAX_TILES);
        let last = board.iter().last().unwrap();
        assert_eq!(last.id.index(), MAX_TILES - 1);
        assert_eq!(board.get(last.id), Some(last));
    }

    #[test]
    fn test_deserialize_rejects_invalid_layout() {
        let json = r#"{"tiles":[
            {"id":0,"image":1,"state":"Hidden"},
            {"id":1,"image":2,"state":"Hidden"}
        ]}"#;
        let result: Result<Board, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_misplaced_ids() {
        let board = Board::from_layout(&keys(&[1, 1]), 1).unwrap();
        let json = serde_json::to_string(&board).unwrap().replacen("\"id\":1", "\"id\":0", 1);

        let result: Result<Board, _> = serde_json::from_str(&json);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("slot 1"), "{}", err);
    }
}
