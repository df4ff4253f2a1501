//! Tiles and their identifiers.
//!
//! ## ID Layout
//!
//! - [`TileId`] is a board slot, `0..grid_size`, fixed for the lifetime of a
//!   board. It never identifies an image.
//! - [`ImageKey`] is 1-based and identifies one image of the pool. Exactly two
//!   tiles on a board share each key.
//!
//! ```
//! use memory_tiles::board::{ImageKey, TileId};
//!
//! let slot = TileId::new(3);
//! assert_eq!(slot.index(), 3);
//!
//! let key = ImageKey::new(12);
//! assert_eq!(key.asset_name(), "IMG (12).jpg");
//! ```

use serde::{Deserialize, Serialize};

/// Largest board a `TileId` can address.
pub const MAX_TILES: usize = u16::MAX as usize + 1;

/// Board slot identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Slot position as an index into the board.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for TileId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Identifier of one image in the pool.
///
/// The engine only compares keys. Hosts map them to assets through
/// [`ImageKey::asset_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ImageKey(pub u16);

impl ImageKey {
    /// Create a new image key.
    #[must_use]
    pub const fn new(key: u16) -> Self {
        Self(key)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Filename of the image for this key, e.g. `IMG (3).jpg`.
    #[must_use]
    pub fn asset_name(self) -> String {
        format!("IMG ({}).jpg", self.0)
    }
}

impl std::fmt::Display for ImageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image({})", self.0)
    }
}

/// Face state of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    /// Face down, selectable.
    #[default]
    Hidden,
    /// Face up, waiting for its pair to resolve.
    Flipped,
    /// Face up for the rest of the board.
    Matched,
}

impl TileState {
    /// Whether the tile shows its image.
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Flipped | Self::Matched)
    }

    /// Lowercase name, for hosts that key styling off the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Flipped => "flipped",
            Self::Matched => "matched",
        }
    }
}

/// One cell of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub image: ImageKey,
    pub state: TileState,
}

impl Tile {
    /// Create a face-down tile.
    #[must_use]
    pub const fn new(id: TileId, image: ImageKey) -> Self {
        Self {
            id,
            image,
            state: TileState::Hidden,
        }
    }

    /// Whether this tile and `other` form a pair.
    ///
    /// A tile never pairs with itself.
    #[must_use]
    pub fn pairs_with(&self, other: &Tile) -> bool {
        self.id != other.id && self.image == other.image
    }
}
