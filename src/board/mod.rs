//! Tiles, boards and board generation.
//!
//! ## Key Components
//!
//! - [`Tile`], [`TileId`], [`ImageKey`], [`TileState`]: the grid cells
//! - [`Board`]: an ordered, validated grid
//! - [`generate_board`]: shuffle-based generation with bounded validation
//!
//! ## Example Usage
//!
//! ```
//! use memory_tiles::board::{generate_board, validate_layout};
//! use memory_tiles::core::{GameConfig, GameRng};
//!
//! let config = GameConfig::default();
//! let board = generate_board(&config, &mut GameRng::new(42)).unwrap();
//!
//! assert_eq!(board.len(), 16);
//! assert!(validate_layout(&board.layout(), config.pairs_needed).is_ok());
//! ```

mod generator;
mod layout;
mod tile;

pub use generator::{deal_layout, generate_board, shuffle, MAX_GENERATION_ATTEMPTS};
pub use layout::{validate_layout, Board, LayoutError};
pub use tile::{ImageKey, Tile, TileId, TileState, MAX_TILES};
