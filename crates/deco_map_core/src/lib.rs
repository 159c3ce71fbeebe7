//! Core data structures for the deco_map autotile engine
//!
//! This crate provides the map-model types the table autotiler operates on:
//! - `Position` / `Region` - map coordinates and rectangular spans
//! - `Item` - a placed object occupying a tile
//! - `ItemType` / `ItemDatabase` - item metadata and the brush-claim registry
//! - `Tile` - a map cell owning its placed items
//! - `TileMap` - sparse tile storage, the grid accessor the engine queries

mod item;
mod map;
mod position;
mod tile;

pub use item::{Item, ItemDatabase, ItemType};
pub use map::TileMap;
pub use position::{Position, Region};
pub use tile::Tile;
