//! Sparse tile storage
//!
//! `TileMap` is the grid accessor the autotile engine queries. Storage is a
//! position-keyed hash map, so any coordinate without a tile reads as absent
//! on every edge of the map - never an error.

use crate::{ItemDatabase, Position, Tile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TileMap {
    tiles: HashMap<Position, Tile>,
}

impl TileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    pub fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        self.tiles.get_mut(&pos)
    }

    /// Get the tile at `pos`, creating an empty one if absent.
    pub fn get_or_create(&mut self, pos: Position) -> &mut Tile {
        self.tiles.entry(pos).or_insert_with(|| Tile::new(pos))
    }

    /// Remove the tile at `pos`, destroying its contents.
    pub fn remove_tile(&mut self, pos: Position) -> Option<Tile> {
        self.tiles.remove(&pos)
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the tile at `pos` holds an item belonging to `brush_id`.
    /// Absent tiles answer false.
    pub fn has_table_brush_at(&self, pos: Position, brush_id: Uuid, db: &ItemDatabase) -> bool {
        self.tiles.get(&pos).is_some_and(|tile| {
            tile.items
                .iter()
                .any(|item| db.table_brush_of(item.type_id) == Some(brush_id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, ItemType};

    #[test]
    fn test_absent_tiles_read_as_none() {
        let map = TileMap::new();
        assert!(map.tile(Position::new(0, 0, 0)).is_none());
        assert!(map.tile(Position::new(-5, 3, 0)).is_none());
        assert!(map.tile(Position::new(1_000_000, 1_000_000, 7)).is_none());
    }

    #[test]
    fn test_get_or_create_round_trip() {
        let mut map = TileMap::new();
        let pos = Position::new(3, 4, 0);

        map.get_or_create(pos).add_item(Item::new(100));
        assert_eq!(map.tile(pos).unwrap().items.len(), 1);
        assert_eq!(map.tile_count(), 1);

        map.remove_tile(pos);
        assert!(map.tile(pos).is_none());
    }

    #[test]
    fn test_has_table_brush_at() {
        let mut db = ItemDatabase::new();
        db.insert(ItemType::new(100, "oak table".to_string()));
        let brush_id = Uuid::new_v4();
        let other_brush = Uuid::new_v4();
        db.claim_for_brush(100, brush_id);

        let mut map = TileMap::new();
        let pos = Position::new(0, 0, 0);
        map.get_or_create(pos).add_item(Item::new(100));

        assert!(map.has_table_brush_at(pos, brush_id, &db));
        assert!(!map.has_table_brush_at(pos, other_brush, &db));
        assert!(!map.has_table_brush_at(Position::new(1, 1, 0), brush_id, &db));
    }
}
