//! Tiles and their contents

use crate::{Item, ItemDatabase, Position};
use serde::{Deserialize, Serialize};

/// A single map cell. The tile exclusively owns its placed items; removing
/// an item destroys it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub position: Position,
    pub items: Vec<Item>,
}

impl Tile {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any contained item is a table piece.
    pub fn has_table(&self, db: &ItemDatabase) -> bool {
        self.items.iter().any(|item| db.is_table(item.type_id))
    }

    /// Remove (and destroy) every item for which `predicate` returns true.
    pub fn remove_items_where<F>(&mut self, predicate: F)
    where
        F: Fn(&Item) -> bool,
    {
        self.items.retain(|item| !predicate(item));
    }
}
