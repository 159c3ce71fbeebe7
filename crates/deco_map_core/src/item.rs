//! Placed items and the item-type database
//!
//! The engine only models the slice of item metadata it needs: the table
//! flag (derived from the brush back-reference) and which brush owns the
//! item type. Everything else about item types lives in the host editor.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A placed object occupying a tile.
///
/// The brush link is carried by the item *type*, not the instance, so
/// re-skinning an item to a sibling type keeps its identity and any
/// custom state attached to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub type_id: u16,
    /// Custom user-defined properties; survives type changes.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom: HashMap<String, serde_json::Value>,
}

impl Item {
    pub fn new(type_id: u16) -> Self {
        Self {
            type_id,
            custom: HashMap::new(),
        }
    }
}

/// Metadata for one item type id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemType {
    pub id: u16,
    pub name: String,
    /// The table brush this type belongs to, if any. An id is claimed by at
    /// most one brush; the database enforces this at load time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_brush: Option<Uuid>,
}

impl ItemType {
    pub fn new(id: u16, name: String) -> Self {
        Self {
            id,
            name,
            table_brush: None,
        }
    }

    /// Whether this type is a table piece.
    pub fn is_table(&self) -> bool {
        self.table_brush.is_some()
    }
}

/// Registry of item types keyed by id.
///
/// Explicit process-scoped state: created on configuration load, passed by
/// reference into brush loading and retiling, dropped on document close.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDatabase {
    types: HashMap<u16, ItemType>,
}

impl ItemDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an item type definition.
    pub fn insert(&mut self, item_type: ItemType) {
        self.types.insert(item_type.id, item_type);
    }

    pub fn get(&self, id: u16) -> Option<&ItemType> {
        self.types.get(&id)
    }

    /// The brush that owns `id`, if the type exists and is claimed.
    pub fn table_brush_of(&self, id: u16) -> Option<Uuid> {
        self.types.get(&id).and_then(|ty| ty.table_brush)
    }

    /// Whether `id` names a table piece.
    pub fn is_table(&self, id: u16) -> bool {
        self.types.get(&id).is_some_and(|ty| ty.is_table())
    }

    /// Mark `id` as a table piece owned by `brush_id`.
    ///
    /// Callers must have checked for a conflicting owner first; claiming an
    /// id for the brush that already owns it is a no-op.
    pub fn claim_for_brush(&mut self, id: u16, brush_id: Uuid) {
        if let Some(ty) = self.types.get_mut(&id) {
            ty.table_brush = Some(brush_id);
        }
    }

    /// Release every claim held by `brush_id`. Used to roll back an aborted
    /// brush definition.
    pub fn release_claims(&mut self, brush_id: Uuid) {
        for ty in self.types.values_mut() {
            if ty.table_brush == Some(brush_id) {
                ty.table_brush = None;
            }
        }
    }
}
