//! Brush registry
//!
//! Explicit process-scoped state holding every loaded table brush, keyed by
//! brush id. Created when a configuration is loaded, passed by reference
//! into retile passes, and cleared on document close. The registry is what
//! resolves an item type's brush back-reference to the actual rule set.

use crate::brush::TableBrush;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct BrushRegistry {
    brushes: HashMap<Uuid, TableBrush>,
}

impl BrushRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, brush: TableBrush) {
        self.brushes.insert(brush.id(), brush);
    }

    pub fn get(&self, id: Uuid) -> Option<&TableBrush> {
        self.brushes.get(&id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&TableBrush> {
        self.brushes.values().find(|brush| brush.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableBrush> {
        self.brushes.values()
    }

    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }

    /// Drop every registered brush (document/process teardown).
    pub fn clear(&mut self) {
        self.brushes.clear();
    }
}
