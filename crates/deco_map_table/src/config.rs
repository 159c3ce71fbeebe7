//! Brush configuration schema and loading
//!
//! The host's configuration parser hands each brush definition to
//! [`TableBrush::load`]. Malformed entries are skipped with a warning so
//! the rest of the definition still loads; the one hard failure is an item
//! id already claimed by a different brush, which aborts the definition
//! and rolls back the claims it made.

use deco_map_core::ItemDatabase;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::border::BorderCategory;
use crate::brush::TableBrush;
use crate::registry::BrushRegistry;

/// Errors that abort loading a brush definition.
#[derive(Debug, Error)]
pub enum BrushLoadError {
    #[error("item type {item_id} already belongs to brush {owner}")]
    ItemAlreadyClaimed { item_id: u16, owner: Uuid },
}

/// One brush definition as it appears in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableBrushConfig {
    pub name: String,
    /// Client id of the palette icon.
    #[serde(default)]
    pub look_id: u16,
    #[serde(default)]
    pub tables: Vec<TableAlignConfig>,
}

/// The candidate list for one alignment tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableAlignConfig {
    /// One of `vertical`, `horizontal`, `south`, `east`, `north`, `west`,
    /// `alone` (case-insensitive).
    #[serde(default)]
    pub align: String,
    #[serde(default)]
    pub items: Vec<ItemChance>,
}

/// A candidate entry: an item type id and its selection weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ItemChance {
    pub id: u16,
    #[serde(default)]
    pub chance: u32,
}

impl TableBrush {
    /// Build a brush from a configuration definition, claiming its item
    /// types in `db`.
    ///
    /// Unknown alignment tags, zero item ids, and ids missing from the
    /// database push a warning and skip the entry. An id owned by another
    /// brush aborts the whole definition; claims already made by this
    /// definition are released before returning the error.
    pub fn load(
        config: &TableBrushConfig,
        db: &mut ItemDatabase,
        warnings: &mut Vec<String>,
    ) -> Result<TableBrush, BrushLoadError> {
        let mut brush = TableBrush::new(config.name.clone(), config.look_id);

        for table in &config.tables {
            let Some(category) = BorderCategory::from_align(&table.align) else {
                warnings.push(format!(
                    "brush '{}': unknown table alignment '{}'",
                    config.name, table.align
                ));
                continue;
            };

            for entry in &table.items {
                if entry.id == 0 {
                    warnings.push(format!(
                        "brush '{}': item id 0 is not valid in '{}' entry",
                        config.name, table.align
                    ));
                    continue;
                }

                match db.get(entry.id) {
                    None => {
                        warnings.push(format!(
                            "brush '{}': no item type with id {}",
                            config.name, entry.id
                        ));
                        continue;
                    }
                    Some(ty) => {
                        if let Some(owner) = ty.table_brush {
                            if owner != brush.id() {
                                db.release_claims(brush.id());
                                return Err(BrushLoadError::ItemAlreadyClaimed {
                                    item_id: entry.id,
                                    owner,
                                });
                            }
                        }
                    }
                }

                db.claim_for_brush(entry.id, brush.id());
                brush.register_candidate(category, entry.id, entry.chance);
            }
        }

        Ok(brush)
    }
}

/// Load a batch of brush definitions into `registry`.
///
/// Each definition loads independently; an aborted definition is reported
/// in the returned warning list and the remaining definitions still load.
pub fn load_table_brushes(
    configs: &[TableBrushConfig],
    db: &mut ItemDatabase,
    registry: &mut BrushRegistry,
) -> Vec<String> {
    let mut warnings = Vec::new();

    for config in configs {
        match TableBrush::load(config, db, &mut warnings) {
            Ok(brush) => registry.insert(brush),
            Err(err) => warnings.push(format!("brush '{}' not loaded: {}", config.name, err)),
        }
    }

    warnings
}
