//! Table autotiler for deco_map
//!
//! This crate decides which visual variant of a multi-piece decorative
//! object ("table") belongs on a tile so that adjoining pieces connect,
//! and picks the concrete item for that variant by weighted random draw.
//!
//! The pipeline: a paint stroke calls [`TableBrush::draw`] to seed a tile,
//! then [`retile_tile`] (or [`reconcile_tables`] after bulk edits) queries
//! the 8 neighbors, classifies the resulting bitmask into a
//! [`BorderCategory`], and re-skins the placed item in place with a pick
//! from that category's [`VariantPool`].
//!
//! # Example
//!
//! ```rust,ignore
//! use deco_map_core::{ItemDatabase, Position, TileMap};
//! use deco_map_table::{load_table_brushes, paint_table, BrushRegistry};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut db = ItemDatabase::new();
//! // ... populate item types from the host's item catalog ...
//!
//! let mut registry = BrushRegistry::new();
//! let configs: Vec<deco_map_table::TableBrushConfig> =
//!     serde_json::from_str(&std::fs::read_to_string("tables.json")?)?;
//! let warnings = load_table_brushes(&configs, &mut db, &mut registry);
//!
//! let mut map = TileMap::new();
//! let mut rng = SmallRng::from_entropy();
//! let brush = registry.get_by_name("oak_table").unwrap();
//! paint_table(&mut map, Position::new(4, 4, 0), brush, &db, &registry, &mut rng);
//! ```

pub mod border;
pub mod brush;
pub mod config;
pub mod pool;
pub mod registry;

pub use border::{classify, neighbors, BorderCategory};
pub use brush::{
    erase_table, neighbor_mask, paint_table, reconcile_tables, retile_tile, TableBrush,
};
pub use config::{load_table_brushes, BrushLoadError, ItemChance, TableAlignConfig, TableBrushConfig};
pub use pool::{VariantCandidate, VariantPool};
pub use registry::BrushRegistry;

// Re-export deco_map_core
pub use deco_map_core;
