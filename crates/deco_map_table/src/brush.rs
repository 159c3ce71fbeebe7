//! The table brush: paint, erase, and the neighbor-aware retile pass
//!
//! `draw` seeds a tile with an `Alone` piece; `retile_tile` re-evaluates
//! an already-placed piece against its 8 neighbors and re-skins it in
//! place. The retile pass dispatches per item to the brush that owns the
//! item's type, so several table brushes can coexist on one map (and even
//! on one tile) without disturbing each other.

use deco_map_core::{Item, ItemDatabase, Position, Region, TileMap};
use rand::Rng;
use uuid::Uuid;

use crate::border::{classify, neighbors};
use crate::pool::{VariantCandidate, VariantPool};
use crate::registry::BrushRegistry;
use crate::BorderCategory;

// ─── TableBrush ──────────────────────────────────────────────────────────────

/// The configured rule set for one decorative object family: an identity,
/// a display icon, and one weighted variant pool per border category.
/// Immutable once loading is complete.
#[derive(Debug, Clone)]
pub struct TableBrush {
    id: Uuid,
    name: String,
    look_id: u16,
    pools: [VariantPool; BorderCategory::COUNT],
}

impl TableBrush {
    pub fn new(name: String, look_id: u16) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            look_id,
            pools: std::array::from_fn(|_| VariantPool::new()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Client id of the icon shown in the palette.
    pub fn look_id(&self) -> u16 {
        self.look_id
    }

    pub fn pool(&self, category: BorderCategory) -> &VariantPool {
        &self.pools[category as usize]
    }

    /// Append a candidate to `category`'s pool.
    pub fn register_candidate(&mut self, category: BorderCategory, item_id: u16, weight: u32) {
        self.pools[category as usize].push(VariantCandidate { item_id, weight });
    }

    /// Tables can be painted anywhere a tile can exist.
    pub fn can_draw(&self, _map: &TileMap, _pos: Position) -> bool {
        true
    }

    /// Paint a seed piece at `pos`: remove anything this brush already
    /// placed there, then insert a pick from the `Alone` pool. An
    /// empty-weight `Alone` pool paints nothing.
    pub fn draw(&self, map: &mut TileMap, pos: Position, db: &ItemDatabase, rng: &mut impl Rng) {
        self.undraw(map, pos, db);

        if let Some(type_id) = self.pool(BorderCategory::Alone).pick(rng) {
            map.get_or_create(pos).add_item(Item::new(type_id));
        }
    }

    /// Remove every item at `pos` owned by this brush. Items of other
    /// brushes and non-table items on the tile are left untouched.
    pub fn undraw(&self, map: &mut TileMap, pos: Position, db: &ItemDatabase) {
        if let Some(tile) = map.tile_mut(pos) {
            tile.remove_items_where(|item| db.table_brush_of(item.type_id) == Some(self.id));
        }
    }
}

// ─── Retiling ────────────────────────────────────────────────────────────────

/// Relative neighbor offsets with their mask bits, y growing southward.
const NEIGHBOR_OFFSETS: [(i32, i32, u8); 8] = [
    (-1, -1, neighbors::NW),
    (0, -1, neighbors::N),
    (1, -1, neighbors::NE),
    (-1, 0, neighbors::W),
    (1, 0, neighbors::E),
    (-1, 1, neighbors::SW),
    (0, 1, neighbors::S),
    (1, 1, neighbors::SE),
];

/// Build the neighbor-presence mask for `brush_id` around `pos`.
///
/// Offsets that would reach negative coordinates are clipped to absent;
/// everywhere else an absent tile simply contributes a clear bit.
pub fn neighbor_mask(map: &TileMap, pos: Position, brush_id: Uuid, db: &ItemDatabase) -> u8 {
    let mut mask = 0u8;

    for (dx, dy, bit) in NEIGHBOR_OFFSETS {
        let neighbor = pos.offset(dx, dy);
        if neighbor.x < 0 || neighbor.y < 0 {
            continue;
        }
        if map.has_table_brush_at(neighbor, brush_id, db) {
            mask |= bit;
        }
    }

    mask
}

/// Re-evaluate every table piece on the tile at `pos` against its
/// neighborhood and re-skin it in place.
///
/// No-op when the tile is absent or holds no table. For each table item
/// the mask is matched against that item's own brush, classified, and a
/// pick from the resolved category's pool replaces the item's type id.
/// A zero-weight pool leaves the item unchanged. Safe to re-run: a stable
/// neighborhood resolves to the same category every time.
pub fn retile_tile(
    map: &mut TileMap,
    pos: Position,
    db: &ItemDatabase,
    registry: &BrushRegistry,
    rng: &mut impl Rng,
) {
    let Some(tile) = map.tile(pos) else {
        return;
    };
    if !tile.has_table(db) {
        return;
    }

    let owners: Vec<(usize, Uuid)> = tile
        .items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| db.table_brush_of(item.type_id).map(|id| (index, id)))
        .collect();

    let mut updates: Vec<(usize, u16)> = Vec::new();
    for (index, brush_id) in owners {
        let Some(brush) = registry.get(brush_id) else {
            continue;
        };
        let category = classify(neighbor_mask(map, pos, brush_id, db));
        if let Some(type_id) = brush.pool(category).pick(rng) {
            updates.push((index, type_id));
        }
    }

    if let Some(tile) = map.tile_mut(pos) {
        for (index, type_id) in updates {
            if let Some(item) = tile.items.get_mut(index) {
                item.type_id = type_id;
            }
        }
    }
}

/// Run [`retile_tile`] over every position in `region` whose tile holds a
/// table. Used to re-settle border categories after bulk edits such as
/// paste or region fill.
pub fn reconcile_tables(
    map: &mut TileMap,
    region: &Region,
    db: &ItemDatabase,
    registry: &BrushRegistry,
    rng: &mut impl Rng,
) {
    for pos in region.positions() {
        retile_tile(map, pos, db, registry, rng);
    }
}

/// Paint a table at `pos` and re-settle the surrounding 3x3 neighborhood.
pub fn paint_table(
    map: &mut TileMap,
    pos: Position,
    brush: &TableBrush,
    db: &ItemDatabase,
    registry: &BrushRegistry,
    rng: &mut impl Rng,
) {
    brush.draw(map, pos, db, rng);
    reconcile_tables(map, &Region::single(pos).grown(1), db, registry, rng);
}

/// Erase `brush`'s table at `pos` and re-settle the surrounding 3x3
/// neighborhood.
pub fn erase_table(
    map: &mut TileMap,
    pos: Position,
    brush: &TableBrush,
    db: &ItemDatabase,
    registry: &BrushRegistry,
    rng: &mut impl Rng,
) {
    brush.undraw(map, pos, db);
    reconcile_tables(map, &Region::single(pos).grown(1), db, registry, rng);
}
