//! Map coordinates and rectangular regions

use serde::{Deserialize, Serialize};

/// A tile coordinate on the map. `z` is the floor/layer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The position offset by `(dx, dy)` on the same floor.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }
}

/// An inclusive rectangular span of tiles on a single floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub min: Position,
    pub max: Position,
}

impl Region {
    /// Create a region from two corners; the corners may be given in any order.
    pub fn new(a: Position, b: Position) -> Self {
        debug_assert_eq!(a.z, b.z);
        Self {
            min: Position::new(a.x.min(b.x), a.y.min(b.y), a.z),
            max: Position::new(a.x.max(b.x), a.y.max(b.y), a.z),
        }
    }

    /// A region spanning a single tile.
    pub fn single(pos: Position) -> Self {
        Self { min: pos, max: pos }
    }

    /// The region grown by `radius` tiles on every side.
    pub fn grown(&self, radius: i32) -> Self {
        Self {
            min: self.min.offset(-radius, -radius),
            max: self.max.offset(radius, radius),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.z == self.min.z
            && pos.x >= self.min.x
            && pos.x <= self.max.x
            && pos.y >= self.min.y
            && pos.y <= self.max.y
    }

    /// Iterate every position in the region in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let z = self.min.z;
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| Position::new(x, y, z)))
    }
}
