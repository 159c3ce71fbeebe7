//! Neighbor-mask border classification
//!
//! A tile's 8-neighborhood is encoded as a bitmask, and a precomputed
//! 256-entry table maps every mask to one of seven [`BorderCategory`]
//! values. Classification is total: every mask resolves to a category.

use serde::{Deserialize, Serialize};

/// Neighbor direction flags for mask construction.
///
/// Row-major around the tile with y growing southward: NW is up-left,
/// SE is down-right.
pub mod neighbors {
    pub const NW: u8 = 1 << 0;
    pub const N: u8 = 1 << 1;
    pub const NE: u8 = 1 << 2;
    pub const W: u8 = 1 << 3;
    pub const E: u8 = 1 << 4;
    pub const SW: u8 = 1 << 5;
    pub const S: u8 = 1 << 6;
    pub const SE: u8 = 1 << 7;
}

/// How a table piece connects to same-brush neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorderCategory {
    /// No connecting neighbor on either axis.
    Alone = 0,
    /// Run segment along the north-south axis.
    Vertical = 1,
    /// Run segment along the west-east axis.
    Horizontal = 2,
    /// Southern end of a vertical run.
    SouthEnd = 3,
    /// Eastern end of a horizontal run.
    EastEnd = 4,
    /// Northern end of a vertical run.
    NorthEnd = 5,
    /// Western end of a horizontal run.
    WestEnd = 6,
}

impl BorderCategory {
    pub const COUNT: usize = 7;

    pub const ALL: [BorderCategory; Self::COUNT] = [
        BorderCategory::Alone,
        BorderCategory::Vertical,
        BorderCategory::Horizontal,
        BorderCategory::SouthEnd,
        BorderCategory::EastEnd,
        BorderCategory::NorthEnd,
        BorderCategory::WestEnd,
    ];

    /// Parse a configuration alignment tag, case-insensitively.
    pub fn from_align(align: &str) -> Option<Self> {
        match align.to_ascii_lowercase().as_str() {
            "vertical" => Some(BorderCategory::Vertical),
            "horizontal" => Some(BorderCategory::Horizontal),
            "south" => Some(BorderCategory::SouthEnd),
            "east" => Some(BorderCategory::EastEnd),
            "north" => Some(BorderCategory::NorthEnd),
            "west" => Some(BorderCategory::WestEnd),
            "alone" => Some(BorderCategory::Alone),
            _ => None,
        }
    }
}

/// Geometric rule behind the lookup table.
///
/// The vertical axis takes priority: any north/south neighbor makes the
/// piece part of a vertical run, horizontal connections are only
/// considered when both vertical bits are clear, and diagonal neighbors
/// never change the category on their own.
const fn category_for(mask: u8) -> BorderCategory {
    let north = mask & neighbors::N != 0;
    let south = mask & neighbors::S != 0;
    let west = mask & neighbors::W != 0;
    let east = mask & neighbors::E != 0;

    if north {
        if south {
            BorderCategory::Vertical
        } else {
            BorderCategory::SouthEnd
        }
    } else if south {
        BorderCategory::NorthEnd
    } else if west {
        if east {
            BorderCategory::Horizontal
        } else {
            BorderCategory::EastEnd
        }
    } else if east {
        BorderCategory::WestEnd
    } else {
        BorderCategory::Alone
    }
}

const fn build_lookup() -> [BorderCategory; 256] {
    let mut table = [BorderCategory::Alone; 256];
    let mut mask = 0usize;
    while mask < 256 {
        table[mask] = category_for(mask as u8);
        mask += 1;
    }
    table
}

static BORDER_LOOKUP: [BorderCategory; 256] = build_lookup();

/// Classify a neighbor mask. Total over all 256 masks.
pub fn classify(mask: u8) -> BorderCategory {
    BORDER_LOOKUP[mask as usize]
}
