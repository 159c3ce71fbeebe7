//! Weighted variant pools

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One selectable item type with its relative weight.
///
/// A weight of zero is legal; the candidate stays registered but is never
/// drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantCandidate {
    pub item_id: u16,
    pub weight: u32,
}

/// Ordered weighted candidates for one border category.
///
/// `total_weight` is maintained incrementally and always equals the sum of
/// the candidate weights.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantPool {
    candidates: Vec<VariantCandidate>,
    total_weight: u32,
}

impl VariantPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: VariantCandidate) {
        self.total_weight += candidate.weight;
        self.candidates.push(candidate);
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    pub fn candidates(&self) -> &[VariantCandidate] {
        &self.candidates
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Weighted random draw by cumulative sum; each candidate is selected
    /// with probability `weight / total_weight`. Returns `None` when the
    /// pool has no selectable weight.
    pub fn pick(&self, rng: &mut impl Rng) -> Option<u16> {
        if self.total_weight == 0 {
            return None;
        }

        let mut roll = rng.gen_range(1..=self.total_weight);
        for candidate in &self.candidates {
            if roll <= candidate.weight {
                return Some(candidate.item_id);
            }
            roll -= candidate.weight;
        }

        None
    }
}
