//! Recently used colors, stored as a fixed-size ring.
//!
//! The write cursor always points at the oldest slot, so once every slot is
//! filled each save evicts the earliest retained color.

#[cfg(test)]
#[path = "palette_test.rs"]
mod tests;

use crate::color::Color;

pub const DEFAULT_PALETTE_SIZE: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    slots: Vec<Option<Color>>,
    cursor: usize,
}

impl Palette {
    /// Create an empty palette. A zero capacity is raised to one slot.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { slots: vec![None; capacity.max(1)], cursor: 0 }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot the next save will write.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Write `color` at the cursor and advance it. Returns the slot written.
    pub fn save(&mut self, color: Color) -> usize {
        let slot = self.cursor;
        self.slots[slot] = Some(color);
        self.cursor = (slot + 1) % self.slots.len();
        slot
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Color> {
        self.slots.get(slot).copied().flatten()
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Color>] {
        &self.slots
    }

    /// Retained colors, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = Color> + '_ {
        let (newer, older) = self.slots.split_at(self.cursor);
        older.iter().chain(newer).filter_map(|s| *s)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE_SIZE)
    }
}
