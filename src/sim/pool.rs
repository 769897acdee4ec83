//! Fixed-capacity sprite arena with free-list reuse
//!
//! Slots are addressed by index. Storage is reserved once up front; when the
//! pool is full, further allocations are dropped rather than growing it.

use std::ops::{Index, IndexMut};

use glam::Vec2;

use super::sprite::Sprite;

/// Pool of sprites with O(1) allocate/release
#[derive(Debug, Clone)]
pub struct SpritePool {
    slots: Vec<Sprite>,
    /// Parallel to `slots`: true while the slot sits on the free list
    vacant: Vec<bool>,
    /// Released indices, most recent last
    free: Vec<usize>,
    capacity: usize,
}

impl SpritePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Place a live sprite, reusing the most recently released slot first
    ///
    /// Returns the slot index, or `None` when the pool is full.
    pub fn allocate(&mut self, position: Vec2, velocity: Vec2) -> Option<usize> {
        if let Some(index) = self.free.pop() {
            self.vacant[index] = false;
            self.slots[index].init(position, velocity);
            return Some(index);
        }

        if self.slots.len() < self.capacity {
            self.slots.push(Sprite::new(position, velocity));
            self.vacant.push(false);
            return Some(self.slots.len() - 1);
        }

        log::trace!("Sprite pool full ({} slots), dropping spawn", self.capacity);
        None
    }

    /// Kill the sprite at `index` and make its slot reusable
    ///
    /// Returns false (and does nothing) for an index that was never allocated
    /// or is already vacant, so a slot can't land on the free list twice.
    pub fn release(&mut self, index: usize) -> bool {
        match self.vacant.get(index) {
            Some(false) => {
                self.slots[index].life = 0;
                self.vacant[index] = true;
                self.free.push(index);
                true
            }
            _ => false,
        }
    }

    /// Drop every sprite, keeping the reserved storage
    pub fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
        self.free.clear();
    }

    /// Number of slots ever handed out (live or vacant)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently on the free list
    pub fn freed(&self) -> usize {
        self.free.len()
    }

    /// Number of living sprites
    pub fn live(&self) -> usize {
        self.slots.iter().filter(|s| s.is_alive()).count()
    }

    /// All slots in index order, including dead ones
    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.slots.iter()
    }

    /// Living sprites with their slot indices
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, &Sprite)> {
        self.slots.iter().enumerate().filter(|(_, s)| s.is_alive())
    }
}

impl Index<usize> for SpritePool {
    type Output = Sprite;

    fn index(&self, index: usize) -> &Sprite {
        &self.slots[index]
    }
}

impl IndexMut<usize> for SpritePool {
    fn index_mut(&mut self, index: usize) -> &mut Sprite {
        &mut self.slots[index]
    }
}
