// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Slot arena backing the playlist's linked nodes.
//!
//! Nodes are addressed by generational handles. Freed slots are reused,
//! and each reuse bumps the slot generation so a handle to a removed
//! node never resolves to its replacement.

use std::ops::{Index, IndexMut};

use super::track::Track;

/// Stable, opaque reference to a track stored in a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackHandle {
    index: u32,
    generation: u32,
}

/// A linked playlist node
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) track: Track,
    pub(crate) prev: Option<TrackHandle>,
    pub(crate) next: Option<TrackHandle>,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena of nodes with a free list
#[derive(Debug, Clone, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl Arena {
    /// Create an empty arena
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store an unlinked node, reusing a free slot when one exists
    pub(crate) fn insert(&mut self, track: Track) -> TrackHandle {
        let node = Node {
            track,
            prev: None,
            next: None,
        };

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            TrackHandle {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            TrackHandle {
                index,
                generation: 0,
            }
        }
    }

    /// Free a slot, returning its node
    pub(crate) fn remove(&mut self, handle: TrackHandle) -> Option<Node> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        Some(node)
    }

    /// Resolve a handle
    pub(crate) fn get(&self, handle: TrackHandle) -> Option<&Node> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    /// Resolve a handle mutably
    pub(crate) fn get_mut(&mut self, handle: TrackHandle) -> Option<&mut Node> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Drop every node. Generations survive so old handles stay dead.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
    }

    /// Number of occupied slots
    pub(crate) fn occupied(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl Index<TrackHandle> for Arena {
    type Output = Node;

    fn index(&self, handle: TrackHandle) -> &Node {
        match self.get(handle) {
            Some(node) => node,
            None => panic!("stale track handle {:?}", handle),
        }
    }
}

impl IndexMut<TrackHandle> for Arena {
    fn index_mut(&mut self, handle: TrackHandle) -> &mut Node {
        match self.get_mut(handle) {
            Some(node) => node,
            None => panic!("stale track handle {:?}", handle),
        }
    }
}
