//! Slot storage for stored pairs.
//!
//! Every pair lives in exactly one slot; both hash tables refer to it by
//! [`SlotId`]. Freed slots are chained into a free list and reused
//! most-recently-freed first, so the same sequence of operations always
//! produces the same slot ids.

/// Index of a live pair in a [`PairArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SlotId(u32);

impl SlotId {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
enum Slot<X, Y> {
    Occupied { x: X, y: Y },
    Free { next_free: Option<u32> },
}

/// Contiguous pair storage with free-list reuse.
#[derive(Debug, Clone)]
pub(crate) struct PairArena<X, Y> {
    slots: Vec<Slot<X, Y>>,
    free_head: Option<u32>,
    live: usize,
}

impl<X, Y> PairArena<X, Y> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    /// Stores a pair and returns its slot.
    pub(crate) fn insert(&mut self, x: X, y: Y) -> SlotId {
        self.live += 1;

        if let Some(idx) = self.free_head {
            let slot = &mut self.slots[idx as usize];
            if let Slot::Free { next_free } = *slot {
                self.free_head = next_free;
            }
            *slot = Slot::Occupied { x, y };
            return SlotId(idx);
        }

        assert!(
            self.slots.len() < u32::MAX as usize,
            "pair arena capacity exceeded"
        );
        let idx = self.slots.len() as u32;
        self.slots.push(Slot::Occupied { x, y });
        SlotId(idx)
    }

    /// Frees a slot, handing back the pair it held.
    pub(crate) fn remove(&mut self, id: SlotId) -> Option<(X, Y)> {
        let slot = self.slots.get_mut(id.index())?;
        if matches!(slot, Slot::Free { .. }) {
            return None;
        }

        let old = std::mem::replace(
            slot,
            Slot::Free {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id.0);
        self.live -= 1;

        match old {
            Slot::Occupied { x, y } => Some((x, y)),
            Slot::Free { .. } => None,
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: SlotId) -> Option<(&X, &Y)> {
        match self.slots.get(id.index())? {
            Slot::Occupied { x, y } => Some((x, y)),
            Slot::Free { .. } => None,
        }
    }

    /// Number of live pairs.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    /// Drops every pair and forgets all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }

    /// Live pairs in slot order.
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (SlotId, &X, &Y)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Slot::Occupied { x, y } => Some((SlotId(idx as u32), x, y)),
                Slot::Free { .. } => None,
            })
    }
}

impl<X, Y> Default for PairArena<X, Y> {
    fn default() -> Self {
        Self::new()
    }
}
