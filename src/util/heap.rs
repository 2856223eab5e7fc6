use crate::prelude::*;

/// Priority lookup for heap handles, owned by the caller.
///
/// The heap never stores keys itself: a caller may lower the key of a
/// queued handle and then restore heap order with
/// [`IndexedHeap::decrease_key`].
pub(crate) trait Keys<T> {
    type Key: Ord;

    fn key(&self, handle: Id<T>) -> Self::Key;
}

impl<T, K: Ord + Copy> Keys<T> for LUT<T, K> {
    type Key = K;

    fn key(&self, handle: Id<T>) -> K {
        self[handle]
    }
}

pub(crate) struct Slot;

/// Binary min-heap of handles with a handle -> slot index.
///
/// Slots are 1-based: the parent of slot `k` is `k / 2` and its children
/// are `2k` and `2k + 1`. For every occupied slot, `positions` maps the
/// handle stored there back to the slot; absent handles map to `None`.
pub(crate) struct IndexedHeap<T> {
    slots: LUT<Slot, Id<T>>,
    positions: LUT<T, Option<Id<Slot>>>,
}

impl<T> IndexedHeap<T> {
    /// An empty heap able to hold handles `1..=universe`.
    pub(crate) fn new(universe: usize) -> Self {
        let slots = LUT::default();
        let positions = LUT::filled(universe, None);
        Self { slots, positions }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn contains(&self, handle: Id<T>) -> bool {
        self.positions[handle].is_some()
    }

    pub(crate) fn insert<K: Keys<T>>(&mut self, keys: &K, handle: Id<T>) {
        assert!(!self.contains(handle), "{:?} is already queued", handle);
        let slot = self.slots.push(handle);
        self.positions[handle] = Some(slot);
        self.sift_up(keys, slot);
    }

    /// Restore heap order after the caller lowered the key of `handle`.
    pub(crate) fn decrease_key<K: Keys<T>>(&mut self, keys: &K, handle: Id<T>) {
        let slot = match self.positions[handle] {
            Some(slot) => slot,
            None => panic!("{:?} is not queued", handle),
        };
        self.sift_up(keys, slot);
    }

    pub(crate) fn remove_min<K: Keys<T>>(&mut self, keys: &K) -> Id<T> {
        assert!(!self.is_empty(), "remove_min on an empty heap");
        let root = Id::new(1);
        let min = self.slots[root];
        self.positions[min] = None;

        let last = some(self.slots.pop());
        if !self.is_empty() {
            self.place(root, last);
            self.sift_down(keys, root);
        }
        min
    }

    /// Fill an empty heap with `handles` and order it bottom-up in linear
    /// time.
    pub(crate) fn heapify<K: Keys<T>, I: IntoIterator<Item = Id<T>>>(
        &mut self,
        keys: &K,
        handles: I,
    ) {
        assert!(self.is_empty(), "heapify into a non-empty heap");
        for handle in handles {
            assert!(!self.contains(handle), "{:?} is already queued", handle);
            let slot = self.slots.push(handle);
            self.positions[handle] = Some(slot);
        }
        let internal = self.len() as u32 / 2;
        for slot in (1..=internal).rev() {
            self.sift_down(keys, Id::new(slot));
        }
    }

    fn place(&mut self, slot: Id<Slot>, handle: Id<T>) {
        self.slots[slot] = handle;
        self.positions[handle] = Some(slot);
    }

    fn sift_up<K: Keys<T>>(&mut self, keys: &K, mut slot: Id<Slot>) {
        let handle = self.slots[slot];
        let key = keys.key(handle);
        while slot.index() > 1 {
            let parent = Id::new(slot.index() / 2);
            let above = self.slots[parent];
            if key >= keys.key(above) {
                break;
            }
            self.place(slot, above);
            slot = parent;
        }
        self.place(slot, handle);
    }

    fn sift_down<K: Keys<T>>(&mut self, keys: &K, mut slot: Id<Slot>) {
        let handle = self.slots[slot];
        let key = keys.key(handle);
        let len = self.len() as u32;
        loop {
            let left = slot.index() * 2;
            if left > len {
                break;
            }
            let mut child = Id::new(left);
            if left < len {
                let right = child.successor();
                if keys.key(self.slots[right]) < keys.key(self.slots[child]) {
                    child = right;
                }
            }
            let below = self.slots[child];
            if keys.key(below) >= key {
                break;
            }
            self.place(slot, below);
            slot = child;
        }
        self.place(slot, handle);
    }

    #[cfg(test)]
    pub(crate) fn check<K: Keys<T>>(&self, keys: &K) {
        for (slot, handle) in self.slots.iter() {
            assert_eq!(self.positions[*handle], Some(slot));
            if slot.index() > 1 {
                let parent = self.slots[Id::new(slot.index() / 2)];
                assert!(keys.key(*handle) >= keys.key(parent));
            }
        }
        let queued = self.positions.iter().filter(|(_, p)| p.is_some());
        assert_eq!(queued.count(), self.len());
    }
}
