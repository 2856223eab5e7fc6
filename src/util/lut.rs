use crate::prelude::*;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Lookup table from ids of `K` to values `V`.
pub(crate) struct LUT<K, V> {
    _phantom: PhantomData<K>,
    block: Block<V>,
}

impl<K, V> LUT<K, V> {
    pub(crate) fn len(&self) -> usize {
        self.block.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.block.is_empty()
    }

    pub(crate) fn range(&self) -> Range<K> {
        self.block.range().transmute()
    }

    pub(crate) fn push(&mut self, value: V) -> Id<K> {
        self.block.push(value).transmute()
    }

    pub(crate) fn pop(&mut self) -> Option<V> {
        self.block.pop()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Id<K>, &V)> + '_ {
        self.block.iter().map(|(id, value)| (id.transmute(), value))
    }
}

impl<K, V: Clone> LUT<K, V> {
    pub(crate) fn filled(len: usize, value: V) -> Self {
        let _phantom = PhantomData;
        let block = Block::filled(len, value);
        Self { _phantom, block }
    }

    pub(crate) fn try_filled(len: usize, value: V) -> Option<Self> {
        let _phantom = PhantomData;
        let block = Block::try_filled(len, value)?;
        Some(Self { _phantom, block })
    }
}

impl<K, V> Default for LUT<K, V> {
    fn default() -> Self {
        let _phantom = PhantomData;
        let block = Block::default();
        Self { _phantom, block }
    }
}

impl<K, V> Index<Id<K>> for LUT<K, V> {
    type Output = V;

    fn index(&self, id: Id<K>) -> &Self::Output {
        &self.block[id.transmute()]
    }
}

impl<K, V> IndexMut<Id<K>> for LUT<K, V> {
    fn index_mut(&mut self, id: Id<K>) -> &mut Self::Output {
        &mut self.block[id.transmute()]
    }
}
