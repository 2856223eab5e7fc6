use crate::prelude::*;
use std::ops::{Index, IndexMut};

pub(crate) struct Block<T> {
    items: Vec<T>,
}

impl<T> Block<T> {
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn range(&self) -> Range<T> {
        Range::new(Id::new(1), Id::new(self.items.len() as u32 + 1))
    }

    pub(crate) fn push(&mut self, item: T) -> Id<T> {
        self.items.push(item);
        Id::new(self.items.len() as u32)
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Id<T>, &T)> + '_ {
        self.range().into_iter().zip(self.items.iter())
    }
}

impl<T: Clone> Block<T> {
    pub(crate) fn filled(len: usize, value: T) -> Self {
        let items = vec![value; len];
        Self { items }
    }

    /// `filled`, or `None` if the memory cannot be reserved.
    pub(crate) fn try_filled(len: usize, value: T) -> Option<Self> {
        let mut items = vec![];
        items.try_reserve_exact(len).ok()?;
        items.resize(len, value);
        Some(Self { items })
    }
}

impl<T> Default for Block<T> {
    fn default() -> Self {
        let items = vec![];
        Self { items }
    }
}

impl<T> Index<Id<T>> for Block<T> {
    type Output = T;

    fn index(&self, id: Id<T>) -> &Self::Output {
        &self.items[id.as_usize() - 1]
    }
}

impl<T> IndexMut<Id<T>> for Block<T> {
    fn index_mut(&mut self, id: Id<T>) -> &mut Self::Output {
        &mut self.items[id.as_usize() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one() {
        let mut block = Block::default();
        let first = block.push('a');
        let second = block.push('b');
        assert_eq!(first.index(), 1);
        assert_eq!(second.index(), 2);
        assert_eq!(block[second], 'b');
        assert_eq!(block.pop(), Some('b'));
        assert_eq!(block.len(), 1);
    }

    #[test]
    fn empty_block() {
        let mut block = Block::<u8>::default();
        assert!(block.is_empty());
        assert!(block.pop().is_none());
        assert_eq!(block.range().into_iter().count(), 0);
    }

    #[test]
    fn iter_pairs_ids_with_items() {
        let block = Block::filled(3, 9u8);
        let ids: Vec<u32> = block.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(block.iter().all(|(_, item)| *item == 9));
    }

    #[test]
    fn try_filled_reports_impossible_reservations() {
        let block = Block::try_filled(2, 'x').expect("two chars fit");
        assert_eq!(block.len(), 2);
        assert!(Block::try_filled(usize::MAX, 0u64).is_none());
    }
}
