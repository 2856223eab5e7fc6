use crate::util::unreachable::non_zero;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::NonZeroU32;

/// 1-based typed index.
///
/// Ids start at 1 so that `Option<Id<T>>` is the same size as `Id<T>` and
/// stands in for a "none" sentinel.
pub(crate) struct Id<T> {
    id: NonZeroU32,
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub(crate) fn new(id: u32) -> Self {
        Self::wrap(non_zero(id))
    }

    pub(crate) fn checked(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self::wrap)
    }

    fn wrap(id: NonZeroU32) -> Self {
        let _phantom = PhantomData;
        Self { id, _phantom }
    }

    pub(crate) fn index(self) -> u32 {
        self.id.get()
    }

    pub(crate) fn as_usize(self) -> usize {
        self.id.get() as usize
    }

    pub(crate) fn successor(self) -> Self {
        Self::new(self.index() + 1)
    }

    pub(crate) fn transmute<S>(self) -> Id<S> {
        Id::wrap(self.id)
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::wrap(self.id)
    }
}

impl<T> Copy for Id<T> {}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "id:{}", self.id)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, hash: &mut H) {
        self.id.hash(hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn zero_is_not_an_id() {
        assert!(Id::<Marker>::checked(0).is_none());
        assert_eq!(Id::<Marker>::checked(7).map(Id::index), Some(7));
    }

    #[test]
    fn optional_id_is_free() {
        assert_eq!(
            std::mem::size_of::<Option<Id<Marker>>>(),
            std::mem::size_of::<Id<Marker>>()
        );
    }

    #[test]
    fn successor_and_order() {
        let first = Id::<Marker>::new(1);
        let second = first.successor();
        assert_eq!(second.index(), 2);
        assert!(first < second);
        assert_eq!(second.transmute::<u8>().as_usize(), 2);
    }
}
