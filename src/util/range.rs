use crate::prelude::*;

/// Half-open range of ids.
pub(crate) struct Range<T> {
    start: Id<T>,
    stop: Id<T>,
}

impl<T> Range<T> {
    pub(crate) fn new(start: Id<T>, stop: Id<T>) -> Self {
        Self { start, stop }
    }

    pub(crate) fn contains(&self, id: Id<T>) -> bool {
        self.start <= id && id < self.stop
    }

    pub(crate) fn transmute<S>(self) -> Range<S> {
        let start = self.start.transmute();
        let stop = self.stop.transmute();
        Range { start, stop }
    }
}

impl<T> Clone for Range<T> {
    fn clone(&self) -> Self {
        let start = self.start;
        let stop = self.stop;
        Self { start, stop }
    }
}

impl<T> Copy for Range<T> {}

impl<T> IntoIterator for Range<T> {
    type Item = Id<T>;
    type IntoIter = RangeIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let start = self.start;
        let stop = self.stop;
        RangeIterator { start, stop }
    }
}

pub(crate) struct RangeIterator<T> {
    start: Id<T>,
    stop: Id<T>,
}

impl<T> Iterator for RangeIterator<T> {
    type Item = Id<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.stop {
            return None;
        }

        let result = Some(self.start);
        self.start = self.start.successor();
        result
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = (self.stop.index() - self.start.index()) as usize;
        (size, Some(size))
    }
}

impl<T> DoubleEndedIterator for RangeIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.stop {
            return None;
        }

        self.stop = Id::new(self.stop.index() - 1);
        Some(self.stop)
    }
}

impl<T> ExactSizeIterator for RangeIterator<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_both_ways() {
        let range = Range::<u8>::new(Id::new(2), Id::new(5));
        assert_eq!(range.into_iter().len(), 3);
        let forward: Vec<u32> = range.into_iter().map(Id::index).collect();
        let backward: Vec<u32> =
            range.into_iter().rev().map(Id::index).collect();
        assert_eq!(forward, vec![2, 3, 4]);
        assert_eq!(backward, vec![4, 3, 2]);
    }

    #[test]
    fn contains_is_half_open() {
        let range = Range::<u8>::new(Id::new(1), Id::new(3));
        assert!(range.contains(Id::new(1)));
        assert!(range.contains(Id::new(2)));
        assert!(!range.contains(Id::new(3)));
    }
}
