use crate::prelude::*;

struct Set<T> {
    parent: Option<Id<T>>,
    rank: u32,
}

impl<T> Clone for Set<T> {
    fn clone(&self) -> Self {
        let parent = self.parent;
        let rank = self.rank;
        Self { parent, rank }
    }
}

impl<T> Copy for Set<T> {}

impl<T> Set<T> {
    fn root() -> Self {
        let parent = None;
        let rank = 0;
        Self { parent, rank }
    }
}

/// Disjoint-set forest over ids `1..=len`.
///
/// A root has no parent. `find` walks parent links all the way up to the
/// root, halving the path as it goes, so that cycle tests stay correct for
/// trees of any depth; `merge` attaches the lower-rank root below the other.
pub(crate) struct Disjoint<T> {
    sets: LUT<T, Set<T>>,
    components: usize,
}

impl<T> Disjoint<T> {
    /// `len` singleton sets.
    pub(crate) fn new(len: usize) -> Self {
        let sets = LUT::filled(len, Set::root());
        let components = len;
        Self { sets, components }
    }

    pub(crate) fn components(&self) -> usize {
        self.components
    }

    pub(crate) fn find(&mut self, mut current: Id<T>) -> Id<T> {
        while let Some(parent) = self.sets[current].parent {
            match self.sets[parent].parent {
                Some(grandparent) => {
                    self.sets[current].parent = Some(grandparent);
                    current = grandparent;
                }
                None => return parent,
            }
        }
        current
    }

    /// Merge two distinct roots.
    pub(crate) fn merge(&mut self, left: Id<T>, right: Id<T>) {
        debug_assert!(left != right, "merging a set with itself");
        debug_assert!(self.sets[left].parent.is_none(), "left is not a root");
        debug_assert!(self.sets[right].parent.is_none(), "right is not a root");
        let left_rank = self.sets[left].rank;
        let right_rank = self.sets[right].rank;
        if left_rank > right_rank {
            self.sets[right].parent = Some(left);
        } else {
            self.sets[left].parent = Some(right);
            if left_rank == right_rank {
                self.sets[right].rank += 1;
            }
        }
        self.components -= 1;
    }

    /// Merge the sets containing `left` and `right`, returning `false` if
    /// they were already one set.
    pub(crate) fn union(&mut self, left: Id<T>, right: Id<T>) -> bool {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return false;
        }
        self.merge(left, right);
        true
    }

    #[cfg(test)]
    pub(crate) fn connected(&mut self, left: Id<T>, right: Id<T>) -> bool {
        self.find(left) == self.find(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Element;

    fn id(index: u32) -> Id<Element> {
        Id::new(index)
    }

    #[test]
    fn singletons_are_their_own_roots() {
        let mut sets = Disjoint::<Element>::new(4);
        assert_eq!(sets.components(), 4);
        for index in 1..=4 {
            assert_eq!(sets.find(id(index)), id(index));
        }
    }

    #[test]
    fn union_reports_whether_it_merged() {
        let mut sets = Disjoint::new(3);
        assert!(sets.union(id(1), id(2)));
        assert!(!sets.union(id(2), id(1)));
        assert!(sets.connected(id(1), id(2)));
        assert!(!sets.connected(id(1), id(3)));
        assert_eq!(sets.components(), 2);
    }

    // A one-hop find returns a "not a root" marker for any vertex two or
    // more links below its root, so two members of the same deep set would
    // look unrelated. Here the chain 1 -> 2 -> 4 has depth two.
    #[test]
    fn find_walks_past_one_hop_to_the_root() {
        let mut sets = Disjoint::new(4);
        sets.merge(id(1), id(2));
        sets.merge(id(3), id(4));
        sets.merge(id(2), id(4));
        assert_eq!(sets.find(id(1)), id(4));
        assert_eq!(sets.find(id(3)), id(4));
        assert!(sets.connected(id(1), id(3)));
        assert_eq!(sets.components(), 1);
    }

    #[test]
    fn merge_by_rank_keeps_taller_root() {
        let mut sets = Disjoint::new(3);
        sets.merge(id(1), id(2));
        sets.merge(id(2), id(3));
        assert_eq!(sets.find(id(3)), id(2));
    }

    #[test]
    fn empty_forest() {
        let sets = Disjoint::<Element>::new(0);
        assert_eq!(sets.components(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    struct Element;

    fn closure(n: usize, pairs: &[(u32, u32)]) -> Vec<Vec<bool>> {
        let mut reach = vec![vec![false; n + 1]; n + 1];
        for (v, row) in reach.iter_mut().enumerate() {
            row[v] = true;
        }
        for &(x, y) in pairs {
            reach[x as usize][y as usize] = true;
            reach[y as usize][x as usize] = true;
        }
        for k in 1..=n {
            for i in 1..=n {
                for j in 1..=n {
                    if reach[i][k] && reach[k][j] {
                        reach[i][j] = true;
                    }
                }
            }
        }
        reach
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn connected_iff_linked_by_union_history(
            n in 1_usize..16,
            ops in proptest::collection::vec((1_u32..16, 1_u32..16), 0..40),
        ) {
            let pairs: Vec<(u32, u32)> = ops
                .into_iter()
                .filter(|&(x, y)| x as usize <= n && y as usize <= n)
                .collect();
            let mut sets = Disjoint::<Element>::new(n);
            let mut merges = 0;
            for &(x, y) in &pairs {
                if sets.union(Id::new(x), Id::new(y)) {
                    merges += 1;
                }
            }
            prop_assert_eq!(sets.components(), n - merges);

            let reach = closure(n, &pairs);
            for x in 1..=n as u32 {
                for y in 1..=n as u32 {
                    prop_assert_eq!(
                        sets.connected(Id::new(x), Id::new(y)),
                        reach[x as usize][y as usize]
                    );
                }
            }
        }
    }
}
