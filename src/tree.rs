use crate::prelude::*;

/// Edges of a spanning tree, or of a spanning forest, in the order they
/// were selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SpanningTree {
    edges: Vec<Edge>,
    total_weight: u64,
}

impl SpanningTree {
    pub(crate) fn push(&mut self, edge: Edge) {
        self.total_weight += edge.weight as u64;
        self.edges.push(edge);
    }

    pub(crate) fn len(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Whether the edges form a tree over all of `1..=num_vertices`: there
    /// are exactly `V - 1` of them and none closes a cycle.
    pub(crate) fn is_spanning(&self, num_vertices: usize) -> bool {
        if self.edges.len() != num_vertices.saturating_sub(1) {
            return false;
        }
        let mut sets = Disjoint::<Vertex>::new(num_vertices);
        let range = Range::new(Id::new(1), Id::new(num_vertices as u32 + 1));
        self.edges.iter().all(|edge| {
            range.contains(edge.u)
                && range.contains(edge.v)
                && sets.union(edge.u, edge.v)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(edges: &[(u32, u32, Weight)]) -> SpanningTree {
        let mut tree = SpanningTree::default();
        for &(u, v, weight) in edges {
            tree.push(Edge::new(Id::new(u), Id::new(v), weight));
        }
        tree
    }

    #[test]
    fn path_is_spanning() {
        let tree = tree(&[(1, 2, 3), (2, 3, 4)]);
        assert_eq!(tree.total_weight(), 7);
        assert_eq!(tree.len(), 2);
        assert!(tree.is_spanning(3));
        assert!(!tree.is_spanning(4));
    }

    #[test]
    fn cycle_is_not_spanning() {
        let tree = tree(&[(1, 2, 1), (2, 3, 1), (3, 1, 1)]);
        assert!(!tree.is_spanning(4));
    }

    #[test]
    fn right_count_with_a_cycle_is_not_spanning() {
        let tree = tree(&[(1, 2, 1), (2, 1, 1), (3, 4, 1)]);
        assert!(!tree.is_spanning(4));
    }

    #[test]
    fn out_of_range_endpoint_is_not_spanning() {
        let tree = tree(&[(1, 5, 1)]);
        assert!(!tree.is_spanning(2));
    }

    #[test]
    fn trivial_graphs() {
        let empty = SpanningTree::default();
        assert!(empty.is_spanning(0));
        assert!(empty.is_spanning(1));
        assert!(!empty.is_spanning(2));
        assert_eq!(empty.total_weight(), 0);
    }
}
