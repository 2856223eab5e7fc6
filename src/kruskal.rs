use crate::prelude::*;
use log::{debug, trace};
use std::fmt;

/// The edge heap ran dry before `V - 1` edges were accepted.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Disconnected {
    pub(crate) forest: SpanningTree,
    pub(crate) components: usize,
}

impl fmt::Display for Disconnected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "graph has {} components, spanning forest has {} edges",
            self.components,
            self.forest.len()
        )
    }
}

/// Select edges in ascending weight order, skipping any that would close a
/// cycle, until `V - 1` are accepted.
pub(crate) fn kruskal(
    graph: &Graph,
) -> (Statistics, Result<SpanningTree, Disconnected>) {
    let mut statistics = Statistics::default();
    let edges = graph.edges();
    let mut heap = IndexedHeap::new(edges.len());
    heap.heapify(edges, edges.range());
    statistics.add_inserted(edges.len());

    let mut partition = Disjoint::<Vertex>::new(graph.num_vertices());
    let wanted = graph.num_vertices().saturating_sub(1);
    let mut tree = SpanningTree::default();

    while tree.len() < wanted && !heap.is_empty() {
        let id = heap.remove_min(edges);
        statistics.increment_removed();
        let edge = edges[id];
        let left = partition.find(edge.u);
        let right = partition.find(edge.v);
        if left == right {
            trace!("rejected {}--{}--{}", edge.u, edge.weight, edge.v);
            statistics.increment_rejected();
            continue;
        }
        debug!("accepted {}--{}--{}", edge.u, edge.weight, edge.v);
        statistics.increment_accepted();
        partition.merge(left, right);
        tree.push(edge);
    }

    debug!(
        "accepted {} edges, rejected {}",
        statistics.accepted(),
        statistics.rejected()
    );
    let result = if tree.len() == wanted {
        Ok(tree)
    } else {
        let components = partition.components();
        Err(Disconnected {
            forest: tree,
            components,
        })
    };
    (statistics, result)
}
