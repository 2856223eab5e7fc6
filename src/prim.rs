use crate::prelude::*;
use log::{debug, trace};

/// Key of a vertex no edge has reached yet.
pub(crate) const INFINITY: u64 = u64::MAX;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Unvisited,
    Frontier,
    Settled,
}

/// Prim's tree as a parent array.
///
/// Vertices outside the start vertex's component keep no parent. `order`
/// lists the settled vertices in the order they left the heap.
pub(crate) struct PrimTree {
    parent: LUT<Vertex, Option<Id<Vertex>>>,
    keys: LUT<Vertex, u64>,
    order: Vec<Id<Vertex>>,
    total_weight: u64,
}

impl PrimTree {
    pub(crate) fn parent(&self, vertex: Id<Vertex>) -> Option<Id<Vertex>> {
        self.parent[vertex]
    }

    pub(crate) fn parents(
        &self,
    ) -> impl Iterator<Item = (Id<Vertex>, Option<Id<Vertex>>)> + '_ {
        self.parent.iter().map(|(vertex, parent)| (vertex, *parent))
    }

    pub(crate) fn reached(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub(crate) fn is_spanning(&self) -> bool {
        self.reached() == self.parent.len()
    }

    /// The attaching edges of every settled vertex but the start, in
    /// settling order.
    pub(crate) fn spanning_tree(&self) -> SpanningTree {
        let mut tree = SpanningTree::default();
        for vertex in self.order.iter().copied() {
            if let Some(parent) = self.parent(vertex) {
                let weight = self.keys[vertex] as Weight;
                tree.push(Edge::new(parent, vertex, weight));
            }
        }
        tree
    }
}

/// Grow a minimum spanning tree of the component containing `start`.
pub(crate) fn prim(graph: &Graph, start: Id<Vertex>) -> (Statistics, PrimTree) {
    assert!(graph.contains(start), "no such start vertex {}", start);
    let num_vertices = graph.num_vertices();
    let mut statistics = Statistics::default();
    let mut keys = LUT::filled(num_vertices, INFINITY);
    let mut parent = LUT::filled(num_vertices, None);
    let mut state =
        LUT::<Vertex, State>::filled(num_vertices, State::Unvisited);
    let mut order = Vec::with_capacity(num_vertices);
    let mut total_weight = 0;
    let mut heap = IndexedHeap::new(num_vertices);

    keys[start] = 0;
    state[start] = State::Frontier;
    heap.insert(&keys, start);
    statistics.increment_inserted();

    while !heap.is_empty() {
        let vertex = heap.remove_min(&keys);
        statistics.increment_removed();
        state[vertex] = State::Settled;
        total_weight += keys[vertex];
        order.push(vertex);
        debug!("settled {} at weight {}", vertex, keys[vertex]);

        for neighbour in graph.neighbours(vertex) {
            let next = neighbour.vertex;
            let weight = neighbour.weight as u64;
            if state[next] == State::Settled || weight >= keys[next] {
                continue;
            }
            trace!("{} improves {} to {}", vertex, next, weight);
            keys[next] = weight;
            parent[next] = Some(vertex);
            if state[next] == State::Frontier {
                heap.decrease_key(&keys, next);
                statistics.increment_decreased();
            } else {
                state[next] = State::Frontier;
                heap.insert(&keys, next);
                statistics.increment_inserted();
            }
        }
    }

    debug!("settled {} of {} vertices", statistics.removed(), num_vertices);
    let tree = PrimTree {
        parent,
        keys,
        order,
        total_weight,
    };
    (statistics, tree)
}
