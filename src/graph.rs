use crate::prelude::*;
use std::fmt;

pub(crate) type Weight = u32;

pub(crate) struct Vertex;

/// Undirected weighted edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Edge {
    pub(crate) u: Id<Vertex>,
    pub(crate) v: Id<Vertex>,
    pub(crate) weight: Weight,
}

impl Edge {
    pub(crate) fn new(u: Id<Vertex>, v: Id<Vertex>, weight: Weight) -> Self {
        Self { u, v, weight }
    }

    /// Endpoints in ascending order, for comparing undirected edges.
    pub(crate) fn endpoints(&self) -> (Id<Vertex>, Id<Vertex>) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Neighbour {
    pub(crate) vertex: Id<Vertex>,
    pub(crate) weight: Weight,
}

impl Keys<Edge> for Block<Edge> {
    type Key = Weight;

    fn key(&self, edge: Id<Edge>) -> Weight {
        self[edge].weight
    }
}

/// Graph store over vertices `1..=V`.
///
/// Each edge is kept once in the edge list and twice in the adjacency
/// lists, once per endpoint. Neighbours are listed in edge insertion order.
#[derive(Default)]
pub(crate) struct Graph {
    adjacency: LUT<Vertex, Vec<Neighbour>>,
    edges: Block<Edge>,
}

/// Largest vertex count a graph may be built with.
pub(crate) const MAX_VERTICES: u32 = 1 << 24;

impl Graph {
    /// An edgeless graph, or `None` if `num_vertices` exceeds
    /// `MAX_VERTICES` or the adjacency lists cannot be allocated.
    pub(crate) fn try_new(num_vertices: u32) -> Option<Self> {
        if num_vertices > MAX_VERTICES {
            return None;
        }
        let adjacency = LUT::try_filled(num_vertices as usize, vec![])?;
        let edges = Block::default();
        Some(Self { adjacency, edges })
    }

    pub(crate) fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn vertices(&self) -> Range<Vertex> {
        self.adjacency.range()
    }

    pub(crate) fn contains(&self, vertex: Id<Vertex>) -> bool {
        self.vertices().contains(vertex)
    }

    pub(crate) fn edges(&self) -> &Block<Edge> {
        &self.edges
    }

    pub(crate) fn neighbours(&self, vertex: Id<Vertex>) -> &[Neighbour] {
        &self.adjacency[vertex]
    }

    pub(crate) fn connect(&mut self, edge: Edge) -> Id<Edge> {
        assert!(self.contains(edge.u), "no such vertex {}", edge.u);
        assert!(self.contains(edge.v), "no such vertex {}", edge.v);
        let weight = edge.weight;
        self.adjacency[edge.u].push(Neighbour {
            vertex: edge.v,
            weight,
        });
        self.adjacency[edge.v].push(Neighbour {
            vertex: edge.u,
            weight,
        });
        self.edges.push(edge)
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.num_vertices())
            .field("edges", &self.num_edges())
            .finish()
    }
}

#[cfg(test)]
impl Graph {
    pub(crate) fn new(num_vertices: u32) -> Self {
        Self::try_new(num_vertices).expect("vertex count within bounds")
    }

    pub(crate) fn from_edges(
        num_vertices: u32,
        edges: &[(u32, u32, Weight)],
    ) -> Self {
        let mut graph = Self::new(num_vertices);
        for &(u, v, weight) in edges {
            graph.connect(Edge::new(Id::new(u), Id::new(v), weight));
        }
        graph
    }

    /// Five vertices, six edges, minimum spanning weight 13.
    pub(crate) fn example() -> Self {
        Self::from_edges(
            5,
            &[(1, 2, 2), (1, 3, 3), (2, 3, 1), (2, 4, 4), (3, 4, 5), (4, 5, 6)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_edge_appears_from_both_ends() {
        let graph = Graph::example();
        assert_eq!(graph.num_vertices(), 5);
        assert_eq!(graph.num_edges(), 6);

        let from_two: Vec<(u32, Weight)> = graph
            .neighbours(Id::new(2))
            .iter()
            .map(|n| (n.vertex.index(), n.weight))
            .collect();
        assert_eq!(from_two, vec![(1, 2), (3, 1), (4, 4)]);

        let from_five = graph.neighbours(Id::new(5));
        assert_eq!(from_five.len(), 1);
        assert_eq!(from_five[0].vertex, Id::new(4));
    }

    #[test]
    fn edge_list_keeps_input_order() {
        let graph = Graph::example();
        let first = graph.edges()[Id::new(1)];
        assert_eq!(first, Edge::new(Id::new(1), Id::new(2), 2));
        assert_eq!(graph.edges().key(Id::new(3)), 1);
    }

    #[test]
    fn endpoints_are_normalised() {
        let edge = Edge::new(Id::new(4), Id::new(2), 7);
        assert_eq!(edge.endpoints(), (Id::new(2), Id::new(4)));
    }

    #[test]
    fn vertex_range() {
        let graph = Graph::new(3);
        assert!(graph.contains(Id::new(3)));
        assert!(!graph.contains(Id::new(4)));
        assert_eq!(graph.vertices().into_iter().len(), 3);
        assert!(Graph::default().vertices().into_iter().next().is_none());
    }

    #[test]
    fn vertex_count_is_bounded() {
        assert!(Graph::try_new(MAX_VERTICES + 1).is_none());
        assert!(Graph::try_new(u32::MAX).is_none());
        assert_eq!(Graph::try_new(0).map(|g| g.num_vertices()), Some(0));
    }

    #[test]
    #[should_panic(expected = "no such vertex")]
    fn connect_checks_vertices() {
        let mut graph = Graph::new(2);
        graph.connect(Edge::new(Id::new(1), Id::new(3), 1));
    }
}
