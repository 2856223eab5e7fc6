use crate::prelude::*;
use std::collections::VecDeque;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Colour {
    White,
    Grey,
    Black,
}

/// Depth-first search forest rooted at one start vertex, with discovery
/// and finishing times counted from 1.
pub(crate) struct DepthFirst {
    parent: LUT<Vertex, Option<Id<Vertex>>>,
    discovered: LUT<Vertex, Option<u32>>,
    finished: LUT<Vertex, Option<u32>>,
    order: Vec<Id<Vertex>>,
}

impl DepthFirst {
    pub(crate) fn parent(&self, vertex: Id<Vertex>) -> Option<Id<Vertex>> {
        self.parent[vertex]
    }

    pub(crate) fn discovered(&self, vertex: Id<Vertex>) -> Option<u32> {
        self.discovered[vertex]
    }

    pub(crate) fn finished(&self, vertex: Id<Vertex>) -> Option<u32> {
        self.finished[vertex]
    }

    /// Vertices in discovery order.
    pub(crate) fn order(&self) -> &[Id<Vertex>] {
        &self.order
    }
}

/// Breadth-first search tree from one start vertex.
pub(crate) struct BreadthFirst {
    parent: LUT<Vertex, Option<Id<Vertex>>>,
    level: LUT<Vertex, Option<u32>>,
    order: Vec<Id<Vertex>>,
}

impl BreadthFirst {
    pub(crate) fn parent(&self, vertex: Id<Vertex>) -> Option<Id<Vertex>> {
        self.parent[vertex]
    }

    /// Number of edges on the shortest path from the start vertex.
    pub(crate) fn level(&self, vertex: Id<Vertex>) -> Option<u32> {
        self.level[vertex]
    }

    /// Vertices in the order they left the queue.
    pub(crate) fn order(&self) -> &[Id<Vertex>] {
        &self.order
    }
}

pub(crate) fn depth_first(graph: &Graph, start: Id<Vertex>) -> DepthFirst {
    assert!(graph.contains(start), "no such start vertex {}", start);
    let num_vertices = graph.num_vertices();
    let mut colour = LUT::<Vertex, Colour>::filled(num_vertices, Colour::White);
    let mut search = DepthFirst {
        parent: LUT::filled(num_vertices, None),
        discovered: LUT::filled(num_vertices, None),
        finished: LUT::filled(num_vertices, None),
        order: vec![],
    };
    let mut time = 1;
    let mut stack = vec![(start, 0)];
    colour[start] = Colour::Grey;
    search.discovered[start] = Some(time);
    search.order.push(start);

    // each entry holds a grey vertex and the next adjacency slot to scan
    while let Some((vertex, next)) = stack.pop() {
        if let Some(neighbour) = graph.neighbours(vertex).get(next) {
            stack.push((vertex, next + 1));
            let child = neighbour.vertex;
            if colour[child] == Colour::White {
                time += 1;
                colour[child] = Colour::Grey;
                search.parent[child] = Some(vertex);
                search.discovered[child] = Some(time);
                search.order.push(child);
                stack.push((child, 0));
            }
        } else {
            debug_assert!(colour[vertex] == Colour::Grey);
            time += 1;
            colour[vertex] = Colour::Black;
            search.finished[vertex] = Some(time);
        }
    }
    search
}

pub(crate) fn breadth_first(graph: &Graph, start: Id<Vertex>) -> BreadthFirst {
    assert!(graph.contains(start), "no such start vertex {}", start);
    let num_vertices = graph.num_vertices();
    let mut colour = LUT::<Vertex, Colour>::filled(num_vertices, Colour::White);
    let mut search = BreadthFirst {
        parent: LUT::filled(num_vertices, None),
        level: LUT::filled(num_vertices, None),
        order: vec![],
    };
    let mut queue = VecDeque::new();
    colour[start] = Colour::Grey;
    search.level[start] = Some(0);
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        search.order.push(vertex);
        let level = search.level[vertex].map(|level| level + 1);
        for neighbour in graph.neighbours(vertex) {
            let child = neighbour.vertex;
            if colour[child] == Colour::White {
                colour[child] = Colour::Grey;
                search.parent[child] = Some(vertex);
                search.level[child] = level;
                queue.push_back(child);
            }
        }
        debug_assert!(colour[vertex] == Colour::Grey);
        colour[vertex] = Colour::Black;
    }
    search
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(vertices: &[Id<Vertex>]) -> Vec<u32> {
        vertices.iter().map(|vertex| vertex.index()).collect()
    }

    #[test]
    fn depth_first_on_example() {
        let graph = Graph::example();
        let search = depth_first(&graph, Id::new(1));
        assert_eq!(indices(search.order()), vec![1, 2, 3, 4, 5]);
        let parents: Vec<Option<u32>> = graph
            .vertices()
            .into_iter()
            .map(|v| search.parent(v).map(Id::index))
            .collect();
        assert_eq!(parents, vec![None, Some(1), Some(2), Some(3), Some(4)]);
        let times: Vec<(Option<u32>, Option<u32>)> = graph
            .vertices()
            .into_iter()
            .map(|v| (search.discovered(v), search.finished(v)))
            .collect();
        assert_eq!(
            times,
            vec![
                (Some(1), Some(10)),
                (Some(2), Some(9)),
                (Some(3), Some(8)),
                (Some(4), Some(7)),
                (Some(5), Some(6)),
            ]
        );
    }

    #[test]
    fn depth_first_backtracks_in_adjacency_order() {
        let graph = Graph::from_edges(4, &[(1, 2, 0), (1, 3, 0), (2, 4, 0)]);
        let search = depth_first(&graph, Id::new(1));
        assert_eq!(indices(search.order()), vec![1, 2, 4, 3]);
        assert_eq!(search.discovered(Id::new(3)), Some(6));
        assert_eq!(search.finished(Id::new(2)), Some(5));
    }

    #[test]
    fn depth_first_handles_long_paths() {
        let n = 100_000;
        let edges: Vec<(u32, u32, Weight)> =
            (1..n).map(|v| (v, v + 1, 1)).collect();
        let graph = Graph::from_edges(n, &edges);
        let search = depth_first(&graph, Id::new(1));
        assert_eq!(search.order().len(), n as usize);
        assert_eq!(search.finished(Id::new(1)), Some(2 * n));
    }

    #[test]
    fn breadth_first_on_example() {
        let graph = Graph::example();
        let search = breadth_first(&graph, Id::new(1));
        assert_eq!(indices(search.order()), vec![1, 2, 3, 4, 5]);
        let summary: Vec<(Option<u32>, Option<u32>)> = graph
            .vertices()
            .into_iter()
            .map(|v| (search.parent(v).map(Id::index), search.level(v)))
            .collect();
        assert_eq!(
            summary,
            vec![
                (None, Some(0)),
                (Some(1), Some(1)),
                (Some(1), Some(1)),
                (Some(2), Some(2)),
                (Some(4), Some(3)),
            ]
        );
    }

    #[test]
    fn unreachable_vertices_are_untouched() {
        let graph = Graph::from_edges(4, &[(1, 2, 1), (3, 4, 1)]);
        let depth = depth_first(&graph, Id::new(2));
        let breadth = breadth_first(&graph, Id::new(2));
        assert_eq!(indices(depth.order()), vec![2, 1]);
        assert_eq!(indices(breadth.order()), vec![2, 1]);
        for vertex in [3, 4].iter().map(|&v| Id::new(v)) {
            assert_eq!(depth.discovered(vertex), None);
            assert_eq!(depth.finished(vertex), None);
            assert_eq!(depth.parent(vertex), None);
            assert_eq!(breadth.level(vertex), None);
            assert_eq!(breadth.parent(vertex), None);
        }
    }

    #[test]
    fn repeated_traversals_are_independent() {
        let graph = Graph::example();
        let first = depth_first(&graph, Id::new(5));
        let second = depth_first(&graph, Id::new(5));
        assert_eq!(first.order(), second.order());
        assert_eq!(first.discovered(Id::new(5)), Some(1));
    }
}
