use crate::options::Labels;
use crate::prelude::*;
use crate::prim::PrimTree;
use crate::traverse::{BreadthFirst, DepthFirst};
use std::fmt;

/// A vertex as the user sees it, `-` for none.
pub(crate) struct Name(pub(crate) Labels, pub(crate) Option<Id<Vertex>>);

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Name(labels, vertex) = self;
        match (labels, vertex) {
            (_, None) => write!(f, "-"),
            (Labels::Letters, Some(vertex)) if vertex.index() <= 26 => {
                write!(f, "{}", (b'A' + vertex.index() as u8 - 1) as char)
            }
            (_, Some(vertex)) => write!(f, "{}", vertex),
        }
    }
}

/// A traversal step: the start vertex, or a vertex and the tree edge that
/// reached it.
struct Visit(Labels, Option<Id<Vertex>>, Id<Vertex>);

impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Visit(labels, parent, vertex) = *self;
        let name = Name(labels, Some(vertex));
        match parent {
            None => write!(f, "start {}", name),
            Some(parent) => {
                let parent = Name(labels, Some(parent));
                write!(f, "{} along edge {}--{}", name, parent, name)
            }
        }
    }
}

pub(crate) struct PrintAdjacency<'a>(pub(crate) Labels, pub(crate) &'a Graph);

impl fmt::Display for PrintAdjacency<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let PrintAdjacency(labels, graph) = self;
        for vertex in graph.vertices() {
            write!(f, "adj[{}] ->", Name(*labels, Some(vertex)))?;
            for neighbour in graph.neighbours(vertex) {
                let name = Name(*labels, Some(neighbour.vertex));
                write!(f, " |{} | {}| ->", name, neighbour.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub(crate) struct PrintDepthFirst<'a>(
    pub(crate) Labels,
    pub(crate) &'a DepthFirst,
);

impl fmt::Display for PrintDepthFirst<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let PrintDepthFirst(labels, search) = self;
        for vertex in search.order().iter().copied() {
            let visit = Visit(*labels, search.parent(vertex), vertex);
            write!(f, "DF visiting {}", visit)?;
            writeln!(
                f,
                ", discovered {}, finished {}",
                search.discovered(vertex).unwrap_or_default(),
                search.finished(vertex).unwrap_or_default(),
            )?;
        }
        Ok(())
    }
}

pub(crate) struct PrintBreadthFirst<'a>(
    pub(crate) Labels,
    pub(crate) &'a BreadthFirst,
);

impl fmt::Display for PrintBreadthFirst<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let PrintBreadthFirst(labels, search) = self;
        for vertex in search.order().iter().copied() {
            let visit = Visit(*labels, search.parent(vertex), vertex);
            write!(f, "BF visiting {}", visit)?;
            let level = search.level(vertex).unwrap_or_default();
            writeln!(f, ", level {}", level)?;
        }
        Ok(())
    }
}

/// The parent array, one line per vertex.
pub(crate) struct PrintParents<'a>(
    pub(crate) Labels,
    pub(crate) &'a PrimTree,
);

impl fmt::Display for PrintParents<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let PrintParents(labels, tree) = self;
        for (vertex, parent) in tree.parents() {
            let vertex = Name(*labels, Some(vertex));
            writeln!(f, "{} -> {}", vertex, Name(*labels, parent))?;
        }
        Ok(())
    }
}

pub(crate) struct PrintEdges<'a>(pub(crate) Labels, pub(crate) &'a [Edge]);

impl fmt::Display for PrintEdges<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let PrintEdges(labels, edges) = self;
        for edge in edges.iter() {
            writeln!(
                f,
                "Edge {}--{}--{}",
                Name(*labels, Some(edge.u)),
                edge.weight,
                Name(*labels, Some(edge.v)),
            )?;
        }
        Ok(())
    }
}
