use crate::kruskal::{kruskal, Disconnected};
use crate::options::Algorithm;
use crate::prelude::*;
use crate::prim::{prim, PrimTree};
use crossbeam_utils::thread;
use log::{info, warn};

pub(crate) type PrimRun = (Statistics, PrimTree);
pub(crate) type KruskalRun = (Statistics, Result<SpanningTree, Disconnected>);

pub(crate) struct Solution {
    num_vertices: usize,
    pub(crate) prim: Option<PrimRun>,
    pub(crate) kruskal: Option<KruskalRun>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Spanning(u64),
    Disconnected,
    /// A claimed spanning tree has the wrong size, a cycle or a foreign
    /// vertex.
    NotATree(&'static str),
    Inconsistent { prim: u64, kruskal: u64 },
}

impl Solution {
    fn new(num_vertices: usize) -> Self {
        let prim = None;
        let kruskal = None;
        Self {
            num_vertices,
            prim,
            kruskal,
        }
    }

    pub(crate) fn outcome(&self) -> Outcome {
        let prim = self.prim.as_ref().map(|(_, tree)| tree);
        let kruskal = self.kruskal.as_ref().map(|(_, result)| result);
        if prim.map_or(false, |tree| !tree.is_spanning())
            || kruskal.map_or(false, Result::is_err)
        {
            return Outcome::Disconnected;
        }

        let prim = prim.map(PrimTree::spanning_tree);
        let kruskal = kruskal.and_then(|result| result.as_ref().ok());
        if let Some(tree) = &prim {
            if !tree.is_spanning(self.num_vertices) {
                return Outcome::NotATree("prim");
            }
        }
        if let Some(tree) = kruskal {
            if !tree.is_spanning(self.num_vertices) {
                return Outcome::NotATree("kruskal");
            }
        }

        let prim = prim.as_ref().map(SpanningTree::total_weight);
        let kruskal = kruskal.map(SpanningTree::total_weight);
        match (prim, kruskal) {
            (Some(prim), Some(kruskal)) if prim != kruskal => {
                Outcome::Inconsistent { prim, kruskal }
            }
            (Some(weight), _) | (None, Some(weight)) => {
                Outcome::Spanning(weight)
            }
            (None, None) => Outcome::Spanning(0),
        }
    }
}

/// Run the selected algorithms over `graph`.
///
/// `start` must be a vertex of `graph` if Prim's algorithm runs.
pub(crate) fn solve(
    graph: &Graph,
    algorithm: Algorithm,
    start: Option<Id<Vertex>>,
) -> Solution {
    let run_prim = || {
        let start = some(start);
        info!("running Prim's algorithm from {}", start);
        prim(graph, start)
    };
    let run_kruskal = || {
        info!("running Kruskal's algorithm");
        kruskal(graph)
    };

    let mut solution = Solution::new(graph.num_vertices());
    match algorithm {
        Algorithm::Prim => solution.prim = Some(run_prim()),
        Algorithm::Kruskal => solution.kruskal = Some(run_kruskal()),
        Algorithm::Both => {
            let (prim, kruskal) = thread::scope(|scope| {
                let prim = scope
                    .builder()
                    .name("prim".into())
                    .spawn(|_| run_prim())
                    .expect("failed to spawn prim thread");
                let kruskal = run_kruskal();
                let prim = prim
                    .join()
                    .unwrap_or_else(|_| panic!("prim thread crashed"));
                (prim, kruskal)
            })
            .unwrap_or_else(|_| panic!("thread crashed"));
            solution.prim = Some(prim);
            solution.kruskal = Some(kruskal);
        }
    }

    match solution.outcome() {
        Outcome::Inconsistent { prim, kruskal } => {
            warn!("Prim found weight {}, Kruskal found {}", prim, kruskal)
        }
        Outcome::NotATree(algorithm) => {
            warn!("{} selected edges that do not span the graph", algorithm)
        }
        _ => {}
    }
    solution
}
