mod graph;
mod input;
mod kruskal;
mod options;
mod output;
mod prelude;
mod prim;
mod solve;
mod statistics;
mod traverse;
mod tree;
mod util;

use crate::options::{Algorithm, Options};
use crate::output::print::*;
use crate::output::record::PrintStatistics;
use crate::output::status::Status;
use crate::prelude::*;
use crate::solve::{solve, Outcome};

fn main() {
    let options = Options::parse();
    output::log::start_logging(options.log_level());

    let graph = match input::load_graph(options.path.as_deref()) {
        Ok(graph) => graph,
        Err(error) => {
            println!("% {}", error);
            if error.is_os_error() {
                Status::OSError.report()
            } else {
                Status::InputError.report()
            }
        }
    };
    let labels = options.labels.fit(graph.num_vertices());

    let needs_start =
        options.algorithm != Algorithm::Kruskal || options.dfs || options.bfs;
    let start =
        Id::checked(options.start).filter(|start| graph.contains(*start));
    if needs_start && start.is_none() {
        println!(
            "% start vertex {} is not one of the {} vertices",
            options.start,
            graph.num_vertices()
        );
        Status::InputError.report()
    }

    if options.display {
        print!("{}", PrintAdjacency(labels, &graph));
    }
    if options.dfs {
        let search = traverse::depth_first(&graph, some(start));
        print!("{}", PrintDepthFirst(labels, &search));
    }
    if options.bfs {
        let search = traverse::breadth_first(&graph, some(start));
        print!("{}", PrintBreadthFirst(labels, &search));
    }

    let solution = solve(&graph, options.algorithm, start);
    if let Some((statistics, tree)) = &solution.prim {
        print!("{}", PrintParents(labels, tree));
        if !tree.is_spanning() {
            println!(
                "% Prim reached {} of {} vertices",
                tree.reached(),
                graph.num_vertices()
            );
        }
        println!("Prim total weight {}", tree.total_weight());
        if options.statistics {
            statistics.record(&mut PrintStatistics::new("prim"));
        }
    }
    if let Some((statistics, result)) = &solution.kruskal {
        match result {
            Ok(tree) => {
                print!("{}", PrintEdges(labels, tree.edges()));
                println!("Kruskal total cost {}", tree.total_weight());
            }
            Err(disconnected) => {
                print!("{}", PrintEdges(labels, disconnected.forest.edges()));
                println!("% {}", disconnected);
            }
        }
        if options.statistics {
            statistics.record(&mut PrintStatistics::new("kruskal"));
        }
    }

    match solution.outcome() {
        Outcome::Spanning(_) => Status::Spanning.report(),
        Outcome::Disconnected => Status::Disconnected.report(),
        Outcome::NotATree(_) | Outcome::Inconsistent { .. } => {
            Status::Inconsistent.report()
        }
    }
}
