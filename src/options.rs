use crate::util::unreachable::unreachable;
use log::{warn, LevelFilter};
use std::path::PathBuf;
use structopt::StructOpt;

const NAME: &str = "minspan";

const ABOUT: &str = "
minspan computes minimum spanning trees of weighted undirected graphs.
The graph is read from a file, or stdin, as a line `V E` followed by E lines
`u v w`: an edge between vertices u and v of weight w, vertices numbered
from 1. Prim's and Kruskal's algorithms may be run alone or side by side.
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Algorithm {
    Prim,
    Kruskal,
    Both,
}

impl Algorithm {
    fn new(tag: &str) -> Self {
        match tag {
            "prim" => Self::Prim,
            "kruskal" => Self::Kruskal,
            "both" => Self::Both,
            _ => unreachable(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Labels {
    Numbers,
    Letters,
}

impl Labels {
    fn new(tag: &str) -> Self {
        match tag {
            "numbers" => Self::Numbers,
            "letters" => Self::Letters,
            _ => unreachable(),
        }
    }

    /// Letters run out after Z.
    pub(crate) fn fit(self, num_vertices: usize) -> Self {
        if self == Self::Letters && num_vertices > 26 {
            warn!("{} vertices is too many for letter labels", num_vertices);
            Self::Numbers
        } else {
            self
        }
    }
}

#[derive(StructOpt)]
#[structopt(name = NAME, author, about = ABOUT)]
pub(crate) struct Options {
    #[structopt(
        parse(from_os_str),
        help = "path to input graph, read from stdin if absent"
    )]
    pub(crate) path: Option<PathBuf>,

    #[structopt(
        long,
        help = "spanning tree algorithm",
        possible_values = &["prim", "kruskal", "both"],
        default_value = "both",
        parse(from_str = Algorithm::new)
    )]
    pub(crate) algorithm: Algorithm,

    #[structopt(
        long,
        help = "start vertex for Prim's algorithm and traversals",
        default_value = "1"
    )]
    pub(crate) start: u32,

    #[structopt(
        long,
        help = "vertex labels",
        possible_values = &["numbers", "letters"],
        default_value = "numbers",
        parse(from_str = Labels::new)
    )]
    pub(crate) labels: Labels,

    #[structopt(long, help = "print adjacency lists")]
    pub(crate) display: bool,

    #[structopt(long, help = "print a depth-first traversal")]
    pub(crate) dfs: bool,

    #[structopt(long, help = "print a breadth-first traversal")]
    pub(crate) bfs: bool,

    #[structopt(long, help = "print operation counts")]
    pub(crate) statistics: bool,

    #[structopt(
        short,
        long,
        parse(from_occurrences),
        help = "log more, may be repeated"
    )]
    pub(crate) verbose: u8,
}

impl Options {
    pub(crate) fn parse() -> Self {
        Self::from_args()
    }

    pub(crate) fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
