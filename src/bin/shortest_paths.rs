use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use ordered_float::OrderedFloat;
use serde::Serialize;

use shortest_paths::models::{
    AllPairsReport, DenseGraphInput, JsonWeight, SingleSourceReport, SparseGraphInput,
};
use shortest_paths::{
    AdjacencyMap, AllPairsAlgorithm, Dijkstra, FloydWarshall, ShortestPathAlgorithm, WeightMatrix,
};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Solver(#[from] shortest_paths::Error),
}

#[derive(Parser, Debug)]
#[command(name = "shortest-paths", version, about = "Shortest path solvers")]
struct Cli {
    /// Log debug output (RUST_LOG takes precedence when set)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Floyd-Warshall on a dense weight matrix
    AllPairs(AllPairsArgs),
    /// Dijkstra from one source on a sparse adjacency map
    SingleSource(SingleSourceArgs),
}

#[derive(Args, Debug)]
struct AllPairsArgs {
    /// JSON file with a `matrix` field; the built-in sample is used when omitted
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Use the diagonal exactly as given instead of clamping it to zero
    #[arg(long)]
    no_zero_diagonal: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct SingleSourceArgs {
    /// JSON file with an `adjacency` field; the built-in sample is used when omitted
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Source node; must be a key of `adjacency`
    #[arg(long, short)]
    source: String,

    /// Print the path to this node
    #[arg(long, short)]
    target: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Command::AllPairs(args) => run_all_pairs(args),
        Command::SingleSource(args) => run_single_source(args),
    };

    match outcome {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn to_json<T: Serialize>(report: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(report)? + "\n")
}

fn run_all_pairs(args: AllPairsArgs) -> Result<String, CliError> {
    let graph = match &args.input {
        Some(path) => read_json::<DenseGraphInput>(path)?.into_matrix()?,
        None => sample_dense()?,
    };

    let solver = FloydWarshall::new().with_zero_diagonal(!args.no_zero_diagonal);
    let result = solver.solve(&graph)?;
    let name = <FloydWarshall as AllPairsAlgorithm<JsonWeight>>::name(&solver);
    let report = AllPairsReport::new(name, &result);

    if args.json {
        to_json(&report)
    } else {
        Ok(report.render_text())
    }
}

fn run_single_source(args: SingleSourceArgs) -> Result<String, CliError> {
    let graph = match &args.input {
        Some(path) => {
            read_json::<SparseGraphInput>(path)?.into_graph_from(&args.source)?
        }
        None => sample_sparse(),
    };

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, &args.source)?;
    let name = <Dijkstra as ShortestPathAlgorithm<
        String,
        JsonWeight,
        AdjacencyMap<String, JsonWeight>,
    >>::name(&dijkstra);
    let report = SingleSourceReport::new(name, &result, args.target.as_ref());

    if args.json {
        to_json(&report)
    } else {
        Ok(report.render_text())
    }
}

/// 4 nodes: 0->1 (5), 0->3 (10), 1->2 (3), 2->3 (1)
fn sample_dense() -> shortest_paths::Result<WeightMatrix<JsonWeight>> {
    WeightMatrix::from_edges(
        4,
        [(0, 1, 5.0), (0, 3, 10.0), (1, 2, 3.0), (2, 3, 1.0)]
            .into_iter()
            .map(|(from, to, w)| (from, to, OrderedFloat(w))),
    )
}

/// Undirected A-B (1), A-C (4), B-C (2), B-D (5), C-D (1)
fn sample_sparse() -> AdjacencyMap<String, JsonWeight> {
    let mut graph = AdjacencyMap::new();
    for (a, b, w) in [
        ("A", "B", 1.0),
        ("A", "C", 4.0),
        ("B", "C", 2.0),
        ("B", "D", 5.0),
        ("C", "D", 1.0),
    ] {
        graph.add_undirected_edge(a.to_string(), b.to_string(), OrderedFloat(w));
    }
    graph
}
