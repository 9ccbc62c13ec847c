use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

use hopgraph::errors::{HopGraphError, Result};
use hopgraph::graph::{
    component_members, count_connected_components, hop_distance, shortest_path,
    shortest_path_length,
};
use hopgraph::types::{ComponentReport, EdgeDirection, Graph, PathReport, VertexId};

/// Connectivity and shortest-path analysis for adjacency-list graphs.
#[derive(Parser)]
#[command(
    name = "hopgraph",
    about = "Connectivity and shortest-path analysis for adjacency-list graphs"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count connected components of an undirected graph
    Components {
        /// Number of vertices
        #[arg(short = 'n', long)]
        vertices: usize,
        /// Edge as 'U,V' (repeatable; inserted in both directions)
        #[arg(long = "edge", value_name = "U,V")]
        edges: Vec<String>,
        /// List the members of each component
        #[arg(long)]
        members: bool,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Shortest path length between two vertices of a directed graph
    Path {
        /// Number of vertices
        #[arg(short = 'n', long)]
        vertices: usize,
        /// Edge as 'U,V' (repeatable; directed source to target)
        #[arg(long = "edge", value_name = "U,V")]
        edges: Vec<String>,
        /// Start vertex
        #[arg(long)]
        start: VertexId,
        /// End vertex
        #[arg(long)]
        end: VertexId,
        /// Print the vertices along the path
        #[arg(long)]
        route: bool,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Run the two built-in example graphs
    Demo,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Initializes stderr logging with an env-filter.
///
/// `--verbose` raises the default level to debug; `RUST_LOG` wins when set.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Components {
            vertices,
            edges,
            members,
            json,
        } => {
            let edge_list = parse_edges(&edges)?;
            let graph = Graph::from_edges(vertices, &edge_list, EdgeDirection::Undirected)?;
            let components = component_members(&graph);
            let report = ComponentReport {
                vertex_count: vertices,
                component_count: components.len(),
                components: members.then_some(components),
            };
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).unwrap_or_default()
                );
            } else {
                println!("Connected components: {}", report.component_count);
                if let Some(comps) = &report.components {
                    for (i, comp) in comps.iter().enumerate() {
                        println!("  component {}: {}", i, join_vertices(comp, " "));
                    }
                }
            }
        }
        Commands::Path {
            vertices,
            edges,
            start,
            end,
            route,
            json,
        } => {
            let edge_list = parse_edges(&edges)?;
            let graph = Graph::from_edges(vertices, &edge_list, EdgeDirection::Directed)?;
            let length = hop_distance(&graph, start, end)?;
            let path = if route {
                shortest_path(&graph, start, end)?
            } else {
                None
            };
            let report = PathReport {
                start,
                end,
                length,
                path,
            };
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).unwrap_or_default()
                );
            } else {
                match report.length {
                    Some(len) => println!("Shortest path from {} to {}: {}", start, end, len),
                    None => println!("No path from {} to {}", start, end),
                }
                if let Some(path) = &report.path {
                    println!("  route: {}", join_vertices(path, " -> "));
                }
            }
        }
        Commands::Demo => {
            // Fixed example graphs: one undirected, one directed.
            let component_count = count_connected_components(5, &[(0, 1), (1, 2), (3, 4)])?;
            println!("Connected components: {}", component_count);

            let length = shortest_path_length(6, &[(0, 1), (1, 2), (2, 3), (0, 4), (4, 5)], 0, 3)?;
            match length {
                Some(len) => println!("Shortest path from 0 to 3: {}", len),
                None => println!("No path from 0 to 3"),
            }
        }
    }
    Ok(())
}

/// Parses repeated 'U,V' edge arguments into vertex index pairs.
fn parse_edges(args: &[String]) -> Result<Vec<(VertexId, VertexId)>> {
    args.iter().map(|arg| parse_edge(arg)).collect()
}

fn parse_edge(arg: &str) -> Result<(VertexId, VertexId)> {
    let Some((u, v)) = arg.split_once(',') else {
        return Err(HopGraphError::MalformedEdge {
            input: arg.to_string(),
        });
    };
    let u: VertexId = u.trim().parse().map_err(|_| HopGraphError::MalformedEdge {
        input: arg.to_string(),
    })?;
    let v: VertexId = v.trim().parse().map_err(|_| HopGraphError::MalformedEdge {
        input: arg.to_string(),
    })?;
    Ok((u, v))
}

/// Formats a vertex sequence for human-readable output.
fn join_vertices(vertices: &[VertexId], separator: &str) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
