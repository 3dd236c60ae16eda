//! Builds a small route map with both graph representations and prints it.
//!
//! Run with `RUST_LOG=graphkit=trace` to see every mutation.

use anyhow::{ensure, Context, Result};
use graphkit::{AdjacencyList, NodeGraph};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const ROUTES: &[(&str, &str)] = &[
    ("Lisbon", "Madrid"),
    ("Madrid", "Paris"),
    ("Paris", "Berlin"),
    ("Paris", "Lisbon"),
    ("Berlin", "Warsaw"),
];

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut lists = AdjacencyList::new();
    for &(from, to) in ROUTES {
        let source = match lists.find_vertex(&from) {
            Some(list) => list,
            None => lists.add_vertex(from)?,
        };
        lists
            .add_edge_to_value(source, to)
            .with_context(|| format!("route {from} -> {to}"))?;
    }
    tracing::info!(
        cities = lists.graph_size(),
        routes = lists.edge_count(),
        "adjacency list built"
    );
    print!("{lists}");

    let mut nodes = NodeGraph::new();
    for list in lists.iter() {
        nodes.insert_value(*list.head());
    }
    for &(from, to) in ROUTES {
        let start = nodes.find_vertex(&from).context("missing start city")?;
        let end = nodes.find_vertex(&to).context("missing end city")?;
        nodes.add_edge(start, end);
    }
    ensure!(
        nodes.edges().count() == lists.edge_count(),
        "representations disagree on the route count"
    );

    let paris = nodes.find_vertex(&"Paris").context("missing Paris")?;
    nodes.remove_vertex(paris);
    tracing::info!(
        remaining = nodes.size(),
        "removed Paris; incoming routes still resolve"
    );
    for edge in nodes.edges().filter(|edge| edge.end() == paris) {
        let from = nodes.value(edge.start()).context("dangling start")?;
        let to = nodes.value(edge.end()).context("dangling end")?;
        println!("{from} -> {to} (detached)");
    }
    ensure!(
        nodes.purge_detached() == 0,
        "Paris is still a route target and must stay stored"
    );

    Ok(())
}
