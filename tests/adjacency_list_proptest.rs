use graphkit::{AdjacencyList, GraphError, NodeGraph};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(u8),
    AddEdgeToValue(u8, u8),
    AddEdge(u8, u8),
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            any::<u8>().prop_map(Operation::AddVertex),
            (any::<u8>(), any::<u8>()).prop_map(|(s, v)| Operation::AddEdgeToValue(s, v)),
            (any::<u8>(), any::<u8>()).prop_map(|(s, e)| Operation::AddEdge(s, e)),
        ],
        1..100,
    )
}

proptest! {
    #[test]
    fn test_adjacency_list_matches_model(ops in operations()) {
        // Model: vertex value -> edge values, in insertion order.
        let mut model: BTreeMap<u8, Vec<u8>> = BTreeMap::new();
        let mut graph = AdjacencyList::new();

        for op in ops {
            match op {
                Operation::AddVertex(v) => {
                    let res = graph.add_vertex(v);
                    if model.contains_key(&v) {
                        let is_duplicate = matches!(res, Err(GraphError::DuplicateVertex { .. }));
                        prop_assert!(is_duplicate, "duplicate {} accepted", v);
                    } else {
                        prop_assert!(res.is_ok());
                        model.insert(v, Vec::new());
                    }
                }
                Operation::AddEdgeToValue(s, v) => {
                    let Some(source) = graph.find_vertex(&s) else {
                        continue;
                    };
                    let target = graph.add_edge_to_value(source, v).unwrap();
                    prop_assert_eq!(graph.vertex_list(target).map(|l| *l.head()), Some(v));
                    model.entry(v).or_default();
                    model.get_mut(&s).unwrap().push(v);
                }
                Operation::AddEdge(s, e) => {
                    let (Some(start), Some(end)) = (graph.find_vertex(&s), graph.find_vertex(&e)) else {
                        continue;
                    };
                    let edges = model.get_mut(&s).unwrap();
                    let expected = !edges.contains(&e);
                    if expected {
                        edges.push(e);
                    }
                    prop_assert_eq!(graph.add_edge(start, end), Ok(expected));
                }
            }
        }

        prop_assert_eq!(graph.graph_size(), model.len());
        prop_assert_eq!(graph.edge_count(), model.values().map(Vec::len).sum::<usize>());
        prop_assert_eq!(graph.number_of_edges(), graph.edge_count() + 1);

        for list in graph.iter() {
            let edges = &model[list.head()];
            prop_assert_eq!(list.edges(), edges.as_slice());
            prop_assert_eq!(graph.number_of_edges_in(list.id()), Some(edges.len() + 1));
        }
    }

    #[test]
    fn test_node_graph_find_after_insert(values in proptest::collection::vec(any::<i16>(), 1..50)) {
        let mut graph = NodeGraph::new();
        for &v in &values {
            graph.insert_value(v);
        }

        prop_assert_eq!(graph.size(), values.len());
        for v in &values {
            let id = graph.find_vertex(v);
            prop_assert!(id.is_some());
            prop_assert_eq!(id.and_then(|id| graph.value(id)), Some(v));
        }
    }
}
