use courseflow::dag::{TaskGraph, TaskNode};
use courseflow::engine::Orchestrator;
use courseflow::errors::GraphError;

fn noop_node(id: &str) -> TaskNode {
    TaskNode::new(id, id, "test node", |_ctx| async move {
        Ok::<(), anyhow::Error>(())
    })
}

#[test]
fn diamond_graph_builds_with_expected_degrees() {
    let graph = TaskGraph::from_adjacency(vec![
        ("a", vec!["b", "c"]),
        ("b", vec!["d"]),
        ("c", vec!["d"]),
        ("d", vec![]),
    ])
    .expect("valid graph");

    assert_eq!(graph.len(), 4);
    assert_eq!(graph.roots(), vec!["a"]);
    assert_eq!(graph.in_degree("a"), 0);
    assert_eq!(graph.in_degree("d"), 2);
    assert_eq!(graph.successors_of("a"), &["b".to_string(), "c".to_string()]);
    assert_eq!(graph.predecessors_of("d"), &["b".to_string(), "c".to_string()]);
}

#[test]
fn duplicate_successor_mentions_count_one_predecessor() {
    let graph =
        TaskGraph::from_adjacency(vec![("a", vec!["b", "b"]), ("b", vec![])]).expect("valid graph");

    assert_eq!(graph.in_degree("b"), 1);
    assert_eq!(graph.successors_of("a"), &["b".to_string()]);
}

#[test]
fn empty_graph_is_rejected() {
    let err = TaskGraph::from_adjacency(Vec::<(&str, Vec<&str>)>::new()).unwrap_err();
    assert!(matches!(err, GraphError::Empty));
}

#[test]
fn unknown_successor_is_rejected() {
    let err = TaskGraph::from_adjacency(vec![("a", vec!["ghost"])]).unwrap_err();
    match err {
        GraphError::UnknownSuccessor { task, successor } => {
            assert_eq!(task, "a");
            assert_eq!(successor, "ghost");
        }
        other => panic!("expected UnknownSuccessor, got {other:?}"),
    }
}

#[test]
fn self_dependency_is_rejected() {
    let err = TaskGraph::from_adjacency(vec![("a", vec!["a"])]).unwrap_err();
    assert!(matches!(err, GraphError::SelfDependency(task) if task == "a"));
}

#[test]
fn cycle_is_rejected_before_scheduling() {
    let err = TaskGraph::from_adjacency(vec![
        ("a", vec!["b"]),
        ("b", vec!["c"]),
        ("c", vec!["a"]),
    ])
    .unwrap_err();
    assert!(matches!(err, GraphError::Cycle(_)));
}

#[test]
fn duplicate_key_is_rejected() {
    let err =
        TaskGraph::from_adjacency(vec![("a", vec![]), ("a", vec![])]).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNode(task) if task == "a"));
}

#[test]
fn orchestrator_requires_a_node_for_every_graph_task() {
    let graph =
        TaskGraph::from_adjacency(vec![("a", vec!["b"]), ("b", vec![])]).expect("valid graph");

    let err = Orchestrator::new(graph, [noop_node("a")]).unwrap_err();
    assert!(matches!(err, GraphError::MissingNode(task) if task == "b"));
}

#[test]
fn orchestrator_rejects_nodes_outside_the_graph() {
    let graph = TaskGraph::from_adjacency(vec![("a", vec![])]).expect("valid graph");

    let err = Orchestrator::new(graph, [noop_node("a"), noop_node("stray")]).unwrap_err();
    assert!(matches!(err, GraphError::UnknownNode(task) if task == "stray"));
}

#[test]
fn orchestrator_rejects_duplicate_nodes() {
    let graph = TaskGraph::from_adjacency(vec![("a", vec![])]).expect("valid graph");

    let err = Orchestrator::new(graph, [noop_node("a"), noop_node("a")]).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNode(task) if task == "a"));
}
