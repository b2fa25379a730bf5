use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::anyhow;
use courseflow::dag::{TaskGraph, TaskNode};
use courseflow::engine::{Orchestrator, RunState};

fn flagging_node(id: &'static str, ran: Arc<AtomicBool>) -> TaskNode {
    TaskNode::new(id, id, "records that it ran", move |_ctx| {
        let ran = Arc::clone(&ran);
        async move {
            ran.store(true, Ordering::SeqCst);
            Ok::<(), anyhow::Error>(())
        }
    })
}

fn failing_node(id: &'static str) -> TaskNode {
    TaskNode::new(id, id, "always fails", |_ctx| async move {
        Err::<(), anyhow::Error>(anyhow!("boom"))
    })
}

#[tokio::test]
async fn transitive_successors_of_a_failed_node_never_run() {
    let graph = TaskGraph::from_adjacency(vec![
        ("a", vec!["b"]),
        ("b", vec!["c"]),
        ("c", vec![]),
    ])
    .expect("valid graph");

    let b_ran = Arc::new(AtomicBool::new(false));
    let c_ran = Arc::new(AtomicBool::new(false));

    let report = Orchestrator::new(
        graph,
        [
            failing_node("a"),
            flagging_node("b", Arc::clone(&b_ran)),
            flagging_node("c", Arc::clone(&c_ran)),
        ],
    )
    .expect("valid orchestrator")
    .run()
    .await;

    assert!(!report.is_success());
    assert!(!b_ran.load(Ordering::SeqCst));
    assert!(!c_ran.load(Ordering::SeqCst));

    assert_eq!(report.state_of("a"), RunState::Failed);
    assert_eq!(report.state_of("b"), RunState::Pending);
    assert_eq!(report.state_of("c"), RunState::Pending);
    assert_eq!(report.waves(), &[vec!["a".to_string()]]);

    let failure = report.first_failure().expect("a failure was captured");
    assert_eq!(failure.task, "a");
    assert!(failure.to_string().contains("boom"));

    // Nothing was stored for the failing node.
    assert!(!report.context().has_result("a"));
}

#[tokio::test]
async fn a_failing_node_does_not_cancel_its_wave_siblings() {
    let graph = TaskGraph::from_adjacency(vec![
        ("root", vec!["fails", "survives"]),
        ("fails", vec!["downstream"]),
        ("survives", vec![]),
        ("downstream", vec![]),
    ])
    .expect("valid graph");

    let root_ran = Arc::new(AtomicBool::new(false));
    let downstream_ran = Arc::new(AtomicBool::new(false));

    // The sibling finishes after the failure has already been observed.
    let survives = TaskNode::new("survives", "survives", "slow sibling", |_ctx| async move {
        tokio::time::sleep(Duration::from_millis(30)).await;
        Ok::<&'static str, anyhow::Error>("made it")
    });

    let report = Orchestrator::new(
        graph,
        [
            flagging_node("root", Arc::clone(&root_ran)),
            failing_node("fails"),
            survives,
            flagging_node("downstream", Arc::clone(&downstream_ran)),
        ],
    )
    .expect("valid orchestrator")
    .run()
    .await;

    assert!(!report.is_success());
    assert_eq!(report.state_of("fails"), RunState::Failed);
    assert_eq!(report.state_of("survives"), RunState::Completed);
    assert_eq!(report.state_of("downstream"), RunState::Pending);
    assert!(!downstream_ran.load(Ordering::SeqCst));

    // The sibling's result was recorded even though the run failed.
    assert_eq!(
        *report.context().result::<&'static str>("survives").unwrap(),
        "made it"
    );
}

#[tokio::test]
async fn each_run_gets_a_fresh_result_store() {
    let graph = TaskGraph::from_adjacency(vec![("count", vec![])]).expect("valid graph");

    let counter = Arc::new(AtomicUsize::new(0));
    let node = TaskNode::new("count", "count", "bumps a counter", move |_ctx| {
        let counter = Arc::clone(&counter);
        async move { Ok::<usize, anyhow::Error>(counter.fetch_add(1, Ordering::SeqCst) + 1) }
    });

    let orchestrator = Orchestrator::new(graph, [node]).expect("valid orchestrator");

    let first = orchestrator.run().await;
    let second = orchestrator.run().await;

    assert!(first.is_success());
    assert!(second.is_success());

    // Each run re-executed the node and stored its own result; nothing stale
    // leaked from the first run into the second.
    assert_eq!(*first.context().result::<usize>("count").unwrap(), 1);
    assert_eq!(*second.context().result::<usize>("count").unwrap(), 2);
}
