// src/dag/graph.rs

use std::collections::BTreeMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::errors::GraphError;

/// Internal node structure: stores immediate successors and predecessors.
#[derive(Debug, Clone)]
struct GraphNode {
    /// Direct successors: tasks that may only start after this one completes.
    successors: Vec<String>,
    /// Direct predecessors: tasks this one waits for.
    predecessors: Vec<String>,
}

/// Validated in-memory DAG keyed by task id.
///
/// Built from a successor adjacency map (`id -> [successor ids]`), the
/// forward-edge representation the course pipeline is declared in. A node
/// with multiple predecessors only becomes eligible once *all* of them have
/// completed, so predecessor lists and in-degrees are derived here up front
/// rather than discovered during scheduling.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    nodes: BTreeMap<String, GraphNode>,
}

impl TaskGraph {
    /// Build and validate a graph from a successor adjacency map.
    ///
    /// Validation happens entirely at construction, before any scheduling:
    /// - the map must not be empty
    /// - every id referenced as a successor must itself be a key
    /// - no task may list itself as a successor
    /// - the graph must be acyclic
    pub fn from_adjacency<I, S>(adjacency: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let mut nodes: BTreeMap<String, GraphNode> = BTreeMap::new();

        // First pass: create nodes with their successor lists.
        for (name, successors) in adjacency {
            let name = name.into();
            // Repeated mentions of the same successor are collapsed so that
            // in-degrees count distinct predecessors.
            let mut seen: Vec<String> = Vec::new();
            for succ in successors {
                let succ = succ.into();
                if !seen.contains(&succ) {
                    seen.push(succ);
                }
            }
            let successors = seen;
            if nodes
                .insert(
                    name.clone(),
                    GraphNode {
                        successors,
                        predecessors: Vec::new(),
                    },
                )
                .is_some()
            {
                return Err(GraphError::DuplicateNode(name));
            }
        }

        if nodes.is_empty() {
            return Err(GraphError::Empty);
        }

        // Second pass: check successor references and populate predecessors.
        let task_names: Vec<String> = nodes.keys().cloned().collect();
        for task_name in &task_names {
            // clone to avoid borrowing issues while mutating
            let successors = nodes
                .get(task_name)
                .map(|n| n.successors.clone())
                .unwrap_or_default();

            for succ in successors {
                if succ == *task_name {
                    return Err(GraphError::SelfDependency(task_name.clone()));
                }
                match nodes.get_mut(&succ) {
                    Some(succ_node) => succ_node.predecessors.push(task_name.clone()),
                    None => {
                        return Err(GraphError::UnknownSuccessor {
                            task: task_name.clone(),
                            successor: succ,
                        });
                    }
                }
            }
        }

        let graph = Self { nodes };
        graph.check_acyclic()?;
        Ok(graph)
    }

    /// A topological sort over a petgraph view will fail iff there is a cycle.
    fn check_acyclic(&self) -> Result<(), GraphError> {
        let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

        for name in self.nodes.keys() {
            graph.add_node(name.as_str());
        }
        for (name, node) in self.nodes.iter() {
            for succ in node.successors.iter() {
                graph.add_edge(name.as_str(), succ.as_str(), ());
            }
        }

        match toposort(&graph, None) {
            Ok(_order) => Ok(()),
            Err(cycle) => Err(GraphError::Cycle(cycle.node_id().to_string())),
        }
    }

    /// Return all task ids, in stable (sorted) order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    /// Number of tasks in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Immediate successors of a task.
    pub fn successors_of(&self, id: &str) -> &[String] {
        self.nodes
            .get(id)
            .map(|n| n.successors.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate predecessors of a task (every task that lists it as a
    /// successor).
    pub fn predecessors_of(&self, id: &str) -> &[String] {
        self.nodes
            .get(id)
            .map(|n| n.predecessors.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct predecessors of a task.
    pub fn in_degree(&self, id: &str) -> usize {
        self.predecessors_of(id).len()
    }

    /// Tasks with no predecessors; these form the first wave of a run.
    pub fn roots(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.predecessors.is_empty())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
