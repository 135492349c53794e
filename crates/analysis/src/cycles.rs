//! Circular dependency detection.

use std::collections::{HashMap, HashSet};
use taskrank_core::{Task, TaskId};

/// Traversal state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    InProgress,
    Done,
}

/// Dependency graph over the tasks of one request.
///
/// Edges point from a task to each task it depends on. References to ids
/// outside the task set are dropped.
pub struct DepGraph<'a> {
    /// node index -> task id
    ids: Vec<&'a TaskId>,
    /// node index -> [dependency node indices]
    edges: Vec<Vec<usize>>,
}

impl<'a> DepGraph<'a> {
    /// Build the graph. Nodes follow input order; a repeated id merges
    /// into its first occurrence.
    pub fn build(tasks: &'a [Task]) -> Self {
        let mut index: HashMap<&TaskId, usize> = HashMap::new();
        let mut ids = Vec::new();
        for task in tasks {
            index.entry(&task.id).or_insert_with(|| {
                ids.push(&task.id);
                ids.len() - 1
            });
        }

        let mut edges = vec![Vec::new(); ids.len()];
        for task in tasks {
            let from = index[&task.id];
            edges[from].extend(task.dependencies.iter().filter_map(|dep| index.get(dep).copied()));
        }

        Self { ids, edges }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of edges between known tasks.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Find every distinct cycle reachable by depth-first traversal.
    ///
    /// Iterative: each frame is `(node, next edge index)` and the frame
    /// stack doubles as the current path. A back-edge to an in-progress
    /// node closes a cycle made of the path from that node onward. Finished
    /// nodes are never re-entered, so the walk is linear in nodes + edges.
    /// Cycles with the same member set are reported once.
    pub fn cycles(&self) -> Vec<Vec<TaskId>> {
        let mut state = vec![Visit::Unvisited; self.ids.len()];
        let mut frames: Vec<(usize, usize)> = Vec::new();
        let mut seen: HashSet<Vec<usize>> = HashSet::new();
        let mut cycles = Vec::new();

        for root in 0..self.ids.len() {
            if state[root] != Visit::Unvisited {
                continue;
            }
            state[root] = Visit::InProgress;
            frames.push((root, 0));

            while let Some(frame) = frames.last_mut() {
                let (node, next) = *frame;
                let Some(&dep) = self.edges[node].get(next) else {
                    state[node] = Visit::Done;
                    frames.pop();
                    continue;
                };
                frame.1 += 1;

                match state[dep] {
                    Visit::Unvisited => {
                        state[dep] = Visit::InProgress;
                        frames.push((dep, 0));
                    }
                    Visit::InProgress => {
                        let Some(start) = frames.iter().position(|&(n, _)| n == dep) else {
                            continue;
                        };
                        let members: Vec<usize> = frames[start..].iter().map(|&(n, _)| n).collect();
                        let mut key = members.clone();
                        key.sort_unstable();
                        if seen.insert(key) {
                            cycles.push(members.into_iter().map(|n| self.ids[n].clone()).collect());
                        }
                    }
                    Visit::Done => {}
                }
            }
        }

        cycles
    }
}

/// Reports circular dependencies in a task set.
///
/// A pure query: it never touches scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleDetector;

impl CycleDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self
    }

    /// Every distinct dependency cycle among `tasks`, in discovery order.
    /// Each cycle lists its ids along the dependency direction.
    pub fn detect(&self, tasks: &[Task]) -> Vec<Vec<TaskId>> {
        DepGraph::build(tasks).cycles()
    }
}
