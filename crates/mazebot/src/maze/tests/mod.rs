mod determinism;

use super::graph::MazeGraph;
use super::traversal::Traversal;
use super::types::{Node, StepOutcome};

/// Helper to create a Node.
fn node(row: i32, col: i32) -> Node {
    Node::new(row, col)
}

/// Helper to turn coordinate lists into path lists.
fn paths(lists: &[&[(i32, i32)]]) -> Vec<Vec<Node>> {
    lists
        .iter()
        .map(|path| path.iter().map(|&(r, c)| node(r, c)).collect())
        .collect()
}

/// Helper to build a graph, panicking on malformed input.
fn graph(lists: &[&[(i32, i32)]]) -> MazeGraph {
    MazeGraph::build(&paths(lists)).expect("test graph should build")
}

/// Drive a traversal to its terminal outcome, collecting every step.
fn run_to_end(run: &mut Traversal) -> Vec<StepOutcome> {
    let mut outcomes = Vec::new();
    for _ in 0..10_000 {
        let outcome = run.step();
        outcomes.push(outcome);
        if outcome.is_terminal() {
            return outcomes;
        }
    }
    panic!("traversal did not terminate");
}

/// A 4-node square loop A-B-C-D-A with a dead-end spur E below A.
///
///   B(1,1)──C(1,2)
///     │       │
///   A(2,1)──D(2,2)
///     │
///   E(3,1)
fn square_loop() -> MazeGraph {
    graph(&[
        &[(2, 1), (1, 1), (1, 2), (2, 2), (2, 1)],
        &[(2, 1), (3, 1)],
    ])
}
