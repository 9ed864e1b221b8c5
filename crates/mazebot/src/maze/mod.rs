pub mod graph;
pub mod trace;
pub mod traversal;
pub mod turn;
pub mod types;
pub mod visited;

#[cfg(test)]
mod tests;

use graph::MazeGraph;
use traversal::Traversal;
use types::{MazeError, Node, Policy, StepOutcome};

/// A finished run: the terminal outcome plus everything a caller needs to
/// report on it.
#[derive(Debug, Clone)]
pub struct Solution {
    pub start: Node,
    pub goal: Node,
    pub policy: Policy,
    /// Terminal outcome: `Reached` or `Exhausted`.
    pub outcome: StepOutcome,
    /// Every step outcome in order, including the terminal one.
    pub trace: Vec<StepOutcome>,
    /// Stack contents at the end of the run. When the goal was reached this
    /// is the discovered route from start to goal; when exhausted it is
    /// empty.
    pub path: Vec<Node>,
    pub visited_edges: usize,
}

impl Solution {
    pub fn reached(&self) -> bool {
        self.outcome == StepOutcome::Reached
    }

    pub fn forward_steps(&self) -> usize {
        self.trace
            .iter()
            .filter(|o| matches!(o, StepOutcome::Advanced(_)))
            .count()
    }

    pub fn backtracks(&self) -> usize {
        self.trace
            .iter()
            .filter(|o| matches!(o, StepOutcome::Backtracked(_)))
            .count()
    }
}

/// Drive a traversal from `start` to a terminal state and collect the
/// result.
///
/// Exploration is exhaustive and deterministic, so a given (graph, start,
/// goal, policy) combination always yields the same `Solution`.
pub fn solve_maze(
    graph: &MazeGraph,
    start: Node,
    goal: Node,
    policy: Policy,
) -> Result<Solution, MazeError> {
    let mut run = Traversal::new(graph, start, goal, policy)?;
    let mut outcomes = Vec::new();
    loop {
        let outcome = run.step();
        outcomes.push(outcome);
        if outcome.is_terminal() {
            return Ok(Solution {
                start,
                goal,
                policy,
                outcome,
                trace: outcomes,
                path: run.path(),
                visited_edges: run.visited_edge_count(),
            });
        }
    }
}
