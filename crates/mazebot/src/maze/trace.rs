use serde::Serialize;

use super::Solution;
use super::types::{Node, StepOutcome};

/// Serialize a step trace to a compact single-line format.
///
/// Format: `(8,1)-(7,1)-(6,3)<(6,1)-(5,1)=goal`
///
/// `-` marks a forward move, `<` a backtrack, and the trailing `=goal` or
/// `=none` the terminal outcome. The string is a stable fingerprint of an
/// entire run, which makes it the comparison key for determinism checks.
pub fn trace_to_string(start: Node, outcomes: &[StepOutcome]) -> String {
    let mut out = start.to_string();
    for outcome in outcomes {
        match outcome {
            StepOutcome::Advanced(node) => {
                out.push('-');
                out.push_str(&node.to_string());
            }
            StepOutcome::Backtracked(node) => {
                out.push('<');
                out.push_str(&node.to_string());
            }
            StepOutcome::Reached => out.push_str("=goal"),
            StepOutcome::Exhausted => out.push_str("=none"),
        }
    }
    out
}

/// Machine-readable summary of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub maze: String,
    pub policy: String,
    pub start: [i32; 2],
    pub goal: [i32; 2],
    pub outcome: String,
    pub steps: usize,
    pub forward_steps: usize,
    pub backtracks: usize,
    pub visited_edges: usize,
    pub path: Vec<[i32; 2]>,
    pub trace: String,
}

impl Report {
    pub fn new(maze: &str, solution: &Solution) -> Self {
        Self {
            maze: maze.to_string(),
            policy: solution.policy.name().to_string(),
            start: [solution.start.row, solution.start.col],
            goal: [solution.goal.row, solution.goal.col],
            outcome: match solution.outcome {
                StepOutcome::Reached => "reached".to_string(),
                _ => "exhausted".to_string(),
            },
            steps: solution.trace.len(),
            forward_steps: solution.forward_steps(),
            backtracks: solution.backtracks(),
            visited_edges: solution.visited_edges,
            path: solution.path.iter().map(|n| [n.row, n.col]).collect(),
            trace: trace_to_string(solution.start, &solution.trace),
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn n(row: i32, col: i32) -> Node {
        Node::new(row, col)
    }

    #[test]
    fn forward_only_trace() {
        let outcomes = [
            StepOutcome::Advanced(n(2, 1)),
            StepOutcome::Advanced(n(2, 2)),
            StepOutcome::Reached,
        ];
        assert_eq!(trace_to_string(n(1, 1), &outcomes), "(1,1)-(2,1)-(2,2)=goal");
    }

    #[test]
    fn backtracks_use_their_own_marker() {
        let outcomes = [
            StepOutcome::Advanced(n(1, 2)),
            StepOutcome::Backtracked(n(1, 1)),
            StepOutcome::Exhausted,
        ];
        assert_eq!(trace_to_string(n(1, 1), &outcomes), "(1,1)-(1,2)<(1,1)=none");
    }

    #[test]
    fn empty_trace_is_just_the_start() {
        assert_eq!(trace_to_string(n(3, 4), &[]), "(3,4)");
    }
}
