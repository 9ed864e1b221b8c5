use super::*;
use crate::maze::solve_maze;
use crate::maze::trace::trace_to_string;
use crate::maze::types::{Node, Policy};

/// Rebuild the graph and re-run the traversal repeatedly, asserting the
/// full step sequence never changes.
fn assert_deterministic(
    lists: &[&[(i32, i32)]],
    start: Node,
    goal: Node,
    policy: Policy,
    iterations: usize,
) {
    let reference = {
        let g = graph(lists);
        let solution = solve_maze(&g, start, goal, policy).unwrap();
        trace_to_string(start, &solution.trace)
    };

    for i in 1..iterations {
        let g = graph(lists);
        let solution = solve_maze(&g, start, goal, policy).unwrap();
        assert_eq!(
            reference,
            trace_to_string(start, &solution.trace),
            "non-deterministic result on iteration {i}"
        );
    }
}

const SQUARE_LOOP: &[&[(i32, i32)]] = &[
    &[(2, 1), (1, 1), (1, 2), (2, 2), (2, 1)],
    &[(2, 1), (3, 1)],
];

#[test]
fn square_loop_deterministic() {
    assert_deterministic(
        SQUARE_LOOP,
        node(2, 1),
        node(1, 2),
        Policy::RightFirst,
        50,
    );
}

#[test]
fn square_loop_left_first_deterministic() {
    assert_deterministic(SQUARE_LOOP, node(2, 1), node(3, 1), Policy::LeftFirst, 50);
}

#[test]
fn unreachable_goal_deterministic() {
    assert_deterministic(
        &[&[(1, 1), (1, 2)], &[(5, 5), (5, 6)]],
        node(1, 1),
        node(5, 5),
        Policy::RightFirst,
        50,
    );
}

#[test]
fn classic_maze_deterministic_both_policies() {
    let maze = &crate::mazes::CLASSIC;
    for policy in [Policy::RightFirst, Policy::LeftFirst] {
        let reference = {
            let g = maze.graph().unwrap();
            let solution = solve_maze(&g, maze.start, maze.goal, policy).unwrap();
            trace_to_string(maze.start, &solution.trace)
        };
        for i in 1..20 {
            let g = maze.graph().unwrap();
            let solution = solve_maze(&g, maze.start, maze.goal, policy).unwrap();
            assert_eq!(
                reference,
                trace_to_string(maze.start, &solution.trace),
                "non-deterministic on iteration {i} ({policy})"
            );
        }
    }
}

#[test]
fn extended_maze_deterministic_both_policies() {
    let maze = &crate::mazes::EXTENDED;
    for policy in [Policy::RightFirst, Policy::LeftFirst] {
        let reference = {
            let g = maze.graph().unwrap();
            let solution = solve_maze(&g, maze.start, maze.goal, policy).unwrap();
            trace_to_string(maze.start, &solution.trace)
        };
        for i in 1..20 {
            let g = maze.graph().unwrap();
            let solution = solve_maze(&g, maze.start, maze.goal, policy).unwrap();
            assert_eq!(
                reference,
                trace_to_string(maze.start, &solution.trace),
                "non-deterministic on iteration {i} ({policy})"
            );
        }
    }
}
