use crate::maze::graph::MazeGraph;
use crate::maze::types::{MazeError, Node};

/// A maze shipped with the binary: a named track layout with its declared
/// start and goal.
///
/// Tracks are declared as path lists, each a chain of grid waypoints. The
/// first list is the main line from start to goal; the rest are branches,
/// dead ends and loops hanging off it.
pub struct BuiltinMaze {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: i32,
    pub cols: i32,
    pub start: Node,
    pub goal: Node,
    paths: &'static [&'static [(i32, i32)]],
}

impl BuiltinMaze {
    /// The declared path lists as node chains.
    pub fn path_lists(&self) -> Vec<Vec<Node>> {
        self.paths
            .iter()
            .map(|path| path.iter().map(|&(r, c)| Node::new(r, c)).collect())
            .collect()
    }

    pub fn graph(&self) -> Result<MazeGraph, MazeError> {
        MazeGraph::build(&self.path_lists())
    }
}

pub static CLASSIC: BuiltinMaze = BuiltinMaze {
    name: "classic",
    description: "The classic demo track: one long line with eight branches",
    rows: 9,
    cols: 12,
    start: Node::new(8, 1),
    goal: Node::new(1, 10),
    paths: &[
        &[
            (8, 1),
            (7, 1),
            (6, 1),
            (5, 1),
            (4, 1),
            (3, 1),
            (2, 1),
            (1, 1),
            (1, 3),
            (1, 5),
            (2, 5),
            (3, 5),
            (4, 5),
            (5, 5),
            (6, 5),
            (6, 7),
            (5, 7),
            (4, 7),
            (3, 7),
            (2, 8),
            (1, 8),
            (1, 10),
        ],
        &[(3, 5), (3, 3)],
        &[(5, 5), (5, 3)],
        &[(4, 7), (4, 9)],
        &[(2, 8), (2, 10)],
        &[(6, 1), (6, 3)],
        &[(5, 7), (7, 7)],
        &[(3, 1), (3, 2), (2, 2)],
        &[(4, 5), (4, 4), (5, 4)],
    ],
};

pub static EXTENDED: BuiltinMaze = BuiltinMaze {
    name: "extended",
    description: "A denser track with reconnecting loops and more dead ends",
    rows: 9,
    cols: 12,
    start: Node::new(8, 1),
    goal: Node::new(1, 10),
    paths: &[
        &[
            (8, 1),
            (7, 1),
            (6, 1),
            (5, 1),
            (4, 1),
            (3, 1),
            (2, 1),
            (1, 1),
            (1, 2),
            (1, 3),
            (1, 4),
            (1, 5),
            (2, 5),
            (3, 5),
            (4, 5),
            (5, 5),
            (6, 5),
            (6, 6),
            (6, 7),
            (5, 7),
            (4, 7),
            (3, 7),
            (2, 7),
            (1, 7),
            (1, 8),
            (1, 9),
            (1, 10),
        ],
        &[(3, 5), (3, 3), (2, 3)],
        &[(5, 5), (5, 3), (4, 3), (4, 4), (5, 4)],
        &[(4, 7), (4, 9)],
        &[(2, 7), (2, 6), (1, 6)],
        &[(6, 1), (6, 3)],
        &[(5, 7), (7, 7), (7, 6), (6, 6)],
        &[(3, 1), (3, 2), (2, 2)],
        &[(1, 3), (0, 3)],
        &[(1, 5), (0, 5)],
        &[(6, 7), (6, 8), (5, 8), (4, 8)],
    ],
};

static ALL: [&BuiltinMaze; 2] = [&CLASSIC, &EXTENDED];

/// All built-in mazes, in listing order.
pub fn all() -> &'static [&'static BuiltinMaze] {
    &ALL
}

pub fn by_name(name: &str) -> Option<&'static BuiltinMaze> {
    all().iter().copied().find(|m| m.name == name)
}
