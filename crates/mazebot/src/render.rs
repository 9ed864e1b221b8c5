use colored::Colorize;

use crate::maze::types::Node;
use crate::mazes::BuiltinMaze;

/// Render a maze track and the bot's position as terminal text.
///
/// The grid is doubled in both axes so connector characters fit between
/// waypoints: node (r, c) lands at canvas position (2r, 2c). Horizontal and
/// vertical segments are drawn through; the odd diagonal segment gets a
/// single slash at its midpoint.
pub fn render_maze(maze: &BuiltinMaze, bot: Option<Node>) -> String {
    let height = (maze.rows * 2 - 1).max(1) as usize;
    let width = (maze.cols * 2 - 1).max(1) as usize;
    let mut canvas = vec![vec![' '; width]; height];

    let paths = maze.path_lists();
    for path in &paths {
        for pair in path.windows(2) {
            draw_segment(&mut canvas, pair[0], pair[1]);
        }
    }
    for path in &paths {
        for node in path {
            put(&mut canvas, node.row * 2, node.col * 2, '·');
        }
    }

    put(&mut canvas, maze.start.row * 2, maze.start.col * 2, 'S');
    put(&mut canvas, maze.goal.row * 2, maze.goal.col * 2, 'G');

    let bot_pos = bot.map(|n| ((n.row * 2) as usize, (n.col * 2) as usize));

    let mut out = String::new();
    for (y, row) in canvas.iter().enumerate() {
        for (x, &ch) in row.iter().enumerate() {
            if bot_pos == Some((y, x)) {
                out.push_str(&"●".blue().bold().to_string());
            } else {
                match ch {
                    'S' | 'G' => out.push_str(&ch.to_string().green().bold().to_string()),
                    _ => out.push(ch),
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Legend line shown under the rendered maze.
pub fn legend() -> String {
    format!(
        "{} start   {} goal   {} bot",
        "S".green().bold(),
        "G".green().bold(),
        "●".blue().bold()
    )
}

fn draw_segment(canvas: &mut [Vec<char>], a: Node, b: Node) {
    if a.row == b.row {
        let y = a.row * 2;
        let (x1, x2) = (a.col.min(b.col) * 2, a.col.max(b.col) * 2);
        for x in x1..=x2 {
            put(canvas, y, x, '─');
        }
    } else if a.col == b.col {
        let x = a.col * 2;
        let (y1, y2) = (a.row.min(b.row) * 2, a.row.max(b.row) * 2);
        for y in y1..=y2 {
            put(canvas, y, x, '│');
        }
    } else {
        // Diagonal connector: mark the midpoint only.
        let y = a.row + b.row;
        let x = a.col + b.col;
        let rising = (b.row - a.row).signum() != (b.col - a.col).signum();
        put(canvas, y, x, if rising { '/' } else { '\\' });
    }
}

fn put(canvas: &mut [Vec<char>], y: i32, x: i32, ch: char) {
    if y < 0 || x < 0 {
        return;
    }
    if let Some(cell) = canvas
        .get_mut(y as usize)
        .and_then(|row| row.get_mut(x as usize))
    {
        *cell = ch;
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::mazes;

    #[test]
    fn classic_canvas_has_expected_size() {
        let text = render_maze(&mazes::CLASSIC, None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
    }

    #[test]
    fn start_and_goal_are_marked() {
        colored::control::set_override(false);
        let text = render_maze(&mazes::CLASSIC, None);
        assert!(text.contains('S'));
        assert!(text.contains('G'));
    }

    #[test]
    fn bot_marker_replaces_node_glyph() {
        colored::control::set_override(false);
        let with_bot = render_maze(&mazes::CLASSIC, Some(Node::new(7, 1)));
        let without = render_maze(&mazes::CLASSIC, None);
        assert_ne!(with_bot, without);
        assert!(with_bot.contains('●'));
    }
}
