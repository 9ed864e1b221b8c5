use colored::Colorize;

use crate::mazes;

pub fn run() {
    println!("{}", "Built-in mazes:".bold());
    println!();
    for maze in mazes::all() {
        // Graphs for shipped mazes always build; fall back to dashes if not.
        let (nodes, edges) = maze
            .graph()
            .map(|g| (g.node_count().to_string(), g.edge_count().to_string()))
            .unwrap_or_else(|_| ("—".to_string(), "—".to_string()));

        println!("  {}", maze.name.green().bold());
        println!("    {}", maze.description);
        println!(
            "    {}×{} grid, {} nodes, {} edges, start {} → goal {}",
            maze.rows, maze.cols, nodes, edges, maze.start, maze.goal,
        );
        println!();
    }
    println!("Run `mazebot <name>` to animate one, or `mazebot solve <name>` for a report.");
}
