use std::io::{BufRead, Write};
use std::time::Duration;

use colored::Colorize;

use crate::maze::traversal::Traversal;
use crate::maze::types::{Node, Policy, StepOutcome};
use crate::mazes;
use crate::render;

/// Animate a traversal in the terminal.
///
/// The engine itself never waits; this loop owns all pacing. With `step_mode`
/// the bot advances once per Enter keypress, otherwise it sleeps `pace_ms`
/// between moves.
pub fn run(
    maze: &str,
    policy: Policy,
    pace_ms: u64,
    step_mode: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let maze = mazes::by_name(maze).ok_or_else(|| super::solve::unknown_maze(maze))?;
    let graph = maze.graph()?;
    let mut run = Traversal::new(&graph, maze.start, maze.goal, policy)?;

    let stdin = std::io::stdin();
    let mut steps = 0usize;

    draw_frame(maze, run.current(), steps, policy, quiet);
    if !step_mode {
        std::thread::sleep(Duration::from_millis(800));
    }

    loop {
        if step_mode {
            prompt_for_enter(&stdin)?;
        } else {
            std::thread::sleep(Duration::from_millis(pace_ms));
        }

        let outcome = run.step();
        steps += 1;

        match outcome {
            StepOutcome::Advanced(_) | StepOutcome::Backtracked(_) => {
                draw_frame(maze, run.current(), steps, policy, quiet);
            }
            StepOutcome::Reached => {
                draw_frame(maze, run.current(), steps, policy, quiet);
                println!(
                    "{} goal {} found in {} steps ({} edges walked)",
                    "Reached:".green().bold(),
                    maze.goal,
                    steps,
                    run.visited_edge_count(),
                );
                break;
            }
            StepOutcome::Exhausted => {
                draw_frame(maze, None, steps, policy, quiet);
                println!(
                    "{} the track has no unvisited path to {} ({} edges walked)",
                    "Exhausted:".red().bold(),
                    maze.goal,
                    run.visited_edge_count(),
                );
                break;
            }
        }
    }

    Ok(())
}

fn draw_frame(
    maze: &mazes::BuiltinMaze,
    bot: Option<Node>,
    steps: usize,
    policy: Policy,
    quiet: bool,
) {
    // Clear screen and home the cursor.
    print!("\x1B[2J\x1B[1;1H");
    println!("{} — {} ({})", maze.name.bold(), maze.description, policy);
    println!();
    print!("{}", render::render_maze(maze, bot));
    println!();
    if !quiet {
        let position = bot.map_or("—".to_string(), |n| n.to_string());
        println!("{}   step {}  bot at {}", render::legend(), steps, position);
    }
    let _ = std::io::stdout().flush();
}

fn prompt_for_enter(stdin: &std::io::Stdin) -> anyhow::Result<()> {
    print!("{}", "press Enter to step ".dimmed());
    std::io::stdout().flush()?;
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(())
}
