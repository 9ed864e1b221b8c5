use colored::Colorize;

use crate::maze::trace::{Report, trace_to_string};
use crate::maze::types::{Policy, StepOutcome};
use crate::maze::{Solution, solve_maze};
use crate::mazes;

pub fn run(maze: &str, policy: Policy, json: bool, verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let maze = mazes::by_name(maze).ok_or_else(|| unknown_maze(maze))?;
    let graph = maze.graph()?;
    let solution = solve_maze(&graph, maze.start, maze.goal, policy)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&Report::new(maze.name, &solution))?);
        return Ok(());
    }

    if verbose > 0 {
        print_step_detail(&solution);
    }

    if solution.reached() {
        if !quiet {
            println!(
                "{} {} in {} steps ({} forward, {} backtracks, {} edges walked)",
                "Reached".green().bold(),
                solution.goal,
                solution.trace.len(),
                solution.forward_steps(),
                solution.backtracks(),
                solution.visited_edges,
            );
        }
        let path: Vec<String> = solution.path.iter().map(|n| n.to_string()).collect();
        println!("{} {}", "Route:".bold(), path.join(" "));
    } else {
        println!(
            "{} no path from {} to {} ({} edges walked)",
            "Exhausted:".red().bold(),
            solution.start,
            solution.goal,
            solution.visited_edges,
        );
    }

    if verbose > 0 {
        println!("{} {}", "Trace:".bold(), trace_to_string(solution.start, &solution.trace));
    }

    Ok(())
}

fn print_step_detail(solution: &Solution) {
    for (i, outcome) in solution.trace.iter().enumerate() {
        let line = match outcome {
            StepOutcome::Advanced(node) => format!("advance to {node}"),
            StepOutcome::Backtracked(node) => format!("backtrack to {node}"),
            StepOutcome::Reached => "goal reached".to_string(),
            StepOutcome::Exhausted => "exhausted".to_string(),
        };
        eprintln!("{:>4}  {line}", i + 1);
    }
}

pub fn unknown_maze(name: &str) -> anyhow::Error {
    let known: Vec<&str> = mazes::all().iter().map(|m| m.name).collect();
    anyhow::anyhow!("Unknown maze: {name}. Available: {}", known.join(", "))
}
