use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::maze::types::Policy;

#[derive(Parser)]
#[command(name = "mazebot")]
#[command(author, version, about)]
#[command(long_about = "A line-follower maze exploration simulator.\n\n\
    Watch a bot explore a branching track depth-first, ranking every junction\n\
    by turn priority and backtracking out of dead ends.\n\n\
    Examples:\n  \
    mazebot classic                      Animate the classic track\n  \
    mazebot classic --step               Advance one move per Enter\n  \
    mazebot solve extended --json        Solve and print a JSON report\n  \
    mazebot mazes                        List built-in tracks")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Built-in maze to animate (see `mazebot mazes`)
    pub maze: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Turn-priority policy for the run
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Milliseconds to wait between moves
    #[arg(long)]
    pub pace: Option<u64>,

    /// Advance one move per Enter keypress instead of pacing
    #[arg(long)]
    pub step: bool,

    /// Increase output verbosity (-v for per-step detail)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a maze to its terminal outcome and print the result
    Solve {
        /// Built-in maze to solve
        maze: String,

        /// Turn-priority policy for the run
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,

        /// Print a machine-readable JSON report
        #[arg(long)]
        json: bool,
    },

    /// List the built-in mazes
    Mazes,

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.policy, defaults.pace_ms)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Prefer Right, then Straight, then Left, then Back
    RightFirst,
    /// Prefer Left, then Straight, then Right, then Back
    LeftFirst,
}

impl PolicyArg {
    pub fn to_policy(self) -> Policy {
        match self {
            PolicyArg::RightFirst => Policy::RightFirst,
            PolicyArg::LeftFirst => Policy::LeftFirst,
        }
    }
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config = crate::config::Config::load_or_default();
        let default_policy = config.default_policy();

        match self.command {
            Some(Commands::Solve { maze, policy, json }) => crate::commands::solve::run(
                &maze,
                policy.map(PolicyArg::to_policy).unwrap_or(default_policy),
                json,
                self.verbose,
                self.quiet,
            ),
            Some(Commands::Mazes) => {
                crate::commands::mazes::run();
                Ok(())
            }
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => {
                if let Some(maze) = self.maze {
                    crate::commands::watch::run(
                        &maze,
                        self.policy.map(PolicyArg::to_policy).unwrap_or(default_policy),
                        self.pace.unwrap_or_else(|| config.default_pace_ms()),
                        self.step,
                        self.quiet,
                    )
                } else {
                    use clap::CommandFactory;
                    let mut cmd = Self::command();
                    cmd.print_help()?;
                    println!();
                    Ok(())
                }
            }
        }
    }
}
