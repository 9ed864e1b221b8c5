use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> anyhow::Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());
    println!();
    println!(
        "  defaults.policy   = {}",
        config.default_policy().name().green()
    );
    println!(
        "  defaults.pace_ms  = {}",
        config.default_pace_ms().to_string().green()
    );

    if !path.exists() {
        println!();
        println!("{}", "(showing built-in defaults; no file written yet)".dimmed());
    }
    Ok(())
}

fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value} ({})",
        "Saved:".green().bold(),
        path.display()
    );
    Ok(())
}
