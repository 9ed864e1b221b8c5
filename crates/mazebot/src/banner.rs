use colored::Colorize;

pub fn print_banner_with_version() {
    println!();
    println!("  {}", "mazebot".blue().bold());
    println!("  {}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("  version {}", env!("CARGO_PKG_VERSION").green());
    println!("  {}", env!("CARGO_PKG_REPOSITORY").dimmed());
    println!();
}
