use anyhow::Result;
use colored::Colorize;
use ctx_router::Config;
use std::path::Path;

pub fn execute(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let declared = config.routes_tree().declared_routes();

    if declared.is_empty() {
        println!("{}", "No routes declared".yellow());
        return Ok(());
    }

    for route in &declared {
        println!(
            "{}{} {} {}",
            "  ".repeat(route.depth),
            route.full_pattern.cyan(),
            "matches".dimmed(),
            route.match_pattern
        );
    }

    Ok(())
}
