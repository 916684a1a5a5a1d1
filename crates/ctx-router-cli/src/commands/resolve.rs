use anyhow::Result;
use colored::Colorize;
use ctx_router::{normalize_path, Config, Navigator};
use std::path::Path;

use crate::report::print_diagnostics;

pub fn execute(config_path: &Path, path: Option<&str>) -> Result<()> {
    let config = Config::load(config_path)?;
    let routes = config.routes_tree();

    let mut navigator = Navigator::from_config(&config.router);
    if let Some(path) = path {
        navigator.navigate(path);
    }

    println!(
        "{} {}",
        "Resolving".green().bold(),
        normalize_path(navigator.path()).cyan()
    );
    println!();

    let resolution = navigator.resolve(&routes);
    if !resolution.is_match() {
        println!("{}", "No route matched; nothing rendered".yellow());
    }

    for (depth, matched) in resolution.matches.iter().enumerate() {
        let indent = "  ".repeat(depth);
        let element = matched.element.map(String::as_str).unwrap_or("<no element>");
        println!(
            "{}{} {} {}",
            indent,
            element.bold(),
            "@".dimmed(),
            matched.full_pattern.cyan()
        );
    }

    if let Some(params) = resolution.params().filter(|params| !params.is_empty()) {
        println!();
        println!("{}", "Parameters".green().bold());
        for (name, value) in params.iter() {
            println!("  {} = {}", name.cyan(), value);
        }
    }

    print_diagnostics(&resolution.diagnostics);
    Ok(())
}
