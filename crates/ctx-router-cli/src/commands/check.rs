use anyhow::Result;
use colored::Colorize;
use ctx_router::{check_match, check_params};

use crate::report::print_diagnostics;

pub fn execute_match(path: &str, pattern: &str) -> Result<()> {
    let checked = check_match(path, pattern);

    let verdict = if checked.value {
        "match".green().bold()
    } else {
        "no match".red().bold()
    };
    println!("{} {} {}", path.cyan(), "→".dimmed(), pattern.cyan());
    println!("{}", verdict);

    print_diagnostics(&checked.diagnostics);
    Ok(())
}

pub fn execute_params(path: &str, pattern: &str) -> Result<()> {
    let checked = check_params(path, pattern);

    if checked.value.is_empty() {
        println!("{}", "No parameters captured".yellow());
    } else {
        for (name, value) in checked.value.iter() {
            println!("{} = {}", name.cyan(), value);
        }
    }

    print_diagnostics(&checked.diagnostics);
    Ok(())
}
