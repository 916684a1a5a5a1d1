use colored::Colorize;
use ctx_router::Diagnostic;

/// Prints diagnostics as warnings, one per line
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    println!();
    for diagnostic in diagnostics {
        println!("{} {}", "⚠".yellow(), diagnostic.to_string().yellow());
    }
}
