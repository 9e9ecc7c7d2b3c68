//! Terminal output utilities

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use projects_core::OutputMode;
use projects_store::ProjectStatus;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Colour a status value; unknown statuses are left plain
pub fn status(value: &str) -> StyledObject<&str> {
    match value.parse::<ProjectStatus>() {
        Ok(ProjectStatus::Active) => style(value).green(),
        Ok(ProjectStatus::Paused) => style(value).yellow(),
        Ok(ProjectStatus::Archived) => style(value).dim(),
        Err(_) => style(value),
    }
}

/// Create a spinner; hidden unless the terminal is interactive
pub fn spinner(mode: OutputMode, msg: &str) -> ProgressBar {
    if !mode.is_interactive() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(spinner_style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
