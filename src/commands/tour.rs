//! `tabgen tour` command.

use std::path::Path;

use crate::context::AppContext;
use crate::tour::{self, Tip};

/// Execute the `tour` command.
///
/// Prints the tour's tips in display order (ascending weight).
///
/// # Errors
///
/// Returns an error string if the tour file cannot be loaded.
pub fn run(ctx: &AppContext, file: &Path) -> Result<(), String> {
    let tour = tour::load(ctx, file)?;

    println!("Tour: {} ({})", tour.label, tour.id);
    for tip in tour.tips() {
        println!("  [{:>3}] {}: {}", tip.weight(), tip.id(), tip.label());
        for (name, value) in tip.attributes() {
            println!("        {name}={value}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn prints_tour_tips() {
        let yaml = "\
id: intro
label: Introduction
tips:
  - id: first
    label: First stop
    weight: 1
    body: Look here.
";
        let ctx = AppContext::in_memory(Utc::now());
        ctx.fs.write(Path::new("/tour.yaml"), yaml).unwrap();

        assert!(run(&ctx, Path::new("/tour.yaml")).is_ok());
    }

    #[test]
    fn missing_tour_file_fails() {
        let ctx = AppContext::in_memory(Utc::now());
        assert!(run(&ctx, Path::new("/absent.yaml")).is_err());
    }
}
