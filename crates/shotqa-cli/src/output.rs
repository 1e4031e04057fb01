//! Terminal output formatting.

use colored::Colorize;
use shotqa_core::{PromptTemplate, NO_ANALYSIS_GENERATED};

/// Print the model's analysis.
pub fn print_analysis(analysis: &str) {
    println!();
    println!("{}", "Analysis Results".yellow().bold());
    println!();
    if analysis == NO_ANALYSIS_GENERATED {
        println!("{}", analysis.dimmed());
    } else {
        println!("{}", analysis);
    }
}

/// Print templates as a table.
pub fn print_templates_table(templates: &[PromptTemplate]) {
    println!("{:<16} {:<16} {}", "Focus", "Label", "First line");
    println!("{}", "-".repeat(72));

    for template in templates {
        let first_line = template.text.lines().next().unwrap_or_default();
        println!(
            "{:<16} {:<16} {}",
            template.identifier.cyan(),
            template.label,
            truncate(first_line, 40).dimmed()
        );
    }

    println!();
    println!("{}", "Unrecognized focus values use the general template.".dimmed());
}

/// Print a single template, noting when the requested identifier fell back.
pub fn print_template(template: &PromptTemplate, requested: &str) {
    println!("{} {}", template.label.cyan().bold(), format!("({})", template.identifier).dimmed());
    if requested != template.identifier {
        println!("{}", format!("'{}' is not a recognized focus; showing the fallback.", requested).yellow());
    }
    println!();
    println!("{}", template.text);
}

/// Truncate to at most `max` characters, marking the cut with "...".
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
