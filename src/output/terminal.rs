// Colored terminal output for `batmi classify`.

use colored::Colorize;

use crate::classifier::Classification;

/// Width of the probability bar, in characters.
const BAR_WIDTH: usize = 20;

/// Display a classification as a labeled bar chart.
pub fn display_classification(input: &str, result: &Classification) {
    println!("\n{}", "=== Marathi News Topic ===".bold());
    println!("  Input: {}", super::truncate_chars(input.trim(), 80).dimmed());
    println!("  Tokens used: {}", result.token_count);
    if result.token_count == 0 {
        println!(
            "  {}",
            "No Marathi words survived preprocessing; the result reflects the model prior."
                .yellow()
        );
    }
    println!();

    println!(
        "  Predicted topics: {}",
        result.confident_labels.join(", ").bold().green()
    );
    println!();

    for (i, topic) in result.distribution.iter().enumerate() {
        let filled = (topic.probability * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(BAR_WIDTH - filled));

        let colored_bar = if topic.probability >= 0.5 {
            bar.bright_green()
        } else if topic.probability >= 0.2 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>2}. {:<16} {} {:>6.2}%",
            i + 1,
            topic.label.bold(),
            colored_bar,
            topic.probability * 100.0
        );
    }
    println!();
}
