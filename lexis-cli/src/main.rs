use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use lexis_core::TextAnalyzer;
use lexis_types::{AnalyzeError, AnalyzerConfig, MetricsReport};

mod sentiment;
use sentiment::LexiconScorer;

const LABEL_WIDTH: usize = 22;
const BAR_WIDTH: usize = 40;

/// Lexis - Text Statistics
#[derive(Parser)]
#[command(name = "lexis")]
#[command(about = "Descriptive text statistics: counts, frequencies, readability")]
#[command(version)]
struct Cli {
    /// File to analyze; reads stdin when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Emit the report as JSON instead of rendering it
    #[arg(long)]
    json: bool,

    /// Minimal variant: top-5 word table
    #[arg(long)]
    minimal: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = read_input(&cli)?;

    let config = if cli.minimal {
        AnalyzerConfig::minimal()
    } else {
        AnalyzerConfig::default()
    };

    let analyzer = TextAnalyzer::with_config(config);
    let report = match analyzer.analyze(&text, &LexiconScorer::new()) {
        Ok(report) => report,
        Err(AnalyzeError::EmptyInput) => {
            eprintln!("{}", "Please enter some text!".yellow().bold());
            process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render(&report);
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn render(report: &MetricsReport) {
    println!("{}", "Analysis Result".green().bold());
    println!("{}", "=".repeat(LABEL_WIDTH + BAR_WIDTH));

    row("Total Lines", report.line_count.to_string());
    row("Total Words", report.word_count.to_string());
    row("Characters", report.char_count.to_string());
    row("Vowels", report.classes.vowels.to_string());
    row("Consonants", report.classes.consonants.to_string());
    row("Digits", report.classes.digits.to_string());
    row("Spaces", report.classes.spaces.to_string());
    row("Special Characters", report.special_count.to_string());
    row("Uppercase", report.uppercase_count.to_string());
    row("Lowercase", report.lowercase_count.to_string());
    row("Reading Time", format!("~{} min", report.reading_time_min));
    row("Readability", format!("{:.1} / 100", report.readability));
    row(
        "Palindrome?",
        if report.is_palindrome { "Yes".to_string() } else { "No".to_string() },
    );
    row("Sentiment", report.sentiment.to_string());

    println!();
    println!("{}", "Cleaned Text".cyan().bold());
    println!("{}", report.cleaned_text);
    println!();
    println!("{}", "Reversed Text".cyan().bold());
    println!("{}", report.reversed_text);

    if !report.top_words.is_empty() {
        println!();
        println!("{}", "Top Frequent Words".cyan().bold());
        for entry in &report.top_words {
            println!("- {}", entry);
        }
    }

    if !report.top_chars.is_empty() {
        println!();
        println!("{}", "Top Frequent Characters".cyan().bold());
        for entry in &report.top_chars {
            println!("- {:?} : {}", entry.term, entry.count);
        }
    }

    if !report.length_histogram.is_empty() {
        println!();
        println!("{}", "Word Length Histogram".cyan().bold());
        let max = report
            .length_histogram
            .values()
            .copied()
            .max()
            .unwrap_or(1) as usize;
        for (len, count) in &report.length_histogram {
            println!(
                "{:>3} | {} {}",
                len,
                "█".repeat(bar_width(*count as usize, max)),
                count
            );
        }
    }

    println!();
    println!("{}", "Character Classes".cyan().bold());
    let classes = [
        ("Vowels", report.classes.vowels),
        ("Consonants", report.classes.consonants),
        ("Digits", report.classes.digits),
        ("Specials", report.special_count),
    ];
    let max = classes.iter().map(|(_, n)| *n).max().unwrap_or(1);
    for (label, value) in classes {
        println!(
            "{:<11}| {} {}",
            label,
            "█".repeat(bar_width(value, max)),
            value
        );
    }

    println!();
    println!("{}", report.to_string().dimmed());
}

fn row(label: &str, value: String) {
    // Pad before coloring; ANSI escapes would throw the width off.
    let padded = format!("{:<width$}", format!("{}:", label), width = LABEL_WIDTH);
    println!("{} {}", padded.bold(), value);
}

/// Scales a count into a bar of at most [`BAR_WIDTH`] cells; nonzero
/// counts always get at least one cell.
fn bar_width(value: usize, max: usize) -> usize {
    if value == 0 || max == 0 {
        return 0;
    }
    ((value * BAR_WIDTH) / max).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_max() {
        assert_eq!(bar_width(10, 10), BAR_WIDTH);
        assert_eq!(bar_width(5, 10), BAR_WIDTH / 2);
    }

    #[test]
    fn bar_never_drops_nonzero_values() {
        assert_eq!(bar_width(1, 10_000), 1);
    }

    #[test]
    fn bar_handles_zeroes() {
        assert_eq!(bar_width(0, 10), 0);
        assert_eq!(bar_width(0, 0), 0);
    }
}
