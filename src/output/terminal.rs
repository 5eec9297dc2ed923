// Colored terminal output for the `score` command.

use colored::Colorize;

use crate::scoring::features::FeatureRecord;
use crate::scoring::level::RiskLevel;
use crate::scoring::risk::ScoreResult;

/// Display a computed score with its inputs and the advice for its level.
pub fn display_score(features: &FeatureRecord, result: &ScoreResult) {
    println!("\n{}", "=== PCOS Risk Assessment ===".bold());
    println!();

    match features.bmi() {
        Some(bmi) => println!("  {:<14} {:.2}", "BMI".dimmed(), bmi),
        None => println!("  {:<14} {}", "BMI".dimmed(), "undefined".dimmed()),
    }
    println!("  {:<14} {} days", "Cycle".dimmed(), features.cycle);
    println!("  {:<14} {}", "Age".dimmed(), features.age);
    println!("  {:<14} {}/4", "Symptoms".dimmed(), features.symptom_count());
    println!();

    println!(
        "  {:<14} {} ({:.2})",
        "Risk".dimmed(),
        result.risk.to_string().bold(),
        result.probability
    );
    println!(
        "  {:<14} {}",
        "Level".dimmed(),
        colorize_level(result.risk_level)
    );

    let advice = result.risk_level.recommendation();
    println!("\n  {}", advice.message.bold());
    for step in advice.steps {
        println!("    - {step}");
    }
    println!();
}

/// Print one warning line per out-of-range field.
pub fn display_range_warnings(violations: &[String]) {
    for violation in violations {
        println!("  {} {}", "!".yellow().bold(), violation.yellow());
    }
}

fn colorize_level(level: RiskLevel) -> colored::ColoredString {
    let label = level.as_str();
    match level {
        RiskLevel::High => label.red().bold(),
        RiskLevel::Medium => label.yellow(),
        RiskLevel::Low => label.green(),
    }
}
