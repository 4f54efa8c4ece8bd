//! Display functions for command results

use crate::commands::SimulationResult;
use crate::core::STARTING_LIVES;
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words played:     {}", result.total_words);
    println!(
        "   Won:              {}",
        format!("{} ({:.1}%)", result.won, result.win_rate())
            .bright_green()
            .bold()
    );
    println!(
        "   Lost:             {}",
        format!("{}", result.lost).red()
    );
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score()).bright_yellow()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Lives remaining:".bright_cyan().bold());
    for lives in (0..=STARTING_LIVES).rev() {
        let count = result.lives_distribution[usize::from(lives)];
        let pct = if result.total_words == 0 {
            0.0
        } else {
            (count as f64 / result.total_words as f64) * 100.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {lives}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.lost_words.is_empty() {
        println!("\n💀 {}", "Words not guessed:".bright_cyan().bold());
        let words: Vec<String> = result.lost_words.iter().map(|w| w.to_uppercase()).collect();
        println!("   {}", words.join(", ").red());
    }
}
