//! Non-interactive casting of a full reading.

use colored::Colorize;

use zy_divination::{Category, DivinationSession, SessionConfig};

pub fn run(category: &str, question: &str, seed: Option<u64>) -> Result<(), String> {
    let category = Category::parse(category).ok_or_else(|| {
        format!(
            "unknown category '{category}' (expected one of: {})",
            Category::all()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    let seed = super::resolve_seed(seed);
    let mut session =
        DivinationSession::new(category, question, SessionConfig::default().with_seed(seed));

    println!("  {} {category}", "起卦".bold());
    if !question.is_empty() {
        println!("  问: {question}");
    }
    println!("  Seed: {seed}\n");

    for n in 1..=6 {
        let (toss, record) = session.throw().map_err(|e| e.to_string())?;
        println!("  第{n}爻 {toss} → {}", record.line);
    }
    println!();

    print_result(&session)
}

fn print_result(session: &DivinationSession) -> Result<(), String> {
    let pair = session.resolve().map_err(|e| e.to_string())?;
    super::print_reading(session.reading());
    println!();
    super::print_hexagrams(&pair);
    Ok(())
}
