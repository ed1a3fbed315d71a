//! Subcommand implementations.

pub mod ask;
pub mod cast;
pub mod hexagrams;

use colored::Colorize;
use rand::Rng;

use zy_divination::{HexagramPair, LineRecord, Reading};

/// Pick the seed for a session: the user's, or a fresh random one.
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

/// Render one line of the hexagram diagram.
fn line_glyph(record: &LineRecord) -> String {
    let line = record.line;
    let bar = if line.is_yang() {
        "━━━━━━━"
    } else {
        "━━━ ━━━"
    };
    let mark = if line.is_changing() {
        if line.is_yang() { " ○" } else { " ✕" }
    } else {
        ""
    };
    if line.is_changing() {
        format!("{}{}", bar.red(), mark.red())
    } else {
        format!("{bar}{mark}")
    }
}

/// Print a completed reading as a stacked diagram, top line first.
fn print_reading(reading: &Reading) {
    let labels = ["初爻", "二爻", "三爻", "四爻", "五爻", "上爻"];
    for (record, label) in reading.lines().iter().zip(labels).rev() {
        println!(
            "  {label}  {}  {} ({}字)",
            line_glyph(record),
            record.line,
            record.marked_count
        );
    }
}

/// Print the resolved original and changed hexagrams.
fn print_hexagrams(pair: &HexagramPair) {
    println!("  本卦: {}", pair.original.to_string().bold());
    if pair.has_change() {
        println!("  变卦: {}", pair.changed.to_string().bold());
    } else {
        println!("  变卦: {} (无动爻)", pair.changed);
    }
}
