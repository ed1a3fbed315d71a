//! Prompt assembly for the interpretation service.
//!
//! Purely a formatting step: structured divination data in, one opaque text
//! block out. Formatting the same request twice yields byte-identical text.

use std::fmt::Write;

use zy_divination::{DivinationRequest, HexagramPair};

/// System instruction sent alongside every interpretation prompt.
pub const SYSTEM_PROMPT: &str = "你是一位专业的易经占卜师，语言庄重、玄妙且富有洞察力。";

/// Build the user-turn prompt for a completed consultation.
///
/// Enumerates the category, question, both hexagrams with their keys, and
/// the six lines bottom to top, then the fixed four-section answer
/// structure the diviner is asked to follow.
pub fn build_prompt(request: &DivinationRequest, hexagrams: &HexagramPair) -> String {
    let mut prompt = String::new();

    prompt.push_str("你是一位精通《周易》六爻、传统易理与现代心理学的解卦宗师。\n\n");
    let _ = writeln!(prompt, "用户咨询：{}", request.category);
    let _ = writeln!(prompt, "具体问题：{}", request.question);
    prompt.push('\n');
    prompt.push_str("起卦详情：\n");
    let _ = writeln!(
        prompt,
        "- 本卦：{} ({})",
        hexagrams.original.name, hexagrams.original.key
    );
    let _ = writeln!(
        prompt,
        "- 变卦：{} ({})",
        hexagrams.changed.name, hexagrams.changed.key
    );
    prompt.push_str("- 六爻详情（由下至上）：\n");
    for (i, record) in request.reading.lines().iter().enumerate() {
        let _ = writeln!(prompt, "  第{}爻: {}", i + 1, record.line);
    }
    prompt.push('\n');
    prompt.push_str("请按以下结构提供深度解析：\n");
    prompt.push_str("### 1. 卦象全解\n解析本卦与变卦的整体吉凶，阐述当前态势。\n");
    prompt.push_str("### 2. 动爻玄机\n重点分析动爻对咨询问题的具体预示。\n");
    let _ = writeln!(
        prompt,
        "### 3. 行动建议\n根据易理，针对 \"{}\" 给出具体的行动指南。",
        request.question
    );
    prompt.push_str("### 4. 易经寄语\n一句短语总结应对之道。");

    prompt
}
