//! Interactive consultation: input, casting, and interpretation.
//!
//! Mirrors the ritual flow: choose a category, state the question, throw
//! the coins six times, then hand the completed reading to the external
//! diviner. A failed interpretation can be retried manually with the same
//! reading; the cast is never repeated.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use zy_divination::{Category, DivinationSession, SessionConfig};
use zy_interpret::{DeepSeekClient, Interpreter, build_prompt};

pub fn run(seed: Option<u64>, model: Option<&str>, dry_run: bool) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    println!("  {} 诚心叩问", "周易算卦".bold());
    for (i, cat) in Category::all().iter().enumerate() {
        println!("    {}. {cat}", i + 1);
    }

    let category = loop {
        let input = read_line(&mut reader, "请选择类别 (1-6): ")?;
        if let Some(cat) = parse_category_choice(&input) {
            break cat;
        }
        println!("{}", "无法识别的类别，请重新输入。".yellow());
    };

    let question = loop {
        let input = read_line(&mut reader, "请详述您的困惑: ")?;
        if !input.is_empty() {
            break input;
        }
        println!("{}", "问题不能为空。".yellow());
    };

    let seed = super::resolve_seed(seed);
    let mut session =
        DivinationSession::new(category, question, SessionConfig::default().with_seed(seed));

    let labels = ["初爻", "二爻", "三爻", "四爻", "五爻", "上爻"];
    for label in labels {
        read_line(&mut reader, &format!("按回车投掷 {label} ..."))?;
        let (toss, record) = session.throw().map_err(|e| e.to_string())?;
        println!("  {toss} → {}", record.line);
    }

    let pair = session.resolve().map_err(|e| e.to_string())?;
    println!("\n  {}", "起卦完成".bold());
    super::print_reading(session.reading());
    println!();
    super::print_hexagrams(&pair);
    println!();

    let request = session.into_request();
    let prompt = build_prompt(&request, &pair);

    if dry_run {
        println!("{prompt}");
        return Ok(());
    }

    let mut client = DeepSeekClient::from_env().map_err(|e| e.to_string())?;
    if let Some(model) = model {
        client = client.with_model(model);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| e.to_string())?;

    // No automatic retry: each attempt is a single call, re-invoked only on
    // the user's request with the same completed reading.
    loop {
        println!("  {} 正在推演天机...", client.model());
        match runtime.block_on(client.interpret(&prompt)) {
            Ok(text) => {
                println!("\n{text}");
                println!("\n  结果仅供人生参考 · 运势掌握在自己手中");
                return Ok(());
            }
            Err(e) => {
                println!("{}", format!("感应中断: {e}").yellow());
                let again = read_line(&mut reader, "重新尝试感应？ [y/N]: ")?;
                if !again.eq_ignore_ascii_case("y") {
                    return Ok(());
                }
            }
        }
    }
}

fn parse_category_choice(input: &str) -> Option<Category> {
    if let Ok(n) = input.parse::<usize>() {
        return Category::all().get(n.checked_sub(1)?).copied();
    }
    Category::parse(input)
}

fn read_line(reader: &mut impl BufRead, prompt: &str) -> Result<String, String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Err("unexpected end of input".to_string()),
        Ok(_) => Ok(line.trim().to_string()),
        Err(e) => Err(e.to_string()),
    }
}
