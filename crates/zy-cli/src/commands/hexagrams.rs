//! King Wen table listing and key lookup.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use zy_divination::table::KING_WEN;
use zy_divination::{UNKNOWN_HEXAGRAM, hexagram_name};

pub fn run(key: Option<&str>) -> Result<(), String> {
    match key {
        Some(key) => lookup(key),
        None => list_all(),
    }
}

fn lookup(key: &str) -> Result<(), String> {
    let name = hexagram_name(key);
    if name == UNKNOWN_HEXAGRAM {
        println!("{key} → {name} (不在六十四卦之列)");
    } else {
        println!("{key} → {name}");
    }
    Ok(())
}

fn list_all() -> Result<(), String> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "卦名", "键值"]);

    for (i, (key, name)) in KING_WEN.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), (*name).to_string(), (*key).to_string()]);
    }

    println!("{table}");
    Ok(())
}
