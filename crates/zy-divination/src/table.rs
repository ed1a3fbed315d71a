//! Static King Wen hexagram name table.
//!
//! Keys are 6-character strings over {'0','1'}, one bit per line, bottom to
//! top ('1' = yang). The first three characters are the lower trigram, the
//! last three the upper. Entries are listed in King Wen order (1-64).

/// Sentinel name returned for keys outside the canonical 64.
pub const UNKNOWN_HEXAGRAM: &str = "未知卦";

/// The 64 hexagrams in King Wen order: (key, name).
pub const KING_WEN: &[(&str, &str)] = &[
    ("111111", "乾为天"),
    ("000000", "坤为地"),
    ("100010", "水雷屯"),
    ("010001", "山水蒙"),
    ("111010", "水天需"),
    ("010111", "天水讼"),
    ("010000", "地水师"),
    ("000010", "水地比"),
    ("111011", "风天小畜"),
    ("110111", "天泽履"),
    ("111000", "地天泰"),
    ("000111", "天地否"),
    ("101111", "天火同人"),
    ("111101", "火天大有"),
    ("001000", "地山谦"),
    ("000100", "雷地豫"),
    ("100110", "泽雷随"),
    ("011001", "山风蛊"),
    ("110000", "地泽临"),
    ("000011", "风地观"),
    ("100101", "火雷噬嗑"),
    ("101001", "山火贲"),
    ("000001", "山地剥"),
    ("100000", "地雷复"),
    ("100111", "天雷无妄"),
    ("111001", "山天大畜"),
    ("100001", "山雷颐"),
    ("011110", "泽风大过"),
    ("010010", "坎为水"),
    ("101101", "离为火"),
    ("001110", "泽山咸"),
    ("011100", "雷风恒"),
    ("001111", "天山遁"),
    ("111100", "雷天大壮"),
    ("000101", "火地晋"),
    ("101000", "地火明夷"),
    ("101011", "风火家人"),
    ("110101", "火泽睽"),
    ("001010", "水山蹇"),
    ("010100", "雷水解"),
    ("110001", "山泽损"),
    ("100011", "风雷益"),
    ("111110", "泽天夬"),
    ("011111", "天风姤"),
    ("000110", "泽地萃"),
    ("011000", "地风升"),
    ("010110", "泽水困"),
    ("011010", "水风井"),
    ("101110", "泽火革"),
    ("011101", "火风鼎"),
    ("100100", "震为雷"),
    ("001001", "艮为山"),
    ("001011", "风山渐"),
    ("110100", "雷泽归妹"),
    ("101100", "雷火丰"),
    ("001101", "火山旅"),
    ("011011", "巽为风"),
    ("110110", "兑为泽"),
    ("010011", "风水涣"),
    ("110010", "水泽节"),
    ("110011", "风泽中孚"),
    ("001100", "雷山小过"),
    ("101010", "水火既济"),
    ("010101", "火水未济"),
];

/// Look up a hexagram name by key.
///
/// Total: any key not in the table resolves to [`UNKNOWN_HEXAGRAM`] rather
/// than failing.
pub fn hexagram_name(key: &str) -> &'static str {
    KING_WEN
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_HEXAGRAM)
}
