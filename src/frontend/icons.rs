use memory_game::SymbolId;

const UNKNOWN: &str = "\u{2753}";

pub fn glyph(symbol: &SymbolId) -> &'static str {
    match symbol.as_str() {
        "hearts" => "\u{2764}\u{fe0f}",
        "water-drop" => "\u{1f4a7}",
        "dice-six-faces-five" => "\u{1f3b2}",
        "umbrella" => "\u{2602}\u{fe0f}",
        "cube" => "\u{1f9ca}",
        "beach-ball" => "\u{1f3d0}",
        "dragonfly" => "\u{1fab0}",
        "hummingbird" => "\u{1f426}",
        "flower-emblem" => "\u{1f33c}",
        "open-book" => "\u{1f4d6}",
        _ => UNKNOWN,
    }
}
