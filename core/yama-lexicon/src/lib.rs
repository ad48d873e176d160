#![cfg_attr(not(test), no_std)]

pub mod pos;
pub mod tables;

use yama_protocol::ScriptFlags;

/// Katakana-only text (ァ..ヶ plus the long vowel marks ー and －).
pub fn is_katakana(text: &str) -> bool {
    ScriptFlags::only(text, ScriptFlags::KATAKANA | ScriptFlags::PROLONGED)
}

/// One to five repeats of the same laugh character (`w` or full-width `ｗ`).
pub fn is_laugh_filler(text: &str) -> bool {
    let mut chars = text.chars();
    let first = match chars.next() {
        Some(c @ ('w' | 'ｗ')) => c,
        _ => return false,
    };

    let mut count = 1;
    for c in chars {
        if c != first {
            return false;
        }
        count += 1;
    }
    count <= 5
}

/// A bare number the analyzer left untagged or tagged as a noun ("100", "３").
pub fn is_numeral(surface: &str, pos: &str) -> bool {
    (pos == pos::UNKNOWN || pos == pos::NOUN) && ScriptFlags::only(surface, ScriptFlags::DIGIT)
}

/// Explanatory んだ / えだ endings (行く + んだ).
pub fn is_explanatory(surface: &str) -> bool {
    tables::EXPLANATORY_PREFIXES
        .iter()
        .any(|prefix| surface.starts_with(prefix))
}

pub fn ends_with_any(text: &str, endings: &[char]) -> bool {
    text.chars().next_back().is_some_and(|last| endings.contains(&last))
}
