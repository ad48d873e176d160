#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

bitflags! {
    /// Writing systems present in a piece of text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct ScriptFlags: u16 {
        const HIRAGANA = 1;
        /// ァ..ヶ only; the rest of the katakana block is `KATAKANA_EXTENDED`.
        const KATAKANA = 2;
        /// Long vowel marks `ー` and `－`.
        const PROLONGED = 4;
        const KATAKANA_EXTENDED = 8;
        const KANJI = 16;
        const LATIN = 32;
        const DIGIT = 64;
        const WHITESPACE = 128;
        const OTHER = 256;

        const JAPANESE = Self::HIRAGANA.bits()
            | Self::KATAKANA.bits()
            | Self::PROLONGED.bits()
            | Self::KATAKANA_EXTENDED.bits()
            | Self::KANJI.bits();
    }
}

impl ScriptFlags {
    pub fn of_char(c: char) -> Self {
        match c {
            '\u{3041}'..='\u{309F}' => Self::HIRAGANA,
            '\u{30A1}'..='\u{30F6}' => Self::KATAKANA,
            'ー' | '－' => Self::PROLONGED,
            '\u{30F7}'..='\u{30FA}'
            | '\u{30FD}'..='\u{30FF}'
            | '\u{31F0}'..='\u{31FF}'
            | '\u{FF66}'..='\u{FF9D}' => Self::KATAKANA_EXTENDED,
            '々' | '〆'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2FA1F}' => Self::KANJI,
            '0'..='9' | '\u{FF10}'..='\u{FF19}' => Self::DIGIT,
            'a'..='z' | 'A'..='Z' | '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => Self::LATIN,
            c if c.is_whitespace() => Self::WHITESPACE,
            _ => Self::OTHER,
        }
    }

    /// Union of the scripts of every character in `text` (empty for "").
    pub fn of(text: &str) -> Self {
        text.chars().fold(Self::empty(), |acc, c| acc | Self::of_char(c))
    }

    /// True when `text` is non-empty and every character belongs to `allowed`.
    pub fn only(text: &str, allowed: Self) -> bool {
        let flags = Self::of(text);
        !flags.is_empty() && allowed.contains(flags)
    }

    pub fn has_japanese(self) -> bool {
        self.intersects(Self::JAPANESE)
    }
}
