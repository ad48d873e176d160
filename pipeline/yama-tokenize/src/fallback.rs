//! Script-run tokenizer for when no morphological analyzer is loaded.
//!
//! Splits text into maximal runs of one script. This is far coarser than real morphemes but keeps
//! offsets exact, so the rest of the pipeline still works.

use nom::{
    bytes::complete::take_while1,
    character::complete::anychar,
    combinator::{map, peek, recognize},
    IResult,
};
use yama_lexicon::pos;
use yama_protocol::{OffsetUnit, RawToken, ScriptFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Kanji,
    Hiragana,
    /// Katakana including the long vowel mark.
    Katakana,
    /// ASCII and full-width letters and digits.
    Alphanumeric,
    Whitespace,
    /// Anything else, always one character long.
    Symbol,
}

impl RunKind {
    pub fn of(c: char) -> Self {
        let flags = ScriptFlags::of_char(c);
        if flags.intersects(ScriptFlags::KANJI) {
            RunKind::Kanji
        } else if flags.intersects(ScriptFlags::HIRAGANA) {
            RunKind::Hiragana
        } else if flags.intersects(ScriptFlags::KATAKANA | ScriptFlags::PROLONGED | ScriptFlags::KATAKANA_EXTENDED) {
            RunKind::Katakana
        } else if flags.intersects(ScriptFlags::LATIN | ScriptFlags::DIGIT) {
            RunKind::Alphanumeric
        } else if flags.intersects(ScriptFlags::WHITESPACE) {
            RunKind::Whitespace
        } else {
            RunKind::Symbol
        }
    }

    pub fn is_japanese(self) -> bool {
        matches!(self, RunKind::Kanji | RunKind::Hiragana | RunKind::Katakana)
    }
}

fn run(input: &str) -> IResult<&str, (RunKind, &str)> {
    let (_, first) = peek(anychar)(input)?;
    match RunKind::of(first) {
        RunKind::Symbol => map(recognize(anychar), |s| (RunKind::Symbol, s))(input),
        kind => map(take_while1(move |c| RunKind::of(c) == kind), move |s| (kind, s))(input),
    }
}

/// Split `text` into script runs with offsets counted in `unit`.
pub fn split_runs(text: &str, unit: OffsetUnit) -> Vec<RawToken> {
    let mut input = text;
    let mut cursor = 0;
    let mut tokens = Vec::new();

    while !input.is_empty() {
        let (rest, (kind, surface)) = match run(input) {
            Ok(res) => res,
            Err(_) => break,
        };

        let len = unit.measure(surface);
        tokens.push(
            RawToken::new(surface, pos::UNKNOWN)
                .with_span(cursor, cursor + len)
                .with_word_like(kind.is_japanese()),
        );
        cursor += len;
        input = rest;
    }

    tokens
}
