use serde::{Deserialize, Serialize};
use tracing::debug;
use yama_lexicon::pos::{self, sub1};
use yama_protocol::{OffsetUnit, RawToken};

use crate::error::TokenizeError;
use crate::offset::byte_to_offset;
use crate::tagset::{Tagset, TagsetAdapter};

/// A token as emitted by a lindera-style morphological analyzer. Offsets are UTF-8 bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerToken {
    pub surface: String,
    pub base_form: String,
    pub byte_start: usize,
    pub byte_end: usize,
    pub reading: String,
    pub part_of_speech: String,
    pub part_of_speech_subcategory1: String,
}

/// Parse a JSON array of analyzer tokens.
pub fn parse_tokens(json: &str) -> Result<Vec<AnalyzerToken>, TokenizeError> {
    Ok(serde_json::from_str(json)?)
}

/// Turns analyzer output into segmenter input.
pub struct TokenAdapter<'t> {
    tagset: &'t dyn TagsetAdapter,
    unit: OffsetUnit,
}

impl TokenAdapter<'static> {
    pub fn new(tagset: Tagset, unit: OffsetUnit) -> Self {
        Self { tagset: tagset.adapter(), unit }
    }
}

impl<'t> TokenAdapter<'t> {
    pub fn with_adapter(tagset: &'t dyn TagsetAdapter, unit: OffsetUnit) -> Self {
        Self { tagset, unit }
    }

    /// `text` must be the exact string the analyzer ran on.
    pub fn adapt(&self, text: &str, tokens: &[AnalyzerToken]) -> Vec<RawToken> {
        let out: Vec<RawToken> = tokens.iter().map(|token| self.adapt_one(text, token)).collect();
        debug!(tokens = out.len(), unit = ?self.unit, "adapted analyzer tokens");
        out
    }

    fn adapt_one(&self, text: &str, token: &AnalyzerToken) -> RawToken {
        let sub = if token.part_of_speech_subcategory1.is_empty() {
            sub1::NONE
        } else {
            token.part_of_speech_subcategory1.as_str()
        };
        let (pos, pos_sub1) = self.tagset.map(&token.part_of_speech, sub);

        let base_form = match token.base_form.as_str() {
            "" | "*" => token.surface.clone(),
            base => base.to_string(),
        };

        let blank = token.surface.chars().all(char::is_whitespace);
        let is_word_like = pos != pos::SYMBOL && !blank;

        RawToken {
            surface_form: token.surface.clone(),
            base_form,
            start_index: Some(byte_to_offset(text, token.byte_start, self.unit)),
            end_index: Some(byte_to_offset(text, token.byte_end, self.unit)),
            reading: token.reading.clone(),
            pos: pos.to_string(),
            pos_sub1: pos_sub1.to_string(),
            is_word_like,
        }
    }
}
