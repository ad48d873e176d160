use alloc::string::String;
use core::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A morpheme as handed over by the external analyzer.
///
/// Offsets are already expressed in text units (see [`crate::OffsetUnit`]), never bytes.
/// Either offset may be missing; the assembler repairs them on output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RawToken {
    pub surface_form: String,
    pub base_form: String,
    pub start_index: Option<usize>,
    pub end_index: Option<usize>,
    pub reading: String,
    /// Coarse part-of-speech tag (IPADIC tagset, e.g. `動詞`).
    pub pos: String,
    /// First sub-category tag (e.g. `接尾`, `自立`).
    pub pos_sub1: String,
    pub is_word_like: bool,
}

impl Default for RawToken {
    fn default() -> Self {
        Self {
            surface_form: String::new(),
            base_form: String::new(),
            start_index: None,
            end_index: None,
            reading: String::new(),
            pos: String::new(),
            pos_sub1: String::from("*"),
            is_word_like: true,
        }
    }
}

impl RawToken {
    /// A word-like token whose base form equals its surface form.
    pub fn new(surface: impl Into<String>, pos: impl Into<String>) -> Self {
        let surface_form = surface.into();
        Self {
            base_form: surface_form.clone(),
            surface_form,
            pos: pos.into(),
            ..Self::default()
        }
    }

    pub fn with_base_form(mut self, base_form: impl Into<String>) -> Self {
        self.base_form = base_form.into();
        self
    }

    pub fn with_pos_sub1(mut self, pos_sub1: impl Into<String>) -> Self {
        self.pos_sub1 = pos_sub1.into();
        self
    }

    pub fn with_reading(mut self, reading: impl Into<String>) -> Self {
        self.reading = reading.into();
        self
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start_index = Some(start);
        self.end_index = Some(end);
        self
    }

    pub fn with_word_like(mut self, is_word_like: bool) -> Self {
        self.is_word_like = is_word_like;
        self
    }
}

/// One learner-facing word unit, possibly built from several raw tokens.
///
/// Offsets are always present and satisfy `start_index <= end_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Segment {
    pub surface_form: String,
    /// Lookup key for dictionaries and the word book.
    pub base_form: String,
    pub start_index: usize,
    pub end_index: usize,
    pub reading: String,
    pub pos: String,
    pub pos_sub1: String,
    pub is_word_like: bool,
}

impl Segment {
    pub fn span(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }
}
