//! Token merging for Japanese text.
//!
//! Takes the fine-grained morphemes of an IPADIC-style analyzer and regroups them into the units
//! a learner looks up: 食べ + られ + ない becomes 食べられない with base form 食べる.
//!
//! The pipeline is two passes:
//! 1. [`idioms::IdiomMatcher`] fuses fixed expressions (気 + に + なる).
//! 2. [`assembler::merge`] folds the rest left to right using the [`rules::MERGE_RULES`] cascade.
//!
//! Offsets are finally repaired by [`assembler::normalize`] in the configured [`OffsetUnit`].

pub mod assembler;
pub mod idioms;
pub mod rules;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

pub use idioms::IdiomMatcher;
pub use rules::{MergeRule, MERGE_RULES};
pub use yama_protocol::{OffsetUnit, RawToken, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentOptions {
    /// Run idiom matching and the merge rules. When off, tokens pass through one to one.
    #[serde(alias = "mergeTokens")]
    pub merge_tokens: bool,
    #[serde(alias = "offsetUnit")]
    pub offset_unit: OffsetUnit,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self { merge_tokens: true, offset_unit: OffsetUnit::Char }
    }
}

#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    options: SegmentOptions,
    idioms: IdiomMatcher<'a>,
}

impl Default for Segmenter<'static> {
    fn default() -> Self {
        Self::new(SegmentOptions::default())
    }
}

impl Segmenter<'static> {
    pub fn new(options: SegmentOptions) -> Self {
        Self { options, idioms: IdiomMatcher::default() }
    }
}

impl<'a> Segmenter<'a> {
    pub fn with_idioms(options: SegmentOptions, idioms: IdiomMatcher<'a>) -> Self {
        Self { options, idioms }
    }

    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    pub fn segment(&self, tokens: &[RawToken]) -> Vec<Segment> {
        let _span = debug_span!("segment", tokens = tokens.len(), merge = self.options.merge_tokens).entered();

        let merged = if self.options.merge_tokens {
            assembler::merge(self.idioms.apply(tokens))
        } else {
            tokens.to_vec()
        };

        let unit = self.options.offset_unit;
        let segments: Vec<Segment> = merged
            .into_iter()
            .map(|token| assembler::normalize(token, unit))
            .collect();

        debug!(segments = segments.len(), "segmented");
        segments
    }
}

/// Segment with the default options.
pub fn segment(tokens: &[RawToken]) -> Vec<Segment> {
    Segmenter::default().segment(tokens)
}
