use yama_lexicon::tables::{FIXED_IDIOMS, MAX_IDIOM_PARTS};
use yama_protocol::RawToken;

/// Greedy matcher for fixed multi-token expressions.
///
/// At each position every idiom is tried by concatenating consecutive surfaces until the text is
/// at least as long as the idiom or `max_parts` tokens are used up. Of the exact matches the one
/// spanning the most tokens wins; on a tie the idiom listed first is kept.
#[derive(Debug, Clone, Copy)]
pub struct IdiomMatcher<'a> {
    idioms: &'a [&'a str],
    max_parts: usize,
}

impl Default for IdiomMatcher<'static> {
    fn default() -> Self {
        Self::new(FIXED_IDIOMS)
    }
}

impl<'a> IdiomMatcher<'a> {
    pub fn new(idioms: &'a [&'a str]) -> Self {
        Self { idioms, max_parts: MAX_IDIOM_PARTS }
    }

    pub fn with_max_parts(mut self, max_parts: usize) -> Self {
        self.max_parts = max_parts;
        self
    }

    /// Number of leading tokens of `tokens` covered by the best idiom match.
    pub fn longest_match(&self, tokens: &[RawToken]) -> Option<usize> {
        let mut best: Option<usize> = None;

        for idiom in self.idioms {
            let target = idiom.chars().count();
            let mut joined = String::new();
            let mut length = 0;
            let mut parts = 0;

            for token in tokens.iter().take(self.max_parts) {
                if length >= target {
                    break;
                }
                joined.push_str(&token.surface_form);
                length += token.surface_form.chars().count();
                parts += 1;
            }

            if parts > 0 && joined == *idiom && best.map_or(true, |b| parts > b) {
                best = Some(parts);
            }
        }

        best
    }

    /// Replace every idiom occurrence with one synthetic token.
    pub fn apply(&self, tokens: &[RawToken]) -> Vec<RawToken> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            match self.longest_match(&tokens[i..]) {
                Some(parts) => {
                    let fused = fuse(&tokens[i..i + parts]);
                    tracing::trace!(idiom = %fused.surface_form, parts, "idiom matched");
                    out.push(fused);
                    i += parts;
                }
                None => {
                    out.push(tokens[i].clone());
                    i += 1;
                }
            }
        }

        out
    }
}

/// Surface and base form are both the joined text; tags come from the last part.
fn fuse(parts: &[RawToken]) -> RawToken {
    let surface: String = parts.iter().map(|t| t.surface_form.as_str()).collect();
    let reading: String = parts.iter().map(|t| t.reading.as_str()).collect();
    let last = parts.last();

    RawToken {
        base_form: surface.clone(),
        surface_form: surface,
        start_index: parts.first().and_then(|t| t.start_index),
        end_index: last.and_then(|t| t.end_index),
        reading,
        pos: last.map(|t| t.pos.clone()).unwrap_or_default(),
        pos_sub1: last.map(|t| t.pos_sub1.clone()).unwrap_or_default(),
        is_word_like: true,
    }
}
