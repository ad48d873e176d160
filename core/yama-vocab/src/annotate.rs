use serde::Serialize;
use yama_protocol::{Segment, WordStatus};

use crate::book::WordBook;

/// A segment together with the learner's status for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedSegment {
    #[serde(flatten)]
    pub segment: Segment,
    /// Looked up by base form; `None` for punctuation and other non-word segments.
    pub status: Option<WordStatus>,
}

pub fn annotate(segments: &[Segment], book: &WordBook) -> Vec<AnnotatedSegment> {
    segments
        .iter()
        .map(|segment| AnnotatedSegment {
            status: segment.is_word_like.then(|| book.status_of(&segment.base_form)),
            segment: segment.clone(),
        })
        .collect()
}
