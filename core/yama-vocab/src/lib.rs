//! Learner vocabulary tracking.
//!
//! A [`WordBook`] maps base forms to a [`WordStatus`]. Segments coming out of the segmenter are
//! looked up by their base form, never by surface, so 食べます and 食べた share one entry.

pub mod annotate;
pub mod book;
pub mod error;

pub use annotate::{annotate, AnnotatedSegment};
pub use book::{WordBook, WordChanged, SNAPSHOT_VERSION};
pub use error::VocabError;
pub use yama_protocol::{Vocabulary, VocabularySnapshot, WordStatus};
