//! The raw tokenizer boundary: everything that turns text or analyzer output into
//! [`RawToken`]s for the segmenter.

pub mod analyzer;
pub mod error;
pub mod fallback;
pub mod offset;
pub mod tagset;

pub use analyzer::{parse_tokens, AnalyzerToken, TokenAdapter};
pub use error::TokenizeError;
pub use fallback::{split_runs, RunKind};
pub use offset::byte_to_offset;
pub use tagset::{Ipadic, Tagset, TagsetAdapter, UniDic};
pub use yama_protocol::RawToken;
