#![no_std] // Shared with the WASM build

extern crate alloc;

pub mod decision;
pub mod offset;
pub mod script;
pub mod token;
pub mod vocab;

// Flat re-exports used by every other crate
pub use decision::{BaseForm, MergeDecision};
pub use offset::OffsetUnit;
pub use script::ScriptFlags;
pub use token::{RawToken, Segment};
pub use vocab::{ParseStatusError, Vocabulary, VocabularySnapshot, WordStatus};
