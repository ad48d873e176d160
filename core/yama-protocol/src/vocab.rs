use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rkyv::{Archive, Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// How familiar the learner is with a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum WordStatus {
    /// Treated as if it were not a word.
    Ignored = 0,
    /// Never seen before; the status of any word missing from a word book.
    UnSeen = 1,
    /// Looked up in a dictionary but not being learned.
    Searched = 2,
    /// Being learned.
    Tracking = 3,
    /// Already known.
    #[cfg_attr(feature = "serde", serde(rename = "Never_Forget"))]
    NeverForget = 4,
}

impl WordStatus {
    pub const ALL: [WordStatus; 5] = [
        WordStatus::Ignored,
        WordStatus::UnSeen,
        WordStatus::Searched,
        WordStatus::Tracking,
        WordStatus::NeverForget,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WordStatus::Ignored => "Ignored",
            WordStatus::UnSeen => "UnSeen",
            WordStatus::Searched => "Searched",
            WordStatus::Tracking => "Tracking",
            WordStatus::NeverForget => "Never_Forget",
        }
    }
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown word status: {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for WordStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WordStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(String::from(s)))
    }
}

/// A tracked word. `spelling` is always the base form of the word.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Vocabulary {
    pub spelling: String,
    pub status: WordStatus,
}

/// Portable form of a word book.
#[derive(Debug, Clone, PartialEq, Eq, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct VocabularySnapshot {
    pub version: u32,
    pub words: Vec<Vocabulary>,
}
