#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Unit in which token and segment offsets are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OffsetUnit {
    /// Unicode scalar values, i.e. Rust `char`s.
    #[default]
    Char,
    /// UTF-16 code units, as used by DOM `Range` offsets.
    Utf16,
}

impl OffsetUnit {
    /// Width of a single character in this unit.
    #[inline]
    pub fn width(self, c: char) -> usize {
        match self {
            OffsetUnit::Char => 1,
            OffsetUnit::Utf16 => c.len_utf16(),
        }
    }

    /// Length of `text` in this unit.
    pub fn measure(self, text: &str) -> usize {
        match self {
            OffsetUnit::Char => text.chars().count(),
            OffsetUnit::Utf16 => text.encode_utf16().count(),
        }
    }
}
