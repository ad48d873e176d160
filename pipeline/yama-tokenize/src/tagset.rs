//! Part-of-speech tagset adapters.
//!
//! The merge rules speak IPADIC. Analyzers built on other dictionaries are mapped onto those tags
//! before their tokens reach the segmenter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yama_lexicon::pos::{self, sub1};

use crate::error::TokenizeError;

pub trait TagsetAdapter: Send + Sync {
    /// Map an analyzer `(pos, pos_sub1)` pair onto IPADIC tags.
    fn map<'a>(&self, pos: &'a str, pos_sub1: &'a str) -> (&'a str, &'a str);
}

/// IPADIC output needs no mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ipadic;

impl TagsetAdapter for Ipadic {
    fn map<'a>(&self, pos: &'a str, pos_sub1: &'a str) -> (&'a str, &'a str) {
        (pos, pos_sub1)
    }
}

/// UniDic (short-unit) tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniDic;

impl TagsetAdapter for UniDic {
    fn map<'a>(&self, pos: &'a str, pos_sub1: &'a str) -> (&'a str, &'a str) {
        match pos {
            // 静か: 形状詞 in UniDic, 名詞/形容動詞語幹 in IPADIC
            "形状詞" => (pos::NOUN, sub1::NA_ADJECTIVE_STEM),
            "接尾辞" => (pos::NOUN, sub1::SUFFIX),
            "接頭辞" => (pos::PREFIX, pos_sub1),
            "代名詞" => (pos::NOUN, sub1::PRONOUN),
            "補助記号" | "空白" => (pos::SYMBOL, pos_sub1),
            _ => (pos, pos_sub1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tagset {
    #[default]
    Ipadic,
    Unidic,
}

impl Tagset {
    pub fn adapter(self) -> &'static dyn TagsetAdapter {
        match self {
            Tagset::Ipadic => &Ipadic,
            Tagset::Unidic => &UniDic,
        }
    }
}

impl fmt::Display for Tagset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tagset::Ipadic => "ipadic",
            Tagset::Unidic => "unidic",
        })
    }
}

impl FromStr for Tagset {
    type Err = TokenizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ipadic" => Ok(Tagset::Ipadic),
            "unidic" => Ok(Tagset::Unidic),
            _ => Err(TokenizeError::UnknownTagset(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipadic_is_identity() {
        assert_eq!(Ipadic.map("名詞", "接尾"), ("名詞", "接尾"));
    }

    #[test]
    fn test_unidic_mapping() {
        assert_eq!(UniDic.map("形状詞", "一般"), ("名詞", "形容動詞語幹"));
        assert_eq!(UniDic.map("接尾辞", "名詞的"), ("名詞", "接尾"));
        assert_eq!(UniDic.map("接頭辞", "*"), ("接頭詞", "*"));
        assert_eq!(UniDic.map("代名詞", "*"), ("名詞", "代名詞"));
        assert_eq!(UniDic.map("補助記号", "句点"), ("記号", "句点"));
        assert_eq!(UniDic.map("動詞", "一般"), ("動詞", "一般"));
    }

    #[test]
    fn test_tagset_names() {
        assert_eq!("UniDic".parse::<Tagset>().unwrap(), Tagset::Unidic);
        assert_eq!(Tagset::Ipadic.to_string(), "ipadic");
        assert!(matches!("jumandic".parse::<Tagset>(), Err(TokenizeError::UnknownTagset(_))));
    }
}
