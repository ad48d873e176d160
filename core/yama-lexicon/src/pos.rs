//! Part-of-speech tags the merge rules are keyed on (IPADIC tagset).
//!
//! Analyzers with another tagset go through a tagset adapter before reaching the rules.

pub const NOUN: &str = "名詞";
pub const VERB: &str = "動詞";
pub const ADJECTIVE: &str = "形容詞";
/// Na-adjective, as emitted by kuromoji-style dictionaries.
pub const ADJECTIVAL_VERB: &str = "形容動詞";
pub const AUXILIARY: &str = "助動詞";
pub const PARTICLE: &str = "助詞";
pub const PREFIX: &str = "接頭詞";
pub const SYMBOL: &str = "記号";
/// Tag used for tokens the analyzer could not place.
pub const UNKNOWN: &str = "UNK";

pub mod sub1 {
    pub const SUFFIX: &str = "接尾";
    pub const ADVERBIAL_NOUN: &str = "副詞可能";
    pub const NA_ADJECTIVE_STEM: &str = "形容動詞語幹";
    pub const PRONOUN: &str = "代名詞";
    pub const INDEPENDENT: &str = "自立";
    pub const DEPENDENT: &str = "非自立";
    pub const NONE: &str = "*";
}
