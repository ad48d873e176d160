//! Fixed word lists consulted by the idiom matcher and the merge rules.
//!
//! Keep each entry short; every list is matched by exact surface (or base) form.

/// Multi-token expressions that always become one segment.
pub const FIXED_IDIOMS: &[&str] = &[
    "まったくもう",
    "気になる",
    "なんだ",
    "えっと",
    "気がつく",
    "気がつき",
    "どうしたの",
    "またね",
    "あらすじ",
];

/// Upper bound on the number of tokens a single idiom may span.
pub const MAX_IDIOM_PARTS: usize = 4;

/// Auxiliary surfaces that attach to any word-like predecessor.
pub const AUX_VERBS: &[&str] = &[
    // passive / causative
    "れる", "される", "られる", "せる",
    // past / progressive
    "た", "てる", "てた",
    // listing
    "たり", "だり",
    // negative
    "ない", "なかった",
    // volitional / conjecture
    "よう", "まい", "う", "だろ", "だろう",
    // desiderative etc.
    "たい", "がち", "やすい",
];

pub const AUX_POLITE: &[&str] = &["ます", "ました", "ません", "ませんでした"];

pub const PROGRESSIVES: &[&str] = &[
    "てる", "ている", "ちゃう", "ちゃった", "じゃう", "じゃった", "ちゃ", "ちゃっ",
];

/// The te-form particle.
pub const TE: &str = "て";

/// Helper verbs following a te-form.
pub const TE_HELPERS: &[&str] = &[
    "あげる", "くれる", "もらう", "いく", "くる", "ください", "下さい", "いる",
];

/// Past endings that fuse onto a te-form (見て + た).
pub const TE_CONTRACTIONS: &[&str] = &["た", "だ"];

/// Formal nouns that turn a verb into a noun phrase.
pub const VERB_NOMINALIZERS: &[&str] = &["こと", "もの", "ところ"];

pub const SENTENCE_ENDINGS: &[&str] = &["じゃん", "だよ", "だね", "だろ", "かよ"];

pub const LONG_VOWEL_MARK: &str = "ー";

pub const VOLITIONAL: &str = "う";

/// Polite / conjectural stems completed by a volitional う.
pub const VOLITIONAL_STEMS: &[&str] = &["ましょ", "でしょ"];

/// Stem endings (い/え) after which a volitional う attaches to a verb.
pub const VOLITIONAL_STEM_ENDINGS: &[char] = &['い', 'え'];

pub const POTENTIAL_STEM_ENDING: char = 'れ';
pub const POTENTIAL_ENDING: &str = "る";

/// Second verbs of V1-masu + V2 compounds, matched by base form.
pub const COMPOUND_VERB_SUFFIXES: &[&str] = &[
    "出す", "始める", "続ける", "終わる", "込む", "過ぎる", "直す", "変える",
];

pub const NOUN_SUFFIXES: &[&str] = &[
    "中", "後", "前", "目", "毎", "式", "的", "風", "化", "感", "力", "性", "度",
];

pub const ADJECTIVE_NOMINALIZERS: &[&str] = &["さ", "み"];

pub const NEGATIVE_COPULA: &str = "じゃない";

pub const NA: &str = "な";

pub const HONORIFIC_SUFFIXES: &[&str] = &["ちゃん", "さん", "君", "くん", "様"];

/// "seems like / sounds like" endings.
pub const ADNOMINAL_ENDINGS: &[&str] = &["っぽい", "みたい", "らしい"];

pub const GEMINATE_MARK: char = 'っ';

/// Continuations after a geminate stem (思っ + とく).
pub const GEMINATE_CONTINUATIONS: &[&str] = &["と", "こ", "ちゃ", "ちま", "ちゅ"];

/// Continuations after a geminate verb stem (持っ + て).
pub const GEMINATE_VERB_CONTINUATIONS: &[&str] = &["て", "た"];

pub const PREFIXES: &[&str] = &["再", "未", "超", "非", "無", "最", "新", "多"];

pub const HONORIFIC_PREFIXES: &[&str] = &["ご", "お"];

/// The bare polite prefix, which only ever joins a following noun.
pub const POLITE_PREFIX: &str = "お";

pub const SURU: &str = "する";

/// Leading characters of the explanatory んだ / えだ endings.
pub const EXPLANATORY_PREFIXES: &[&str] = &["んだ", "えだ"];

/// Counters and units that follow a bare numeral.
pub const COUNTERS: &[&str] = &[
    "つ", "円", "%", "点", "年", "歳", "kg", "km", "キロ", "メートル", "センチ", "グラム",
];

/// Exact-match lookup in one of the tables above.
#[inline]
pub fn contains(table: &[&str], word: &str) -> bool {
    table.contains(&word)
}
