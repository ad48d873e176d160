//! Forward-merge decision engine.
//!
//! `MERGE_RULES` is consulted top to bottom for every (accumulated segment, next token) pair and
//! the first rule whose predicate holds decides the outcome. Several rules overlap on purpose
//! (the na-adjective copula rule shadows the general suffix rule, the polite auxiliary rule
//! shadows the generic auxiliary rule), so entries must not be reordered.

use yama_lexicon::pos::{self, sub1};
use yama_lexicon::tables::{self, contains};
use yama_lexicon::{ends_with_any, is_explanatory, is_katakana, is_laugh_filler, is_numeral};
use yama_protocol::{BaseForm, MergeDecision, RawToken};

type Predicate = fn(&RawToken, &RawToken) -> bool;
type Outcome = fn(&RawToken, &RawToken) -> MergeDecision;

/// One entry of the cascade: if `when(previous, current)` holds, `then` decides.
pub struct MergeRule {
    pub name: &'static str,
    pub when: Predicate,
    pub then: Outcome,
}

impl std::fmt::Debug for MergeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeRule").field("name", &self.name).finish()
    }
}

fn split(_: &RawToken, _: &RawToken) -> MergeDecision {
    MergeDecision::Split
}

fn keep_previous(_: &RawToken, _: &RawToken) -> MergeDecision {
    MergeDecision::Merge(BaseForm::Previous)
}

fn join(_: &RawToken, _: &RawToken) -> MergeDecision {
    MergeDecision::Merge(BaseForm::Joined)
}

fn take_current(_: &RawToken, _: &RawToken) -> MergeDecision {
    MergeDecision::Merge(BaseForm::Current)
}

/// Numerals often come without a usable base form; fall back to the digits themselves.
fn join_numeral(prev: &RawToken, curr: &RawToken) -> MergeDecision {
    let head = if prev.base_form.is_empty() { &prev.surface_form } else { &prev.base_form };
    MergeDecision::Merge(BaseForm::Literal(format!("{}{}", head, curr.base_form)))
}

#[inline]
fn is_verb(token: &RawToken) -> bool {
    token.pos == pos::VERB
}

#[inline]
fn is_noun(token: &RawToken) -> bool {
    token.pos == pos::NOUN
}

#[inline]
fn is_suffix(token: &RawToken) -> bool {
    token.pos_sub1 == sub1::SUFFIX
}

// --- A. colloquial glue ---

// お + anything but a noun stays apart
fn polite_prefix_guard(prev: &RawToken, curr: &RawToken) -> bool {
    prev.surface_form == tables::POLITE_PREFIX && !is_noun(curr)
}

// 食べ + ます
fn polite_auxiliary(prev: &RawToken, curr: &RawToken) -> bool {
    is_verb(prev) && contains(tables::AUX_POLITE, &curr.surface_form)
}

// 見 + てる / 食べ + ちゃう
fn progressive_contraction(prev: &RawToken, curr: &RawToken) -> bool {
    is_verb(prev) && contains(tables::PROGRESSIVES, &curr.surface_form)
}

// 見 + て
fn te_particle(prev: &RawToken, curr: &RawToken) -> bool {
    is_verb(prev) && curr.surface_form == tables::TE && curr.pos == pos::PARTICLE
}

// 見て + ください / いる / あげる
fn te_helper(prev: &RawToken, curr: &RawToken) -> bool {
    prev.surface_form.ends_with(tables::TE) && contains(tables::TE_HELPERS, &curr.surface_form)
}

// 食べる + こと
fn verb_nominalizer(prev: &RawToken, curr: &RawToken) -> bool {
    is_verb(prev) && contains(tables::VERB_NOMINALIZERS, &curr.surface_form)
}

// 最高 + じゃん
fn sentence_ending(prev: &RawToken, curr: &RawToken) -> bool {
    contains(tables::SENTENCE_ENDINGS, &curr.surface_form) && prev.pos != pos::SYMBOL
}

// サーバ + ー
fn long_vowel_mark(prev: &RawToken, curr: &RawToken) -> bool {
    curr.surface_form == tables::LONG_VOWEL_MARK && is_katakana(&prev.surface_form)
}

fn laugh_filler(_: &RawToken, curr: &RawToken) -> bool {
    is_laugh_filler(&curr.surface_form)
}

// --- B. core verb morphology ---

// 食べ + られる / たい / そうだ
fn verb_auxiliary(prev: &RawToken, curr: &RawToken) -> bool {
    curr.pos == pos::AUXILIARY && is_verb(prev)
}

// 食べ + たがる / やすい
fn verb_suffix(prev: &RawToken, curr: &RawToken) -> bool {
    is_suffix(curr) && is_verb(prev)
}

fn volitional_after_stem(prev: &RawToken, curr: &RawToken) -> bool {
    curr.surface_form == tables::VOLITIONAL
        && is_verb(prev)
        && ends_with_any(&prev.surface_form, tables::VOLITIONAL_STEM_ENDINGS)
}

// 食べましょ + う
fn polite_volitional(prev: &RawToken, curr: &RawToken) -> bool {
    curr.surface_form == tables::VOLITIONAL
        && tables::VOLITIONAL_STEMS
            .iter()
            .any(|stem| prev.surface_form.ends_with(stem))
}

fn auxiliary_verb_list(prev: &RawToken, curr: &RawToken) -> bool {
    curr.surface_form != tables::VOLITIONAL
        && contains(tables::AUX_VERBS, &curr.surface_form)
        && prev.is_word_like
}

// 食べられ + る
fn potential_contraction(prev: &RawToken, curr: &RawToken) -> bool {
    prev.surface_form.ends_with(tables::POTENTIAL_STEM_ENDING) && curr.surface_form == tables::POTENTIAL_ENDING
}

// 見て + た
fn te_past_contraction(prev: &RawToken, curr: &RawToken) -> bool {
    prev.surface_form.ends_with(tables::TE) && contains(tables::TE_CONTRACTIONS, &curr.surface_form)
}

// 走り + 出す; base form becomes 走る出す
fn compound_verb(prev: &RawToken, curr: &RawToken) -> bool {
    is_verb(prev) && is_verb(curr) && contains(tables::COMPOUND_VERB_SUFFIXES, &curr.base_form)
}

// --- C. nominal morphology ---

// 一日 + 中
fn noun_suffix_list(prev: &RawToken, curr: &RawToken) -> bool {
    is_noun(prev) && contains(tables::NOUN_SUFFIXES, &curr.surface_form)
}

// 小説 + 家
fn noun_suffix(prev: &RawToken, curr: &RawToken) -> bool {
    is_suffix(curr)
        && !contains(tables::HONORIFIC_SUFFIXES, &curr.surface_form)
        && is_noun(prev)
        && prev.pos_sub1 != sub1::ADVERBIAL_NOUN
}

// 高 + さ
fn adjective_nominalizer(prev: &RawToken, curr: &RawToken) -> bool {
    prev.pos == pos::ADJECTIVE && contains(tables::ADJECTIVE_NOMINALIZERS, &curr.surface_form)
}

// 静か + だ / じゃ; the copula is absorbed, not joined
fn na_adjective_copula(prev: &RawToken, curr: &RawToken) -> bool {
    prev.pos == pos::ADJECTIVAL_VERB
        && (curr.pos == pos::AUXILIARY || curr.surface_form == tables::NEGATIVE_COPULA)
}

// 静か(形容動詞語幹) + な
fn adjectival_noun_na(prev: &RawToken, curr: &RawToken) -> bool {
    is_noun(prev)
        && prev.pos_sub1 == sub1::NA_ADJECTIVE_STEM
        && curr.surface_form == tables::NA
        && curr.pos == pos::AUXILIARY
}

// 田中 + さん
fn honorific_suffix(_: &RawToken, curr: &RawToken) -> bool {
    is_suffix(curr) && contains(tables::HONORIFIC_SUFFIXES, &curr.surface_form)
}

// 子供 + っぽい
fn adnominal_ending(prev: &RawToken, curr: &RawToken) -> bool {
    contains(tables::ADNOMINAL_ENDINGS, &curr.surface_form) && prev.pos != pos::SYMBOL
}

// 思っ + と(く)
fn geminate_continuation(prev: &RawToken, curr: &RawToken) -> bool {
    prev.surface_form.ends_with(tables::GEMINATE_MARK)
        && contains(tables::GEMINATE_CONTINUATIONS, &curr.surface_form)
}

// 持っ + て
fn geminate_verb_continuation(prev: &RawToken, curr: &RawToken) -> bool {
    is_verb(prev)
        && prev.surface_form.ends_with(tables::GEMINATE_MARK)
        && contains(tables::GEMINATE_VERB_CONTINUATIONS, &curr.surface_form)
}

// 再 + 開
fn prefix(prev: &RawToken, curr: &RawToken) -> bool {
    let is_prefix = contains(tables::PREFIXES, &prev.surface_form)
        || (prev.pos == pos::PREFIX && !contains(tables::HONORIFIC_PREFIXES, &prev.surface_form));
    is_prefix && (is_noun(curr) || is_verb(curr))
}

// ご + 飯; the lookup key is the bare noun
fn honorific_prefix(prev: &RawToken, curr: &RawToken) -> bool {
    contains(tables::HONORIFIC_PREFIXES, &prev.surface_form) && is_noun(curr)
}

// キャンセル + する
fn katakana_suru(prev: &RawToken, curr: &RawToken) -> bool {
    is_noun(prev) && is_katakana(&prev.surface_form) && curr.surface_form == tables::SURU
}

// 行く + んだ
fn explanatory_ending(prev: &RawToken, curr: &RawToken) -> bool {
    is_explanatory(&curr.surface_form)
        && [pos::ADJECTIVE, pos::VERB, pos::NOUN].contains(&prev.pos.as_str())
}

// --- D. hard stops ---

fn particle_stop(_: &RawToken, curr: &RawToken) -> bool {
    curr.pos == pos::PARTICLE
}

// 3 + つ
fn numeral_counter(prev: &RawToken, curr: &RawToken) -> bool {
    is_numeral(&prev.surface_form, &prev.pos) && contains(tables::COUNTERS, &curr.surface_form)
}

macro_rules! rule {
    ($name:literal, $when:ident => $then:ident) => {
        MergeRule { name: $name, when: $when, then: $then }
    };
}

/// The cascade, highest priority first.
pub static MERGE_RULES: &[MergeRule] = &[
    rule!("polite-prefix-guard", polite_prefix_guard => split),
    rule!("polite-auxiliary", polite_auxiliary => keep_previous),
    rule!("progressive-contraction", progressive_contraction => keep_previous),
    rule!("te-particle", te_particle => keep_previous),
    rule!("te-helper", te_helper => keep_previous),
    rule!("verb-nominalizer", verb_nominalizer => join),
    rule!("sentence-ending", sentence_ending => keep_previous),
    rule!("long-vowel-mark", long_vowel_mark => keep_previous),
    rule!("laugh-filler", laugh_filler => keep_previous),
    rule!("verb-auxiliary", verb_auxiliary => keep_previous),
    rule!("verb-suffix", verb_suffix => keep_previous),
    rule!("volitional-after-stem", volitional_after_stem => keep_previous),
    rule!("polite-volitional", polite_volitional => keep_previous),
    rule!("auxiliary-verb-list", auxiliary_verb_list => keep_previous),
    rule!("potential-contraction", potential_contraction => keep_previous),
    rule!("te-past-contraction", te_past_contraction => keep_previous),
    rule!("compound-verb", compound_verb => join),
    rule!("noun-suffix-list", noun_suffix_list => join),
    rule!("noun-suffix", noun_suffix => join),
    rule!("adjective-nominalizer", adjective_nominalizer => join),
    rule!("na-adjective-copula", na_adjective_copula => keep_previous),
    rule!("adjectival-noun-na", adjectival_noun_na => keep_previous),
    rule!("honorific-suffix", honorific_suffix => keep_previous),
    rule!("adnominal-ending", adnominal_ending => keep_previous),
    rule!("geminate-continuation", geminate_continuation => keep_previous),
    rule!("geminate-verb-continuation", geminate_verb_continuation => keep_previous),
    rule!("prefix", prefix => join),
    rule!("honorific-prefix", honorific_prefix => take_current),
    rule!("katakana-suru", katakana_suru => keep_previous),
    rule!("explanatory-ending", explanatory_ending => keep_previous),
    rule!("particle-stop", particle_stop => split),
    rule!("numeral-counter", numeral_counter => join_numeral),
];

/// The highest-priority rule that applies to the pair, if any.
pub fn first_match(previous: &RawToken, current: &RawToken) -> Option<&'static MergeRule> {
    MERGE_RULES.iter().find(|rule| (rule.when)(previous, current))
}

/// Decide whether `current` joins `previous`. Pairs no rule covers stay apart.
pub fn decide(previous: &RawToken, current: &RawToken) -> MergeDecision {
    match first_match(previous, current) {
        Some(rule) => (rule.then)(previous, current),
        None => MergeDecision::Split,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(surface: &str, pos: &str, sub1: &str, base: &str) -> RawToken {
        RawToken::new(surface, pos).with_pos_sub1(sub1).with_base_form(base)
    }

    fn rule_name(prev: &RawToken, curr: &RawToken) -> Option<&'static str> {
        first_match(prev, curr).map(|rule| rule.name)
    }

    #[test]
    fn test_rule_names_are_unique() {
        for (i, rule) in MERGE_RULES.iter().enumerate() {
            assert!(
                MERGE_RULES[i + 1..].iter().all(|other| other.name != rule.name),
                "duplicate rule name {}",
                rule.name
            );
        }
    }

    #[test]
    fn test_polite_prefix_guard() {
        let o = t("お", pos::PREFIX, "名詞接続", "お");
        let verb = t("待ち", pos::VERB, sub1::INDEPENDENT, "待つ");
        assert_eq!(rule_name(&o, &verb), Some("polite-prefix-guard"));
        assert_eq!(decide(&o, &verb), MergeDecision::Split);

        let noun = t("茶", pos::NOUN, "一般", "茶");
        assert_eq!(decide(&o, &noun), MergeDecision::Merge(BaseForm::Current));
    }

    #[test]
    fn test_polite_auxiliary_shadows_generic_auxiliary() {
        // ます is also an auxiliary after a verb; the polite rule must decide first
        let verb = t("食べ", pos::VERB, sub1::INDEPENDENT, "食べる");
        let masu = t("ます", pos::AUXILIARY, sub1::NONE, "ます");
        assert_eq!(rule_name(&verb, &masu), Some("polite-auxiliary"));
        assert_eq!(decide(&verb, &masu), MergeDecision::Merge(BaseForm::Previous));
    }

    #[test]
    fn test_na_adjective_copula_is_absorbed() {
        let stem = t("静か", pos::ADJECTIVAL_VERB, "タリ", "静かだ");
        let ja = t("じゃ", pos::AUXILIARY, sub1::NONE, "だ");
        assert_eq!(rule_name(&stem, &ja), Some("na-adjective-copula"));
        assert_eq!(decide(&stem, &ja), MergeDecision::Merge(BaseForm::Previous));

        let ja_nai = t("じゃない", pos::PARTICLE, sub1::NONE, "じゃない");
        assert_eq!(decide(&stem, &ja_nai), MergeDecision::Merge(BaseForm::Previous));
    }

    #[test]
    fn test_noun_suffix_joins_base_forms() {
        let noun = t("小説", pos::NOUN, "一般", "小説");
        let ka = t("家", pos::NOUN, sub1::SUFFIX, "家");
        assert_eq!(rule_name(&noun, &ka), Some("noun-suffix"));
        assert_eq!(decide(&noun, &ka), MergeDecision::Merge(BaseForm::Joined));

        // adverbial nouns do not take general suffixes
        let adverbial = t("今", pos::NOUN, sub1::ADVERBIAL_NOUN, "今");
        let tachi = t("たち", pos::NOUN, sub1::SUFFIX, "たち");
        assert_eq!(decide(&adverbial, &tachi), MergeDecision::Split);
    }

    #[test]
    fn test_honorific_suffix_keeps_name() {
        let name = t("田中", pos::NOUN, "固有名詞", "田中");
        let san = t("さん", pos::NOUN, sub1::SUFFIX, "さん");
        assert_eq!(rule_name(&name, &san), Some("honorific-suffix"));
        assert_eq!(decide(&name, &san), MergeDecision::Merge(BaseForm::Previous));
    }

    #[test]
    fn test_volitional_u() {
        let stem = t("考え", pos::VERB, sub1::INDEPENDENT, "考える");
        let u = t("う", pos::PARTICLE, sub1::NONE, "う");
        assert_eq!(rule_name(&stem, &u), Some("volitional-after-stem"));

        let mashou = t("行きましょ", pos::AUXILIARY, sub1::NONE, "ます");
        assert_eq!(rule_name(&mashou, &u), Some("polite-volitional"));

        // a bare う after a noun is not a volitional ending
        let noun = t("犬", pos::NOUN, "一般", "犬");
        assert_eq!(rule_name(&noun, &u), Some("particle-stop"));
    }

    #[test]
    fn test_auxiliary_list_needs_word_like_previous() {
        let symbol = t("「", pos::SYMBOL, "括弧開", "「").with_word_like(false);
        let nai = t("ない", pos::ADJECTIVE, sub1::INDEPENDENT, "ない");
        assert_eq!(decide(&symbol, &nai), MergeDecision::Split);

        let noun = t("仕方", pos::NOUN, "一般", "仕方");
        assert_eq!(rule_name(&noun, &nai), Some("auxiliary-verb-list"));
    }

    #[test]
    fn test_potential_and_te_contractions() {
        let stem = t("見られ", pos::VERB, sub1::INDEPENDENT, "見る");
        let ru = t("る", pos::AUXILIARY, sub1::NONE, "る");
        // an auxiliary after a verb is caught before the contraction rule
        assert_eq!(rule_name(&stem, &ru), Some("verb-auxiliary"));

        let noun_stem = t("それ", pos::NOUN, sub1::PRONOUN, "それ");
        let ru_noun = t("る", pos::NOUN, "一般", "る");
        assert_eq!(rule_name(&noun_stem, &ru_noun), Some("potential-contraction"));

        let te = t("見て", pos::PARTICLE, "接続助詞", "見る");
        let da = t("だ", pos::AUXILIARY, sub1::NONE, "だ");
        assert_eq!(rule_name(&te, &da), Some("te-past-contraction"));
    }

    #[test]
    fn test_compound_verb_concatenates_base_forms() {
        let hashiri = t("走り", pos::VERB, sub1::INDEPENDENT, "走る");
        let dasu = t("出す", pos::VERB, sub1::DEPENDENT, "出す");
        assert_eq!(rule_name(&hashiri, &dasu), Some("compound-verb"));
        let base = match decide(&hashiri, &dasu) {
            MergeDecision::Merge(base) => base.resolve(&hashiri, &dasu),
            MergeDecision::Split => panic!("expected merge"),
        };
        assert_eq!(base, "走る出す");
    }

    #[test]
    fn test_prefixes() {
        let sai = t("再", pos::PREFIX, "名詞接続", "再");
        let kai = t("開", pos::NOUN, "サ変接続", "開");
        assert_eq!(decide(&sai, &kai), MergeDecision::Merge(BaseForm::Joined));

        // any prefix-tagged token that is not honorific
        let dai = t("大", pos::PREFIX, "名詞接続", "大");
        let ninki = t("人気", pos::NOUN, "一般", "人気");
        assert_eq!(rule_name(&dai, &ninki), Some("prefix"));

        let go = t("ご", pos::PREFIX, "名詞接続", "ご");
        let han = t("飯", pos::NOUN, "一般", "飯");
        assert_eq!(rule_name(&go, &han), Some("honorific-prefix"));
        assert_eq!(BaseForm::Current.resolve(&go, &han), "飯");

        // honorific prefixes only join nouns
        let verb = t("覧", pos::VERB, sub1::INDEPENDENT, "覧る");
        assert_eq!(decide(&go, &verb), MergeDecision::Split);
    }

    #[test]
    fn test_geminate_continuations() {
        let omo = t("思っ", pos::VERB, sub1::INDEPENDENT, "思う");
        let toku = t("とく", pos::VERB, sub1::DEPENDENT, "とく");
        assert_eq!(decide(&omo, &toku), MergeDecision::Split);

        let to = t("と", pos::NOUN, "一般", "と");
        assert_eq!(rule_name(&omo, &to), Some("geminate-continuation"));

        let ta = t("た", pos::NOUN, "一般", "た");
        assert_eq!(rule_name(&omo, &ta), Some("auxiliary-verb-list"));
    }

    #[test]
    fn test_particles_never_attach_by_default() {
        let noun = t("私", pos::NOUN, sub1::PRONOUN, "私");
        let wa = t("は", pos::PARTICLE, "係助詞", "は");
        assert_eq!(rule_name(&noun, &wa), Some("particle-stop"));
        assert_eq!(decide(&noun, &wa), MergeDecision::Split);
    }

    #[test]
    fn test_numeral_counter_falls_back_to_surface() {
        let three = t("3", pos::UNKNOWN, sub1::NONE, "");
        let tsu = t("つ", pos::NOUN, "一般", "つ");
        assert_eq!(rule_name(&three, &tsu), Some("numeral-counter"));
        assert_eq!(
            decide(&three, &tsu),
            MergeDecision::Merge(BaseForm::Literal("3つ".to_string()))
        );
    }

    #[test]
    fn test_unrelated_pair_splits() {
        let noun = t("猫", pos::NOUN, "一般", "猫");
        let verb = t("走る", pos::VERB, sub1::INDEPENDENT, "走る");
        assert!(first_match(&noun, &verb).is_none());
        assert_eq!(decide(&noun, &verb), MergeDecision::Split);
    }
}
