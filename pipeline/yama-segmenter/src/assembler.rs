//! Left-to-right fold of raw tokens into segments.

use tracing::trace;
use yama_protocol::{BaseForm, MergeDecision, OffsetUnit, RawToken, Segment};

use crate::rules;

/// Fold `tokens` with the merge rules. The output keeps the input order and covers the same text.
pub fn merge(tokens: Vec<RawToken>) -> Vec<RawToken> {
    let mut merged: Vec<RawToken> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if let Some(previous) = merged.last_mut() {
            if let Some(rule) = rules::first_match(previous, &token) {
                match (rule.then)(previous, &token) {
                    MergeDecision::Merge(base) => {
                        trace!(rule = rule.name, previous = %previous.surface_form, current = %token.surface_form, "merge");
                        absorb(previous, token, &base);
                        continue;
                    }
                    MergeDecision::Split => {
                        trace!(rule = rule.name, current = %token.surface_form, "split");
                    }
                }
            }
        }
        merged.push(token);
    }

    merged
}

/// Append `token` onto the accumulated segment.
fn absorb(acc: &mut RawToken, token: RawToken, base: &BaseForm) {
    acc.base_form = base.resolve(acc, &token);
    acc.surface_form.push_str(&token.surface_form);
    acc.end_index = token.end_index;
    acc.reading.push_str(&token.reading);
    acc.pos = token.pos;
    acc.pos_sub1 = token.pos_sub1;
    acc.is_word_like = true;
}

/// Fill in missing offsets and base forms.
///
/// A missing start is 0, a missing end is `start + length(surface)` in `unit`, and an end before
/// the start is clamped up to it. Word-like segments never carry an empty base form.
pub fn normalize(token: RawToken, unit: OffsetUnit) -> Segment {
    let start_index = token.start_index.unwrap_or(0);
    let end_index = token
        .end_index
        .unwrap_or_else(|| start_index + unit.measure(&token.surface_form))
        .max(start_index);

    let base_form = if token.is_word_like && token.base_form.is_empty() {
        token.surface_form.clone()
    } else {
        token.base_form
    };

    Segment {
        surface_form: token.surface_form,
        base_form,
        start_index,
        end_index,
        reading: token.reading,
        pos: token.pos,
        pos_sub1: token.pos_sub1,
        is_word_like: token.is_word_like,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idioms::IdiomMatcher;

    fn tok(surface: &str, pos: &str, sub1: &str, base: &str) -> RawToken {
        RawToken::new(surface, pos)
            .with_pos_sub1(sub1)
            .with_base_form(base)
            .with_span(0, 0)
    }

    fn simple(surface: &str, pos: &str) -> RawToken {
        tok(surface, pos, "*", surface)
    }

    fn run(tokens: Vec<RawToken>) -> Vec<Segment> {
        let tokens = IdiomMatcher::default().apply(&tokens);
        merge(tokens)
            .into_iter()
            .map(|t| normalize(t, OffsetUnit::Char))
            .collect()
    }

    fn one(tokens: Vec<RawToken>) -> Segment {
        let mut out = run(tokens);
        assert_eq!(out.len(), 1, "expected a single segment, got {:?}", out);
        out.remove(0)
    }

    #[test]
    fn test_particle_stays_apart() {
        let out = run(vec![tok("私", "名詞", "代名詞", "私"), tok("は", "助詞", "係助詞", "は")]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].surface_form, "私");
        assert_eq!(out[1].surface_form, "は");
    }

    #[test]
    fn test_polite_verb() {
        let seg = one(vec![tok("食べ", "動詞", "自立", "食べる"), simple("ます", "助動詞")]);
        assert_eq!(seg.surface_form, "食べます");
        assert_eq!(seg.base_form, "食べる");
    }

    #[test]
    fn test_te_iru() {
        let seg = one(vec![
            tok("見", "動詞", "自立", "見る"),
            tok("て", "助詞", "接続助詞", "て"),
            tok("いる", "動詞", "非自立", "いる"),
        ]);
        assert_eq!(seg.surface_form, "見ている");
        assert_eq!(seg.base_form, "見る");
    }

    #[test]
    fn test_passive_and_desire() {
        let seg = one(vec![tok("食べ", "動詞", "自立", "食べる"), simple("られる", "助動詞")]);
        assert_eq!(seg.surface_form, "食べられる");
        assert_eq!(seg.base_form, "食べる");

        let seg = one(vec![tok("食べ", "動詞", "自立", "食べる"), simple("たい", "助動詞")]);
        assert_eq!(seg.surface_form, "食べたい");
        assert_eq!(seg.base_form, "食べる");
    }

    #[test]
    fn test_na_adjective_copula() {
        let seg = one(vec![
            tok("静か", "形容動詞", "*", "静かだ"),
            simple("だ", "助動詞"),
        ]);
        assert_eq!(seg.surface_form, "静かだ");
        assert_eq!(seg.base_form, "静かだ");

        let seg = one(vec![
            tok("静か", "形容動詞", "*", "静かだ"),
            tok("じゃ", "助動詞", "*", "だ"),
            simple("ない", "助動詞"),
        ]);
        assert_eq!(seg.surface_form, "静かじゃない");
        assert_eq!(seg.base_form, "静かだ");
    }

    #[test]
    fn test_compound_verb() {
        let seg = one(vec![tok("走り", "動詞", "自立", "走る"), tok("出す", "動詞", "非自立", "出す")]);
        assert_eq!(seg.surface_form, "走り出す");
        assert_eq!(seg.base_form, "走る出す");
    }

    #[test]
    fn test_numeral_with_counter() {
        let seg = one(vec![tok("100", "名詞", "数", "100"), tok("円", "名詞", "接尾", "円")]);
        assert_eq!(seg.surface_form, "100円");
        assert_eq!(seg.base_form, "100円");
    }

    #[test]
    fn test_numeral_without_base_form_keeps_digits() {
        let seg = one(vec![tok("100", "名詞", "数", ""), tok("円", "名詞", "接尾", "円")]);
        assert_eq!(seg.surface_form, "100円");
        assert_eq!(seg.base_form, "100円");

        let merged = merge(vec![
            RawToken::new("3", "名詞").with_pos_sub1("数").with_base_form(""),
            RawToken::new("年", "名詞").with_pos_sub1("接尾").with_base_form("年"),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].base_form, "3年");
    }

    #[test]
    fn test_fixed_idiom() {
        let seg = one(vec![
            tok("気", "名詞", "一般", "気"),
            tok("に", "助詞", "格助詞", "に"),
            tok("なる", "動詞", "自立", "なる"),
        ]);
        assert_eq!(seg.surface_form, "気になる");
        assert_eq!(seg.base_form, "気になる");
    }

    #[test]
    fn test_long_vowel_after_katakana() {
        let seg = one(vec![simple("サーバ", "名詞"), tok("ー", "記号", "一般", "ー")]);
        assert_eq!(seg.surface_form, "サーバー");
        assert_eq!(seg.base_form, "サーバ");
    }

    #[test]
    fn test_noun_suffixes() {
        let seg = one(vec![simple("一日", "名詞"), tok("中", "名詞", "接尾", "中")]);
        assert_eq!(seg.surface_form, "一日中");
        assert_eq!(seg.base_form, "一日中");

        let seg = one(vec![tok("小説", "名詞", "一般", "小説"), tok("家", "名詞", "接尾", "家")]);
        assert_eq!(seg.surface_form, "小説家");
        assert_eq!(seg.base_form, "小説家");
    }

    #[test]
    fn test_prefix_joins() {
        let seg = one(vec![tok("再", "接頭詞", "名詞接続", "再"), tok("開", "名詞", "サ変接続", "開")]);
        assert_eq!(seg.surface_form, "再開");
        assert_eq!(seg.base_form, "再開");
    }

    #[test]
    fn test_honorific_prefix_drops_from_base() {
        let seg = one(vec![tok("ご", "接頭詞", "名詞接続", "ご"), tok("飯", "名詞", "一般", "飯")]);
        assert_eq!(seg.surface_form, "ご飯");
        assert_eq!(seg.base_form, "飯");
    }

    #[test]
    fn test_sentence_ending() {
        let seg = one(vec![simple("最高", "名詞"), tok("じゃん", "助詞", "終助詞", "じゃん")]);
        assert_eq!(seg.surface_form, "最高じゃん");
        assert_eq!(seg.base_form, "最高");
    }

    #[test]
    fn test_laugh_filler() {
        let seg = one(vec![simple("w", "記号"), simple("w", "記号"), simple("w", "記号")]);
        assert_eq!(seg.surface_form, "www");
        assert!(seg.is_word_like);
    }

    #[test]
    fn test_katakana_suru() {
        let seg = one(vec![simple("キャンセル", "名詞"), tok("する", "動詞", "自立", "する")]);
        assert_eq!(seg.surface_form, "キャンセルする");
        assert_eq!(seg.base_form, "キャンセル");
    }

    #[test]
    fn test_explanatory() {
        let seg = one(vec![simple("行く", "動詞"), simple("んだ", "助動詞")]);
        assert_eq!(seg.surface_form, "行くんだ");
        assert_eq!(seg.base_form, "行く");
    }

    #[test]
    fn test_polite_volitional() {
        let seg = one(vec![tok("食べましょ", "助動詞", "*", "食べる"), simple("う", "助動詞")]);
        assert_eq!(seg.surface_form, "食べましょう");
        assert_eq!(seg.base_form, "食べる");
    }

    #[test]
    fn test_verb_suffix() {
        let seg = one(vec![tok("食べ", "動詞", "自立", "食べる"), tok("やすい", "形容詞", "接尾", "やすい")]);
        assert_eq!(seg.surface_form, "食べやすい");
        assert_eq!(seg.base_form, "食べる");
    }

    #[test]
    fn test_te_past() {
        let seg = one(vec![
            tok("見", "動詞", "自立", "見る"),
            tok("て", "助詞", "接続助詞", "て"),
            simple("た", "助動詞"),
        ]);
        assert_eq!(seg.surface_form, "見てた");
        assert_eq!(seg.base_form, "見る");
    }

    #[test]
    fn test_adjective_nominalizer() {
        let seg = one(vec![tok("高", "形容詞", "自立", "高い"), tok("さ", "名詞", "接尾", "さ")]);
        assert_eq!(seg.surface_form, "高さ");
        assert_eq!(seg.base_form, "高いさ");
    }

    #[test]
    fn test_honorific_suffix() {
        let seg = one(vec![tok("田中", "名詞", "固有名詞", "田中"), tok("さん", "名詞", "接尾", "さん")]);
        assert_eq!(seg.surface_form, "田中さん");
        assert_eq!(seg.base_form, "田中");
    }

    #[test]
    fn test_adnominal_ending() {
        let seg = one(vec![simple("子供", "名詞"), tok("っぽい", "助詞", "接尾", "っぽい")]);
        assert_eq!(seg.surface_form, "子供っぽい");
    }

    #[test]
    fn test_geminate_te() {
        let seg = one(vec![tok("思っ", "動詞", "自立", "思う"), tok("て", "助詞", "接続助詞", "て")]);
        assert_eq!(seg.surface_form, "思って");
        assert_eq!(seg.base_form, "思う");
    }

    #[test]
    fn test_progressive_contraction() {
        let seg = one(vec![tok("食べ", "動詞", "自立", "食べる"), simple("ちゃう", "動詞")]);
        assert_eq!(seg.surface_form, "食べちゃう");
        assert_eq!(seg.base_form, "食べる");
    }

    #[test]
    fn test_te_helper() {
        let seg = one(vec![
            tok("見", "動詞", "自立", "見る"),
            tok("て", "助詞", "接続助詞", "て"),
            tok("ください", "動詞", "非自立", "くださる"),
        ]);
        assert_eq!(seg.surface_form, "見てください");
        assert_eq!(seg.base_form, "見る");
    }

    #[test]
    fn test_adjectival_noun_na() {
        let seg = one(vec![tok("静か", "名詞", "形容動詞語幹", "静か"), simple("な", "助動詞")]);
        assert_eq!(seg.surface_form, "静かな");
        assert_eq!(seg.base_form, "静か");
    }

    #[test]
    fn test_merged_segment_takes_last_tags_and_joined_reading() {
        let out = merge(vec![
            RawToken::new("食べ", "動詞").with_base_form("食べる").with_reading("タベ").with_span(0, 2),
            RawToken::new("ます", "助動詞").with_reading("マス").with_span(2, 4),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].reading, "タベマス");
        assert_eq!(out[0].pos, "助動詞");
        assert_eq!(out[0].start_index, Some(0));
        assert_eq!(out[0].end_index, Some(4));
    }

    #[test]
    fn test_normalize_repairs_offsets() {
        let missing = RawToken { start_index: None, end_index: None, ..RawToken::new("𠮷野", "名詞") };
        let seg = normalize(missing.clone(), OffsetUnit::Char);
        assert_eq!(seg.span(), 0..2);
        let seg = normalize(missing, OffsetUnit::Utf16);
        assert_eq!(seg.span(), 0..3);

        let backwards = RawToken::new("家", "名詞").with_span(5, 3);
        assert_eq!(normalize(backwards, OffsetUnit::Char).span(), 5..5);

        let open_end = RawToken { end_index: None, ..RawToken::new("家", "名詞").with_span(7, 0) };
        assert_eq!(normalize(open_end, OffsetUnit::Char).span(), 7..8);
    }

    #[test]
    fn test_normalize_fills_base_form() {
        let word = RawToken::new("猫", "名詞").with_base_form("");
        assert_eq!(normalize(word, OffsetUnit::Char).base_form, "猫");

        let symbol = RawToken::new("。", "記号").with_base_form("").with_word_like(false);
        assert_eq!(normalize(symbol, OffsetUnit::Char).base_form, "");
    }
}
