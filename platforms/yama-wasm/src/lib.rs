use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use yama_protocol::{RawToken, Segment, WordStatus};
use yama_segmenter::{SegmentOptions, Segmenter};
use yama_tokenize::{split_runs, AnalyzerToken, Tagset, TokenAdapter};
use yama_vocab::{annotate, AnnotatedSegment, WordBook, WordChanged};

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Options accepted from JavaScript, e.g. `{ mergeTokens: true, offsetUnit: "utf16", tagset: "ipadic" }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    #[serde(flatten)]
    pub segment: SegmentOptions,
    pub tagset: Tagset,
}

/// Everything the engine does, minus the JS value conversion.
struct Core {
    options: EngineOptions,
    segmenter: Segmenter<'static>,
    book: WordBook,
}

impl Core {
    fn new(options: EngineOptions, book: WordBook) -> Self {
        Self { options, segmenter: Segmenter::new(options.segment), book }
    }

    fn segment(&self, tokens: &[RawToken]) -> Vec<Segment> {
        self.segmenter.segment(tokens)
    }

    fn segment_analyzed(&self, text: &str, tokens: &[AnalyzerToken]) -> Vec<Segment> {
        let adapter = TokenAdapter::new(self.options.tagset, self.options.segment.offset_unit);
        self.segment(&adapter.adapt(text, tokens))
    }

    fn segment_text(&self, text: &str) -> Vec<Segment> {
        let unit = self.options.segment.offset_unit;
        let plain = Segmenter::new(SegmentOptions { merge_tokens: false, offset_unit: unit });
        plain.segment(&split_runs(text, unit))
    }

    fn annotate(&self, tokens: &[RawToken]) -> Vec<AnnotatedSegment> {
        annotate(&self.segment(tokens), &self.book)
    }

    /// Counts keyed by status name, with every status present.
    fn counting(&self) -> BTreeMap<&'static str, usize> {
        let counts = self.book.counting();
        WordStatus::ALL
            .into_iter()
            .map(|status| (status.as_str(), counts.get(&status).copied().unwrap_or(0)))
            .collect()
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    let serializer = Serializer::new().serialize_maps_as_objects(true);
    Ok(value.serialize(&serializer)?)
}

/// The engine instance living in the content script.
#[wasm_bindgen]
pub struct YamaEngine {
    core: Core,
}

#[wasm_bindgen]
impl YamaEngine {
    /// `options` may be `undefined`; `vocab` is an archive produced by `export_vocab`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue, vocab: Option<Vec<u8>>) -> Result<YamaEngine, JsError> {
        let options: EngineOptions = if options.is_undefined() || options.is_null() {
            EngineOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };

        let book = match vocab {
            Some(bytes) => WordBook::from_archive(&bytes)?,
            None => WordBook::new(),
        };

        Ok(Self { core: Core::new(options, book) })
    }

    /// Merge tokens that already carry char or UTF-16 offsets.
    pub fn segment(&self, tokens: JsValue) -> Result<JsValue, JsError> {
        let tokens: Vec<RawToken> = serde_wasm_bindgen::from_value(tokens)?;
        to_js(&self.core.segment(&tokens))
    }

    /// Merge raw analyzer output (byte offsets into `text`).
    pub fn segment_analyzed(&self, text: &str, tokens: JsValue) -> Result<JsValue, JsError> {
        let tokens: Vec<AnalyzerToken> = serde_wasm_bindgen::from_value(tokens)?;
        to_js(&self.core.segment_analyzed(text, &tokens))
    }

    /// Script-run split for when no analyzer is available.
    pub fn segment_text(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.core.segment_text(text))
    }

    pub fn annotate(&self, tokens: JsValue) -> Result<JsValue, JsError> {
        let tokens: Vec<RawToken> = serde_wasm_bindgen::from_value(tokens)?;
        to_js(&self.core.annotate(&tokens))
    }

    pub fn mark_word(&mut self, spelling: &str, status: &str, sentence: Option<String>) -> Result<JsValue, JsError> {
        let status: WordStatus = status.parse()?;
        let event: WordChanged = self.core.book.set(spelling, status, sentence.as_deref());
        to_js(&event)
    }

    pub fn status_of(&self, spelling: &str) -> String {
        self.core.book.status_of(spelling).to_string()
    }

    pub fn counting(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.counting())
    }

    pub fn export_vocab(&self) -> Result<Vec<u8>, JsError> {
        Ok(self.core.book.to_archive()?)
    }
}
