use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use yama_protocol::{RawToken, Segment, WordStatus};
use yama_segmenter::{SegmentOptions, Segmenter};
use yama_tokenize::{parse_tokens, split_runs, TokenAdapter};
use yama_vocab::{annotate, AnnotatedSegment, WordBook, WordChanged};

use crate::config::AppConfig;

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Tokens from `input`: raw tokens, or analyzer tokens when the analyzed `text` is given.
pub fn load_tokens(config: &AppConfig, input: &Path, text: Option<&Path>) -> Result<Vec<RawToken>> {
    let json = read_input(input)?;
    match text {
        Some(text_path) => {
            let text = read_input(text_path)?;
            let analyzed = parse_tokens(&json)
                .with_context(|| format!("{} is not a list of analyzer tokens", input.display()))?;
            let adapter = TokenAdapter::new(config.tokenizer.tagset, config.segmenter.offset_unit);
            Ok(adapter.adapt(&text, &analyzed))
        }
        None => serde_json::from_str(&json)
            .with_context(|| format!("{} is not a list of tokens", input.display())),
    }
}

pub fn segment(config: &AppConfig, tokens: &[RawToken], no_merge: bool) -> Vec<Segment> {
    let options = SegmentOptions {
        merge_tokens: config.segmenter.merge_tokens && !no_merge,
        ..config.segmenter
    };
    let segments = Segmenter::new(options).segment(tokens);
    info!(tokens = tokens.len(), segments = segments.len(), "segmented");
    segments
}

pub fn split(config: &AppConfig, text: &str) -> Vec<Segment> {
    let unit = config.segmenter.offset_unit;
    let runs = split_runs(text, unit);
    Segmenter::new(SegmentOptions { merge_tokens: false, offset_unit: unit }).segment(&runs)
}

/// `.rkyv` files are archives, anything else is JSON. A missing file is an empty book.
pub fn load_book(path: &Path) -> Result<WordBook> {
    if !path.exists() {
        info!(path = %path.display(), "starting a new word book");
        return Ok(WordBook::new());
    }

    let book = if is_archive(path) {
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        WordBook::from_archive(&bytes)?
    } else {
        WordBook::from_json(&read_input(path)?)?
    };
    info!(path = %path.display(), words = book.len(), "word book loaded");
    Ok(book)
}

pub fn save_book(book: &WordBook, path: &Path) -> Result<()> {
    let written = if is_archive(path) {
        fs::write(path, book.to_archive()?)
    } else {
        fs::write(path, book.to_json()?)
    };
    written.with_context(|| format!("failed to write {}", path.display()))
}

fn is_archive(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "rkyv")
}

pub fn annotate_tokens(config: &AppConfig, tokens: &[RawToken], book: &WordBook) -> Vec<AnnotatedSegment> {
    annotate(&segment(config, tokens, false), book)
}

pub fn mark(book_path: &Path, spelling: &str, status: &str, sentence: Option<&str>) -> Result<WordChanged> {
    let status: WordStatus = status.parse()?;
    let mut book = load_book(book_path)?;
    let event = book.set(spelling, status, sentence);
    save_book(&book, book_path)?;
    Ok(event)
}

/// Convert a JSON book into an rkyv archive.
pub fn compile(input: &Path, output: &Path) -> Result<usize> {
    let book = load_book(input)?;
    let bytes = book.to_archive()?;
    fs::write(output, &bytes).with_context(|| format!("failed to write {}", output.display()))?;
    info!(words = book.len(), bytes = bytes.len(), output = %output.display(), "word book compiled");
    Ok(bytes.len())
}
