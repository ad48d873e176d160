use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;
use tracing::debug;
use yama_protocol::{Vocabulary, VocabularySnapshot, WordStatus};

use crate::error::VocabError;

/// Snapshot format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Emitted by [`WordBook::set`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordChanged {
    pub word: Vocabulary,
    /// `None` when the word was not in the book before.
    pub old_status: Option<WordStatus>,
    /// The sentence the learner met the word in, if known.
    pub sentence: Option<String>,
}

type Subscriber = Box<dyn Fn(&WordChanged) + Send + Sync>;

/// Familiarity status per word, keyed by base form.
#[derive(Default)]
pub struct WordBook {
    words: HashMap<String, Vocabulary>,
    subscribers: Vec<Subscriber>,
}

impl fmt::Debug for WordBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordBook")
            .field("words", &self.words.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl WordBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, spelling: &str) -> bool {
        self.words.contains_key(spelling)
    }

    pub fn get(&self, spelling: &str) -> Option<&Vocabulary> {
        self.words.get(spelling)
    }

    /// Status of `spelling`, `UnSeen` when the book does not know it.
    pub fn status_of(&self, spelling: &str) -> WordStatus {
        self.words
            .get(spelling)
            .map_or(WordStatus::UnSeen, |word| word.status)
    }

    /// Record a new status for `spelling` and notify subscribers.
    pub fn set(&mut self, spelling: &str, status: WordStatus, sentence: Option<&str>) -> WordChanged {
        let old_status = self.words.get(spelling).map(|word| word.status);
        let word = self
            .words
            .entry(spelling.to_string())
            .and_modify(|word| word.status = status)
            .or_insert_with(|| Vocabulary { spelling: spelling.to_string(), status })
            .clone();
        debug!(word = spelling, old = ?old_status, new = %status, "word status changed");

        let event = WordChanged { word, old_status, sentence: sentence.map(str::to_string) };
        for subscriber in &self.subscribers {
            subscriber(&event);
        }
        event
    }

    /// Replace the stored entry for `spelling` without notifying anyone.
    pub fn update_word(&mut self, spelling: &str, word: Vocabulary) {
        self.words.insert(spelling.to_string(), word);
    }

    pub fn delete(&mut self, spelling: &str) -> Option<Vocabulary> {
        let removed = self.words.remove(spelling);
        if removed.is_some() {
            debug!(word = spelling, "word removed");
        }
        removed
    }

    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&WordChanged) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Number of words per status. Statuses with no words are absent.
    pub fn counting(&self) -> BTreeMap<WordStatus, usize> {
        let mut counts = BTreeMap::new();
        for word in self.words.values() {
            *counts.entry(word.status).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vocabulary> {
        self.words.values()
    }

    /// Words sorted by spelling so snapshots are reproducible.
    pub fn snapshot(&self) -> VocabularySnapshot {
        let mut words: Vec<Vocabulary> = self.words.values().cloned().collect();
        words.sort_by(|a, b| a.spelling.cmp(&b.spelling));
        VocabularySnapshot { version: SNAPSHOT_VERSION, words }
    }

    /// Build a book from a snapshot. Later duplicates of a spelling win.
    pub fn from_snapshot(snapshot: VocabularySnapshot) -> Result<Self, VocabError> {
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(VocabError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let words = snapshot
            .words
            .into_iter()
            .map(|word| (word.spelling.clone(), word))
            .collect();
        Ok(Self { words, subscribers: Vec::new() })
    }

    pub fn to_json(&self) -> Result<String, VocabError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    pub fn from_json(json: &str) -> Result<Self, VocabError> {
        Self::from_snapshot(serde_json::from_str(json)?)
    }

    /// Serialize to an rkyv archive.
    pub fn to_archive(&self) -> Result<Vec<u8>, VocabError> {
        let bytes = rkyv::to_bytes::<_, 1024>(&self.snapshot())
            .map_err(|e| VocabError::Archive(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Load a validated rkyv archive.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, VocabError> {
        // archives must be read from aligned memory
        let mut aligned = rkyv::AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let snapshot: VocabularySnapshot =
            rkyv::from_bytes(&aligned).map_err(|e| VocabError::Archive(e.to_string()))?;
        Self::from_snapshot(snapshot)
    }
}
