//! Core data models for the word/picture matching game.
//! Items come from the catalog, matches are the only mutable game state and
//! everything else (score, matched flags) is derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: ItemId,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub id: ItemId,
    /// Asset path without extension; `.webp` and `.png` variants are served.
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub word_id: ItemId,
    pub image_id: ItemId,
}

/// Result of dropping a word onto a picture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// A new match was recorded. `completed` is set only on the drop that
    /// brings the score up to the item count.
    Matched { score: usize, completed: bool },
    /// The exact pair was already recorded; nothing changed.
    AlreadyMatched,
    Mismatch { word_id: ItemId, image_id: ItemId },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchBoard {
    /// Words in display order (shuffled once at session start).
    pub words: Vec<Word>,
    /// Pictures in display order (shuffled independently of words).
    pub pictures: Vec<Picture>,
    /// Confirmed matches in order of discovery.
    pub matches: Vec<Match>,
    /// Outcome of the most recent accepted drop.
    pub last_outcome: Option<DropOutcome>,
    /// Bumped on every accepted drop so effects see repeated outcomes.
    pub version: u64,
}

impl MatchBoard {
    pub fn new(words: Vec<Word>, pictures: Vec<Picture>) -> Self {
        Self {
            words,
            pictures,
            matches: Vec::new(),
            last_outcome: None,
            version: 0,
        }
    }

    /// Number of items per collection; the score needed to win.
    pub fn total(&self) -> usize {
        self.words.len()
    }

    pub fn score(&self) -> usize {
        self.matches.len()
    }

    pub fn is_complete(&self) -> bool {
        self.total() > 0 && self.score() >= self.total()
    }

    pub fn is_word_matched(&self, id: ItemId) -> bool {
        self.matches.iter().any(|m| m.word_id == id)
    }

    pub fn is_image_matched(&self, id: ItemId) -> bool {
        self.matches.iter().any(|m| m.image_id == id)
    }

    pub fn has_word(&self, id: ItemId) -> bool {
        self.words.iter().any(|w| w.id == id)
    }

    pub fn has_picture(&self, id: ItemId) -> bool {
        self.pictures.iter().any(|p| p.id == id)
    }

    pub fn attempt_match(&mut self, word_id: ItemId, image_id: ItemId) -> DropOutcome {
        let already = self
            .matches
            .iter()
            .any(|m| m.word_id == word_id && m.image_id == image_id);
        if already {
            return DropOutcome::AlreadyMatched;
        }
        if word_id != image_id {
            return DropOutcome::Mismatch { word_id, image_id };
        }
        let prev = self.score();
        self.matches.push(Match { word_id, image_id });
        let score = self.score();
        let total = self.total();
        DropOutcome::Matched {
            score,
            completed: prev < total && score >= total,
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum MatchAction {
    /// A word was dropped onto a picture.
    Drop { word_id: ItemId, image_id: ItemId },
}

impl Reducible for MatchBoard {
    type Action = MatchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MatchAction::Drop { word_id, image_id } => {
                // Payloads come from the browser's drag data; ignore anything
                // that does not name a catalog entry.
                if !self.has_word(word_id) || !self.has_picture(image_id) {
                    return self;
                }
                let mut new = (*self).clone();
                let outcome = new.attempt_match(word_id, image_id);
                new.last_outcome = Some(outcome);
                new.version = new.version.wrapping_add(1);
                Rc::new(new)
            }
        }
    }
}
