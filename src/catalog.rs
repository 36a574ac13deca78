//! The fixed word/picture catalog shipped with the game.

use crate::model::{ItemId, MatchBoard, Picture, Word};
use crate::shuffle::shuffled;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

const EMBEDDED: &str = include_str!("catalog.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog is not valid JSON")]
    Malformed(#[from] serde_json::Error),
    #[error("catalog has no entries")]
    Empty,
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: ItemId },
    #[error("{words} words but {pictures} pictures")]
    SizeMismatch { words: usize, pictures: usize },
    #[error("word {0} has no picture with the same id")]
    Unpaired(ItemId),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub words: Vec<Word>,
    pub pictures: Vec<Picture>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every word must pair with exactly one picture by id.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.words.is_empty() {
            return Err(CatalogError::Empty);
        }
        if self.words.len() != self.pictures.len() {
            return Err(CatalogError::SizeMismatch {
                words: self.words.len(),
                pictures: self.pictures.len(),
            });
        }
        let mut word_ids = HashSet::new();
        for w in &self.words {
            if !word_ids.insert(w.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "word",
                    id: w.id,
                });
            }
        }
        let mut picture_ids = HashSet::new();
        for p in &self.pictures {
            if !picture_ids.insert(p.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "picture",
                    id: p.id,
                });
            }
        }
        if let Some(w) = self.words.iter().find(|w| !picture_ids.contains(&w.id)) {
            return Err(CatalogError::Unpaired(w.id));
        }
        Ok(())
    }

    /// Fresh session board with words and pictures shuffled independently.
    pub fn deal<R: Rng>(&self, rng: &mut R) -> MatchBoard {
        let words = shuffled(&self.words, rng);
        let pictures = shuffled(&self.pictures, rng);
        MatchBoard::new(words, pictures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffle::seeded_rng;

    #[test]
    fn embedded_catalog_is_valid() {
        let c = Catalog::embedded().unwrap();
        assert_eq!(c.words.len(), 6);
        assert_eq!(c.pictures.len(), 6);
        assert_eq!(c.words[0].text, "ลิง");
        assert_eq!(c.pictures[1].alt, "banana");
    }

    #[test]
    fn deal_keeps_every_item() {
        let c = Catalog::embedded().unwrap();
        let board = c.deal(&mut seeded_rng(11));
        let mut w: Vec<_> = board.words.iter().map(|w| w.id).collect();
        let mut p: Vec<_> = board.pictures.iter().map(|p| p.id).collect();
        w.sort();
        p.sort();
        let ids: Vec<_> = (1..=6).map(ItemId).collect();
        assert_eq!(w, ids);
        assert_eq!(p, ids);
        assert_eq!(board.score(), 0);
        assert_eq!(board.total(), 6);
    }

    #[test]
    fn rejects_duplicate_word_ids() {
        let raw = r#"{"words":[{"id":1,"text":"a"},{"id":1,"text":"b"}],
            "pictures":[{"id":1,"src":"x","alt":"x"},{"id":2,"src":"y","alt":"y"}]}"#;
        assert!(matches!(
            Catalog::from_json(raw),
            Err(CatalogError::DuplicateId { kind: "word", .. })
        ));
    }

    #[test]
    fn rejects_unpaired_word() {
        let raw = r#"{"words":[{"id":1,"text":"a"}],
            "pictures":[{"id":2,"src":"x","alt":"x"}]}"#;
        assert!(matches!(
            Catalog::from_json(raw),
            Err(CatalogError::Unpaired(ItemId(1)))
        ));
    }

    #[test]
    fn rejects_size_mismatch_and_empty() {
        let raw = r#"{"words":[{"id":1,"text":"a"}],"pictures":[]}"#;
        assert!(matches!(
            Catalog::from_json(raw),
            Err(CatalogError::SizeMismatch { words: 1, pictures: 0 })
        ));
        let raw = r#"{"words":[],"pictures":[]}"#;
        assert!(matches!(Catalog::from_json(raw), Err(CatalogError::Empty)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Catalog::from_json("{").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
        assert_eq!(err.to_string(), "catalog is not valid JSON");
    }
}
