// Transient feedback after a drop: popup message and tile shakes.
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::Reducible;

use crate::model::ItemId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupKind {
    Mismatch,
    Win,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Popup {
    pub text: String,
    pub kind: PopupKind,
    /// Token handed to the clear timer; a clear for an older token is ignored.
    pub generation: u64,
}

/// The two tiles involved in one mismatched drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShakePair {
    pub word_id: ItemId,
    pub image_id: ItemId,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feedback {
    pub popup: Option<Popup>,
    /// Shaking pairs, each with the generation of the drop that started it.
    shaking: BTreeMap<ShakePair, u64>,
}

impl Feedback {
    /// Generation of the newest shake holding this word, if any. Tiles key
    /// their animated element on it so every new trigger replays the shake.
    pub fn word_shake(&self, id: ItemId) -> Option<u64> {
        self.newest_shake(|p| p.word_id == id)
    }

    pub fn image_shake(&self, id: ItemId) -> Option<u64> {
        self.newest_shake(|p| p.image_id == id)
    }

    fn newest_shake(&self, holds: impl Fn(&ShakePair) -> bool) -> Option<u64> {
        self.shaking
            .iter()
            .filter(|(pair, _)| holds(pair))
            .map(|(_, generation)| *generation)
            .max()
    }
}

#[derive(Clone, Debug)]
pub enum FeedbackAction {
    ShowMessage {
        text: String,
        kind: PopupKind,
        generation: u64,
    },
    ClearMessage { generation: u64 },
    StartShake { pair: ShakePair, generation: u64 },
    /// Ends the shake only if no newer trigger restarted the pair.
    EndShake { pair: ShakePair, generation: u64 },
}

impl Reducible for Feedback {
    type Action = FeedbackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use FeedbackAction::*;
        let mut new = (*self).clone();
        match action {
            ShowMessage {
                text,
                kind,
                generation,
            } => {
                new.popup = Some(Popup {
                    text,
                    kind,
                    generation,
                });
            }
            ClearMessage { generation } => {
                if new.popup.as_ref().map(|p| p.generation) != Some(generation) {
                    return self;
                }
                new.popup = None;
            }
            StartShake { pair, generation } => {
                if new.shaking.insert(pair, generation) == Some(generation) {
                    return self;
                }
            }
            EndShake { pair, generation } => {
                if new.shaking.get(&pair) != Some(&generation) {
                    return self;
                }
                new.shaking.remove(&pair);
            }
        }
        Rc::new(new)
    }
}
