// Cancellable delayed actions. Dropping a `Timeout` cancels it, so replacing
// or clearing a slot is all the cancellation there is.
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use super::{FeedbackAction, ShakePair};
use crate::config::GameConfig;

type Slots<K> = Rc<RefCell<HashMap<K, (u64, Timeout)>>>;

/// One pending timer per key; scheduling again under a key supersedes it.
/// A slot empties itself once its timer has fired.
pub struct TimerSlots<K> {
    slots: Slots<K>,
    next_id: u64,
}

impl<K> Default for TimerSlots<K> {
    fn default() -> Self {
        Self {
            slots: Rc::new(RefCell::new(HashMap::new())),
            next_id: 0,
        }
    }
}

impl<K: Eq + Hash + Clone + 'static> TimerSlots<K> {
    pub fn schedule<F>(&mut self, key: K, millis: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.next_id += 1;
        let id = self.next_id;
        let slots = Rc::downgrade(&self.slots);
        let slot_key = key.clone();
        let timeout = Timeout::new(millis, move || {
            if let Some(slots) = slots.upgrade() {
                let fired = {
                    let mut map = slots.borrow_mut();
                    match map.get(&slot_key) {
                        Some((current, _)) if *current == id => map.remove(&slot_key),
                        _ => None,
                    }
                };
                drop(fired);
            }
            f();
        });
        // an older timer under the same key is dropped here, cancelling it
        let replaced = self.slots.borrow_mut().insert(key, (id, timeout));
        drop(replaced);
    }

    /// Number of timers still waiting to fire.
    pub fn pending(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn cancel_all(&mut self) {
        let cleared: Vec<_> = self.slots.borrow_mut().drain().collect();
        drop(cleared);
    }
}

/// Coalesces bursts of calls into one run after a quiet period.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending = Some(Timeout::new(self.delay_ms, f));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Timers owned by the game view.
#[derive(Default)]
pub struct GameTimers {
    pub message: Option<Timeout>,
    pub shakes: TimerSlots<ShakePair>,
    pub celebration: Option<Timeout>,
}

impl GameTimers {
    /// Schedules the message clear and the shake end for one mismatched drop.
    /// `generation` identifies this trigger so stale timers change nothing.
    pub fn mismatch<F>(
        &mut self,
        config: &GameConfig,
        pair: ShakePair,
        generation: u64,
        feedback: F,
    ) where
        F: Fn(FeedbackAction) + Clone + 'static,
    {
        let clear = feedback.clone();
        self.message = Some(Timeout::new(config.mismatch_message_ms, move || {
            clear(FeedbackAction::ClearMessage { generation })
        }));
        self.shakes.schedule(pair, config.shake_ms, move || {
            feedback(FeedbackAction::EndShake { pair, generation })
        });
    }

    /// Starts the celebration countdown. The win message stays, so a pending
    /// mismatch clear is dropped.
    pub fn celebrate<F>(&mut self, config: &GameConfig, on_expire: F)
    where
        F: FnOnce() + 'static,
    {
        self.message = None;
        self.celebration = Some(Timeout::new(config.celebration_ms, on_expire));
    }

    pub fn cancel_all(&mut self) {
        self.message = None;
        self.shakes.cancel_all();
        self.celebration = None;
    }
}
