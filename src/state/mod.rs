pub mod feedback;
pub mod markers;
pub mod timers;

pub use feedback::{Feedback, FeedbackAction, Popup, PopupKind, ShakePair};
pub use markers::{MarkerKey, MarkerRegistry, MarkerRegistryHandle};
pub use timers::{Debouncer, GameTimers, TimerSlots};
