//! Drag Thai words onto the pictures they name; correct pairs are joined
//! by lines and six matches win the round.

pub mod catalog;
pub mod components;
pub mod confetti;
pub mod config;
pub mod geometry;
pub mod model;
pub mod render;
pub mod shuffle;
pub mod state;
pub mod util;

pub use catalog::{Catalog, CatalogError};
pub use config::GameConfig;
pub use model::{DropOutcome, ItemId, Match, MatchAction, MatchBoard, Picture, Word};
