//! Core types: players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{WarConfig, DEFAULT_MAX_TURNS, MAX_CARDS_PER_PLAYER};
pub use error::{WarError, WarResult};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
