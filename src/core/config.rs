//! Game configuration.
//!
//! `WarConfig` controls the game loop and the dealer. Every field has a
//! default, so a TOML file only needs to name what it overrides:
//!
//! ```
//! use war_engine::core::WarConfig;
//!
//! let config = WarConfig::from_toml_str("max_turns = 500").unwrap();
//! assert_eq!(config.max_turns, 500);
//! assert_eq!(config.cards_per_player, 26);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{WarError, WarResult};

/// Turn limit after which a game is declared a draw.
pub const DEFAULT_MAX_TURNS: u64 = 1_000_000;

/// Half of a standard 52-card deck.
pub const MAX_CARDS_PER_PLAYER: usize = 26;

/// Configuration for a game of War.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarConfig {
    /// Turns played before the game is called a draw.
    pub max_turns: u64,

    /// Cards dealt to each player from a shuffled standard deck.
    pub cards_per_player: usize,

    /// Dealer seed. `None` lets the builder's seed argument decide.
    pub seed: Option<u64>,
}

impl Default for WarConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            cards_per_player: MAX_CARDS_PER_PLAYER,
            seed: None,
        }
    }
}

impl WarConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> WarResult<Self> {
        let config: WarConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the turn limit (builder pattern).
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u64) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the deal size (builder pattern).
    #[must_use]
    pub fn with_cards_per_player(mut self, count: usize) -> Self {
        self.cards_per_player = count;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> WarResult<()> {
        if self.max_turns == 0 {
            return Err(WarError::ZeroMaxTurns);
        }
        if self.cards_per_player == 0 || self.cards_per_player > MAX_CARDS_PER_PLAYER {
            return Err(WarError::InvalidDealSize {
                requested: self.cards_per_player,
                max: MAX_CARDS_PER_PLAYER,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = WarConfig::default();
        assert_eq!(config.max_turns, DEFAULT_MAX_TURNS);
        assert_eq!(config.cards_per_player, 26);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = WarConfig::from_toml_str("cards_per_player = 10\nseed = 7").unwrap();
        assert_eq!(config.cards_per_player, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_turns, DEFAULT_MAX_TURNS);
    }

    #[test]
    fn test_from_toml_empty() {
        let config = WarConfig::from_toml_str("").unwrap();
        assert_eq!(config, WarConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_bad_syntax() {
        let err = WarConfig::from_toml_str("max_turns = = 3").unwrap_err();
        assert!(matches!(err, WarError::Config(_)));
    }

    #[test]
    fn test_validate_zero_turns() {
        let config = WarConfig::default().with_max_turns(0);
        assert!(matches!(config.validate(), Err(WarError::ZeroMaxTurns)));
    }

    #[test]
    fn test_validate_deal_size() {
        let too_many = WarConfig::default().with_cards_per_player(27);
        assert!(matches!(
            too_many.validate(),
            Err(WarError::InvalidDealSize { requested: 27, max: 26 })
        ));

        let none = WarConfig::default().with_cards_per_player(0);
        assert!(none.validate().is_err());
    }
}
