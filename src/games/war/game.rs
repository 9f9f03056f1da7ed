//! War game loop.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Deck;
use crate::core::{GameRng, Player, PlayerId, WarConfig, WarResult};
use crate::rules::{GameResult, Turn, TurnOutcome, TurnType};

/// Running tally of a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Turns resolved so far.
    pub turns_played: u64,
    /// Turns resolved, by type.
    pub turn_counts: FxHashMap<TurnType, u64>,
    /// Cards removed by mutually assured destruction.
    pub cards_discarded: usize,
}

impl GameSummary {
    /// Fold one resolved turn into the tally.
    pub fn record(&mut self, outcome: &TurnOutcome) {
        self.turns_played += 1;
        *self.turn_counts.entry(outcome.turn_type).or_insert(0) += 1;
        self.cards_discarded += outcome.discarded;
    }

    /// Turns of one type resolved so far.
    #[must_use]
    pub fn count(&self, turn_type: TurnType) -> u64 {
        self.turn_counts.get(&turn_type).copied().unwrap_or(0)
    }
}

/// A game of War between two players.
#[derive(Clone, Debug)]
pub struct WarGame {
    config: WarConfig,
    players: [Player; 2],
    summary: GameSummary,
}

/// Builder for dealing a new WarGame.
#[derive(Clone, Debug)]
pub struct WarGameBuilder {
    names: [String; 2],
    config: WarConfig,
}

impl Default for WarGameBuilder {
    fn default() -> Self {
        Self {
            names: ["Player 1".to_string(), "Player 2".to_string()],
            config: WarConfig::default(),
        }
    }
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = [first.into(), second.into()];
        self
    }

    pub fn config(mut self, config: WarConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_turns(mut self, max_turns: u64) -> Self {
        self.config.max_turns = max_turns;
        self
    }

    pub fn cards_per_player(mut self, count: usize) -> Self {
        self.config.cards_per_player = count;
        self
    }

    /// Shuffle a standard deck and deal it. A seed in the config takes
    /// precedence over `seed`.
    pub fn build(self, seed: u64) -> WarResult<WarGame> {
        self.config.validate()?;
        let mut rng = GameRng::new(self.config.seed.unwrap_or(seed));
        self.deal(&mut rng)
    }

    /// Deal and play `games` games, each from its own fork of `seed`.
    pub fn simulate(self, games: usize, seed: u64) -> WarResult<Vec<(GameResult, GameSummary)>> {
        self.config.validate()?;
        let mut root = GameRng::new(self.config.seed.unwrap_or(seed));

        let mut results = Vec::with_capacity(games);
        for _ in 0..games {
            let mut rng = root.fork();
            let mut game = self.clone().deal(&mut rng)?;
            let result = game.run();
            results.push((result, game.summary));
        }
        Ok(results)
    }

    fn deal(self, rng: &mut GameRng) -> WarResult<WarGame> {
        let mut cards = Deck::standard().into_vec();
        rng.shuffle(&mut cards);

        let mut hands: [Vec<_>; 2] = [Vec::new(), Vec::new()];
        for (i, card) in cards
            .into_iter()
            .take(self.config.cards_per_player * 2)
            .enumerate()
        {
            hands[i % 2].push(card);
        }

        let [first_name, second_name] = self.names;
        let [first_hand, second_hand] = hands;
        tracing::debug!(
            "Dealt {} cards each with seed {}",
            self.config.cards_per_player,
            rng.seed()
        );

        WarGame::from_players(
            Player::new(first_name, Deck::new(first_hand)),
            Player::new(second_name, Deck::new(second_hand)),
            self.config,
        )
    }
}

impl WarGame {
    /// Start a game from hand-built players.
    pub fn from_players(first: Player, second: Player, config: WarConfig) -> WarResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            players: [first, second],
            summary: GameSummary::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &WarConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player.index().min(1)]
    }

    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[must_use]
    pub fn summary(&self) -> &GameSummary {
        &self.summary
    }

    /// Cards still held by either player.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.players.iter().map(Player::card_count).sum()
    }

    /// The result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let [first, second] = &self.players;
        match (first.has_lost(), second.has_lost()) {
            (true, true) => Some(GameResult::Draw),
            (true, false) => Some(GameResult::Winner(PlayerId::SECOND)),
            (false, true) => Some(GameResult::Winner(PlayerId::FIRST)),
            (false, false) if self.summary.turns_played >= self.config.max_turns => {
                Some(GameResult::Draw)
            }
            (false, false) => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Resolve one turn. Returns `None` if the game is already over.
    pub fn play_turn(&mut self) -> Option<TurnOutcome> {
        if self.is_over() {
            return None;
        }

        let [first, second] = &mut self.players;
        let outcome = Turn::new(first, second).resolve();
        self.summary.record(&outcome);

        tracing::debug!(
            "Turn {}: {} won by {:?} ({} / {} cards)",
            self.summary.turns_played,
            outcome.turn_type,
            outcome.winner,
            self.players[0].card_count(),
            self.players[1].card_count()
        );

        Some(outcome)
    }

    /// Play until the game ends.
    pub fn run(&mut self) -> GameResult {
        loop {
            if let Some(result) = self.result() {
                match result {
                    GameResult::Winner(p) => tracing::info!(
                        "{} has won the game after {} turns",
                        self.player(p).name,
                        self.summary.turns_played
                    ),
                    GameResult::Draw => {
                        tracing::info!("Draw after {} turns", self.summary.turns_played)
                    }
                }
                return result;
            }
            self.play_turn();
        }
    }
}
