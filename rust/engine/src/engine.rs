use std::collections::{HashMap, HashSet};

use tracing::{debug, error, info, warn};

use crate::cards::PlayingCard;
use crate::deck::Shoe;
use crate::errors::GameError;
use crate::events::{RoundSnapshot, SnapshotBus, SnapshotSubscription};
use crate::game::GameState;
use crate::hand::Hand;
use crate::player::{GameOutcome, PlayerAction, PlayerId};
use crate::rules::{dealer_should_hit, validate_bet, BLACKJACK, DEFAULT_DECKS};

/// Owns one Blackjack table: seats, bets, the shoe, hands, turn order and
/// outcomes.
///
/// The host drives it through the command methods and observes it through
/// the accessors or a [`SnapshotSubscription`]. A rejected command logs a
/// warning, returns the reason and leaves every field untouched.
///
/// # Examples
///
/// ```
/// use holecard_engine::engine::RoundEngine;
/// use holecard_engine::game::GameState;
/// use holecard_engine::player::PlayerAction;
///
/// let mut engine = RoundEngine::new(2, Some(42));
/// engine.add_player("P1");
/// engine.start_new_round().unwrap();
/// assert_eq!(engine.game_state(), &GameState::Betting);
///
/// engine.place_bet("P1", 10).unwrap();
/// if engine.game_state().is_player_turn("P1") {
///     engine.player_action("P1", PlayerAction::Stand).unwrap();
/// }
/// assert_eq!(engine.game_state(), &GameState::RoundOver);
/// assert!(engine.player_outcome("P1").is_some());
/// ```
#[derive(Debug)]
pub struct RoundEngine {
    game_state: GameState,
    dealer_hand: Hand,
    player_hands: HashMap<PlayerId, Hand>,
    player_bets: HashMap<PlayerId, u32>,
    player_outcomes: HashMap<PlayerId, GameOutcome>,
    /// Seating order, which is also deal and turn order
    active_player_ids: Vec<PlayerId>,
    /// Joined while a round was in play; seated when the table next opens
    waiting_player_ids: Vec<PlayerId>,
    players_ready_after_betting: HashSet<PlayerId>,
    all_players_have_bet: bool,
    shoe: Shoe,
    /// Index into `active_player_ids` of the turn holder; past the end once
    /// nobody is left to act
    current_player_index: usize,
    round_number: u64,
    bus: SnapshotBus,
    publications: u64,
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DECKS, None)
    }
}

impl RoundEngine {
    /// Creates a table with a full shoe of `number_of_decks` decks (at least
    /// one). Without a seed the shuffle is seeded randomly.
    pub fn new(number_of_decks: usize, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self::with_shoe(Shoe::new_with_seed(number_of_decks.max(1), seed))
    }

    /// Creates a table around a prepared shoe.
    pub fn with_shoe(shoe: Shoe) -> Self {
        Self {
            game_state: GameState::WaitingForPlayers,
            dealer_hand: Hand::new(),
            player_hands: HashMap::new(),
            player_bets: HashMap::new(),
            player_outcomes: HashMap::new(),
            active_player_ids: Vec::new(),
            waiting_player_ids: Vec::new(),
            players_ready_after_betting: HashSet::new(),
            all_players_have_bet: false,
            shoe,
            current_player_index: 0,
            round_number: 0,
            bus: SnapshotBus::new(),
            publications: 0,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }
    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }
    pub fn player_hands(&self) -> &HashMap<PlayerId, Hand> {
        &self.player_hands
    }
    pub fn player_hand(&self, player_id: &str) -> Option<&Hand> {
        self.player_hands.get(player_id)
    }
    pub fn player_bets(&self) -> &HashMap<PlayerId, u32> {
        &self.player_bets
    }
    pub fn player_bet(&self, player_id: &str) -> u32 {
        self.player_bets.get(player_id).copied().unwrap_or(0)
    }
    pub fn player_outcomes(&self) -> &HashMap<PlayerId, GameOutcome> {
        &self.player_outcomes
    }
    pub fn player_outcome(&self, player_id: &str) -> Option<GameOutcome> {
        self.player_outcomes.get(player_id).copied()
    }
    /// Undealt cards, front first.
    pub fn deck(&self) -> &[PlayingCard] {
        self.shoe.cards()
    }
    pub fn active_player_ids(&self) -> &[PlayerId] {
        &self.active_player_ids
    }
    /// Players queued for the next round, in join order.
    pub fn waiting_player_ids(&self) -> &[PlayerId] {
        &self.waiting_player_ids
    }
    pub fn players_ready_after_betting(&self) -> &HashSet<PlayerId> {
        &self.players_ready_after_betting
    }
    pub fn all_players_have_bet(&self) -> bool {
        self.all_players_have_bet
    }
    pub fn number_of_decks(&self) -> usize {
        self.shoe.decks()
    }
    pub fn seed(&self) -> u64 {
        self.shoe.seed()
    }
    /// Count of rounds started on this table.
    pub fn round_number(&self) -> u64 {
        self.round_number
    }

    /// The player whose turn it is, if any.
    pub fn current_player(&self) -> Option<&str> {
        self.game_state.turn_holder()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round_number: self.round_number,
            game_state: self.game_state.clone(),
            dealer_hand: self.dealer_hand.clone(),
            player_hands: self.player_hands.clone(),
            player_bets: self.player_bets.clone(),
            player_outcomes: self.player_outcomes.clone(),
            deck: self.shoe.cards().to_vec(),
            active_player_ids: self.active_player_ids.clone(),
            waiting_player_ids: self.waiting_player_ids.clone(),
            players_ready_after_betting: self.players_ready_after_betting.clone(),
            all_players_have_bet: self.all_players_have_bet,
        }
    }

    /// Receives a snapshot after every transition from now on.
    pub fn subscribe(&self) -> SnapshotSubscription {
        self.bus.subscribe()
    }

    // ---------------------------------------------------------------------
    // Seats
    // ---------------------------------------------------------------------

    /// Seats a player at the end of the turn order. Seating an id that is
    /// already at the table (or queued) does nothing.
    ///
    /// While cards are out (dealing, turns, dealer play or a settled round
    /// still on the table) the player is queued instead and takes a seat at
    /// the next [`start_new_round`](Self::start_new_round) or
    /// [`reset_to_waiting_state`](Self::reset_to_waiting_state).
    pub fn add_player(&mut self, player_id: &str) {
        if self.player_hands.contains_key(player_id)
            || self.waiting_player_ids.iter().any(|id| id == player_id)
        {
            debug!(player_id, "player already seated");
            return;
        }
        if self.round_in_play() {
            self.waiting_player_ids.push(player_id.to_string());
            info!(
                player_id,
                queued = self.waiting_player_ids.len(),
                "player joins next round"
            );
        } else {
            self.seat(player_id.to_string());
        }
        self.publish();
    }

    fn round_in_play(&self) -> bool {
        matches!(
            self.game_state,
            GameState::Dealing
                | GameState::PlayerTurn(_)
                | GameState::DealerTurn
                | GameState::RoundOver
        )
    }

    fn seat(&mut self, player_id: PlayerId) {
        self.player_hands.insert(player_id.clone(), Hand::new());
        self.player_bets.insert(player_id.clone(), 0);
        self.player_outcomes.remove(&player_id);
        self.active_player_ids.push(player_id.clone());
        info!(player_id = %player_id, seats = self.active_player_ids.len(), "player added");
    }

    fn seat_waiting_players(&mut self) {
        for id in std::mem::take(&mut self.waiting_player_ids) {
            self.seat(id);
        }
    }

    /// Removes a player and everything recorded for them this round.
    ///
    /// If they held the turn, it passes to the next player without an
    /// outcome. During betting the deal triggers are re-checked for the
    /// remaining seats. An empty table falls back to waiting for players.
    pub fn remove_player(&mut self, player_id: &str) -> Result<(), GameError> {
        if let Some(queued) = self.waiting_player_ids.iter().position(|id| id == player_id) {
            self.waiting_player_ids.remove(queued);
            info!(player_id, "queued player left");
            self.publish();
            return Ok(());
        }
        let Some(index) = self.active_player_ids.iter().position(|id| id == player_id) else {
            return self.reject(GameError::UnknownPlayer(player_id.to_string()));
        };
        let mark = self.publications;
        let held_turn = self.game_state.is_player_turn(player_id);

        self.active_player_ids.remove(index);
        self.player_hands.remove(player_id);
        self.player_bets.remove(player_id);
        self.player_outcomes.remove(player_id);
        self.players_ready_after_betting.remove(player_id);
        if index < self.current_player_index {
            self.current_player_index -= 1;
        }
        info!(player_id, seats = self.active_player_ids.len(), "player removed");

        if held_turn {
            // the next seat slid into `index`
            self.advance_from(index);
        } else if self.game_state == GameState::Betting {
            self.check_if_all_players_have_bet();
            if self.game_state == GameState::Betting {
                self.check_if_all_betting_players_are_ready();
            }
        }

        if self.active_player_ids.is_empty() && self.game_state != GameState::WaitingForPlayers {
            info!("table empty, waiting for players");
            self.seat_waiting_players();
            self.set_state(GameState::WaitingForPlayers);
        }
        self.publish_if_quiet(mark);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Round setup and betting
    // ---------------------------------------------------------------------

    /// Opens betting for a new round.
    ///
    /// Clears hands, outcomes, readiness and bets (every seat starts at zero
    /// and must bet explicitly), and rebuilds the shoe when it has fallen
    /// below a quarter.
    ///
    /// # Errors
    ///
    /// [`GameError::NoPlayers`] with nobody seated (the table stays waiting),
    /// [`GameError::WrongPhase`] while a round is still being played.
    pub fn start_new_round(&mut self) -> Result<(), GameError> {
        if !matches!(
            self.game_state,
            GameState::WaitingForPlayers | GameState::RoundOver
        ) {
            return self.reject(GameError::WrongPhase {
                command: "start a new round",
                state: self.game_state.clone(),
            });
        }
        self.seat_waiting_players();
        if self.active_player_ids.is_empty() {
            if self.game_state != GameState::WaitingForPlayers {
                self.set_state(GameState::WaitingForPlayers);
            }
            return self.reject(GameError::NoPlayers);
        }

        self.all_players_have_bet = false;
        self.dealer_hand.reset();
        self.player_outcomes.clear();
        self.players_ready_after_betting.clear();
        for id in &self.active_player_ids {
            if let Some(hand) = self.player_hands.get_mut(id) {
                hand.reset();
            }
            self.player_bets.insert(id.clone(), 0);
        }
        self.current_player_index = 0;

        if self.shoe.needs_reshuffle() {
            info!(
                remaining = self.shoe.remaining(),
                capacity = self.shoe.capacity(),
                "reshuffling shoe"
            );
            self.shoe.reshuffle();
        }

        self.round_number += 1;
        info!(
            round = self.round_number,
            seats = self.active_player_ids.len(),
            "round started, waiting for bets"
        );
        self.set_state(GameState::Betting);
        Ok(())
    }

    /// Records a wager. Once every seated player has a positive bet the
    /// round is dealt immediately.
    pub fn place_bet(&mut self, player_id: &str, amount: u32) -> Result<(), GameError> {
        if self.game_state != GameState::Betting {
            return self.reject(GameError::WrongPhase {
                command: "place a bet",
                state: self.game_state.clone(),
            });
        }
        if !self.player_hands.contains_key(player_id) {
            return self.reject(GameError::UnknownPlayer(player_id.to_string()));
        }
        let amount = match validate_bet(amount) {
            Ok(amount) => amount,
            Err(e) => return self.reject(e),
        };

        let mark = self.publications;
        self.player_bets.insert(player_id.to_string(), amount);
        info!(player_id, amount, "bet placed");
        self.check_if_all_players_have_bet();
        self.publish_if_quiet(mark);
        Ok(())
    }

    /// Marks a player who has bet as ready. When every player with a
    /// positive bet is ready the round is dealt, even if other seats never
    /// bet.
    pub fn player_ready_after_betting(&mut self, player_id: &str) -> Result<(), GameError> {
        if self.game_state != GameState::Betting {
            return self.reject(GameError::WrongPhase {
                command: "ready up",
                state: self.game_state.clone(),
            });
        }
        if !self.player_hands.contains_key(player_id) {
            return self.reject(GameError::UnknownPlayer(player_id.to_string()));
        }
        if self.player_bet(player_id) == 0 {
            return self.reject(GameError::BetRequired(player_id.to_string()));
        }

        let mark = self.publications;
        self.players_ready_after_betting
            .insert(player_id.to_string());
        info!(player_id, "player ready");
        self.check_if_all_betting_players_are_ready();
        self.publish_if_quiet(mark);
        Ok(())
    }

    fn check_if_all_players_have_bet(&mut self) {
        let all_bet = !self.active_player_ids.is_empty()
            && self
                .active_player_ids
                .iter()
                .all(|id| self.player_bet(id) > 0);
        self.all_players_have_bet = all_bet;
        if all_bet {
            info!("all players have bet");
            self.set_state(GameState::Dealing);
            self.deal_initial_hands();
        } else {
            debug!(
                bets = ?self.player_bets,
                "waiting for more bets"
            );
        }
    }

    fn check_if_all_betting_players_are_ready(&mut self) {
        let participating: Vec<&PlayerId> = self
            .active_player_ids
            .iter()
            .filter(|id| self.player_bet(id) > 0)
            .collect();
        if participating.is_empty() {
            debug!("no players have bet yet");
            return;
        }
        let ready = participating
            .iter()
            .filter(|id| self.players_ready_after_betting.contains(id.as_str()))
            .count();
        if ready == participating.len() {
            info!(players = ready, "all betting players ready");
            self.set_state(GameState::Dealing);
            self.deal_initial_hands();
        } else {
            debug!(
                ready,
                participating = participating.len(),
                "waiting for players to ready up"
            );
        }
    }

    // ---------------------------------------------------------------------
    // Dealing
    // ---------------------------------------------------------------------

    fn deal_initial_hands(&mut self) {
        if self.game_state != GameState::Dealing {
            return;
        }
        debug!(
            seats = self.active_player_ids.len(),
            "dealing initial hands"
        );

        for _ in 0..2 {
            for id in &self.active_player_ids {
                match self.shoe.deal_card() {
                    Some(card) => {
                        if let Some(hand) = self.player_hands.get_mut(id) {
                            hand.add_card(card);
                        }
                    }
                    None => error!(player_id = %id, "shoe empty during initial deal"),
                }
            }
            match self.shoe.deal_card() {
                Some(card) => self.dealer_hand.add_card(card),
                None => error!("shoe empty while dealing to dealer"),
            }
        }

        for hand in self.player_hands.values_mut() {
            hand.reveal_all();
        }
        if let Some(hole) = self.dealer_hand.cards_mut().get_mut(1) {
            hole.is_face_up = false;
        }
        if let Some(up) = self.dealer_hand.cards_mut().first_mut() {
            up.is_face_up = true;
        }
        debug!(dealer = %self.dealer_hand, "dealer hand dealt");

        if self.dealer_hand.is_blackjack() {
            info!("dealer has blackjack");
            self.reveal_hole_card();
            self.determine_outcome();
            return;
        }

        for id in &self.active_player_ids {
            if self
                .player_hands
                .get(id)
                .is_some_and(|hand| hand.is_blackjack())
            {
                info!(player_id = %id, "player has blackjack");
                self.player_outcomes
                    .insert(id.clone(), GameOutcome::PlayerBlackjack);
            }
        }

        self.advance_from(0);
    }

    fn reveal_hole_card(&mut self) {
        if let Some(hole) = self.dealer_hand.cards_mut().get_mut(1) {
            if !hole.is_face_up {
                hole.is_face_up = true;
                debug!(dealer = %self.dealer_hand, "dealer reveals hole card");
            }
        }
    }

    // ---------------------------------------------------------------------
    // Player turns
    // ---------------------------------------------------------------------

    /// Applies a hit or stand for the player holding the turn.
    ///
    /// A hit that reaches 21 or busts ends the turn; a bust also settles the
    /// seat as [`GameOutcome::PlayerBust`]. A hit against an empty shoe ends
    /// the turn without a card.
    pub fn player_action(&mut self, player_id: &str, action: PlayerAction) -> Result<(), GameError> {
        if !self.game_state.is_player_turn(player_id) {
            return self.reject(GameError::NotPlayersTurn {
                player: player_id.to_string(),
                current: self.game_state.clone(),
            });
        }
        if !self.player_hands.contains_key(player_id) {
            return self.reject(GameError::UnknownPlayer(player_id.to_string()));
        }
        let mark = self.publications;

        match action {
            PlayerAction::Hit => match self.shoe.deal_card() {
                Some(mut card) => {
                    card.is_face_up = true;
                    let hand = self
                        .player_hands
                        .entry(player_id.to_string())
                        .or_default();
                    hand.add_card(card);
                    let score = hand.score();
                    let busted = hand.is_busted();
                    debug!(player_id, %card, score, "player hits");

                    if busted {
                        info!(player_id, score, "player busts");
                        self.player_outcomes
                            .insert(player_id.to_string(), GameOutcome::PlayerBust);
                        self.advance_to_next_player();
                    } else if score == BLACKJACK {
                        info!(player_id, "player has 21");
                        self.advance_to_next_player();
                    }
                }
                None => {
                    warn!(player_id, "shoe empty on hit, ending turn");
                    self.advance_to_next_player();
                }
            },
            PlayerAction::Stand => {
                info!(
                    player_id,
                    score = self.player_hands.get(player_id).map(Hand::score),
                    "player stands"
                );
                self.advance_to_next_player();
            }
        }

        self.publish_if_quiet(mark);
        Ok(())
    }

    fn advance_to_next_player(&mut self) {
        self.advance_from(self.current_player_index + 1);
    }

    /// Hands the turn to the first seat at or after `start` without an
    /// outcome. With nobody left, the dealer plays if anyone is still
    /// standing on a hand; otherwise the round settles at once.
    fn advance_from(&mut self, start: usize) {
        let next = self
            .active_player_ids
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, id)| !self.player_outcomes.contains_key(id.as_str()))
            .map(|(index, id)| (index, id.clone()));

        if let Some((index, id)) = next {
            self.current_player_index = index;
            debug!(player_id = %id, "next player's turn");
            self.set_state(GameState::PlayerTurn(id));
            return;
        }

        self.current_player_index = self.active_player_ids.len();
        let anyone_standing = self
            .active_player_ids
            .iter()
            .any(|id| !self.player_outcomes.contains_key(id));

        if anyone_standing {
            debug!("all players acted, dealer's turn");
            self.set_state(GameState::DealerTurn);
            self.dealer_plays();
        } else {
            debug!("every seat already settled, skipping dealer play");
            self.reveal_hole_card();
            self.determine_outcome();
        }
    }

    // ---------------------------------------------------------------------
    // Dealer and settlement
    // ---------------------------------------------------------------------

    fn dealer_plays(&mut self) {
        if self.game_state != GameState::DealerTurn {
            return;
        }
        self.reveal_hole_card();

        while dealer_should_hit(&self.dealer_hand) {
            match self.shoe.deal_card() {
                Some(mut card) => {
                    card.is_face_up = true;
                    self.dealer_hand.add_card(card);
                    debug!(%card, score = self.dealer_hand.score(), "dealer hits");
                }
                None => {
                    warn!(
                        score = self.dealer_hand.score(),
                        "shoe empty during dealer turn, standing"
                    );
                    break;
                }
            }
        }

        if self.dealer_hand.is_busted() {
            info!(score = self.dealer_hand.score(), "dealer busts");
        } else {
            info!(score = self.dealer_hand.score(), "dealer stands");
        }
        self.determine_outcome();
    }

    /// Settles every seat that has no outcome yet. Outcomes recorded earlier
    /// in the round (busts, naturals) are left as they are.
    fn determine_outcome(&mut self) {
        let dealer_score = self.dealer_hand.score();
        let dealer_busted = self.dealer_hand.is_busted();
        let dealer_blackjack = self.dealer_hand.is_blackjack();

        for id in &self.active_player_ids {
            if self.player_outcomes.contains_key(id) {
                continue;
            }
            let Some(hand) = self.player_hands.get(id) else {
                continue;
            };
            let score = hand.score();
            let outcome = if dealer_busted {
                GameOutcome::DealerBust
            } else if dealer_blackjack {
                if hand.is_blackjack() {
                    GameOutcome::Push
                } else {
                    GameOutcome::DealerBlackjack
                }
            } else if score > dealer_score {
                GameOutcome::PlayerWin
            } else if score == dealer_score {
                GameOutcome::Push
            } else {
                GameOutcome::DealerWin
            };
            debug!(player_id = %id, score, dealer_score, ?outcome, "seat settled");
            self.player_outcomes.insert(id.clone(), outcome);
        }

        info!(
            round = self.round_number,
            dealer_score,
            outcomes = ?self.player_outcomes,
            "round over"
        );
        self.set_state(GameState::RoundOver);
    }

    /// Returns the table to waiting for players: hands, outcomes, readiness
    /// and bets are cleared; seats and the shoe are kept and queued players
    /// are seated.
    pub fn reset_to_waiting_state(&mut self) {
        self.seat_waiting_players();
        self.dealer_hand.reset();
        self.player_outcomes.clear();
        self.players_ready_after_betting.clear();
        self.all_players_have_bet = false;
        for id in &self.active_player_ids {
            if let Some(hand) = self.player_hands.get_mut(id) {
                hand.reset();
            }
            self.player_bets.insert(id.clone(), 0);
        }
        self.current_player_index = 0;
        info!("table reset, waiting for players");
        self.set_state(GameState::WaitingForPlayers);
    }

    // ---------------------------------------------------------------------
    // Publishing
    // ---------------------------------------------------------------------

    fn set_state(&mut self, state: GameState) {
        debug!(from = %self.game_state, to = %state, "state transition");
        self.game_state = state;
        self.publish();
    }

    fn publish(&mut self) {
        self.publications += 1;
        if self.bus.has_subscribers() {
            self.bus.publish(&self.snapshot());
        }
    }

    // Commands that changed data without a state transition still publish once.
    fn publish_if_quiet(&mut self, mark: u64) {
        if self.publications == mark {
            self.publish();
        }
    }

    fn reject(&self, err: GameError) -> Result<(), GameError> {
        warn!(state = %self.game_state, reason = %err, "command rejected");
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn table(top: &[(Rank, Suit)], players: &[&str]) -> RoundEngine {
        let mut engine = RoundEngine::with_shoe(Shoe::with_top_cards(1, 1, top));
        for p in players {
            engine.add_player(p);
        }
        engine
    }

    #[test]
    fn current_index_tracks_seat_removed_before_turn_holder() {
        // deal order: A, B, C, dealer, A, B, C, dealer
        let mut engine = table(
            &[
                (Rank::Ten, Suit::Hearts),
                (Rank::Ten, Suit::Clubs),
                (Rank::Ten, Suit::Spades),
                (Rank::Ten, Suit::Diamonds),
                (Rank::Seven, Suit::Hearts),
                (Rank::Seven, Suit::Clubs),
                (Rank::Seven, Suit::Spades),
                (Rank::Eight, Suit::Diamonds),
            ],
            &["A", "B", "C"],
        );
        engine.start_new_round().unwrap();
        for p in ["A", "B", "C"] {
            engine.place_bet(p, 5).unwrap();
        }
        engine.player_action("A", PlayerAction::Stand).unwrap();
        assert!(engine.game_state().is_player_turn("B"));

        engine.remove_player("A").unwrap();
        assert!(engine.game_state().is_player_turn("B"));
        assert_eq!(engine.current_player_index, 0);

        engine.player_action("B", PlayerAction::Stand).unwrap();
        assert!(engine.game_state().is_player_turn("C"));
    }

    #[test]
    fn wrong_phase_bet_leaves_state_untouched() {
        let mut engine = table(&[], &["P1"]);
        let before = engine.snapshot();
        let err = engine.place_bet("P1", 10).unwrap_err();
        assert!(matches!(err, GameError::WrongPhase { .. }));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn empty_shoe_ends_turns_and_dealer_stands() {
        let mut engine = table(
            &[
                (Rank::Ten, Suit::Hearts),
                (Rank::Ten, Suit::Diamonds),
                (Rank::Ten, Suit::Spades),
                (Rank::Five, Suit::Hearts),
                (Rank::Six, Suit::Diamonds),
                (Rank::Six, Suit::Spades),
            ],
            &["P1", "P2"],
        );
        engine.start_new_round().unwrap();
        engine.place_bet("P1", 5).unwrap();
        engine.place_bet("P2", 5).unwrap();
        while engine.shoe.deal_card().is_some() {}

        engine.player_action("P1", PlayerAction::Hit).unwrap();
        assert!(engine.game_state().is_player_turn("P2"));
        assert_eq!(engine.player_hand("P1").map(Hand::len), Some(2));

        engine.player_action("P2", PlayerAction::Hit).unwrap();
        assert_eq!(engine.game_state(), &GameState::RoundOver);
        assert_eq!(engine.dealer_hand().score(), 16);
        assert_eq!(engine.player_outcome("P1"), Some(GameOutcome::DealerWin));
        assert_eq!(engine.player_outcome("P2"), Some(GameOutcome::Push));
    }
}
