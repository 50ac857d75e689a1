//! # holecard-engine: Blackjack Round Engine
//!
//! A UI-independent Blackjack table: seats, bets, a multi-deck shoe, hands,
//! turn order and round outcomes. Hosts drive it through commands and watch
//! it through accessors or published snapshots; rendering, networking and
//! payments live elsewhere.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, PlayingCard) and deck construction
//! - [`deck`] - Multi-deck shoe with seeded ChaCha20 shuffling
//! - [`hand`] - Blackjack scoring with soft-ace adjustment
//! - [`engine`] - The round state machine
//! - [`game`] - Round phases
//! - [`player`] - Player ids, actions and outcomes
//! - [`rules`] - Table constants, dealer rule and bet validation
//! - [`events`] - Snapshot publishing to observers
//! - [`logger`] - RoundRecord serialization (JSONL)
//! - [`errors`] - Rejection reasons for commands
//!
//! ## Quick Start
//!
//! ```rust
//! use holecard_engine::engine::RoundEngine;
//! use holecard_engine::game::GameState;
//! use holecard_engine::player::PlayerAction;
//!
//! let mut engine = RoundEngine::new(6, Some(42));
//! engine.add_player("alice");
//! engine.add_player("bob");
//! engine.start_new_round().expect("players are seated");
//!
//! engine.place_bet("alice", 10).unwrap();
//! engine.place_bet("bob", 25).unwrap(); // every seat has bet: cards are dealt
//!
//! while let Some(player) = engine.current_player().map(str::to_owned) {
//!     let hand = engine.player_hand(&player).unwrap();
//!     let action = if hand.score() < 17 { PlayerAction::Hit } else { PlayerAction::Stand };
//!     engine.player_action(&player, action).unwrap();
//! }
//!
//! assert_eq!(engine.game_state(), &GameState::RoundOver);
//! println!("alice: {:?}", engine.player_outcome("alice"));
//! ```
//!
//! ## Deterministic Shuffles
//!
//! All deals are reproducible from the shoe seed:
//!
//! ```rust
//! use holecard_engine::deck::Shoe;
//!
//! let a = Shoe::new_with_seed(2, 42);
//! let b = Shoe::new_with_seed(2, 42);
//! assert_eq!(a.cards(), b.cards());
//! ```
//!
//! ## Observing State
//!
//! ```rust
//! use holecard_engine::engine::RoundEngine;
//!
//! let mut engine = RoundEngine::new(1, Some(7));
//! let updates = engine.subscribe();
//! engine.add_player("P1");
//! engine.start_new_round().unwrap();
//! let states: Vec<_> = updates.drain().into_iter().map(|s| s.game_state).collect();
//! assert_eq!(states.len(), 2);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
