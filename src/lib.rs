//! # Minimax Connect Four
//!
//! A Connect Four engine with a depth-limited minimax agent using alpha-beta
//! pruning and a streak-counting evaluation heuristic.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, immutable game states
//! - [`ai`] — `SearchAgent` trait, minimax agent, heuristic, random agent
//! - [`session`] — Text play loop, agent matches, move-history record
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
