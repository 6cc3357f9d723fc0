//! Core data structures for lottery draw simulation.
//!
//! This crate provides the fundamental types shared by draw generation and
//! reporting components:
//!
//! 1. **Number sequences** - [`number_set`]: a draw-order sequence of
//!    distinct lottery numbers with match counting.
//! 2. **Tickets** - [`ticket`]: an indexed, immutable number set.
//! 3. **Draw parameters** - [`draw_config`]: validated
//!    `(draw count, number range)` bundles that make unsatisfiable draws
//!    unrepresentable.
//!
//! No randomness or I/O lives here; generation is layered on top of these
//! types by the engine crate.
//!
//! # Examples
//!
//! ```
//! use lotto_core::{DrawConfig, NumberSet, Ticket};
//!
//! let config = DrawConfig::LOTTO_6_49;
//! assert_eq!(config.draw_count(), 6);
//!
//! let winning = NumberSet::from_iter([3, 17, 25, 31, 42, 49]);
//! let ticket = Ticket::new(0, NumberSet::from_iter([3, 17, 24, 30, 42, 48]));
//! assert_eq!(ticket.numbers().matches(&winning), 3);
//! ```

pub mod draw_config;
pub mod number_set;
pub mod ticket;

pub use self::{
    draw_config::{ConfigError, DrawConfig},
    number_set::NumberSet,
    ticket::Ticket,
};
