//! Lottery draw generation and match classification.
//!
//! This crate implements the draw engine on top of the `lotto-core` types:
//!
//! - [`seed`]: reproducible 32-byte draw seeds ([`DrawSeed`]) with a hex
//!   text form, derivable from OS entropy or a hashed phrase.
//! - [`generator`]: rejection-sampled generation of winning and ticket
//!   number sets ([`TicketGenerator`], [`GeneratedDraw`]).
//! - [`classify`]: grouping of ticket indices by match count against the
//!   winning set ([`MatchGroups`]).
//!
//! Generation is a linear pipeline executed once per run: draw the winning
//! set, draw the tickets, classify. All randomness flows through an
//! explicitly injected RNG, so any draw can be replayed from its seed.
//!
//! # Examples
//!
//! ```
//! use lotto_core::DrawConfig;
//! use lotto_engine::{DrawSeed, MatchGroups, TicketGenerator};
//!
//! let generator = TicketGenerator::new(DrawConfig::LOTTO_6_49);
//! let draw = generator.generate_with_seed(DrawSeed::from_phrase("example"), 10);
//!
//! let groups = MatchGroups::classify(&draw.tickets, &draw.winning);
//! assert_eq!(groups.total_tickets(), 10);
//! ```

pub mod classify;
pub mod generator;
pub mod seed;

pub use self::{
    classify::MatchGroups,
    generator::{GeneratedDraw, TicketGenerator},
    seed::{DrawSeed, ParseSeedError},
};
