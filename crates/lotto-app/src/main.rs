//! Lotto command-line application.
//!
//! Generates a winning number set and a batch of 6/49 lottery tickets, then
//! reports how many numbers each ticket shares with the winning set.

use std::process;

use clap::Parser;
use lotto_core::DrawConfig;
use lotto_engine::{DrawSeed, MatchGroups, TicketGenerator};

mod report;
mod version;

/// Smallest accepted ticket count.
const MIN_TICKET_COUNT: usize = 1;
/// Largest accepted ticket count.
const MAX_TICKET_COUNT: usize = 100;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of tickets to generate (1-100).
    #[arg(short = 'n', long, value_name = "COUNT")]
    tickets: usize,

    /// Hex seed for a reproducible draw (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<DrawSeed>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    log::debug!("starting lotto, version={}", version::build_version());

    let args = Args::parse();
    if let Err(message) = validate_ticket_count(args.tickets) {
        eprintln!("{message}");
        process::exit(1);
    }

    let generator = TicketGenerator::new(DrawConfig::LOTTO_6_49);
    let seed = args.seed.unwrap_or_else(DrawSeed::from_entropy);
    log::info!("generating {} tickets with seed {seed}", args.tickets);

    let draw = generator.generate_with_seed(seed, args.tickets);
    let groups = MatchGroups::classify(&draw.tickets, &draw.winning);
    print!("{}", report::Report::new(&draw, &groups));
}

/// Checks the requested ticket count before the engine is invoked.
fn validate_ticket_count(count: usize) -> Result<(), String> {
    if (MIN_TICKET_COUNT..=MAX_TICKET_COUNT).contains(&count) {
        return Ok(());
    }
    Err(format!(
        "You did not provide a number within {MIN_TICKET_COUNT} and {MAX_TICKET_COUNT}."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds() {
        assert!(validate_ticket_count(1).is_ok());
        assert!(validate_ticket_count(50).is_ok());
        assert!(validate_ticket_count(100).is_ok());
    }

    #[test]
    fn test_rejects_zero() {
        let message = validate_ticket_count(0).unwrap_err();
        assert_eq!(message, "You did not provide a number within 1 and 100.");
    }

    #[test]
    fn test_rejects_above_maximum() {
        assert!(validate_ticket_count(101).is_err());
    }
}
