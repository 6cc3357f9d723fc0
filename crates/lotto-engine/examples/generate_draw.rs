//! Example demonstrating basic lottery draw generation.
//!
//! This example shows how to:
//! - Create a `TicketGenerator` from a `DrawConfig`
//! - Generate a reproducible draw from a seed
//! - Display the seed, winning numbers, tickets, and match groups
//! - Sample draws in parallel until a ticket reaches a match count
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_draw
//! ```
//!
//! Replay an exact draw from a previously printed seed:
//!
//! ```sh
//! cargo run --example generate_draw -- --seed <64-hex-chars>
//! ```
//!
//! Sample until some ticket matches at least 4 winning numbers, within the
//! sampling budget (default: 10000):
//!
//! ```sh
//! cargo run --example generate_draw -- --min-matches 4 --max-tries 50000
//! ```
//!
//! Change the draw shape:
//!
//! ```sh
//! cargo run --example generate_draw -- --draw-count 5 --min 1 --max 35
//! ```

use std::process;

use clap::Parser;
use lotto_core::DrawConfig;
use lotto_engine::{DrawSeed, GeneratedDraw, MatchGroups, TicketGenerator};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of tickets to generate.
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 10)]
    tickets: usize,

    /// Numbers drawn per set.
    #[arg(long, value_name = "COUNT", default_value_t = 6)]
    draw_count: u8,

    /// Smallest drawable number.
    #[arg(long, value_name = "NUMBER", default_value_t = 1)]
    min: u8,

    /// Largest drawable number.
    #[arg(long, value_name = "NUMBER", default_value_t = 49)]
    max: u8,

    /// Hex seed for a reproducible draw.
    #[arg(long, value_name = "SEED")]
    seed: Option<DrawSeed>,

    /// Sample fresh draws until a ticket reaches this match count.
    #[arg(long, value_name = "MATCHES")]
    min_matches: Option<usize>,

    /// Maximum draws to sample when filtering.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();

    let config = match DrawConfig::new(args.draw_count, args.min, args.max) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid draw configuration: {err}");
            process::exit(2);
        }
    };
    let generator = TicketGenerator::new(config);

    let Some(min_matches) = args.min_matches else {
        let seed = args.seed.unwrap_or_else(DrawSeed::from_entropy);
        let draw = generator.generate_with_seed(seed, args.tickets);
        print_draw(&draw, None);
        return;
    };

    if args.seed.is_some() {
        eprintln!("--seed and --min-matches are mutually exclusive.");
        process::exit(2);
    }
    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.max_tries)
        .into_par_iter()
        .map(|_| {
            let draw = generator.generate(args.tickets);
            let score = best_match_count(&draw);
            (draw, score)
        })
        .max_by_key(|(_, score)| *score);

    match best {
        Some((draw, score)) if score >= min_matches => {
            print_draw(&draw, Some((args.max_tries, score)));
        }
        _ => {
            eprintln!(
                "No draw reached {min_matches} matches within {} tries.",
                args.max_tries
            );
            process::exit(1);
        }
    }
}

fn best_match_count(draw: &GeneratedDraw) -> usize {
    draw.tickets
        .iter()
        .map(|ticket| ticket.numbers().matches(&draw.winning))
        .max()
        .unwrap_or(0)
}

fn print_draw(draw: &GeneratedDraw, selection: Option<(usize, usize)>) {
    println!("Seed:");
    println!("  {}", draw.seed);
    println!();

    if let Some((max_tries, best_score)) = selection {
        println!("Selection:");
        println!("  Max tries: {max_tries}");
        println!("  Best match count: {best_score}");
        println!();
    }

    println!("Winning numbers:");
    println!("  {}", draw.winning);
    println!();

    println!("Tickets:");
    for ticket in &draw.tickets {
        println!("  {ticket}");
    }
    println!();

    let groups = MatchGroups::classify(&draw.tickets, &draw.winning);
    println!("Matches:");
    for (matches, indices) in groups.iter() {
        println!("  {matches}: {} tickets", indices.len());
    }
}
