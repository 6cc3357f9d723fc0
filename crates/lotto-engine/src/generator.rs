//! Rejection-sampled draw generation.

use lotto_core::{DrawConfig, NumberSet, Ticket};
use rand::{Rng, RngExt};

use crate::DrawSeed;

/// Generates winning and ticket number sets for a configured draw.
///
/// Each number set is built by rejection sampling: draw a uniform value
/// from the configured range, keep it on first occurrence, redraw on a
/// duplicate. Draw order is preserved as generated; sets are never sorted.
/// [`DrawConfig`] guarantees the range holds at least `draw_count` distinct
/// values, so the sampling loop always terminates.
///
/// Randomness is injected explicitly. The high-level entry points derive a
/// [`DrawSeed`] and thread its PRNG stream through the whole draw, making
/// every run replayable from the seed alone.
///
/// # Examples
///
/// ```
/// use lotto_core::DrawConfig;
/// use lotto_engine::{DrawSeed, TicketGenerator};
///
/// let generator = TicketGenerator::new(DrawConfig::LOTTO_6_49);
/// let draw = generator.generate_with_seed(DrawSeed::from_phrase("demo"), 5);
///
/// assert_eq!(draw.winning.len(), 6);
/// assert_eq!(draw.tickets.len(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TicketGenerator {
    config: DrawConfig,
}

/// The immutable result of one draw: the winning set, the tickets in
/// assignment order, and the seed that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDraw {
    /// The winning number set.
    pub winning: NumberSet,
    /// Generated tickets, indexed 0-based in assignment order.
    pub tickets: Vec<Ticket>,
    /// The seed this draw was generated from.
    pub seed: DrawSeed,
}

impl TicketGenerator {
    /// Creates a generator for the given draw configuration.
    #[must_use]
    pub const fn new(config: DrawConfig) -> Self {
        Self { config }
    }

    /// Returns the draw configuration.
    #[must_use]
    pub const fn config(&self) -> DrawConfig {
        self.config
    }

    /// Draws one number set from the injected RNG.
    ///
    /// Returns exactly `draw_count` pairwise-distinct values, each within
    /// the configured range, in draw order.
    pub fn draw_number_set<R>(&self, rng: &mut R) -> NumberSet
    where
        R: Rng + ?Sized,
    {
        let mut set = NumberSet::new();
        while set.len() < usize::from(self.config.draw_count()) {
            let candidate = rng.random_range(self.config.min_value()..=self.config.max_value());
            // a duplicate leaves the set unchanged and we redraw
            set.insert(candidate);
        }
        set
    }

    /// Generates a complete draw from a fresh entropy seed.
    ///
    /// The engine places no ceiling on `ticket_count`; bounding it is the
    /// caller's concern.
    #[must_use]
    pub fn generate(&self, ticket_count: usize) -> GeneratedDraw {
        self.generate_with_seed(DrawSeed::from_entropy(), ticket_count)
    }

    /// Generates a complete draw from the given seed.
    ///
    /// The winning set is drawn first, then the tickets in index order, all
    /// from the seed's PRNG stream. The same seed, configuration, and count
    /// always produce the same draw.
    #[must_use]
    pub fn generate_with_seed(&self, seed: DrawSeed, ticket_count: usize) -> GeneratedDraw {
        let mut rng = seed.rng();
        let winning = self.draw_number_set(&mut rng);
        let tickets = (0..ticket_count)
            .map(|index| Ticket::new(index, self.draw_number_set(&mut rng)))
            .collect();
        GeneratedDraw {
            winning,
            tickets,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn assert_valid_set(set: &NumberSet, config: DrawConfig) {
        assert_eq!(set.len(), usize::from(config.draw_count()));
        for number in set {
            assert!(config.contains(number), "{number} out of range");
        }
        let mut sorted: Vec<_> = set.iter().collect();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), set.len(), "duplicate numbers in {set}");
    }

    fn arb_config() -> impl Strategy<Value = DrawConfig> {
        (1_u8..=20, 0_u8..=200).prop_flat_map(|(draw_count, min_value)| {
            let lowest_max = min_value + (draw_count - 1);
            (lowest_max..=u8::MAX).prop_map(move |max_value| {
                DrawConfig::new(draw_count, min_value, max_value).unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn prop_sets_are_distinct_and_in_range(
            config in arb_config(),
            seed_bytes in any::<[u8; 32]>(),
            ticket_count in 0_usize..=20,
        ) {
            let generator = TicketGenerator::new(config);
            let draw = generator.generate_with_seed(DrawSeed::from_bytes(seed_bytes), ticket_count);

            assert_valid_set(&draw.winning, config);
            prop_assert_eq!(draw.tickets.len(), ticket_count);
            for (index, ticket) in draw.tickets.iter().enumerate() {
                prop_assert_eq!(ticket.index(), index);
                assert_valid_set(ticket.numbers(), config);
            }
        }

        #[test]
        fn prop_match_count_is_bounded(
            config in arb_config(),
            seed_bytes in any::<[u8; 32]>(),
        ) {
            let generator = TicketGenerator::new(config);
            let draw = generator.generate_with_seed(DrawSeed::from_bytes(seed_bytes), 5);

            for ticket in &draw.tickets {
                let matches = ticket.numbers().matches(&draw.winning);
                prop_assert!(matches <= usize::from(config.draw_count()));
            }
        }

        #[test]
        fn prop_same_seed_reproduces_draw(
            config in arb_config(),
            seed_bytes in any::<[u8; 32]>(),
        ) {
            let generator = TicketGenerator::new(config);
            let seed = DrawSeed::from_bytes(seed_bytes);
            let first = generator.generate_with_seed(seed, 8);
            let second = generator.generate_with_seed(seed, 8);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_full_range_draw_is_a_permutation() {
        // draw count equals range size, so sampling degenerates to a
        // permutation of the whole range
        let config = DrawConfig::new(6, 1, 6).unwrap();
        let generator = TicketGenerator::new(config);
        let mut rng = DrawSeed::from_phrase("permutation").rng();

        for _ in 0..50 {
            let set = generator.draw_number_set(&mut rng);
            let mut sorted: Vec<_> = set.iter().collect();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_single_value_range() {
        let config = DrawConfig::new(1, 42, 42).unwrap();
        let generator = TicketGenerator::new(config);
        let set = generator.draw_number_set(&mut DrawSeed::from_phrase("one").rng());
        assert_eq!(set.as_slice(), [42]);
    }

    #[test]
    fn test_winning_set_is_independent_of_ticket_count() {
        let generator = TicketGenerator::new(DrawConfig::LOTTO_6_49);
        let seed = DrawSeed::from_phrase("independent");
        let few = generator.generate_with_seed(seed, 1);
        let many = generator.generate_with_seed(seed, 100);
        assert_eq!(few.winning, many.winning);
        assert_eq!(few.tickets[0], many.tickets[0]);
    }

    #[test]
    fn test_generate_uses_fresh_seeds() {
        let generator = TicketGenerator::new(DrawConfig::LOTTO_6_49);
        let a = generator.generate(1);
        let b = generator.generate(1);
        assert_ne!(a.seed, b.seed);
    }

    #[test]
    fn test_zero_tickets() {
        let generator = TicketGenerator::new(DrawConfig::LOTTO_6_49);
        let draw = generator.generate_with_seed(DrawSeed::from_phrase("none"), 0);
        assert!(draw.tickets.is_empty());
        assert_eq!(draw.winning.len(), 6);
    }
}
