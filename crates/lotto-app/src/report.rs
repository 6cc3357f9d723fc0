//! Text rendering of draw results.

use std::fmt::{self, Display};

use lotto_engine::{GeneratedDraw, MatchGroups};

/// Minimum match count whose tickets are listed individually.
const DETAIL_THRESHOLD: usize = 3;

/// Human-readable report of one classified draw.
///
/// Renders one line for the ticket count, one for the winning numbers, then
/// one line per occurring match-count group in ascending order. Groups at or
/// above three matches also list each ticket index with its numbers.
///
/// Expects the tickets of `draw` in assignment order, which is what the
/// generator produces.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    draw: &'a GeneratedDraw,
    groups: &'a MatchGroups,
}

impl<'a> Report<'a> {
    /// Creates a report over a draw and its classification.
    #[must_use]
    pub const fn new(draw: &'a GeneratedDraw, groups: &'a MatchGroups) -> Self {
        Self { draw, groups }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated {} tickets.", self.draw.tickets.len())?;
        writeln!(f, "The winning numbers are {}.", self.draw.winning)?;
        for (matches, indices) in self.groups.iter() {
            writeln!(
                f,
                "{} tickets match {matches} numbers with the winning numbers.",
                indices.len()
            )?;
            if matches >= DETAIL_THRESHOLD {
                for &index in indices {
                    writeln!(f, "  - ticket {index}: {}", self.draw.tickets[index].numbers())?;
                }
            }
        }
        Ok(())
    }
}
