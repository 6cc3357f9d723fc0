//! Match classification of tickets against a winning set.

use std::collections::BTreeMap;

use lotto_core::{NumberSet, Ticket};

/// Ticket indices grouped by how many numbers they share with the winning
/// set.
///
/// The groups partition the classified tickets disjointly and exhaustively:
/// every ticket index appears in exactly one group, and the group sizes sum
/// to the ticket count. Only match counts that actually occur are present.
/// Iteration is ascending by match count; that order is a presentation
/// choice, not part of the classification contract.
///
/// # Examples
///
/// ```
/// use lotto_core::{NumberSet, Ticket};
/// use lotto_engine::MatchGroups;
///
/// let winning = NumberSet::from_iter([1, 2, 3, 4, 5, 6]);
/// let tickets = [
///     Ticket::new(0, NumberSet::from_iter([1, 2, 3, 7, 8, 9])),
///     Ticket::new(1, NumberSet::from_iter([10, 11, 12, 13, 14, 15])),
/// ];
///
/// let groups = MatchGroups::classify(&tickets, &winning);
/// assert_eq!(groups.tickets_with(3), [0]);
/// assert_eq!(groups.tickets_with(0), [1]);
/// assert_eq!(groups.total_tickets(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchGroups {
    groups: BTreeMap<usize, Vec<usize>>,
}

impl MatchGroups {
    /// Classifies tickets by match count against `winning`.
    ///
    /// Pure computation over already-valid data: deterministic, idempotent,
    /// no failure path.
    #[must_use]
    pub fn classify(tickets: &[Ticket], winning: &NumberSet) -> Self {
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for ticket in tickets {
            let matches = ticket.numbers().matches(winning);
            groups.entry(matches).or_default().push(ticket.index());
        }
        Self { groups }
    }

    /// Iterates over `(match count, ticket indices)` pairs, ascending by
    /// match count.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.groups
            .iter()
            .map(|(matches, indices)| (*matches, indices.as_slice()))
    }

    /// Returns the indices of tickets achieving exactly `matches` matches.
    ///
    /// Returns an empty slice for match counts no ticket achieved.
    #[must_use]
    pub fn tickets_with(&self, matches: usize) -> &[usize] {
        match self.groups.get(&matches) {
            Some(indices) => indices,
            None => &[],
        }
    }

    /// Returns the total number of tickets across all groups.
    #[must_use]
    pub fn total_tickets(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Returns `true` if no tickets were classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(index: usize, numbers: [u8; 6]) -> Ticket {
        Ticket::new(index, NumberSet::from_iter(numbers))
    }

    fn sample_tickets() -> (Vec<Ticket>, NumberSet) {
        let winning = NumberSet::from_iter([1, 2, 3, 4, 5, 6]);
        let tickets = vec![
            ticket(0, [1, 2, 3, 7, 8, 9]),
            ticket(1, [10, 11, 12, 13, 14, 15]),
            ticket(2, [1, 2, 3, 4, 5, 6]),
            ticket(3, [20, 21, 22, 23, 24, 25]),
        ];
        (tickets, winning)
    }

    #[test]
    fn test_concrete_match_counts() {
        let (tickets, winning) = sample_tickets();
        let groups = MatchGroups::classify(&tickets, &winning);

        assert_eq!(groups.tickets_with(3), [0]);
        assert_eq!(groups.tickets_with(0), [1, 3]);
        assert_eq!(groups.tickets_with(6), [2]);
        assert!(groups.tickets_with(1).is_empty());
    }

    #[test]
    fn test_partition_is_exhaustive() {
        let (tickets, winning) = sample_tickets();
        let groups = MatchGroups::classify(&tickets, &winning);

        assert_eq!(groups.total_tickets(), tickets.len());
        let mut seen: Vec<_> = groups
            .iter()
            .flat_map(|(_, indices)| indices.iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_iteration_is_ascending_by_match_count() {
        let (tickets, winning) = sample_tickets();
        let groups = MatchGroups::classify(&tickets, &winning);

        let counts: Vec<_> = groups.iter().map(|(matches, _)| matches).collect();
        assert_eq!(counts, vec![0, 3, 6]);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let (tickets, winning) = sample_tickets();
        let first = MatchGroups::classify(&tickets, &winning);
        let second = MatchGroups::classify(&tickets, &winning);
        assert_eq!(first, second);
    }

    #[test]
    fn test_group_order_follows_ticket_order() {
        let winning = NumberSet::from_iter([1, 2, 3, 4, 5, 6]);
        let tickets = vec![
            ticket(0, [40, 41, 42, 43, 44, 45]),
            ticket(1, [30, 31, 32, 33, 34, 35]),
            ticket(2, [20, 21, 22, 23, 24, 25]),
        ];
        let groups = MatchGroups::classify(&tickets, &winning);
        assert_eq!(groups.tickets_with(0), [0, 1, 2]);
    }

    #[test]
    fn test_no_tickets() {
        let winning = NumberSet::from_iter([1, 2, 3, 4, 5, 6]);
        let groups = MatchGroups::classify(&[], &winning);
        assert!(groups.is_empty());
        assert_eq!(groups.total_tickets(), 0);
    }
}
