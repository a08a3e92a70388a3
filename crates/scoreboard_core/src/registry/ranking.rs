//! Scoreboard ordering: highest total first, then most recently started.

use std::cmp::Ordering;

use crate::models::Match;

/// Two-key comparator used by every summary.
///
/// `start_order` is unique per registry, so no two distinct games compare equal.
pub fn compare(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.start_order().cmp(&a.start_order()))
}

/// Sorts references to games into scoreboard order.
pub fn rank<'a, I>(games: I) -> Vec<&'a Match>
where
    I: IntoIterator<Item = &'a Match>,
{
    let mut ranked: Vec<&Match> = games.into_iter().collect();
    ranked.sort_by(|a, b| compare(a, b));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(home: &str, away: &str, order: u64, score: (u32, u32)) -> Match {
        let mut m = Match::new(home, away, order);
        m.set_score(score.0, score.1);
        m
    }

    #[test]
    fn test_higher_total_first() {
        let low = game("A", "B", 5, (1, 0));
        let high = game("C", "D", 1, (2, 2));
        assert_eq!(compare(&high, &low), Ordering::Less);
        assert_eq!(compare(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_tie_broken_by_most_recent() {
        let older = game("A", "B", 1, (3, 3));
        let newer = game("C", "D", 2, (2, 4));
        assert_eq!(compare(&newer, &older), Ordering::Less);
    }

    #[test]
    fn test_rank_totals_six_six_three() {
        let m1 = game("M1 Home", "M1 Away", 0, (3, 3));
        let m2 = game("M2 Home", "M2 Away", 1, (2, 4));
        let m3 = game("M3 Home", "M3 Away", 2, (1, 2));

        let ranked = rank([&m1, &m3, &m2]);
        let order: Vec<u64> = ranked.iter().map(|m| m.start_order()).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }
}
