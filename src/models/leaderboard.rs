use serde::{Deserialize, Serialize};

use super::fixtures::{CURRENT_USER_BADGE, LEADERBOARD_SEED, MOCK_STATS};

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub amount: u32,
    pub referrals: u32,
    pub badge: Option<String>,
}

impl LeaderboardEntry {
    /// Initials for the avatar fallback, e.g. "Sarah Johnson" -> "SJ"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

/// Seed row for the mock standings, named fixture data only
#[derive(Debug, Clone, Copy)]
pub struct SeedRow {
    pub name: &'static str,
    pub amount: u32,
    pub referrals: u32,
    pub badge: Option<&'static str>,
}

/// Full standings: the seeded rows ranked 1..=11 plus a synthesized row
/// for the current user at the bottom, carrying the mock dashboard stats.
pub fn standings(current_user: &str) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<LeaderboardEntry> = LEADERBOARD_SEED
        .iter()
        .enumerate()
        .map(|(i, seed)| LeaderboardEntry {
            rank: i as u32 + 1,
            name: seed.name.to_string(),
            amount: seed.amount,
            referrals: seed.referrals,
            badge: seed.badge.map(str::to_string),
        })
        .collect();

    rows.push(LeaderboardEntry {
        rank: LEADERBOARD_SEED.len() as u32 + 1,
        name: current_user.to_string(),
        amount: MOCK_STATS.total_raised,
        referrals: MOCK_STATS.referrals,
        badge: Some(CURRENT_USER_BADGE.to_string()),
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standings_are_twelve_rows_ranked_in_order() {
        let rows = standings("Jane Doe");
        assert_eq!(rows.len(), 12);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.rank, i as u32 + 1);
        }
    }

    #[test]
    fn current_user_is_last_with_you_badge() {
        let rows = standings("Jane Doe");
        let last = rows.last().unwrap();
        assert_eq!(last.name, "Jane Doe");
        assert_eq!(last.rank, 12);
        assert_eq!(last.amount, MOCK_STATS.total_raised);
        assert_eq!(last.badge.as_deref(), Some(CURRENT_USER_BADGE));
    }

    #[test]
    fn seeded_amounts_are_strictly_descending() {
        let rows = standings("x");
        for pair in rows[..11].windows(2) {
            assert!(pair[0].amount > pair[1].amount);
        }
    }

    #[test]
    fn initials_come_from_each_word() {
        let rows = standings("Jane Doe");
        assert_eq!(rows[0].initials(), "SJ");
        assert_eq!(rows.last().unwrap().initials(), "JD");
    }
}
