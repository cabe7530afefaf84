use serde::{Deserialize, Serialize};

/// Headline numbers shown on the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_raised: u32,
    pub referrals: u32,
    pub rank: u32,
}

impl DashboardStats {
    /// Percentage of the fundraising goal reached, rounded to whole percent
    pub fn goal_progress_pct(&self, goal: u32) -> u32 {
        if goal == 0 {
            return 0;
        }
        ((self.total_raised as f64 / goal as f64) * 100.0).round() as u32
    }
}

/// Format a dollar amount with thousands separators, e.g. 1250 -> "$1,250"
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${out}")
}

#[cfg(test)]
mod tests {
    use super::format_usd;
    use crate::models::fixtures::{FUNDRAISING_GOAL, MOCK_STATS};

    #[test]
    fn mock_stats_are_halfway_to_goal() {
        assert_eq!(MOCK_STATS.goal_progress_pct(FUNDRAISING_GOAL), 50);
    }

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(985), "$985");
        assert_eq!(format_usd(1250), "$1,250");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn zero_goal_does_not_divide_by_zero() {
        assert_eq!(MOCK_STATS.goal_progress_pct(0), 0);
    }
}
