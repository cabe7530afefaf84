/// A threshold-based achievement. Whether it is unlocked is a pure
/// function of the amount raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardTier {
    pub title: &'static str,
    pub description: &'static str,
    pub requirement: u32,
    pub icon: &'static str,
}

impl RewardTier {
    pub fn unlocked(&self, raised: u32) -> bool {
        raised >= self.requirement
    }

    /// Progress towards this tier, rounded, capped at 100
    pub fn progress_pct(&self, raised: u32) -> u32 {
        if self.requirement == 0 {
            return 100;
        }
        let pct = (raised as f64 / self.requirement as f64) * 100.0;
        pct.min(100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use crate::models::fixtures::{MOCK_STATS, REWARD_TIERS};

    #[test]
    fn unlock_flags_against_mock_raised_amount() {
        let flags: Vec<bool> = REWARD_TIERS
            .iter()
            .map(|tier| tier.unlocked(MOCK_STATS.total_raised))
            .collect();
        assert_eq!(flags, [true, true, true, false]);
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        for tier in &REWARD_TIERS {
            assert!(tier.progress_pct(MOCK_STATS.total_raised) <= 100);
        }
        // 1250 of 2500 is exactly half way to the top tier
        assert_eq!(REWARD_TIERS[3].progress_pct(MOCK_STATS.total_raised), 50);
    }

    #[test]
    fn tier_requirements_are_ascending() {
        for pair in REWARD_TIERS.windows(2) {
            assert!(pair[0].requirement < pair[1].requirement);
        }
    }
}
