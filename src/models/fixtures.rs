//! Mock data for the demo portal. Kept as named fixtures so the control
//! logic and the rendering components stay independent of any dataset.

use super::leaderboard::SeedRow;
use super::reward::RewardTier;
use super::stats::DashboardStats;

/// Fundraising goal every intern is working towards
pub const FUNDRAISING_GOAL: u32 = 2500;

/// Stats shown on the dashboard; in a real deployment these would come
/// from an API.
pub const MOCK_STATS: DashboardStats = DashboardStats {
    total_raised: 1250,
    referrals: 8,
    rank: 12,
};

/// Badge attached to the current user's leaderboard row
pub const CURRENT_USER_BADGE: &str = "You";

/// Achievement tiers in ascending order of requirement
pub const REWARD_TIERS: [RewardTier; 4] = [
    RewardTier {
        title: "First Steps",
        description: "Raise your first $100",
        requirement: 100,
        icon: "🎯",
    },
    RewardTier {
        title: "Rising Star",
        description: "Reach $500 in donations",
        requirement: 500,
        icon: "⭐",
    },
    RewardTier {
        title: "Champion",
        description: "Achieve $1,000 milestone",
        requirement: 1000,
        icon: "🏆",
    },
    RewardTier {
        title: "Legend",
        description: "Reach the ultimate $2,500 goal",
        requirement: 2500,
        icon: "👑",
    },
];

/// The eleven seeded leaderboard rows; ranks are assigned by position.
/// The current user is synthesized as rank 12 from [`MOCK_STATS`].
pub const LEADERBOARD_SEED: [SeedRow; 11] = [
    SeedRow { name: "Sarah Johnson", amount: 3250, referrals: 15, badge: Some("Champion") },
    SeedRow { name: "Michael Chen", amount: 2890, referrals: 12, badge: Some("Rising Star") },
    SeedRow { name: "Emily Rodriguez", amount: 2750, referrals: 14, badge: Some("Top Performer") },
    SeedRow { name: "David Kim", amount: 2340, referrals: 9, badge: None },
    SeedRow { name: "Jessica Taylor", amount: 2100, referrals: 11, badge: None },
    SeedRow { name: "Alex Thompson", amount: 1980, referrals: 7, badge: None },
    SeedRow { name: "Maria Garcia", amount: 1850, referrals: 8, badge: None },
    SeedRow { name: "James Wilson", amount: 1720, referrals: 6, badge: None },
    SeedRow { name: "Lisa Anderson", amount: 1650, referrals: 9, badge: None },
    SeedRow { name: "Ryan Martinez", amount: 1580, referrals: 5, badge: None },
    SeedRow { name: "Anna Lewis", amount: 1420, referrals: 7, badge: None },
];
