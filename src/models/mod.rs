pub mod fixtures;
pub mod leaderboard;
pub mod referral;
pub mod reward;
pub mod stats;

pub use leaderboard::{standings, LeaderboardEntry};
pub use referral::Referral;
pub use reward::RewardTier;
pub use stats::DashboardStats;
