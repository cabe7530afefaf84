mod leaderboard;

pub use leaderboard::Leaderboard;
