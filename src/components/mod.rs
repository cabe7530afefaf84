pub mod auth;
pub mod dashboard;
pub mod layout;
pub mod leaderboard;
pub mod toast;

pub use auth::{LoginForm, SignupForm};
pub use dashboard::Dashboard;
pub use leaderboard::Leaderboard;
