mod dashboard;
mod referral_card;
mod rewards_section;
mod stats_card;

pub use dashboard::Dashboard;
