use leptos::*;

use super::referral_card::{spawn_share, ReferralCard};
use super::rewards_section::RewardsSection;
use super::stats_card::{StatsCard, Trend};
use crate::components::layout::ThemeToggle;
use crate::components::toast::use_toaster;
use crate::models::fixtures::{FUNDRAISING_GOAL, MOCK_STATS};
use crate::models::stats::format_usd;
use crate::models::Referral;

/// Dashboard page: header, stats overview, referral card, quick actions,
/// rewards. All numbers come from the named fixtures.
#[component]
pub fn Dashboard(
    display_name: String,
    #[prop(into)] on_logout: Callback<()>,
    #[prop(into)] on_view_leaderboard: Callback<()>,
) -> impl IntoView {
    let toaster = use_toaster();
    let stats = MOCK_STATS;
    let referral = Referral::for_user(&display_name);
    let share_target = referral.clone();

    let logout = move |_| {
        toaster.info("Logged out", "You have been successfully logged out.");
        on_logout.call(());
    };

    view! {
        <div class="page">
            <header class="page-header">
                <div class="page-header-inner">
                    <div>
                        <h1 class="page-title">"Internship Portal"</h1>
                        <p class="page-subtitle">{format!("Welcome back, {display_name}!")}</p>
                    </div>
                    <div class="page-actions">
                        <button
                            class="button button-outline"
                            on:click=move |_| on_view_leaderboard.call(())
                        >
                            "Leaderboard"
                        </button>
                        <ThemeToggle />
                        <button class="button button-ghost" on:click=logout>
                            "Logout"
                        </button>
                    </div>
                </div>
            </header>

            <main class="page-main">
                <div class="stats-grid">
                    <StatsCard
                        title="Total Raised"
                        value=format_usd(stats.total_raised)
                        description="Your fundraising progress"
                        trend=Trend::up(12.5)
                    />
                    <StatsCard
                        title="Referrals"
                        value=stats.referrals.to_string()
                        description="People you've referred"
                        trend=Trend::up(8.2)
                    />
                    <StatsCard
                        title="Rank"
                        value=format!("#{}", stats.rank)
                        description="Your current position"
                        trend=Trend::up(2.0)
                    />
                    <StatsCard
                        title="Goal Progress"
                        value=format!("{}%", stats.goal_progress_pct(FUNDRAISING_GOAL))
                        description="Towards $2,500 goal"
                    />
                </div>

                <div class="content-grid">
                    <ReferralCard referral=referral />

                    <div class="card actions-card">
                        <h3>"Quick Actions"</h3>
                        <button class="button button-primary button-full">
                            "Start Fundraising"
                        </button>
                        <button
                            class="button button-outline button-full"
                            on:click=move |_| on_view_leaderboard.call(())
                        >
                            "View Leaderboard"
                        </button>
                        <button
                            class="button button-secondary button-full"
                            on:click=move |_| spawn_share(share_target.clone(), toaster)
                        >
                            "Share Referral"
                        </button>
                    </div>
                </div>

                <RewardsSection total_raised=stats.total_raised />
            </main>
        </div>
    }
}
