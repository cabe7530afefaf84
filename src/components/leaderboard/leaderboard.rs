use leptos::*;

use crate::components::layout::ThemeToggle;
use crate::components::toast::use_toaster;
use crate::models::{standings, LeaderboardEntry};

/// Leaderboard page: top-three podium plus the full ranking, with the
/// current user's row picked out by name equality.
#[component]
pub fn Leaderboard(
    display_name: String,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let toaster = use_toaster();
    let rows = standings(&display_name);
    let podium: Vec<LeaderboardEntry> = rows.iter().take(3).cloned().collect();

    let logout = move |_| {
        toaster.info("Logged out", "You have been successfully logged out.");
        on_logout.call(());
    };

    view! {
        <div class="page">
            <header class="page-header">
                <div class="page-header-inner">
                    <div class="page-header-lead">
                        <button class="button button-ghost" on:click=move |_| on_back.call(())>
                            "← Back to Dashboard"
                        </button>
                        <div>
                            <h1 class="page-title">"Leaderboard"</h1>
                            <p class="page-subtitle">"See how you rank among all interns"</p>
                        </div>
                    </div>
                    <div class="page-actions">
                        <ThemeToggle />
                        <button class="button button-ghost" on:click=logout>
                            "Logout"
                        </button>
                    </div>
                </div>
            </header>

            <main class="page-main page-main-narrow">
                <div class="card podium-card">
                    <h3>"Top Performers"</h3>
                    <div class="podium-grid">
                        {podium
                            .into_iter()
                            .map(|entry| view! { <PodiumSpot entry=entry /> })
                            .collect_view()}
                    </div>
                </div>

                <div class="card rankings-card">
                    <h3>"Full Rankings"</h3>
                    <div class="rankings-list">
                        {rows
                            .into_iter()
                            .map(|entry| {
                                let is_current = entry.name == display_name;
                                view! { <RankingRow entry=entry is_current=is_current /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </main>
        </div>
    }
}

#[component]
fn PodiumSpot(entry: LeaderboardEntry) -> impl IntoView {
    let spot_class = match entry.rank {
        1 => "podium-spot gold",
        2 => "podium-spot silver",
        _ => "podium-spot bronze",
    };

    view! {
        <div class=spot_class>
            <span class="rank-marker">{rank_marker(entry.rank)}</span>
            <span class="avatar avatar-large">{entry.initials()}</span>
            <h4>{entry.name.clone()}</h4>
            <span class="podium-amount">{crate::models::stats::format_usd(entry.amount)}</span>
            <span class="podium-referrals">{format!("{} referrals", entry.referrals)}</span>
            {entry.badge.clone().map(|badge| {
                let class = badge_class(&badge);
                view! { <span class=class>{badge}</span> }
            })}
        </div>
    }
}

#[component]
fn RankingRow(entry: LeaderboardEntry, is_current: bool) -> impl IntoView {
    let row_class = if is_current { "ranking-row current-user" } else { "ranking-row" };

    view! {
        <div class=row_class>
            <div class="ranking-lead">
                <span class="rank-marker">{rank_marker(entry.rank)}</span>
                <span class="avatar">{entry.initials()}</span>
                <div class="ranking-names">
                    <h4>{entry.name.clone()}</h4>
                    <p>{format!("{} referrals", entry.referrals)}</p>
                </div>
            </div>
            <div class="ranking-trail">
                <span class="ranking-amount">{crate::models::stats::format_usd(entry.amount)}</span>
                {entry.badge.clone().map(|badge| {
                    let class = badge_class(&badge);
                    view! { <span class=class>{badge}</span> }
                })}
            </div>
        </div>
    }
}

fn rank_marker(rank: u32) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        r => format!("#{r}"),
    }
}

fn badge_class(badge: &str) -> &'static str {
    match badge {
        "You" | "Champion" => "badge badge-primary",
        _ => "badge badge-muted",
    }
}
