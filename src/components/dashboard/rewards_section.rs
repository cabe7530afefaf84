use leptos::*;

use crate::models::fixtures::REWARD_TIERS;
use crate::models::RewardTier;

/// The four achievement tiers with unlock state and progress bars
#[component]
pub fn RewardsSection(total_raised: u32) -> impl IntoView {
    view! {
        <div class="card rewards-card">
            <h3>"Rewards & Achievements"</h3>
            <div class="rewards-list">
                {REWARD_TIERS
                    .iter()
                    .map(|tier| view! { <RewardRow tier=*tier raised=total_raised /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RewardRow(tier: RewardTier, raised: u32) -> impl IntoView {
    let unlocked = tier.unlocked(raised);
    let progress = tier.progress_pct(raised);

    let row_class = if unlocked { "reward unlocked" } else { "reward locked" };
    let badge_class = if unlocked { "badge badge-success" } else { "badge badge-muted" };
    let badge_text = if unlocked { "Unlocked" } else { "Locked" };

    view! {
        <div class=row_class>
            <div class="reward-header">
                <span class="reward-icon">{tier.icon}</span>
                <div class="reward-text">
                    <h4>{tier.title}</h4>
                    <p>{tier.description}</p>
                </div>
                <span class=badge_class>{badge_text}</span>
            </div>
            <div class="reward-progress">
                <div class="reward-progress-labels">
                    <span>{format!("${raised} / ${}", tier.requirement)}</span>
                    <span>{format!("{progress}%")}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style=format!("width: {progress}%")></div>
                </div>
            </div>
        </div>
    }
}
