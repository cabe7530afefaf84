use leptos::*;

/// Month-over-month trend annotation for a stat
#[derive(Clone, Copy, PartialEq)]
pub struct Trend {
    pub value: f64,
    pub positive: bool,
}

impl Trend {
    pub fn up(value: f64) -> Self {
        Self { value, positive: true }
    }
}

#[component]
pub fn StatsCard(
    title: &'static str,
    value: String,
    description: &'static str,
    #[prop(optional, into)] trend: Option<Trend>,
) -> impl IntoView {
    view! {
        <div class="card stats-card">
            <span class="stats-title">{title}</span>
            <span class="stats-value">{value}</span>
            <div class="stats-footer">
                <span class="stats-description">{description}</span>
                {trend.map(|t| {
                    let class = if t.positive { "trend trend-up" } else { "trend trend-down" };
                    let sign = if t.positive { "+" } else { "-" };
                    view! { <span class=class>{format!("{sign}{}%", t.value)}</span> }
                })}
            </div>
        </div>
    }
}
