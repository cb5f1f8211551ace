//! Metric card for the overview pages.

use leptos::prelude::*;

/// Direction of a metric's month-over-month change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// A headline metric with its change badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: String,
    pub change: &'static str,
    pub trend: Trend,
}

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    let change_class = match stat.trend {
        Trend::Up => "stat-card__change stat-card__change--up",
        Trend::Down => "stat-card__change stat-card__change--down",
    };

    view! {
        <div class="card stat-card">
            <span class="stat-card__title">{stat.title}</span>
            <div class="stat-card__row">
                <span class="stat-card__value">{stat.value}</span>
                <span class=change_class>{stat.change} " vs last month"</span>
            </div>
        </div>
    }
}
