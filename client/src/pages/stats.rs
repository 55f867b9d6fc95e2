//! Season stats page.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeasonStats {
    pub matches: u32,
    pub wins: u32,
    pub pins: u32,
    pub takedowns: u32,
}

pub const CURRENT_SEASON: SeasonStats = SeasonStats { matches: 14, wins: 10, pins: 4, takedowns: 31 };

impl SeasonStats {
    pub fn losses(self) -> u32 {
        self.matches.saturating_sub(self.wins)
    }

    /// Whole-number win percentage; 0 before the first match.
    pub fn win_rate_percent(self) -> u32 {
        if self.matches == 0 {
            return 0;
        }
        self.wins.min(self.matches) * 100 / self.matches
    }
}

#[component]
pub fn StatsPage() -> impl IntoView {
    let stats = CURRENT_SEASON;
    let rows = [
        ("Record", format!("{}-{}", stats.wins, stats.losses())),
        ("Win rate", format!("{}%", stats.win_rate_percent())),
        ("Pins", stats.pins.to_string()),
        ("Takedowns", stats.takedowns.to_string()),
    ];

    view! {
        <div class="stats-page">
            <h1>"Season stats"</h1>
            <dl class="stats-page__list">
                {rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stats-page__row">
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}
