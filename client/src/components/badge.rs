//! Small labelled value chip used for XP, level, and similar stats.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use leptos::prelude::*;

/// Colour treatment for a badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Gold,
    Blue,
    Flame,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "badge badge--neutral",
            Self::Gold => "badge badge--gold",
            Self::Blue => "badge badge--blue",
            Self::Flame => "badge badge--flame",
        }
    }
}

#[component]
pub fn Badge(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] tone: BadgeTone,
) -> impl IntoView {
    view! {
        <div class=tone.class()>
            <span class="badge__value">{move || value.get()}</span>
            <span class="badge__label">{label}</span>
        </div>
    }
}
