//! Practice streak flame with a day count.

use leptos::prelude::*;

/// `"1 day"`, `"4 days"`.
pub fn streak_label(days: u32) -> String {
    if days == 1 { "1 day".to_owned() } else { format!("{days} days") }
}

#[component]
pub fn StreakIndicator(#[prop(into)] days: Signal<u32>) -> impl IntoView {
    view! {
        <div class="streak" class:streak--cold=move || days.get() == 0>
            <span class="streak__flame" aria-hidden="true">"🔥"</span>
            <span class="streak__count">{move || streak_label(days.get())}</span>
            <span class="streak__caption">"streak"</span>
        </div>
    }
}
