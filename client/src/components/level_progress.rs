//! Horizontal bar showing progress through the current level.

use leptos::prelude::*;

use crate::state::progress::ProgressState;

#[component]
pub fn LevelProgress(progress: RwSignal<ProgressState>) -> impl IntoView {
    let percent = move || progress.get().level_progress_percent();

    view! {
        <div class="level-progress">
            <div class="level-progress__header">
                <span>{move || format!("Level {}", progress.get().level())}</span>
                <span class="level-progress__remaining">
                    {move || format!("{} XP to level {}", progress.get().xp_to_next_level(), progress.get().level() + 1)}
                </span>
            </div>
            <div
                class="level-progress__track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || percent().to_string()
            >
                <div class="level-progress__fill" style:width=move || format!("{}%", percent())></div>
            </div>
        </div>
    }
}
