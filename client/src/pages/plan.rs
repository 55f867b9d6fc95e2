//! Weekly practice plan with locally toggled completion.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeItem {
    pub day: &'static str,
    pub focus: &'static str,
    pub done: bool,
}

pub fn weekly_plan() -> Vec<PracticeItem> {
    [
        ("Mon", "Stance and motion, 3x5 min"),
        ("Tue", "Single-leg finishes"),
        ("Wed", "Bottom escapes: stand-ups"),
        ("Thu", "Live go's, 6x2 min"),
        ("Fri", "Film review with coach"),
    ]
    .into_iter()
    .map(|(day, focus)| PracticeItem { day, focus, done: false })
    .collect()
}

/// Flip `done` on the item at `index`; out-of-range indices are ignored.
pub fn toggle(items: &mut [PracticeItem], index: usize) {
    if let Some(item) = items.get_mut(index) {
        item.done = !item.done;
    }
}

pub fn completed_count(items: &[PracticeItem]) -> usize {
    items.iter().filter(|i| i.done).count()
}

#[component]
pub fn PlanPage() -> impl IntoView {
    let items = RwSignal::new(weekly_plan());
    let summary = move || {
        items.with(|list| format!("{} of {} sessions done", completed_count(list), list.len()))
    };

    view! {
        <div class="plan-page">
            <h1>"This week's plan"</h1>
            <p class="plan-page__summary">{summary}</p>
            <ul class="plan-page__list">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! {
                                <li class="plan-item" class:plan-item--done=item.done>
                                    <label>
                                        <input
                                            type="checkbox"
                                            prop:checked=item.done
                                            on:change=move |_| items.update(|list| toggle(list, index))
                                        />
                                        <span class="plan-item__day">{item.day}</span>
                                        <span class="plan-item__focus">{item.focus}</span>
                                    </label>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
