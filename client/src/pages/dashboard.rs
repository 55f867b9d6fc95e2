//! Dashboard page: greeting, XP/level/streak badges, and quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Progress comes from locally initialized state;
//! the only network call is a fire-and-forget fetch of the signed-in user,
//! whose absence simply keeps the anonymous greeting.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeTone};
use crate::components::level_progress::LevelProgress;
use crate::components::streak_indicator::StreakIndicator;
use crate::state::auth::AuthState;
use crate::state::progress::ProgressState;

/// A dashboard shortcut card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub href: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction { href: "/upload", title: "Upload a match", blurb: "Send film to your coach for review." },
    QuickAction { href: "/stats", title: "Season stats", blurb: "Wins, pins, and takedowns so far." },
    QuickAction { href: "/plan", title: "This week's plan", blurb: "Drills your coach lined up." },
];

pub(crate) fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome back, wrestler!".to_owned(),
    }
}

/// Status line shown under the greeting while the user fetch is in flight.
pub(crate) fn account_status(state: &AuthState) -> Option<&'static str> {
    (state.loading && state.user.is_none()).then_some("Checking your account…")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let progress = expect_context::<RwSignal<ProgressState>>();

    #[cfg(feature = "hydrate")]
    {
        if auth.get_untracked().user.is_none() {
            auth.update(|a| a.loading = true);
            leptos::task::spawn_local(async move {
                let user = crate::net::api::fetch_current_user().await;
                auth.update(|a| {
                    a.user = user;
                    a.loading = false;
                });
            });
        }
    }

    let title = move || greeting(auth.get().display_name());
    let status = move || {
        account_status(&auth.get()).map(|text| view! { <p class="dashboard-page__status">{text}</p> })
    };
    let xp = Signal::derive(move || format!("{} XP", progress.get().xp));
    let level = Signal::derive(move || progress.get().level().to_string());
    let streak = Signal::derive(move || progress.get().streak_days);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1 class="dashboard-page__title">{title}</h1>
                <p class="dashboard-page__subtitle">"Keep the streak alive. Every practice counts."</p>
                {status}
            </header>

            <section class="dashboard-page__badges">
                <Badge label="Experience" value=xp tone=BadgeTone::Gold/>
                <Badge label="Level" value=level tone=BadgeTone::Blue/>
                <StreakIndicator days=streak/>
            </section>

            <LevelProgress progress=progress/>

            <section class="dashboard-page__actions">
                {QUICK_ACTIONS
                    .iter()
                    .map(|action| {
                        view! {
                            <a class="action-card" href=action.href>
                                <span class="action-card__title">{action.title}</span>
                                <span class="action-card__blurb">{action.blurb}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
