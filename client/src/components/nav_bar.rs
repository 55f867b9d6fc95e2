//! Bottom navigation bar linking the app's four destinations.
//!
//! DESIGN
//! ======
//! Highlighting is exact path equality against the router location, so
//! nested paths never light up a parent tab.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// A navigation destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { href: "/", label: "Home", icon: "⌂" },
    NavItem { href: "/upload", label: "Upload", icon: "⇪" },
    NavItem { href: "/stats", label: "Stats", icon: "▥" },
    NavItem { href: "/plan", label: "Plan", icon: "☰" },
];

/// Whether `href` is the current route.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="nav-bar" aria-label="Primary">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    let href = item.href;
                    let active = move || is_active(&pathname.get(), href);
                    view! {
                        <a
                            href=href
                            class="nav-bar__link"
                            class:nav-bar__link--active=active
                            aria-current=move || if active() { Some("page") } else { None }
                        >
                            <span class="nav-bar__icon" aria-hidden="true">{item.icon}</span>
                            <span class="nav-bar__label">{item.label}</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
