//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation chrome and presentational widgets. They take
//! their data as props and hold no state of their own.

pub mod badge;
pub mod level_progress;
pub mod nav_bar;
pub mod streak_indicator;
