//! Client-side state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each module holds plain data wrapped in an `RwSignal` by `App`; pages read
//! them with `expect_context`.

pub mod auth;
pub mod progress;
