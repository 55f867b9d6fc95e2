//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates widget rendering to
//! `components`.

pub mod dashboard;
pub mod plan;
pub mod stats;
pub mod upload;
