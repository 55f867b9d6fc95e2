//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own data access and shaping so route handlers can stay
//! focused on request parsing and status mapping.

pub mod annotation;
pub mod session;
