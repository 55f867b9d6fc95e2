//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! database is optional: without `DATABASE_URL` the server still boots and
//! serves the UI, and data routes answer 503.

use std::sync::Arc;

use sqlx::PgPool;

use crate::services::annotation::{AnnotationStore, PgAnnotationStore};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    /// Pool for the managed database. `None` if not configured.
    pub pool: Option<PgPool>,
    /// Annotation reader. `None` whenever `pool` is `None`.
    pub annotations: Option<Arc<dyn AnnotationStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: Option<PgPool>) -> Self {
        let annotations = pool
            .clone()
            .map(|pool| Arc::new(PgAnnotationStore::new(pool)) as Arc<dyn AnnotationStore>);
        Self { pool, annotations }
    }

    /// Whether a database handle is configured.
    #[must_use]
    pub fn database_configured(&self) -> bool {
        self.pool.is_some()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
