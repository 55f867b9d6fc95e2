//! Frame annotation loading and per-coach grouping.
//!
//! SYSTEM CONTEXT
//! ==============
//! Coaches leave drawings, text notes, and voice clips on individual video
//! frames of an analysis. The rows live in the managed database's
//! `frame_annotations` table; this module reads one frame's worth and buckets
//! it by author for the review UI.
//!
//! DESIGN
//! ======
//! Storage access sits behind [`AnnotationStore`] so the loader can run with
//! no database configured (the handler answers 503) and so grouping can be
//! exercised without Postgres.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

/// Group key used when a row carries no coach identifier.
pub const UNKNOWN_COACH_ID: &str = "unknown";
/// Display name used when a row carries no coach name.
pub const DEFAULT_COACH_NAME: &str = "Coach";

const FRAME_KEY_FORMAT_MESSAGE: &str = "Invalid frame key. Expected format analysisId:frameIndex";

#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    #[error("{0}")]
    InvalidFrameKey(String),
    #[error("annotation database not configured")]
    Unavailable,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// FRAME KEY
// =============================================================================

/// Composite lookup key: one frame of one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameKey {
    pub analysis_id: String,
    pub frame_index: i32,
}

impl FrameKey {
    /// Parse `"<analysisId>:<frameIndex>"`.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::InvalidFrameKey`] when the colon or either
    /// part is missing, or when the index is not an integer. Out-of-range
    /// but well-formed indices (e.g. `-1`) parse and simply match no rows.
    pub fn parse(raw: &str) -> Result<Self, AnnotationError> {
        let Some((analysis_id, index)) = raw.split_once(':') else {
            return Err(AnnotationError::InvalidFrameKey(FRAME_KEY_FORMAT_MESSAGE.to_owned()));
        };
        if analysis_id.is_empty() || index.is_empty() {
            return Err(AnnotationError::InvalidFrameKey(FRAME_KEY_FORMAT_MESSAGE.to_owned()));
        }

        let frame_index = index
            .parse::<i32>()
            .map_err(|_| AnnotationError::InvalidFrameKey(format!("Invalid frame index: {index}")))?;

        Ok(Self { analysis_id: analysis_id.to_owned(), frame_index })
    }
}

// =============================================================================
// ROWS AND EXTERNAL SHAPE
// =============================================================================

/// One `frame_annotations` row as read from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRow {
    pub id: String,
    pub analysis_id: String,
    pub frame_index: i32,
    pub coach_id: Option<String>,
    pub coach_name: Option<String>,
    /// `drawing`, `text`, or `voice`.
    pub kind: String,
    pub drawing_data: Option<serde_json::Value>,
    pub text_content: Option<String>,
    pub voice_url: Option<String>,
    pub voice_duration: Option<f64>,
    pub position: Option<serde_json::Value>,
    pub timestamp: Option<f64>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Annotation as returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: String,
    pub analysis_id: String,
    pub frame_index: i32,
    pub coach_id: String,
    pub coach_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub drawing_data: Option<serde_json::Value>,
    pub text_content: Option<String>,
    pub voice_url: Option<String>,
    pub voice_duration: Option<f64>,
    pub position: Option<serde_json::Value>,
    pub timestamp: Option<f64>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// All annotations one coach left on the frame, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachGroup {
    pub coach_id: String,
    pub coach_name: String,
    pub annotations: Vec<Annotation>,
}

/// Response body for a frame load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameAnnotations {
    pub analysis_id: String,
    pub frame_index: i32,
    pub total_annotations: usize,
    pub groups: Vec<CoachGroup>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<AnnotationRow> for Annotation {
    fn from(row: AnnotationRow) -> Self {
        Self {
            id: row.id,
            analysis_id: row.analysis_id,
            frame_index: row.frame_index,
            coach_id: non_empty(row.coach_id).unwrap_or_else(|| UNKNOWN_COACH_ID.to_owned()),
            coach_name: non_empty(row.coach_name).unwrap_or_else(|| DEFAULT_COACH_NAME.to_owned()),
            kind: row.kind,
            drawing_data: row.drawing_data,
            text_content: row.text_content,
            voice_url: row.voice_url,
            voice_duration: row.voice_duration,
            position: row.position,
            timestamp: row.timestamp,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// =============================================================================
// GROUPING
// =============================================================================

/// Bucket rows by coach. Groups appear in the order of each coach's first
/// row; rows keep their input order inside a group.
#[must_use]
pub fn group_by_coach(rows: Vec<AnnotationRow>) -> Vec<CoachGroup> {
    let mut groups: Vec<CoachGroup> = Vec::new();
    let mut index_by_coach: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let annotation = Annotation::from(row);
        let slot = *index_by_coach
            .entry(annotation.coach_id.clone())
            .or_insert_with(|| {
                groups.push(CoachGroup {
                    coach_id: annotation.coach_id.clone(),
                    coach_name: annotation.coach_name.clone(),
                    annotations: Vec::new(),
                });
                groups.len() - 1
            });
        groups[slot].annotations.push(annotation);
    }

    groups
}

// =============================================================================
// STORE
// =============================================================================

/// Read access to the annotation table.
#[async_trait]
pub trait AnnotationStore: Send + Sync {
    /// All rows for `key`, ordered by creation time ascending.
    async fn frame_annotations(&self, key: &FrameKey) -> Result<Vec<AnnotationRow>, sqlx::Error>;
}

/// [`AnnotationStore`] backed by the managed Postgres database.
pub struct PgAnnotationStore {
    pool: PgPool,
}

impl PgAnnotationStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnotationStore for PgAnnotationStore {
    async fn frame_annotations(&self, key: &FrameKey) -> Result<Vec<AnnotationRow>, sqlx::Error> {
        let rows = sqlx::query(
            r#"SELECT
                   id::text AS id,
                   analysis_id,
                   frame_index,
                   coach_id::text AS coach_id,
                   coach_name,
                   annotation_type,
                   drawing_data,
                   text_content,
                   voice_url,
                   voice_duration,
                   position,
                   "timestamp",
                   to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS.MS"Z"') AS created_at,
                   to_char(updated_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS.MS"Z"') AS updated_at
               FROM frame_annotations
               WHERE analysis_id = $1 AND frame_index = $2
               ORDER BY created_at ASC"#,
        )
        .bind(&key.analysis_id)
        .bind(key.frame_index)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_annotation).collect()
    }
}

/// Decode one row. The table is owned by the hosting service, so a column
/// type drift surfaces as a decode error rather than a panic.
fn row_to_annotation(r: &PgRow) -> Result<AnnotationRow, sqlx::Error> {
    Ok(AnnotationRow {
        id: r.try_get("id")?,
        analysis_id: r.try_get("analysis_id")?,
        frame_index: r.try_get("frame_index")?,
        coach_id: r.try_get("coach_id")?,
        coach_name: r.try_get("coach_name")?,
        kind: r.try_get("annotation_type")?,
        drawing_data: r.try_get("drawing_data")?,
        text_content: r.try_get("text_content")?,
        voice_url: r.try_get("voice_url")?,
        voice_duration: r.try_get("voice_duration")?,
        position: r.try_get("position")?,
        timestamp: r.try_get("timestamp")?,
        created_at: r.try_get("created_at")?,
        updated_at: r.try_get("updated_at")?,
    })
}

// =============================================================================
// LOADER
// =============================================================================

/// Parse `raw_key`, read the frame's rows, and group them by coach.
///
/// Key validation runs before the store check so malformed requests are
/// rejected even when no database is configured.
///
/// # Errors
///
/// - [`AnnotationError::InvalidFrameKey`] for a malformed key.
/// - [`AnnotationError::Unavailable`] when `store` is `None`.
/// - [`AnnotationError::Database`] when the query fails.
pub async fn load_frame(
    store: Option<&dyn AnnotationStore>,
    raw_key: &str,
) -> Result<FrameAnnotations, AnnotationError> {
    let key = FrameKey::parse(raw_key)?;
    let store = store.ok_or(AnnotationError::Unavailable)?;

    let rows = store.frame_annotations(&key).await?;
    let total_annotations = rows.len();
    let groups = group_by_coach(rows);

    tracing::debug!(
        analysis_id = %key.analysis_id,
        frame_index = key.frame_index,
        total_annotations,
        groups = groups.len(),
        "frame annotations loaded"
    );

    Ok(FrameAnnotations { analysis_id: key.analysis_id, frame_index: key.frame_index, total_annotations, groups })
}

#[cfg(test)]
#[path = "annotation_test.rs"]
mod tests;
