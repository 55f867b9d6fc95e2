//! Session lookup for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in is handled by the hosted auth provider, which writes `sessions` and
//! `users` rows into the managed database. The server only resolves an
//! existing session token to its user so the dashboard can greet them.

use sqlx::{PgPool, Row};
use uuid::Uuid;

/// User row returned from session validation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}

/// Validate a session token and return the associated user.
///
/// Expired sessions resolve to `None`, same as unknown tokens.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT u.id, u.name, u.avatar_url
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    let Some(r) = row else {
        return Ok(None);
    };
    Ok(Some(SessionUser { id: r.try_get("id")?, name: r.try_get("name")?, avatar_url: r.try_get("avatar_url")? }))
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
