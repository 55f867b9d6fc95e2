use super::*;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that mutate process env.
fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_guard()`.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("DB_MAX_CONNECTIONS");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_guard();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.database_url, None);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("DATABASE_URL", "postgres://coach@db.example.test/matside");
        std::env::set_var("DB_MAX_CONNECTIONS", "12");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.database_url.as_deref(), Some("postgres://coach@db.example.test/matside"));
    assert_eq!(cfg.db_max_connections, 12);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_blank_database_url_is_unconfigured() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("DATABASE_URL", "   ");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.database_url, None);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_invalid_port() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "not-a-port".into() });
    assert_eq!(err.to_string(), "invalid PORT: not-a-port");

    unsafe { clear_server_env() };
}

#[test]
fn from_env_ignores_bad_pool_size() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("DB_MAX_CONNECTIONS", "0");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);

    unsafe { clear_server_env() };
}
