//! Compiled-in service configuration.
//!
//! The storage location and the shared secret are deliberate literals, not
//! environment lookups. Everything that needs one of these values imports it
//! from here.

/// SQLite database file, relative to the process working directory.
/// `mode=rwc` creates the file on first run.
pub const DATABASE_URL: &str = "sqlite://cafes.db?mode=rwc";

/// Shared secret required by the add and report-closed routes.
pub const API_KEY: &str = "TopSecretKey";

pub const BIND_ADDR: &str = "0.0.0.0:3000";
