//! SQL schema for the rolo SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS contacts (
    contact_id  TEXT PRIMARY KEY,
    first_name  TEXT NOT NULL,
    last_name   TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,  -- uniqueness enforced here, not by a prior read
    phone       TEXT,
    avatar_url  TEXT,
    company     TEXT,
    job_title   TEXT,
    tags        TEXT NOT NULL DEFAULT '[]',  -- JSON array of strings
    favorite    INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL,  -- ISO 8601 UTC; server-assigned
    updated_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS contacts_created_idx ON contacts(created_at);

PRAGMA user_version = 1;
";
