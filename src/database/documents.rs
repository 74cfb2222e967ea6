use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{with_parse_context, with_store_context};

/// A stored document with its raw JSON text
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub key: String,
    pub value: String,
}

pub fn put_document<T: Serialize>(conn: &Connection, key: &str, value: &T) -> Result<()> {
    let json = with_parse_context(serde_json::to_string(value), key)?;
    let sql = "INSERT INTO documents (key, value, updated_at) VALUES (?1, ?2, ?3)
               ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

    with_store_context(conn.execute(sql, params![key, json, Utc::now()]), "write", key)?;
    Ok(())
}

pub fn get_document<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>> {
    let sql = "SELECT value FROM documents WHERE key = ?1";

    let raw: Option<String> = with_store_context(
        conn.query_row(sql, params![key], |row| row.get(0)).optional(),
        "read",
        key,
    )?;

    match raw {
        Some(json) => Ok(Some(with_parse_context(serde_json::from_str(&json), key)?)),
        None => Ok(None),
    }
}

/// Returns whether a document was actually removed
pub fn delete_document(conn: &Connection, key: &str) -> Result<bool> {
    let sql = "DELETE FROM documents WHERE key = ?1";

    let affected = with_store_context(conn.execute(sql, params![key]), "delete", key)?;
    Ok(affected > 0)
}

/// Documents whose key starts with `prefix`, ordered by key
pub fn list_documents(conn: &Connection, prefix: &str) -> Result<Vec<RawDocument>> {
    let sql = "SELECT key, value FROM documents WHERE substr(key, 1, length(?1)) = ?1 ORDER BY key";
    query_documents(conn, sql, prefix)
}

/// Every stored document, read in a single statement
pub fn list_all_documents(conn: &Connection) -> Result<Vec<RawDocument>> {
    list_documents(conn, "")
}

fn query_documents(conn: &Connection, sql: &str, prefix: &str) -> Result<Vec<RawDocument>> {
    let mut stmt = with_store_context(conn.prepare(sql), "list", prefix)?;
    let rows = stmt
        .query_map(params![prefix], parse_document_row)?
        .collect::<rusqlite::Result<Vec<_>>>();

    with_store_context(rows, "list", prefix)
}

fn parse_document_row(row: &rusqlite::Row) -> rusqlite::Result<RawDocument> {
    Ok(RawDocument {
        key: row.get(0)?,
        value: row.get(1)?,
    })
}
