//! Typed access to the document tree.
//!
//! Each record lives under its own key (`members/{id}`, ...) so a single
//! cell edit rewrites one member only. Loading goes back through the
//! sanitiser, the same boundary used for imports.

use anyhow::Result;
use log::warn;
use serde_json::{Map, Value};

use crate::domain::sanitize::sanitize_settings;
use crate::domain::{
    sanitize_app_data, AppData, ArchivedSeason, Confederation, GlobalSettings, Member, Top100Entry,
};

use super::documents::{delete_document, get_document, list_all_documents, put_document, RawDocument};

pub const CONFEDERATIONS: &str = "confederations";
pub const MEMBERS: &str = "members";
pub const TOP100_HISTORY: &str = "top100History";
pub const ARCHIVED_SEASONS: &str = "archivedSeasons";
pub const SETTINGS: &str = "settings";

fn record_key(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, id)
}

/// Read a consistent snapshot of the whole store
pub fn load_app_data(conn: &rusqlite::Connection) -> Result<AppData> {
    let documents = list_all_documents(conn)?;
    let tree = build_tree(documents);
    Ok(sanitize_app_data(&tree))
}

fn build_tree(documents: Vec<RawDocument>) -> Value {
    let mut root = Map::new();

    for document in documents {
        let value: Value = match serde_json::from_str(&document.value) {
            Ok(value) => value,
            Err(e) => {
                warn!("Skipping unreadable document {}: {}", document.key, e);
                continue;
            }
        };

        match document.key.split_once('/') {
            Some((collection, id)) => {
                let node = root
                    .entry(collection.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(items) = node {
                    items.insert(id.to_string(), value);
                }
            }
            None => {
                root.insert(document.key, value);
            }
        }
    }

    Value::Object(root)
}

pub fn save_confederation(conn: &rusqlite::Connection, conf: &Confederation) -> Result<()> {
    put_document(conn, &record_key(CONFEDERATIONS, &conf.id), conf)
}

pub fn save_member(conn: &rusqlite::Connection, member: &Member) -> Result<()> {
    put_document(conn, &record_key(MEMBERS, &member.id), member)
}

pub fn delete_member(conn: &rusqlite::Connection, id: &str) -> Result<bool> {
    delete_document(conn, &record_key(MEMBERS, id))
}

pub fn save_top100_entry(conn: &rusqlite::Connection, entry: &Top100Entry) -> Result<()> {
    put_document(conn, &record_key(TOP100_HISTORY, &entry.id), entry)
}

pub fn delete_top100_entry(conn: &rusqlite::Connection, id: &str) -> Result<bool> {
    delete_document(conn, &record_key(TOP100_HISTORY, id))
}

pub fn save_archived_season(conn: &rusqlite::Connection, season: &ArchivedSeason) -> Result<()> {
    put_document(conn, &record_key(ARCHIVED_SEASONS, &season.id), season)
}

/// Read only the settings document, sanitised like a full load
pub fn load_settings(conn: &rusqlite::Connection) -> Result<GlobalSettings> {
    let raw: Option<Value> = get_document(conn, SETTINGS)?;
    Ok(sanitize_settings(raw.as_ref()))
}

pub fn save_settings(conn: &rusqlite::Connection, settings: &GlobalSettings) -> Result<()> {
    put_document(conn, SETTINGS, settings)
}

/// Write every record of `data`; callers reset the store first when
/// replacing it wholesale
pub fn save_app_data(conn: &rusqlite::Connection, data: &AppData) -> Result<()> {
    for conf in &data.confederations {
        save_confederation(conn, conf)?;
    }
    for member in data.members.iter() {
        save_member(conn, member)?;
    }
    for entry in &data.top100_history {
        save_top100_entry(conn, entry)?;
    }
    for season in &data.archived_seasons {
        save_archived_season(conn, season)?;
    }
    save_settings(conn, &data.settings)
}
