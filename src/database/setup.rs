use anyhow::{Context, Result};
use rusqlite::Connection;

const DROP_SQL: &str = "DROP TABLE IF EXISTS documents";

/// Create the document table if it does not exist yet
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    Ok(())
}

/// Drop every stored document and recreate an empty schema
pub fn reset_database(conn: &Connection) -> Result<()> {
    execute_sql(conn, DROP_SQL)?;
    ensure_schema(conn)?;

    log::info!("Document store reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
