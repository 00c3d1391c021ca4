//! SQLite database for signature projects
//!
//! A project is a named list of signature names saved for later. Uses WAL
//! mode so a long render can read while a save is in flight.

use std::path::Path;

use log::warn;
use rusqlite::{Connection, Result, params};

/// Default database location
pub const PROJECTS_DB_FILE: &str = "config/projects.sqlite";

/// One saved signature list
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub signature_names: Vec<String>,
    /// RFC 3339, UTC
    pub created_at: String,
    pub updated_at: String,
}

/// Database wrapper for the project store
pub struct ProjectStore {
    conn: Connection,
}

impl ProjectStore {
    /// Open or create a database at the given path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let conn = Connection::open(path)?;

        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                signature_names TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_projects_updated ON projects(updated_at);
            "#,
        )?;
        Ok(())
    }

    /// Create a brand new project (does not overwrite older ones); returns its id
    pub fn create(&self, name: &str, signature_names: &[String]) -> Result<String> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();
        let names_json = serde_json::to_string(signature_names).unwrap_or_else(|_| "[]".to_string());

        self.conn.execute(
            "INSERT INTO projects (id, name, signature_names, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, name, names_json, now, now],
        )?;

        Ok(id)
    }

    /// Update an existing project's name and/or list, bumping `updated_at`.
    /// Returns false if the id is unknown.
    pub fn update(
        &self,
        id: &str,
        name: Option<&str>,
        signature_names: Option<&[String]>,
    ) -> Result<bool> {
        let Some(existing) = self.get(id)? else {
            return Ok(false);
        };

        let name = name.unwrap_or(&existing.name);
        let names = signature_names.unwrap_or(&existing.signature_names);
        let names_json = serde_json::to_string(names).unwrap_or_else(|_| "[]".to_string());
        let now = chrono::Utc::now().to_rfc3339();

        let changed = self.conn.execute(
            "UPDATE projects SET name = ?1, signature_names = ?2, updated_at = ?3 WHERE id = ?4",
            params![name, names_json, now, id],
        )?;
        Ok(changed > 0)
    }

    /// Load a single project by id
    pub fn get(&self, id: &str) -> Result<Option<Project>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, signature_names, created_at, updated_at
             FROM projects WHERE id = ?1",
        )?;
        let mut rows = stmt.query_map(params![id], row_to_project)?;
        rows.next().transpose()
    }

    /// Load all projects, newest first
    pub fn list(&self) -> Result<Vec<Project>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, signature_names, created_at, updated_at
             FROM projects ORDER BY updated_at DESC",
        )?;
        let rows = stmt.query_map([], row_to_project)?;
        rows.collect()
    }

    /// Delete a project; returns false if the id is unknown
    pub fn delete(&self, id: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM projects WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

fn row_to_project(row: &rusqlite::Row<'_>) -> Result<Project> {
    let names_json: String = row.get(2)?;
    let signature_names = serde_json::from_str(&names_json).unwrap_or_else(|e| {
        warn!("Corrupt signature list in project row: {}", e);
        Vec::new()
    });
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        signature_names,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
