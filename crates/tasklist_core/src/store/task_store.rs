//! Task store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide durable CRUD over the `tasks` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `completed_at` is written exactly once, at the open-to-done
//!   transition; re-marking a done task is a no-op.
//! - Mark-done and delete on a missing id succeed without touching rows.
//! - Timestamps are taken from the database clock (`strftime('%s','now')`)
//!   so a row is never created with a client/db clock mix.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::task::{Task, TaskId};
use log::{debug, error};
use rusqlite::{Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const TASK_SELECT_SQL: &str = "SELECT
    id,
    description,
    done,
    created_at,
    completed_at
FROM tasks";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for task persistence and query operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage interface for task CRUD operations.
pub trait TaskStore {
    fn add(&mut self, description: &str) -> StoreResult<TaskId>;
    fn list(&self) -> StoreResult<Vec<Task>>;
    fn mark_done(&mut self, id: TaskId) -> StoreResult<()>;
    fn delete(&mut self, id: TaskId) -> StoreResult<()>;
    fn clear(&mut self) -> StoreResult<()>;
}

/// SQLite-backed task store owning the underlying connection.
///
/// The connection is exclusively owned for the store lifetime; dropping or
/// closing the store is the only way to release the file handle.
pub struct SqliteTaskStore {
    conn: Connection,
}

impl SqliteTaskStore {
    /// Opens or creates the backing file and ensures the schema exists.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a store over a fresh in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps an already-migrated connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Read access to the underlying connection, for diagnostics and tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Releases the underlying handle.
    ///
    /// Consumes the store, so no further operation can be issued afterwards.
    pub fn close(self) -> StoreResult<()> {
        self.conn
            .close()
            .map_err(|(_conn, err)| StoreError::Db(DbError::Sqlite(err)))
    }
}

impl TaskStore for SqliteTaskStore {
    fn add(&mut self, description: &str) -> StoreResult<TaskId> {
        self.conn
            .execute(
                "INSERT INTO tasks (description, done, created_at, completed_at)
                 VALUES (?1, 0, strftime('%s', 'now'), 0);",
                [description],
            )
            .map_err(|err| log_failure("task_add", err))?;

        let id = self.conn.last_insert_rowid();
        debug!("event=task_add module=store status=ok id={id}");
        Ok(id)
    }

    fn list(&self) -> StoreResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY id ASC;"))
            .map_err(|err| log_failure("task_list", err))?;

        let mut rows = stmt.query([]).map_err(|err| log_failure("task_list", err))?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().map_err(|err| log_failure("task_list", err))? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn mark_done(&mut self, id: TaskId) -> StoreResult<()> {
        // The done guard keeps the first completion instant; a second
        // mark-done matches zero rows, same as a missing id.
        let changed = self
            .conn
            .execute(
                "UPDATE tasks
                 SET done = 1, completed_at = strftime('%s', 'now')
                 WHERE id = ?1 AND done = 0;",
                [id],
            )
            .map_err(|err| log_failure("task_mark_done", err))?;

        debug!("event=task_mark_done module=store status=ok id={id} changed={changed}");
        Ok(())
    }

    fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1;", [id])
            .map_err(|err| log_failure("task_delete", err))?;

        debug!("event=task_delete module=store status=ok id={id} changed={changed}");
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|err| log_failure("task_clear", err))?;
        tx.execute("DELETE FROM tasks;", [])
            .map_err(|err| log_failure("task_clear", err))?;
        tx.commit().map_err(|err| log_failure("task_clear", err))?;

        debug!("event=task_clear module=store status=ok");
        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> StoreResult<Task> {
    let done = match row.get::<_, i64>("done")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid done value `{other}` in tasks.done"
            )));
        }
    };

    Ok(Task {
        id: row.get("id")?,
        description: row.get("description")?,
        done,
        created_at: row.get("created_at")?,
        completed_at: row.get("completed_at")?,
    })
}

fn log_failure(op: &'static str, err: rusqlite::Error) -> StoreError {
    error!("event={op} module=store status=error error={err}");
    err.into()
}
