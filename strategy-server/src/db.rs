//! SQLite-backed task board.
//!
//! Tags are stored as a JSON array. Ids are the row's autoincrement key,
//! rendered as strings on the wire.

use std::path::Path;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};
use strategy_agents::AgentKind;
use strategy_agents::schemas::{NewTask, TaskPriority, TaskRecord, TaskStatus};

use crate::error::StoreError;

/// Creator recorded on tasks added through the API.
pub const API_CREATOR: &str = "user";

/// Creator of the starter task.
const SAMPLE_CREATOR: &str = "PM Agent";

pub struct TaskStore {
    conn: Mutex<Connection>,
}

/// Raw column values, converted after the statement is done.
struct TaskRow {
    id: i64,
    title: String,
    description: Option<String>,
    priority: String,
    status: String,
    assigned_to: String,
    assigned_agent: Option<String>,
    created_by: Option<String>,
    due_date: Option<String>,
    sprint: String,
    tags_json: String,
    created_at: String,
    updated_at: Option<String>,
}

impl TaskStore {
    /// Open (or create) the task board at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Self::init(conn)
    }

    /// Open an in-memory task board.
    pub fn open_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS tasks (
                id             INTEGER PRIMARY KEY AUTOINCREMENT,
                title          TEXT NOT NULL,
                description    TEXT,
                priority       TEXT NOT NULL,
                status         TEXT NOT NULL,
                assigned_to    TEXT NOT NULL,
                assigned_agent TEXT,
                created_by     TEXT,
                due_date       TEXT,
                sprint         TEXT NOT NULL,
                tags_json      TEXT NOT NULL DEFAULT '[]',
                created_at     TEXT NOT NULL,
                updated_at     TEXT
            );
            ",
        )?;
        let store = Self { conn: Mutex::new(conn) };
        store.seed_sample()?;
        Ok(store)
    }

    /// Put the starter task on an empty board.
    fn seed_sample(&self) -> Result<(), StoreError> {
        let existing: Option<i64> = self
            .conn
            .lock()
            .query_row("SELECT id FROM tasks LIMIT 1", [], |row| row.get(0))
            .optional()?;
        if existing.is_some() {
            return Ok(());
        }
        let sample = NewTask {
            title: "Market Research for AI Finance Tool".into(),
            description: Some("Research competitors and market opportunities in AI finance space".into()),
            priority: TaskPriority::High,
            assigned_to: AgentKind::Market.as_str().into(),
            due_date: Some("2024-01-20".into()),
            sprint: "current".into(),
            tags: vec!["research".into(), "finance".into(), "ai".into()],
        };
        let record = self.insert(sample, Some(SAMPLE_CREATOR))?;
        tracing::debug!(id = %record.id, "Seeded sample task");
        Ok(())
    }

    /// Add a task in `todo` status.
    pub fn create(&self, task: NewTask) -> Result<TaskRecord, StoreError> {
        let record = self.insert(task, Some(API_CREATOR))?;
        tracing::info!(id = %record.id, title = %record.task.title, "Task created");
        Ok(record)
    }

    fn insert(&self, task: NewTask, created_by: Option<&str>) -> Result<TaskRecord, StoreError> {
        let status = TaskStatus::Todo;
        let assigned_agent = task
            .assigned_to
            .parse::<AgentKind>()
            .ok()
            .map(|kind| kind.display_name().to_string());
        let created_at = Utc::now();
        let tags_json = serde_json::to_string(&task.tags)?;

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO tasks (title, description, priority, status, assigned_to, assigned_agent,
                                created_by, due_date, sprint, tags_json, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                task.title,
                task.description,
                task.priority.as_str(),
                status.as_str(),
                task.assigned_to,
                assigned_agent,
                created_by,
                task.due_date,
                task.sprint,
                tags_json,
                created_at.to_rfc3339(),
            ],
        )?;
        let id = conn.last_insert_rowid();

        Ok(TaskRecord {
            id: id.to_string(),
            task,
            status,
            assigned_agent,
            created_by: created_by.map(str::to_string),
            created_at,
            updated_at: None,
        })
    }

    /// Every task, oldest first.
    pub fn list(&self) -> Result<Vec<TaskRecord>, StoreError> {
        let rows: Vec<TaskRow> = {
            let conn = self.conn.lock();
            let mut stmt = conn.prepare(
                "SELECT id, title, description, priority, status, assigned_to, assigned_agent,
                        created_by, due_date, sprint, tags_json, created_at, updated_at
                 FROM tasks ORDER BY id ASC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(TaskRow {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    priority: row.get(3)?,
                    status: row.get(4)?,
                    assigned_to: row.get(5)?,
                    assigned_agent: row.get(6)?,
                    created_by: row.get(7)?,
                    due_date: row.get(8)?,
                    sprint: row.get(9)?,
                    tags_json: row.get(10)?,
                    created_at: row.get(11)?,
                    updated_at: row.get(12)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
            rows
        };
        rows.into_iter().map(TaskRow::into_record).collect()
    }
}

impl TaskRow {
    fn into_record(self) -> Result<TaskRecord, StoreError> {
        let id = self.id;
        let corrupt = |reason: String| StoreError::Corrupt { id, reason };
        let priority = TaskPriority::parse(&self.priority)
            .ok_or_else(|| corrupt(format!("priority {:?}", self.priority)))?;
        let status = TaskStatus::parse(&self.status)
            .ok_or_else(|| corrupt(format!("status {:?}", self.status)))?;
        let created_at = parse_time(&self.created_at).map_err(&corrupt)?;
        let updated_at = self
            .updated_at
            .as_deref()
            .map(parse_time)
            .transpose()
            .map_err(&corrupt)?;

        Ok(TaskRecord {
            id: id.to_string(),
            task: NewTask {
                title: self.title,
                description: self.description,
                priority,
                assigned_to: self.assigned_to,
                due_date: self.due_date,
                sprint: self.sprint,
                tags: serde_json::from_str(&self.tags_json)?,
            },
            status,
            assigned_agent: self.assigned_agent,
            created_by: self.created_by,
            created_at,
            updated_at,
        })
    }
}

fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("timestamp {s:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_task(title: &str, assigned_to: &str) -> NewTask {
        NewTask {
            title: title.into(),
            description: None,
            priority: TaskPriority::default(),
            assigned_to: assigned_to.into(),
            due_date: None,
            sprint: "current".into(),
            tags: vec!["mvp".into()],
        }
    }

    #[test]
    fn fresh_board_has_sample_task() {
        let store = TaskStore::open_memory().unwrap();
        let tasks = store.list().unwrap();
        assert_eq!(tasks.len(), 1);
        let sample = &tasks[0];
        assert_eq!(sample.id, "1");
        assert_eq!(sample.task.title, "Market Research for AI Finance Tool");
        assert_eq!(sample.task.priority, TaskPriority::High);
        assert_eq!(sample.status, TaskStatus::Todo);
        assert_eq!(sample.assigned_agent.as_deref(), Some("Market Analyst"));
        assert_eq!(sample.created_by.as_deref(), Some("PM Agent"));
        assert_eq!(
            sample.task.description.as_deref(),
            Some("Research competitors and market opportunities in AI finance space")
        );
        assert_eq!(sample.task.due_date.as_deref(), Some("2024-01-20"));
        assert_eq!(sample.task.tags, vec!["research", "finance", "ai"]);
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let store = TaskStore::open_memory().unwrap();
        let a = store.create(new_task("Wireframes", "pm")).unwrap();
        let b = store.create(new_task("Landing copy", "someone")).unwrap();
        assert_eq!(a.id, "2");
        assert_eq!(b.id, "3");
        assert_eq!(a.status, TaskStatus::Todo);
        assert_eq!(a.created_by.as_deref(), Some(API_CREATOR));
        assert_eq!(a.assigned_agent.as_deref(), Some("Product Manager"));
        assert!(b.assigned_agent.is_none());

        let titles: Vec<_> = store.list().unwrap().into_iter().map(|t| t.task.title).collect();
        assert_eq!(titles, ["Market Research for AI Finance Tool", "Wireframes", "Landing copy"]);
    }

    #[test]
    fn reopen_keeps_tasks_without_reseeding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.db");
        {
            let store = TaskStore::open(&path).unwrap();
            store.create(new_task("Persisted", "tech")).unwrap();
        }
        let store = TaskStore::open(&path).unwrap();
        let tasks = store.list().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].task.title, "Persisted");
        assert_eq!(tasks[1].task.tags, vec!["mvp"]);
    }

    #[test]
    fn corrupt_status_is_reported() {
        let store = TaskStore::open_memory().unwrap();
        store
            .conn
            .lock()
            .execute("UPDATE tasks SET status = 'archived' WHERE id = 1", [])
            .unwrap();
        assert!(matches!(store.list(), Err(StoreError::Corrupt { id: 1, .. })));
    }
}
