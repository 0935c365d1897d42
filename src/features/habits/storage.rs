//! Habit storage.
//!
//! Persists habits and their daily completion entries to the local database.

use chrono::{NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

use super::habit::{
    normalize_description, validate_color, validate_name, Habit, HabitEntry, HabitId, HabitPatch,
};
use crate::error::HabitflowError;
use crate::storage::columns::{date, parse_date, parse_timestamp, timestamp};
use crate::storage::Database;

const HABIT_COLUMNS: &str = "id, name, description, color, created_at, updated_at";
const ENTRY_COLUMNS: &str = "habit_id, date, completed, created_at";

/// Storage for habits and habit entries.
pub struct HabitStorage {
    db: Database,
}

impl HabitStorage {
    /// Open habit storage on the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, HabitflowError> {
        Ok(Self {
            db: Database::open()?,
        })
    }

    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Create a habit.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or color is invalid, or the insert fails.
    pub fn create(
        &self,
        name: &str,
        description: Option<&str>,
        color: &str,
    ) -> Result<Habit, HabitflowError> {
        let name = validate_name(name)?;
        let color = validate_color(color)?;
        let description = normalize_description(description);
        let now = Utc::now();

        let conn = self.db.connection();
        conn.execute(
            "INSERT INTO habits (name, description, color, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![name, description, color, timestamp(now)],
        )
        .map_err(|e| HabitflowError::Database(format!("Failed to insert habit: {e}")))?;

        let id = conn.last_insert_rowid();
        info!(id, name = %name, "habit created");

        Ok(Habit {
            id,
            name,
            description,
            color,
            created_at: now,
            updated_at: now,
        })
    }

    /// List all habits, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self) -> Result<Vec<Habit>, HabitflowError> {
        let conn = self.db.connection();
        let sql = format!("SELECT {HABIT_COLUMNS} FROM habits ORDER BY created_at DESC, id DESC");

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| HabitflowError::Database(format!("Failed to prepare query: {e}")))?;
        let rows = stmt
            .query_map([], row_to_habit)
            .map_err(|e| HabitflowError::Database(format!("Failed to query habits: {e}")))?;

        let mut habits = Vec::new();
        for row in rows {
            habits.push(row?);
        }
        Ok(habits)
    }

    /// Get a habit by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: HabitId) -> Result<Option<Habit>, HabitflowError> {
        let sql = format!("SELECT {HABIT_COLUMNS} FROM habits WHERE id = ?1");
        self.db
            .connection()
            .query_row(&sql, [id], row_to_habit)
            .optional()
            .map_err(|e| HabitflowError::Database(format!("Failed to query habit: {e}")))
    }

    /// Find a habit by name, ignoring case. The oldest match wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Habit>, HabitflowError> {
        let sql = format!(
            "SELECT {HABIT_COLUMNS} FROM habits
             WHERE name = ?1 COLLATE NOCASE
             ORDER BY created_at, id LIMIT 1"
        );
        self.db
            .connection()
            .query_row(&sql, [name.trim()], row_to_habit)
            .optional()
            .map_err(|e| HabitflowError::Database(format!("Failed to query habit: {e}")))
    }

    /// Apply a patch to a habit and bump its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, `InvalidInput` for a bad name or
    /// color, or a database error.
    pub fn update(&self, id: HabitId, patch: &HabitPatch) -> Result<Habit, HabitflowError> {
        let mut habit = self
            .get(id)?
            .ok_or_else(|| HabitflowError::NotFound(format!("Habit {id}")))?;

        if patch.is_empty() {
            debug!(id, "empty habit patch");
            return Ok(habit);
        }

        if let Some(name) = &patch.name {
            habit.name = validate_name(name)?;
        }
        if let Some(description) = &patch.description {
            habit.description = normalize_description(description.as_deref());
        }
        if let Some(color) = &patch.color {
            habit.color = validate_color(color)?;
        }
        habit.updated_at = Utc::now();

        self.db
            .connection()
            .execute(
                "UPDATE habits SET name = ?1, description = ?2, color = ?3, updated_at = ?4
                 WHERE id = ?5",
                params![
                    habit.name,
                    habit.description,
                    habit.color,
                    timestamp(habit.updated_at),
                    id
                ],
            )
            .map_err(|e| HabitflowError::Database(format!("Failed to update habit: {e}")))?;

        info!(id, "habit updated");
        Ok(habit)
    }

    /// Delete a habit and its entries. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete(&self, id: HabitId) -> Result<bool, HabitflowError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM habits WHERE id = ?1", [id])
            .map_err(|e| HabitflowError::Database(format!("Failed to delete habit: {e}")))?;

        if rows > 0 {
            info!(id, "habit deleted");
        }
        Ok(rows > 0)
    }

    /// Mark a habit done on `day`, or flip the existing entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown habit, or a database error.
    pub fn toggle(&self, habit_id: HabitId, day: NaiveDate) -> Result<HabitEntry, HabitflowError> {
        if self.get(habit_id)?.is_none() {
            return Err(HabitflowError::NotFound(format!("Habit {habit_id}")));
        }

        let conn = self.db.connection();
        conn.execute(
            "INSERT INTO habit_entries (habit_id, date, completed, created_at)
             VALUES (?1, ?2, 1, ?3)
             ON CONFLICT (habit_id, date) DO UPDATE SET completed = NOT completed",
            params![habit_id, date(day), timestamp(Utc::now())],
        )
        .map_err(|e| HabitflowError::Database(format!("Failed to toggle entry: {e}")))?;

        let sql = format!("SELECT {ENTRY_COLUMNS} FROM habit_entries WHERE habit_id = ?1 AND date = ?2");
        let entry = conn
            .query_row(&sql, params![habit_id, date(day)], row_to_entry)
            .map_err(|e| HabitflowError::Database(format!("Failed to read entry: {e}")))?;

        info!(habit_id, date = %day, completed = entry.completed, "habit entry toggled");
        Ok(entry)
    }

    /// Entries dated within `[start, end]`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn entries_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<HabitEntry>, HabitflowError> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM habit_entries
             WHERE date >= ?1 AND date <= ?2
             ORDER BY date, habit_id"
        );
        self.query_entries(&sql, params![date(start), date(end)])
    }

    /// All entries of one habit, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn entries_for_habit(&self, habit_id: HabitId) -> Result<Vec<HabitEntry>, HabitflowError> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM habit_entries WHERE habit_id = ?1 ORDER BY date DESC"
        );
        self.query_entries(&sql, params![habit_id])
    }

    fn query_entries(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<HabitEntry>, HabitflowError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| HabitflowError::Database(format!("Failed to prepare query: {e}")))?;
        let rows = stmt
            .query_map(params, row_to_entry)
            .map_err(|e| HabitflowError::Database(format!("Failed to query entries: {e}")))?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }
}

fn row_to_habit(row: &Row<'_>) -> Result<Habit, rusqlite::Error> {
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(Habit {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        color: row.get(3)?,
        created_at: parse_timestamp(4, &created_at)?,
        updated_at: parse_timestamp(5, &updated_at)?,
    })
}

fn row_to_entry(row: &Row<'_>) -> Result<HabitEntry, rusqlite::Error> {
    let day: String = row.get(1)?;
    let created_at: String = row.get(3)?;

    Ok(HabitEntry {
        habit_id: row.get(0)?,
        date: parse_date(1, &day)?,
        completed: row.get(2)?,
        created_at: parse_timestamp(3, &created_at)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::habits::DEFAULT_HABIT_COLOR;

    fn create_test_storage() -> HabitStorage {
        HabitStorage::with_database(Database::open_in_memory().unwrap())
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_create_and_get() {
        let storage = create_test_storage();
        let habit = storage
            .create(" Read ", Some("20 pages"), "#FF0000")
            .unwrap();

        assert_eq!(habit.name, "Read");
        assert_eq!(habit.color, "#ff0000");

        let loaded = storage.get(habit.id).unwrap().unwrap();
        assert_eq!(loaded, habit);
        assert!(storage.get(999).unwrap().is_none());
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let storage = create_test_storage();
        assert!(matches!(
            storage.create("  ", None, DEFAULT_HABIT_COLOR),
            Err(HabitflowError::InvalidInput(_))
        ));
        assert!(matches!(
            storage.create("Run", None, "blue"),
            Err(HabitflowError::InvalidInput(_))
        ));
        assert!(storage.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_newest_first() {
        let storage = create_test_storage();
        let first = storage.create("Walk", None, DEFAULT_HABIT_COLOR).unwrap();
        let second = storage.create("Stretch", None, DEFAULT_HABIT_COLOR).unwrap();

        let habits = storage.list().unwrap();
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].id, second.id);
        assert_eq!(habits[1].id, first.id);
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let storage = create_test_storage();
        let habit = storage.create("Meditate", None, DEFAULT_HABIT_COLOR).unwrap();

        assert_eq!(storage.find_by_name("meditate").unwrap().unwrap().id, habit.id);
        assert!(storage.find_by_name("journal").unwrap().is_none());
    }

    #[test]
    fn test_update_applies_patch() {
        let storage = create_test_storage();
        let habit = storage
            .create("Water", Some("8 glasses"), DEFAULT_HABIT_COLOR)
            .unwrap();

        let patch = HabitPatch {
            name: Some("Hydrate".to_string()),
            description: Some(None),
            color: None,
        };
        let updated = storage.update(habit.id, &patch).unwrap();
        assert_eq!(updated.name, "Hydrate");
        assert_eq!(updated.description, None);
        assert_eq!(updated.color, DEFAULT_HABIT_COLOR);
        assert!(updated.updated_at >= habit.updated_at);

        assert_eq!(storage.get(habit.id).unwrap().unwrap().name, "Hydrate");
        assert!(matches!(
            storage.update(42, &patch),
            Err(HabitflowError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_removes_entries() {
        let storage = create_test_storage();
        let habit = storage.create("Floss", None, DEFAULT_HABIT_COLOR).unwrap();
        storage.toggle(habit.id, day(1)).unwrap();

        assert!(storage.delete(habit.id).unwrap());
        assert!(!storage.delete(habit.id).unwrap());
        assert!(storage.entries_in_range(day(1), day(31)).unwrap().is_empty());
    }

    #[test]
    fn test_toggle_flips_existing_entry() {
        let storage = create_test_storage();
        let habit = storage.create("Run", None, DEFAULT_HABIT_COLOR).unwrap();

        let entry = storage.toggle(habit.id, day(3)).unwrap();
        assert!(entry.completed);
        assert_eq!(entry.date, day(3));

        let entry = storage.toggle(habit.id, day(3)).unwrap();
        assert!(!entry.completed);

        let entry = storage.toggle(habit.id, day(3)).unwrap();
        assert!(entry.completed);

        assert_eq!(storage.entries_for_habit(habit.id).unwrap().len(), 1);
    }

    #[test]
    fn test_toggle_unknown_habit() {
        let storage = create_test_storage();
        assert!(matches!(
            storage.toggle(7, day(1)),
            Err(HabitflowError::NotFound(_))
        ));
    }

    #[test]
    fn test_entry_queries() {
        let storage = create_test_storage();
        let a = storage.create("A", None, DEFAULT_HABIT_COLOR).unwrap();
        let b = storage.create("B", None, DEFAULT_HABIT_COLOR).unwrap();
        for d in [1, 2, 5] {
            storage.toggle(a.id, day(d)).unwrap();
        }
        storage.toggle(b.id, day(2)).unwrap();

        let range = storage.entries_in_range(day(2), day(5)).unwrap();
        assert_eq!(range.len(), 3);
        assert_eq!(range[0].date, day(2));
        assert_eq!(range[2].date, day(5));

        let for_a = storage.entries_for_habit(a.id).unwrap();
        let dates: Vec<_> = for_a.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(5), day(2), day(1)]);
    }
}
