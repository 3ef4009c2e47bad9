//! Database migrations
//!
//! Schema creation and migration logic.

use rusqlite::Connection;

use super::connection::DbResult;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all migrations to bring the database up to the current schema version
pub fn run_migrations(conn: &Connection) -> DbResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let current_version = get_schema_version(conn)?;

    if current_version < 1 {
        migrate_v1(conn)?;
        conn.execute("INSERT INTO schema_migrations (version) VALUES (1)", [])?;
    }

    Ok(())
}

/// Migration v1: Initial schema
///
/// Four independent, append-only tables. No foreign keys: a macronutrient
/// split is never linked back to the health metrics that produced its TDEE.
fn migrate_v1(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        -- ============================================
        -- HEALTH METRICS
        -- Raw body inputs plus derived BMI/BMR/TDEE
        -- ============================================
        CREATE TABLE health_metrics (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            age INTEGER NOT NULL,
            weight REAL NOT NULL,                -- kg
            height REAL NOT NULL,                -- cm
            gender TEXT NOT NULL,                -- as supplied
            activity_level TEXT NOT NULL,        -- as supplied

            -- Derived at creation time, never recomputed
            bmi REAL NOT NULL,
            bmr REAL NOT NULL,                   -- kcal/day
            tdee REAL NOT NULL,                  -- kcal/day

            created_at TEXT NOT NULL
        );

        -- ============================================
        -- MACRONUTRIENTS
        -- Gram split of a daily calorie target
        -- ============================================
        CREATE TABLE macronutrients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tdee REAL NOT NULL,                  -- kcal/day
            protein REAL NOT NULL,               -- grams
            carbs REAL NOT NULL,                 -- grams
            fats REAL NOT NULL,                  -- grams
            created_at TEXT NOT NULL
        );

        -- ============================================
        -- IDEAL WEIGHT
        -- Height/gender based weight band
        -- ============================================
        CREATE TABLE ideal_weights (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            height REAL NOT NULL,                -- cm
            gender TEXT NOT NULL,
            min_weight REAL NOT NULL,            -- kg
            max_weight REAL NOT NULL,            -- kg
            created_at TEXT NOT NULL
        );

        -- ============================================
        -- ACTIVITY CLASSIFICATIONS
        -- ============================================
        CREATE TABLE activity_classifications (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            activity_level TEXT NOT NULL,
            classification TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )?;

    Ok(())
}

/// Get the current schema version
pub fn get_schema_version(conn: &Connection) -> DbResult<i32> {
    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Check if the database needs migration
pub fn needs_migration(conn: &Connection) -> DbResult<bool> {
    let current = get_schema_version(conn)?;
    Ok(current < SCHEMA_VERSION)
}
