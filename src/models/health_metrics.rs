//! Health metrics model
//!
//! Body inputs together with the BMI, BMR and TDEE derived from them when
//! the record was created.

use async_graphql::SimpleObject;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// A stored health metrics computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub id: i64,
    pub age: i64,
    pub weight: f64,
    pub height: f64,
    pub gender: String,
    pub activity_level: String,
    pub bmi: f64,
    pub bmr: f64,
    pub tdee: f64,
    pub created_at: String,
}

/// Data for creating a health metrics record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMetricsCreate {
    pub age: i64,
    pub weight: f64,
    pub height: f64,
    pub gender: String,
    pub activity_level: String,
    pub bmi: f64,
    pub bmr: f64,
    pub tdee: f64,
}

impl HealthMetrics {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            age: row.get("age")?,
            weight: row.get("weight")?,
            height: row.get("height")?,
            gender: row.get("gender")?,
            activity_level: row.get("activity_level")?,
            bmi: row.get("bmi")?,
            bmr: row.get("bmr")?,
            tdee: row.get("tdee")?,
            created_at: row.get("created_at")?,
        })
    }

    /// Insert a new record
    pub fn create(conn: &Connection, data: &HealthMetricsCreate) -> DbResult<Self> {
        let created_at = super::now_timestamp();

        conn.execute(
            r#"
            INSERT INTO health_metrics
                (age, weight, height, gender, activity_level, bmi, bmr, tdee, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                data.age,
                data.weight,
                data.height,
                data.gender,
                data.activity_level,
                data.bmi,
                data.bmr,
                data.tdee,
                created_at,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    /// Get a record by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM health_metrics WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(metrics) => Ok(Some(metrics)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all records in insertion order
    pub fn list(conn: &Connection) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM health_metrics ORDER BY id")?;
        let records = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    pub fn count(conn: &Connection) -> DbResult<i64> {
        Ok(conn.query_row("SELECT COUNT(*) FROM health_metrics", [], |row| row.get(0))?)
    }
}
