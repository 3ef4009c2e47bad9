//! Activity classification model

use async_graphql::SimpleObject;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// A stored activity level lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ActivityClassification {
    pub id: i64,
    pub activity_level: String,
    pub classification: String,
    pub created_at: String,
}

/// Data for creating an activity classification record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityClassificationCreate {
    pub activity_level: String,
    pub classification: String,
}

impl ActivityClassification {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            activity_level: row.get("activity_level")?,
            classification: row.get("classification")?,
            created_at: row.get("created_at")?,
        })
    }

    pub fn create(conn: &Connection, data: &ActivityClassificationCreate) -> DbResult<Self> {
        let created_at = super::now_timestamp();

        conn.execute(
            r#"
            INSERT INTO activity_classifications (activity_level, classification, created_at)
            VALUES (?1, ?2, ?3)
            "#,
            params![data.activity_level, data.classification, created_at],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM activity_classifications WHERE id = ?1")?;

        match stmt.query_row([id], Self::from_row) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list(conn: &Connection) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM activity_classifications ORDER BY id")?;
        let records = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    pub fn count(conn: &Connection) -> DbResult<i64> {
        Ok(conn.query_row(
            "SELECT COUNT(*) FROM activity_classifications",
            [],
            |row| row.get(0),
        )?)
    }
}
