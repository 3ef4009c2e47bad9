//! Ideal weight model

use async_graphql::SimpleObject;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// A stored ideal weight band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct IdealWeight {
    pub id: i64,
    pub height: f64,
    pub gender: String,
    pub min_weight: f64,
    pub max_weight: f64,
    pub created_at: String,
}

/// Data for creating an ideal weight record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightCreate {
    pub height: f64,
    pub gender: String,
    pub min_weight: f64,
    pub max_weight: f64,
}

impl IdealWeight {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            height: row.get("height")?,
            gender: row.get("gender")?,
            min_weight: row.get("min_weight")?,
            max_weight: row.get("max_weight")?,
            created_at: row.get("created_at")?,
        })
    }

    pub fn create(conn: &Connection, data: &IdealWeightCreate) -> DbResult<Self> {
        let created_at = super::now_timestamp();

        conn.execute(
            r#"
            INSERT INTO ideal_weights (height, gender, min_weight, max_weight, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                data.height,
                data.gender,
                data.min_weight,
                data.max_weight,
                created_at
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM ideal_weights WHERE id = ?1")?;

        match stmt.query_row([id], Self::from_row) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list(conn: &Connection) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM ideal_weights ORDER BY id")?;
        let records = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    pub fn count(conn: &Connection) -> DbResult<i64> {
        Ok(conn.query_row("SELECT COUNT(*) FROM ideal_weights", [], |row| row.get(0))?)
    }
}
