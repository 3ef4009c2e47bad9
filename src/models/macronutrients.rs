//! Macronutrients model

use async_graphql::SimpleObject;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// A stored macronutrient split for a daily calorie target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Macronutrients {
    pub id: i64,
    pub tdee: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fats: f64,    // grams
    pub created_at: String,
}

/// Data for creating a macronutrients record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientsCreate {
    pub tdee: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Macronutrients {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            tdee: row.get("tdee")?,
            protein: row.get("protein")?,
            carbs: row.get("carbs")?,
            fats: row.get("fats")?,
            created_at: row.get("created_at")?,
        })
    }

    pub fn create(conn: &Connection, data: &MacronutrientsCreate) -> DbResult<Self> {
        let created_at = super::now_timestamp();

        conn.execute(
            r#"
            INSERT INTO macronutrients (tdee, protein, carbs, fats, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![data.tdee, data.protein, data.carbs, data.fats, created_at],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM macronutrients WHERE id = ?1")?;

        match stmt.query_row([id], Self::from_row) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list(conn: &Connection) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM macronutrients ORDER BY id")?;
        let records = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    pub fn count(conn: &Connection) -> DbResult<i64> {
        Ok(conn.query_row("SELECT COUNT(*) FROM macronutrients", [], |row| row.get(0))?)
    }
}
