//! Runtime status
//!
//! Build metadata, process information and record counts.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::db::Database;
use crate::error::AppResult;
use crate::models::{ActivityClassification, HealthMetrics, IdealWeight, Macronutrients};

/// Number of stored records of each kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCounts {
    pub health_metrics: i64,
    pub macronutrients: i64,
    pub ideal_weights: i64,
    pub activity_classifications: i64,
}

/// Status response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    #[serde(flatten)]
    pub build: BuildInfo,
    pub database_path: String,
    pub database_size_bytes: Option<u64>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub records: RecordCounts,
}

/// Tracks process start so uptime can be reported
#[derive(Debug, Clone)]
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
        }
    }

    pub async fn get_status(&self, db: &Database) -> AppResult<ServiceStatus> {
        let records = record_counts(db).await?;

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        Ok(ServiceStatus {
            build: BuildInfo::current(),
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            records,
        })
    }
}

pub async fn record_counts(db: &Database) -> AppResult<RecordCounts> {
    let counts = db
        .run(|conn| {
            Ok(RecordCounts {
                health_metrics: HealthMetrics::count(conn)?,
                macronutrients: Macronutrients::count(conn)?,
                ideal_weights: IdealWeight::count(conn)?,
                activity_classifications: ActivityClassification::count(conn)?,
            })
        })
        .await?;
    Ok(counts)
}
