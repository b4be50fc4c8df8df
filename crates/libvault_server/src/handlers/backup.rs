//! Backup stub.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Backup trigger response.
#[derive(Debug, Serialize)]
pub struct BackupResponse {
    /// Always `queued`; nothing actually runs.
    pub status: &'static str,
    /// When the (fictional) backup was queued.
    pub started_at: String,
}

/// `POST /api/backup/run` - pretend to queue a backup.
pub async fn run_backup() -> Json<BackupResponse> {
    Json(BackupResponse {
        status: "queued",
        started_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn backup_is_always_queued() {
        let response = run_backup().await;
        assert_eq!(response.0.status, "queued");
        assert!(!response.0.started_at.is_empty());
    }
}
