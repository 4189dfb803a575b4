pub mod auth;
pub mod registration;
pub mod student;

use crate::domain::repository::Transaction;
use crate::error::HostelError;

/// Reject `value` when it is longer than the column it is stored in.
pub(crate) fn check_len(value: &str, max: usize, message: &'static str) -> Result<(), HostelError> {
    if value.chars().count() > max {
        return Err(HostelError::InvalidInput(message));
    }
    Ok(())
}

/// Commit on success, roll back on failure. The original error wins over a rollback error.
pub(crate) async fn settle<T, X: Transaction>(
    tx: X,
    result: Result<T, HostelError>,
) -> Result<T, HostelError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}
