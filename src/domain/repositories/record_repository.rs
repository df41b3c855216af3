//! Repository trait for CMS record lookups.

use crate::domain::entities::RecordSummary;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to records in the CMS database.
///
/// The core codec and resolver never touch storage; this port exists for
/// the label-building side of link resolution, which describes the linked
/// record to the editor.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecordRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Fetches a record by table and uid.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(RecordSummary))` if found
    /// - `Ok(None)` if the record does not exist or the table is not part
    ///   of the configured allow-list
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_record(&self, table: &str, uid: i64) -> Result<Option<RecordSummary>, AppError>;

    /// Probes database connectivity. Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
