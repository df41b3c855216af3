//! PostgreSQL implementation of the record repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::entities::RecordSummary;
use crate::domain::repositories::RecordRepository;
use crate::domain::tabs::{TabRegistry, TableConfig};
use crate::error::{AppError, map_sqlx_error};

/// Record lookups against the CMS database.
///
/// The CMS owns the schema, so queries are assembled dynamically from the
/// table metadata in the tab configuration. Two layers keep that safe:
/// only tables present in the configured `tables` section are ever queried,
/// and every table/column name is interpolated as a quoted identifier while
/// the uid is bound as a parameter.
///
/// Records are addressed by their `uid` column, the CMS-wide primary key
/// convention.
pub struct PgRecordRepository {
    pool: Arc<PgPool>,
    tables: HashMap<String, TableConfig>,
}

impl PgRecordRepository {
    /// Creates a new repository over the CMS pool, allow-listing the tables
    /// configured in the registry.
    pub fn new(pool: Arc<PgPool>, registry: &TabRegistry) -> Self {
        let tables = registry
            .table_names()
            .filter_map(|name| {
                registry
                    .table(name)
                    .map(|config| (name.to_string(), config.clone()))
            })
            .collect();

        Self { pool, tables }
    }
}

/// Quotes an SQL identifier, doubling embedded quotes.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    async fn get_record(&self, table: &str, uid: i64) -> Result<Option<RecordSummary>, AppError> {
        let Some(config) = self.tables.get(table) else {
            tracing::debug!(table, "Table not in configured allow-list, skipping lookup");
            return Ok(None);
        };

        let sql = format!(
            "SELECT {title} AS title, {page_id} AS parent_page_uid FROM {table} WHERE uid = $1",
            title = quote_identifier(&config.title_column),
            page_id = quote_identifier(&config.page_id_column),
            table = quote_identifier(table),
        );

        let row = sqlx::query(&sql)
            .bind(uid)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(|row| {
            RecordSummary::new(
                table.to_string(),
                uid,
                row.try_get::<Option<String>, _>("title").ok().flatten(),
                row.try_get::<Option<i64>, _>("parent_page_uid").ok().flatten(),
            )
        }))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
