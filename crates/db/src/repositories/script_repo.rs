//! Repository for the `scripts` table.
//!
//! Every method is scoped by `admin_id`: a row is visible and mutable
//! only to its owner, and an id held by another owner is
//! indistinguishable from not-found. Values are always bound with `$n`
//! placeholders; the only text interpolated into SQL is the fixed column
//! list and the sort literals from the closed allow-list.

use sqlx::PgPool;

use runbook_core::types::DbId;

use crate::models::script::{CreateScript, Script, ScriptPage, SortSpec, UpdateScript};

/// Column list for `scripts` queries.
const COLUMNS: &str = "id, display_nm, script, admin_id";

/// Provides owner-scoped CRUD and sorted listing for scripts.
pub struct ScriptRepo;

impl ScriptRepo {
    /// List all scripts owned by `admin_id`, ordered per the sort spec.
    ///
    /// With `sort.field` unset, rows come back in storage-natural order.
    /// The sort spec is echoed in the returned page.
    pub async fn list(
        pool: &PgPool,
        admin_id: DbId,
        sort: &SortSpec,
    ) -> Result<ScriptPage, sqlx::Error> {
        let query = match sort.field {
            Some(field) => format!(
                "SELECT {COLUMNS} FROM scripts WHERE admin_id = $1 \
                 ORDER BY {} {}",
                field.as_str(),
                sort.direction.as_str()
            ),
            None => format!("SELECT {COLUMNS} FROM scripts WHERE admin_id = $1"),
        };

        let scripts = sqlx::query_as::<_, Script>(&query)
            .bind(admin_id)
            .fetch_all(pool)
            .await?;

        Ok(ScriptPage {
            scripts,
            sort: *sort,
        })
    }

    /// Find a script by id, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        admin_id: DbId,
    ) -> Result<Option<Script>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scripts WHERE id = $1 AND admin_id = $2");
        sqlx::query_as::<_, Script>(&query)
            .bind(id)
            .bind(admin_id)
            .fetch_optional(pool)
            .await
    }

    /// Same lookup against a caller-supplied transaction, so the read can
    /// participate in a larger unit of work.
    pub async fn find_by_id_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
        admin_id: DbId,
    ) -> Result<Option<Script>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scripts WHERE id = $1 AND admin_id = $2");
        sqlx::query_as::<_, Script>(&query)
            .bind(id)
            .bind(admin_id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Insert a new script and return the stored row, generated id
    /// included.
    ///
    /// No uniqueness constraint applies to `display_nm`; duplicates are
    /// permitted within and across owners.
    pub async fn create(pool: &PgPool, dto: &CreateScript) -> Result<Script, sqlx::Error> {
        let query = format!(
            "INSERT INTO scripts (display_nm, script, admin_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Script>(&query)
            .bind(&dto.display_nm)
            .bind(&dto.script)
            .bind(dto.admin_id)
            .fetch_one(pool)
            .await
    }

    /// Replace the label and body of a script owned by `admin_id`.
    ///
    /// Returns `Ok(None)` when no row matches both keys, including the
    /// case where the id belongs to another owner. The row's `admin_id`
    /// is never in the SET list.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        admin_id: DbId,
        dto: &UpdateScript,
    ) -> Result<Option<Script>, sqlx::Error> {
        let query = format!(
            "UPDATE scripts SET display_nm = $1, script = $2 \
             WHERE id = $3 AND admin_id = $4 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Script>(&query)
            .bind(&dto.display_nm)
            .bind(&dto.script)
            .bind(id)
            .bind(admin_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a script owned by `admin_id`.
    ///
    /// Returns whether a row was removed; deleting an absent row is a
    /// silent no-op, so the call is idempotent.
    pub async fn delete(pool: &PgPool, id: DbId, admin_id: DbId) -> Result<bool, sqlx::Error> {
        let rows = sqlx::query("DELETE FROM scripts WHERE id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows > 0)
    }
}
