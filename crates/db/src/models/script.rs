//! Models for the `scripts` table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use runbook_core::sorting::{ScriptSortField, SortDirection};
use runbook_core::types::DbId;

/// An admin-owned automation script.
///
/// The `script` body is stored and returned byte-for-byte; the only
/// escaping applied anywhere is parameter binding.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Script {
    pub id: DbId,
    pub display_nm: String,
    pub script: String,
    /// Owning admin. Set at insert and never altered by update.
    pub admin_id: DbId,
}

/// DTO for inserting a new script. The id is storage-assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScript {
    pub display_nm: String,
    pub script: String,
    pub admin_id: DbId,
}

/// DTO for replacing a script's label and body.
///
/// Both fields are required; the target's id and owner are passed
/// separately and are immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateScript {
    pub display_nm: String,
    pub script: String,
}

/// Requested ordering for a script listing.
///
/// `field: None` means storage-natural order, with no ORDER BY clause
/// emitted at all.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: Option<ScriptSortField>,
    pub direction: SortDirection,
}

/// A listing result: the ordered rows plus the sort parameters that
/// produced them, echoed back so callers can rebuild sort state without
/// a second round trip.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptPage {
    pub scripts: Vec<Script>,
    pub sort: SortSpec,
}
