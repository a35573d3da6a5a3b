//! Sort vocabulary for script listings.
//!
//! Sort fields form a closed allow-list mapped to fixed SQL literals.
//! Caller-supplied field names must go through [`ScriptSortField::from_str`]
//! so nothing outside the list can ever reach generated SQL text.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Columns of the `scripts` table that may appear in an ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptSortField {
    DisplayNm,
    Id,
}

/// All valid sort field strings.
const VALID_SORT_FIELDS: &[&str] = &["display_nm", "id"];

impl ScriptSortField {
    /// Return the column name as a fixed SQL literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DisplayNm => "display_nm",
            Self::Id => "id",
        }
    }

    /// Parse a sort field from a string slice.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "display_nm" => Ok(Self::DisplayNm),
            "id" => Ok(Self::Id),
            _ => Err(CoreError::Validation(format!(
                "Invalid sort field '{s}'. Must be one of: {}",
                VALID_SORT_FIELDS.join(", ")
            ))),
        }
    }
}

/// Direction applied to a sort field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Return the direction as a fixed SQL literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}
