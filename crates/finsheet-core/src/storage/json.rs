//! JSON snapshot of the statement: the column schema plus every row.

use serde::Serialize;
use std::path::Path;

use crate::error::Result;
use crate::statement::Statement;
use finsheet_engine::model::{ColumnDef, Row};

/// What the presentation layer renders from.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub columns: &'a [ColumnDef],
    pub rows: &'a [Row],
}

impl<'a> From<&'a Statement> for Snapshot<'a> {
    fn from(statement: &'a Statement) -> Self {
        Snapshot {
            columns: &statement.columns,
            rows: &statement.rows,
        }
    }
}

/// Serialise the statement as pretty-printed JSON.
pub fn to_json(statement: &Statement) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Snapshot::from(statement))?)
}

/// Write the JSON snapshot to `path`, newline-terminated.
pub fn write_json(path: &Path, statement: &Statement) -> Result<()> {
    let mut content = to_json(statement)?;
    content.push('\n');
    std::fs::write(path, content)?;
    Ok(())
}
