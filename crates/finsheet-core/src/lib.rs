//! finsheet-core - UI-agnostic statement document, commands and renderers.

pub mod error;
pub mod statement;
pub mod storage;

pub use error::{FinsheetError, Result};
pub use statement::{
    Command, CommandOutcome, EditEvent, EditOutcome, IgnoreReason, SeedRow, Statement,
};

pub use finsheet_engine::model::{ColumnDef, ColumnKey, FiscalYear, LineKind, Row, RowId};
pub use finsheet_engine::recalc::VariancePair;
