//! finsheet_engine - Line-item table model and recalculation engine.

pub mod model;
pub mod recalc;

pub use model::{ColumnDef, ColumnKey, FiscalYear, LineKind, Row, RowId, RowIdSource};
pub use recalc::VariancePair;
