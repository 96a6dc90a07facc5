//! Seed data.

use finsheet_engine::model::{FiscalYear, LineKind, Row, RowId};
use serde::Deserialize;

/// A row as written in a seed file.
///
/// ```toml
/// [[rows]]
/// id = 2
/// label = "Product sales"
/// type = "Revenue"
/// 2021 = "120,000"
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SeedRow {
    pub id: u64,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: LineKind,
    #[serde(rename = "2021", default)]
    pub y2021: String,
    #[serde(rename = "2022", default)]
    pub y2022: String,
    #[serde(rename = "2024", default)]
    pub y2024: String,
    #[serde(default)]
    pub is_header: bool,
    #[serde(default)]
    pub is_total: bool,
    #[serde(default)]
    pub is_others: bool,
}

impl SeedRow {
    pub fn to_row(&self) -> Row {
        let mut row = Row::new(RowId(self.id), self.label.clone(), self.kind)
            .with_year(FiscalYear::Y2021, self.y2021.clone())
            .with_year(FiscalYear::Y2022, self.y2022.clone())
            .with_year(FiscalYear::Y2024, self.y2024.clone());
        row.is_header = self.is_header;
        row.is_total = self.is_total;
        row.is_others = self.is_others;
        row
    }
}

/// The default profit and loss statement.
pub(crate) fn profit_and_loss() -> Vec<Row> {
    use FiscalYear::*;
    use LineKind::*;

    vec![
        Row::header(RowId(1), "Revenue"),
        Row::new(RowId(2), "Product sales", Revenue)
            .with_year(Y2021, "120,000")
            .with_year(Y2022, "135,500")
            .with_year(Y2024, "150,250"),
        Row::new(RowId(3), "Service revenue", Revenue)
            .with_year(Y2021, "45,000")
            .with_year(Y2022, "48,200")
            .with_year(Y2024, "52,750.5"),
        Row::others(RowId(4), "Other revenue", Revenue),
        Row::total(RowId(5), "Total Revenue", TotalRevenue),
        Row::header(RowId(6), "Operating expenses"),
        Row::new(RowId(7), "Cost of goods sold", Expense)
            .with_year(Y2021, "60,000")
            .with_year(Y2022, "64,300")
            .with_year(Y2024, "70,100"),
        Row::new(RowId(8), "Salaries", Expense)
            .with_year(Y2021, "38,000")
            .with_year(Y2022, "40,000")
            .with_year(Y2024, "43,500"),
        Row::new(RowId(9), "Rent", Expense)
            .with_year(Y2021, "12,000")
            .with_year(Y2022, "12,000")
            .with_year(Y2024, "13,200"),
        Row::others(RowId(10), "Other expenses", Expense),
        Row::total(RowId(11), "Total Expenses", TotalExpense),
    ]
}
